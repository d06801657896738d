#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Temporary sandbox: `home/` for the config, `sheets/` for the time sheets.
pub struct Sandbox {
    pub root: PathBuf,
}

impl Sandbox {
    pub fn new(name: &str) -> Self {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let root = env::temp_dir().join(format!("rtimesheet_{name}_{}_{suffix}", std::process::id()));
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(root.join("home")).expect("create home");
        fs::create_dir_all(root.join("sheets")).expect("create sheets");
        Self { root }
    }

    pub fn home(&self) -> PathBuf {
        self.root.join("home")
    }

    pub fn sheets(&self) -> PathBuf {
        self.root.join("sheets")
    }

    pub fn sheets_str(&self) -> String {
        self.sheets().to_string_lossy().to_string()
    }

    /// Writes `<sheets>/<name>.txt`
    pub fn write_sheet(&self, name: &str, content: &str) -> PathBuf {
        let p = self.sheets().join(format!("{name}.txt"));
        fs::write(&p, content).expect("write time sheet");
        p
    }

    pub fn config_file(&self) -> PathBuf {
        self.home().join(".rtimesheet").join("rtimesheet.conf")
    }

    /// Binary with HOME pointing inside the sandbox
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("rtimesheet");
        cmd.env("HOME", self.home()).env_remove("RUST_LOG");
        cmd
    }
}

impl Drop for Sandbox {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("read file")
}
