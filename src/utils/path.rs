//! Path utilities: expand ~, locate a time sheet file.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// `<dir>/<name>.<extension>`; a name that already ends in `.<extension>` is kept as is.
pub fn timesheet_path(dir: &Path, name: &str, extension: &str) -> PathBuf {
    let ext = extension.trim_start_matches('.');
    if ext.is_empty() {
        return dir.join(name);
    }

    let suffix = format!(".{ext}");
    if name.ends_with(&suffix) {
        dir.join(name)
    } else {
        dir.join(format!("{name}{suffix}"))
    }
}
