use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::fs;

/// Handle the `init` command
///
/// This creates:
///  - the config directory (if missing)
///  - the configuration file (kept if it already exists)
///  - the time sheet directory
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Config::config_file();

    let mut cfg = if path.exists() {
        info(format!("Keeping existing config file {}", path.display()));
        Config::load_from(&path)?
    } else {
        Config::default()
    };

    if let Some(dir) = &cli.dir {
        cfg.timesheet_dir = dir.clone();
    }

    cfg.save_to(&path)?;
    success(format!("Config file : {}", path.display()));

    let dir = cfg.timesheet_dir();
    fs::create_dir_all(&dir)?;
    success(format!("Time sheets : {}", dir.display()));

    Ok(())
}
