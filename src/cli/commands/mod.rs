pub mod check;
pub mod config;
pub mod init;
pub mod report;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::utils::path::timesheet_path;
use crate::utils::sheet_name::SheetName;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::info;

/// Resolves a time sheet name to its components and opens the file.
pub(crate) fn open_timesheet(name: &str, cfg: &Config) -> AppResult<(SheetName, PathBuf, BufReader<File>)> {
    let sheet = SheetName::parse(name, &cfg.extension)?;
    let path = timesheet_path(&cfg.timesheet_dir(), name, &cfg.extension);
    info!(path = %path.display(), "opening time sheet");

    let file = File::open(&path).map_err(|source| AppError::SourceUnavailable {
        path: path.display().to_string(),
        source,
    })?;

    Ok((sheet, path, BufReader::new(file)))
}
