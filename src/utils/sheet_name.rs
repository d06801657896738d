//! Decomposition of a time sheet name `<year>-<month>-<employeeId>`.

use crate::errors::{AppError, AppResult};
use regex::Regex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetName {
    pub year: i32,
    pub month: u32,
    pub employee_id: String,
}

impl SheetName {
    /// Parses the bare name (or the file name with its extension).
    ///
    /// The month is not range-checked here: 13 yields an empty report later on.
    pub fn parse(raw: &str, extension: &str) -> AppResult<Self> {
        let ext = extension.trim_start_matches('.');
        let stem = if ext.is_empty() {
            raw
        } else {
            raw.strip_suffix(&format!(".{ext}")).unwrap_or(raw)
        };

        let re = Regex::new(r"^(\d{1,9})-(\d{1,9})-([^-\s/\\]+)$")
            .map_err(|e| AppError::Other(e.to_string()))?;

        let caps = re
            .captures(stem)
            .ok_or_else(|| AppError::InvalidFileName(raw.to_string()))?;

        let year = caps[1]
            .parse::<i32>()
            .map_err(|_| AppError::InvalidFileName(raw.to_string()))?;
        let month = caps[2]
            .parse::<u32>()
            .map_err(|_| AppError::InvalidFileName(raw.to_string()))?;

        Ok(Self {
            year,
            month,
            employee_id: caps[3].to_string(),
        })
    }

    /// Name without extension, as used in the file system
    pub fn stem(&self) -> String {
        format!("{:04}-{:02}-{}", self.year, self.month, self.employee_id)
    }
}
