//! Unified application error type.
//! Reader, renderer, export and cli all return AppError so that `main`
//! can print a single message per failure category.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Time sheet source
    // ---------------------------
    #[error("Error opening time sheet file {path}: {source}")]
    SourceUnavailable {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Error reading time sheet: {0}")]
    SourceRead(#[source] io::Error),

    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid file name format: {0}")]
    InvalidFileName(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Shortcut used by the reader and the renderer.
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        AppError::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
