// src/export/logic.rs

use crate::core::{MonthReport, render_text};
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{write_csv, write_json};
use crate::export::{ExportFormat, ReportExport, notify_export_success};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Logica di alto livello per l'output del report.
pub struct ExportLogic;

impl ExportLogic {
    /// Renders `report` in `format` into any writer.
    ///
    /// `color` only affects the text format.
    pub fn write_to<W: Write>(
        report: &MonthReport,
        format: ExportFormat,
        color: bool,
        out: &mut W,
    ) -> AppResult<()> {
        match format {
            ExportFormat::Text => out.write_all(render_text(report, color).as_bytes())?,
            ExportFormat::Json => write_json(&ReportExport::from(report), out)?,
            ExportFormat::Csv => write_csv(&ReportExport::from(report), out)?,
        }
        out.flush()?;
        Ok(())
    }

    /// Writes to `file` when given, otherwise to stdout.
    pub fn export(
        report: &MonthReport,
        format: ExportFormat,
        color: bool,
        file: Option<&Path>,
        force: bool,
    ) -> AppResult<()> {
        debug!(format = format.as_str(), ?file, "writing report");

        match file {
            None => {
                let stdout = io::stdout();
                let mut lock = stdout.lock();
                Self::write_to(report, format, color, &mut lock)
            }
            Some(path) => {
                ensure_writable(path, force, &mut io::stdin().lock())?;

                // niente colori su file
                let mut out = BufWriter::new(File::create(path)?);
                Self::write_to(report, format, false, &mut out)?;

                notify_export_success(&format.as_str().to_uppercase(), path);
                Ok(())
            }
        }
    }
}
