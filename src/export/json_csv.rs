// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::ReportExport;
use std::io::Write;

/// JSON pretty-printed, newline terminated.
pub(crate) fn write_json<W: Write>(report: &ReportExport, out: &mut W) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut *out, report)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;
    out.write_all(b"\n")?;
    Ok(())
}

/// CSV of the day rows (header incluso grazie a serde).
pub(crate) fn write_csv<W: Write>(report: &ReportExport, out: &mut W) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(out);

    for day in &report.days {
        wtr.serialize(day)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;
    Ok(())
}
