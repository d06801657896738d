use crate::cli::commands::open_timesheet;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{RecordReader, build_report};
use crate::errors::AppResult;
use crate::export::ExportLogic;
use std::path::Path;

/// Handle the `report` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        name,
        format,
        color,
        out,
        force,
    } = cmd
    {
        let (sheet, _path, source) = open_timesheet(name, cfg)?;

        // il file viene chiuso al termine di questo blocco, anche in caso di errore
        let report = {
            let reader = RecordReader::new(source);
            build_report(sheet.year, sheet.month, &sheet.employee_id, reader)?
        };

        let format = format.unwrap_or(cfg.default_format);
        ExportLogic::export(
            &report,
            format,
            *color || cfg.color,
            out.as_deref().map(Path::new),
            *force,
        )?;
    }
    Ok(())
}
