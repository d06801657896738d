use crate::cli::commands::open_timesheet;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{RecordReader, build_report};
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::format_duration;

/// Handle the `check` command: full parse, no report.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check { name } = cmd {
        let (sheet, path, source) = open_timesheet(name, cfg)?;
        let report = build_report(
            sheet.year,
            sheet.month,
            &sheet.employee_id,
            RecordReader::new(source),
        )?;

        if report.days.is_empty() {
            warning(format!(
                "Month {:02} is not a calendar month: the report would have no days.",
                sheet.month
            ));
        }

        let t = report.totals;
        success(format!(
            "{}: {} records OK ({} present, {} incomplete, {} absent, {} worked)",
            path.display(),
            t.total_records,
            t.present_days,
            t.incomplete_days,
            t.absent_days,
            format_duration(t.working_minutes)
        ));
    }
    Ok(())
}
