//! Monthly report: matches records to calendar days, aggregates the
//! footer and renders the fixed-width text layout.

use crate::core::aggregator::Aggregator;
use crate::core::classifier::classify;
use crate::core::reader::RecordReader;
use crate::errors::{AppError, AppResult};
use crate::models::{DayRecord, DayStatus, ReportTotals};
use crate::utils::colors::colorize_remark;
use crate::utils::time::{NOT_AVAILABLE, format_duration, format_time};
use crate::utils::{days_of_month, format_date, pad_right};
use chrono::NaiveTime;
use std::io::{BufRead, Write};
use tracing::debug;

pub const BORDER_LENGTH: usize = 70;
pub const DELIMITER: &str = " | ";
pub const DATE_FIELD_WIDTH: usize = 10;
pub const TIME_FIELD_WIDTH: usize = 5;
pub const DURATION_FIELD_WIDTH: usize = 8;
pub const REMARKS_FIELD_WIDTH: usize =
    BORDER_LENGTH - 2 * TIME_FIELD_WIDTH - DATE_FIELD_WIDTH - DURATION_FIELD_WIDTH;
const FOOTER_LABEL_WIDTH: usize = 15;

pub fn thick_border() -> String {
    "=".repeat(BORDER_LENGTH)
}

pub fn thin_border() -> String {
    "-".repeat(BORDER_LENGTH)
}

/// One rendered calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayEntry {
    pub day: u32,
    pub date: String,
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
    pub status: DayStatus,
    /// false when the time sheet has no line for this day
    pub recorded: bool,
}

impl DayEntry {
    pub fn start_str(&self) -> String {
        format_time(self.start)
    }

    pub fn end_str(&self) -> String {
        format_time(self.end)
    }

    pub fn duration_str(&self) -> String {
        self.status
            .minutes()
            .map(format_duration)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }
}

/// Fully evaluated month, ready to be rendered or exported.
#[derive(Debug, Clone)]
pub struct MonthReport {
    pub year: i32,
    pub month: u32,
    pub employee_id: String,
    pub days: Vec<DayEntry>,
    pub totals: ReportTotals,
    pub absent_from_records: u32,
}

/// Walks the days of the month and consumes `records` in day order.
///
/// Records must come with strictly increasing days that fall inside the
/// month; anything else is a `MalformedRecord`.
pub fn build_report<I>(year: i32, month: u32, employee_id: &str, records: I) -> AppResult<MonthReport>
where
    I: IntoIterator<Item = AppResult<DayRecord>>,
{
    let days_in_month = days_of_month(year, month);
    let mut records = records.into_iter();
    let mut aggregator = Aggregator::new();
    let mut days = Vec::with_capacity(days_in_month as usize);

    let mut pending = fetch(&mut records, None, days_in_month)?;

    for day in 1..=days_in_month {
        let record = match pending {
            Some(rec) if rec.day == day => {
                pending = fetch(&mut records, Some(rec.day), days_in_month)?;
                Some(rec)
            }
            _ => None,
        };

        let (start, end) = record.map(|r| (r.start, r.end)).unwrap_or((None, None));
        let status = classify(start, end);
        aggregator.add_day(&status, record.is_some());

        days.push(DayEntry {
            day,
            date: format_date(year, month, day),
            start,
            end,
            status,
            recorded: record.is_some(),
        });
    }

    // con days_in_month == 0 il primo record resta in sospeso
    if let Some(rec) = pending {
        return Err(outside_month(&rec, days_in_month));
    }

    let absent_from_records = aggregator.absent_from_records();
    let totals = aggregator.finish();
    debug!(
        year,
        month,
        employee_id,
        records = totals.total_records,
        present = totals.present_days,
        absent = totals.absent_days,
        incomplete = totals.incomplete_days,
        minutes = totals.working_minutes,
        "report built"
    );

    Ok(MonthReport {
        year,
        month,
        employee_id: employee_id.to_string(),
        days,
        totals,
        absent_from_records,
    })
}

fn fetch<I>(records: &mut I, previous: Option<u32>, days_in_month: u32) -> AppResult<Option<DayRecord>>
where
    I: Iterator<Item = AppResult<DayRecord>>,
{
    let Some(rec) = records.next().transpose()? else {
        return Ok(None);
    };

    if let Some(prev) = previous {
        if rec.day == prev {
            return Err(AppError::malformed(
                rec.line,
                format!("duplicate record for day {}", rec.day),
            ));
        }
        if rec.day < prev {
            return Err(AppError::malformed(
                rec.line,
                format!("day {} is out of order (follows day {prev})", rec.day),
            ));
        }
    }

    if rec.day > days_in_month {
        return Err(outside_month(&rec, days_in_month));
    }

    Ok(Some(rec))
}

fn outside_month(rec: &DayRecord, days_in_month: u32) -> AppError {
    AppError::malformed(
        rec.line,
        format!(
            "day {} is outside the month ({days_in_month} days)",
            rec.day
        ),
    )
}

/// Five padded columns joined by the delimiter.
pub fn format_line(date: &str, start: &str, end: &str, duration: &str, remarks: &str) -> String {
    join_columns(date, start, end, duration, &pad_right(remarks, REMARKS_FIELD_WIDTH))
}

fn join_columns(date: &str, start: &str, end: &str, duration: &str, padded_remarks: &str) -> String {
    [
        pad_right(date, DATE_FIELD_WIDTH),
        pad_right(start, TIME_FIELD_WIDTH),
        pad_right(end, TIME_FIELD_WIDTH),
        pad_right(duration, DURATION_FIELD_WIDTH),
        padded_remarks.to_string(),
    ]
    .join(DELIMITER)
}

pub fn render_header(year: i32, month: u32, employee_id: &str) -> Vec<String> {
    vec![
        thick_border(),
        format!("YEAR: {} / MONTH: {:02} / ID: {}", year, month, employee_id),
        thick_border(),
        format_line("DATE", "START", "END", "DURATION", "REMARKS"),
        thin_border(),
    ]
}

pub fn render_day(entry: &DayEntry, color: bool) -> String {
    // il colore va applicato dopo il padding per non alterare le colonne
    let remarks = pad_right(entry.status.remark(), REMARKS_FIELD_WIDTH);
    let remarks = if color {
        colorize_remark(&remarks, &entry.status)
    } else {
        remarks
    };

    join_columns(
        &entry.date,
        &entry.start_str(),
        &entry.end_str(),
        &entry.duration_str(),
        &remarks,
    )
}

pub fn render_footer(totals: &ReportTotals) -> Vec<String> {
    let row = |label: &str, value: String| format!("{}{DELIMITER}{value}", pad_right(label, FOOTER_LABEL_WIDTH));

    vec![
        thick_border(),
        row("TOTAL RECORDS", totals.total_records.to_string()),
        row("INCOMPLETE DAYS", totals.incomplete_days.to_string()),
        row("ABSENT DAYS", totals.absent_days.to_string()),
        row("PRESENT DAYS", totals.present_days.to_string()),
        row("WORKING TIME", format_duration(totals.working_minutes)),
        thick_border(),
    ]
}

/// Header, one line per day, footer; every line ends with a newline.
pub fn render_text(report: &MonthReport, color: bool) -> String {
    let mut lines = render_header(report.year, report.month, &report.employee_id);
    lines.extend(report.days.iter().map(|d| render_day(d, color)));
    lines.extend(render_footer(&report.totals));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Reads `source` to the end and writes the text report to `out`.
///
/// Nothing is written when the source fails to parse.
pub fn print_report<R, W>(year: i32, month: u32, employee_id: &str, source: R, out: &mut W) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    let report = build_report(year, month, employee_id, RecordReader::new(source))?;
    out.write_all(render_text(&report, false).as_bytes())?;
    out.flush()?;
    Ok(())
}
