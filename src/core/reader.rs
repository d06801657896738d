//! Record reader: one `DayRecord` per non-blank line of a time sheet.
//!
//! Line format: `day start_hour start_minute end_hour end_minute`, separated
//! by whitespace, `,` or `;`. A negative hour or minute marks that side as
//! not recorded. Lines starting with `#` are comments.

use crate::errors::{AppError, AppResult};
use crate::models::DayRecord;
use crate::utils::time::{Clock, clock_from_parts};
use chrono::NaiveTime;
use std::io::{BufRead, Lines};

const FIELDS_PER_RECORD: usize = 5;
const MAX_DAY: i64 = 31;

/// Forward-only reader over a time sheet source.
///
/// Owns the source: dropping the reader releases the underlying handle.
pub struct RecordReader<R> {
    lines: Lines<R>,
    line_no: usize,
    records_read: u32,
    done: bool,
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            lines: source.lines(),
            line_no: 0,
            records_read: 0,
            done: false,
        }
    }

    /// Next record, `Ok(None)` once the source is exhausted.
    ///
    /// After the first error the reader is finished and keeps returning `Ok(None)`.
    pub fn next_record(&mut self) -> AppResult<Option<DayRecord>> {
        if self.done {
            return Ok(None);
        }

        loop {
            let line = match self.lines.next() {
                None => {
                    self.done = true;
                    return Ok(None);
                }
                Some(Err(e)) => {
                    self.done = true;
                    return Err(AppError::SourceRead(e));
                }
                Some(Ok(l)) => l,
            };
            self.line_no += 1;

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            match parse_record(trimmed, self.line_no) {
                Ok(rec) => {
                    self.records_read += 1;
                    return Ok(Some(rec));
                }
                Err(e) => {
                    self.done = true;
                    return Err(e);
                }
            }
        }
    }

    /// Records handed out so far
    pub fn records_read(&self) -> u32 {
        self.records_read
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = AppResult<DayRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}

/// Parses one non-blank line into a record.
pub fn parse_record(line: &str, line_no: usize) -> AppResult<DayRecord> {
    let tokens: Vec<&str> = line
        .split(|c: char| c.is_ascii_whitespace() || c == ',' || c == ';')
        .filter(|t| !t.is_empty())
        .collect();

    if tokens.len() != FIELDS_PER_RECORD {
        return Err(AppError::malformed(
            line_no,
            format!(
                "expected {FIELDS_PER_RECORD} fields, found {}",
                tokens.len()
            ),
        ));
    }

    let mut values = [0i64; FIELDS_PER_RECORD];
    for (slot, token) in values.iter_mut().zip(&tokens) {
        *slot = token
            .parse::<i64>()
            .map_err(|_| AppError::malformed(line_no, format!("'{token}' is not an integer")))?;
    }

    let [day, start_h, start_m, end_h, end_m] = values;
    if !(1..=MAX_DAY).contains(&day) {
        return Err(AppError::malformed(
            line_no,
            format!("day {day} is not between 1 and {MAX_DAY}"),
        ));
    }

    let start = side(start_h, start_m, "start", line_no)?;
    let end = side(end_h, end_m, "end", line_no)?;

    // day è già nel range 1..=31
    Ok(DayRecord::new(day as u32, start, end).at_line(line_no))
}

fn side(hour: i64, minute: i64, label: &str, line_no: usize) -> AppResult<Option<NaiveTime>> {
    match clock_from_parts(hour, minute) {
        Clock::Missing => Ok(None),
        Clock::Valid(t) => Ok(Some(t)),
        Clock::OutOfRange => Err(AppError::malformed(
            line_no,
            format!("{label} time {hour}:{minute} is not a valid time of day"),
        )),
    }
}
