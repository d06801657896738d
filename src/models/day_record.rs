use chrono::NaiveTime;
use serde::Serialize;

/// One parsed line of a time sheet.
///
/// A side (`start` / `end`) is `None` when the file carried a negative
/// hour or minute for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayRecord {
    pub day: u32,
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
    /// 1-based line number in the source, kept for error messages
    #[serde(skip)]
    pub line: usize,
}

impl DayRecord {
    pub fn new(day: u32, start: Option<NaiveTime>, end: Option<NaiveTime>) -> Self {
        Self {
            day,
            start,
            end,
            line: 0,
        }
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}
