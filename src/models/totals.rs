use serde::Serialize;

/// Footer statistics of one report run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportTotals {
    pub total_records: u32,
    pub present_days: u32,
    pub absent_days: u32,
    pub incomplete_days: u32,
    pub working_minutes: i64,
}

impl ReportTotals {
    /// Number of calendar days that went through the aggregator.
    pub fn days(&self) -> u32 {
        self.present_days + self.absent_days + self.incomplete_days
    }
}
