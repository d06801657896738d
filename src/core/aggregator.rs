use crate::models::{DayStatus, ReportTotals};

/// Running totals for one report run, fed once per rendered day.
#[derive(Debug, Default)]
pub struct Aggregator {
    totals: ReportTotals,
    absent_from_records: u32,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one calendar day. `from_record` is false for days the
    /// time sheet does not mention at all.
    pub fn add_day(&mut self, status: &DayStatus, from_record: bool) {
        if from_record {
            self.totals.total_records += 1;
        }

        match status {
            DayStatus::Present { minutes } => {
                self.totals.present_days += 1;
                self.totals.working_minutes += minutes;
            }
            DayStatus::Absent => {
                self.totals.absent_days += 1;
                if from_record {
                    self.absent_from_records += 1;
                }
            }
            DayStatus::ClarificationNeeded => self.totals.incomplete_days += 1,
        }
    }

    pub fn totals(&self) -> &ReportTotals {
        &self.totals
    }

    /// Absent days that still had a line in the time sheet
    pub fn absent_from_records(&self) -> u32 {
        self.absent_from_records
    }

    pub fn finish(self) -> ReportTotals {
        self.totals
    }
}
