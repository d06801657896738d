pub mod day_record;
pub mod day_status;
pub mod totals;

pub use day_record::DayRecord;
pub use day_status::DayStatus;
pub use totals::ReportTotals;
