use crate::models::DayStatus;
use crate::utils::time::duration_in_minutes;
use chrono::NaiveTime;

/// Decides the status of a day from its (optional) start and end time.
pub fn classify(start: Option<NaiveTime>, end: Option<NaiveTime>) -> DayStatus {
    match (start, end) {
        (Some(s), Some(e)) => DayStatus::Present {
            minutes: duration_in_minutes(s, e),
        },
        (None, None) => DayStatus::Absent,
        _ => DayStatus::ClarificationNeeded,
    }
}
