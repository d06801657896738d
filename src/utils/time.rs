//! Time utilities: clock values, durations across midnight, HHh MMm output.

use chrono::NaiveTime;

pub const MINUTES_PER_HOUR: i64 = 60;
pub const MINUTES_PER_DAY: i64 = 24 * MINUTES_PER_HOUR;
pub const NOT_AVAILABLE: &str = "n/a";

/// Result of turning raw `(hour, minute)` numbers into a clock value.
#[derive(Debug, PartialEq, Eq)]
pub enum Clock {
    /// Negative hour or minute: the value was not recorded
    Missing,
    Valid(NaiveTime),
    /// Non-negative but not a time of day (e.g. 25:00)
    OutOfRange,
}

pub fn clock_from_parts(hour: i64, minute: i64) -> Clock {
    if hour < 0 || minute < 0 {
        return Clock::Missing;
    }
    match (u32::try_from(hour), u32::try_from(minute)) {
        (Ok(h), Ok(m)) => NaiveTime::from_hms_opt(h, m, 0)
            .map(Clock::Valid)
            .unwrap_or(Clock::OutOfRange),
        _ => Clock::OutOfRange,
    }
}

/// `HH:MM`, or `n/a` for a missing value.
pub fn format_time(t: Option<NaiveTime>) -> String {
    match t {
        Some(t) => t.format("%H:%M").to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Same as [`format_time`] but starting from raw numbers, negatives meaning n/a.
pub fn format_clock(hour: i64, minute: i64) -> String {
    if hour < 0 || minute < 0 {
        NOT_AVAILABLE.to_string()
    } else {
        format!("{:02}:{:02}", hour, minute)
    }
}

/// Minutes from `start` to `end`; an end before the start belongs to the next day.
pub fn duration_in_minutes(start: NaiveTime, end: NaiveTime) -> i64 {
    let mut minutes = (end - start).num_minutes();
    if minutes < 0 {
        minutes += MINUTES_PER_DAY;
    }
    minutes
}

/// `HHh MMm`, hours are not wrapped at 24.
pub fn format_duration(total_minutes: i64) -> String {
    let hours = total_minutes / MINUTES_PER_HOUR;
    let minutes = total_minutes % MINUTES_PER_HOUR;
    format!("{:02}h {:02}m", hours, minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn duration_same_day() {
        assert_eq!(duration_in_minutes(t(9, 0), t(17, 30)), 510);
    }

    #[test]
    fn duration_crosses_midnight() {
        assert_eq!(duration_in_minutes(t(22, 0), t(6, 0)), 480);
        assert_eq!(duration_in_minutes(t(23, 59), t(0, 1)), 2);
    }

    #[test]
    fn equal_times_are_zero() {
        assert_eq!(duration_in_minutes(t(8, 0), t(8, 0)), 0);
    }

    #[test]
    fn duration_format() {
        assert_eq!(format_duration(510), "08h 30m");
        assert_eq!(format_duration(0), "00h 00m");
        assert_eq!(format_duration(6000), "100h 00m");
    }

    #[test]
    fn time_format() {
        assert_eq!(format_time(Some(t(9, 5))), "09:05");
        assert_eq!(format_time(None), "n/a");
        assert_eq!(format_clock(-1, 0), "n/a");
        assert_eq!(format_clock(0, -1), "n/a");
        assert_eq!(format_clock(9, 5), "09:05");
    }

    #[test]
    fn clock_parts() {
        assert_eq!(clock_from_parts(-1, 30), Clock::Missing);
        assert_eq!(clock_from_parts(7, -1), Clock::Missing);
        assert_eq!(clock_from_parts(7, 45), Clock::Valid(t(7, 45)));
        assert_eq!(clock_from_parts(24, 0), Clock::OutOfRange);
        assert_eq!(clock_from_parts(12, 60), Clock::OutOfRange);
    }
}
