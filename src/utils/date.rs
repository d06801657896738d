//! Calendar helpers: leap years, month lengths, report dates.

/// Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` of `year`.
///
/// Returns 0 for a month outside 1..=12; callers render a zero-day report
/// in that case instead of failing.
pub fn days_of_month(year: i32, month: u32) -> u32 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        _ => 0,
    }
}

/// Date in the report format `DD.MM.YYYY`
pub fn format_date(year: i32, month: u32, day: u32) -> String {
    format!("{:02}.{:02}.{:04}", day, month, year)
}
