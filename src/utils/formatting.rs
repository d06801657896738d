//! Padding helpers for the fixed-width report columns.

use unicode_width::UnicodeWidthStr;

/// Adds spaces until `s` is at least `min_width` columns wide.
/// Longer values are returned untouched, never truncated.
pub fn pad(s: &str, min_width: usize, prepend: bool) -> String {
    let width = UnicodeWidthStr::width(s);
    if width >= min_width {
        return s.to_string();
    }

    let fill = " ".repeat(min_width - width);
    if prepend {
        format!("{fill}{s}")
    } else {
        format!("{s}{fill}")
    }
}

pub fn pad_left(s: &str, width: usize) -> String {
    pad(s, width, true)
}

pub fn pad_right(s: &str, width: usize) -> String {
    pad(s, width, false)
}
