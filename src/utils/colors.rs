//! ANSI colours for the REMARKS column.

use crate::models::DayStatus;
use ansi_term::Colour;

/// Wraps an already padded remark in the colour of its status.
pub fn colorize_remark(padded: &str, status: &DayStatus) -> String {
    let colour = match status {
        DayStatus::Present { .. } => Colour::Green,
        DayStatus::Absent => Colour::Red,
        DayStatus::ClarificationNeeded => Colour::Yellow,
    };
    colour.paint(padded).to_string()
}
