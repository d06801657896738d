use serde::Serialize;

pub const PRESENT: &str = "fully present";
pub const ABSENT: &str = "absent";
pub const CLARIFICATION_NEEDED: &str = "clarification needed";

/// Classification of a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// Both start and end are known; carries the worked minutes.
    Present { minutes: i64 },
    Absent,
    ClarificationNeeded,
}

impl DayStatus {
    /// Text of the REMARKS column
    pub fn remark(&self) -> &'static str {
        match self {
            DayStatus::Present { .. } => PRESENT,
            DayStatus::Absent => ABSENT,
            DayStatus::ClarificationNeeded => CLARIFICATION_NEEDED,
        }
    }

    pub fn minutes(&self) -> Option<i64> {
        match self {
            DayStatus::Present { minutes } => Some(*minutes),
            _ => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, DayStatus::Present { .. })
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, DayStatus::Absent)
    }

    pub fn is_incomplete(&self) -> bool {
        matches!(self, DayStatus::ClarificationNeeded)
    }
}
