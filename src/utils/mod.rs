pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod sheet_name;
pub mod time;

pub use date::{days_of_month, format_date};
pub use formatting::{pad_left, pad_right};
pub use time::{duration_in_minutes, format_duration, format_time};
