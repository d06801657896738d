pub mod aggregator;
pub mod classifier;
pub mod reader;
pub mod report;

pub use aggregator::Aggregator;
pub use classifier::classify;
pub use reader::RecordReader;
pub use report::{MonthReport, build_report, print_report, render_text};
