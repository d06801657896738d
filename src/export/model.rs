// src/export/model.rs

use crate::core::MonthReport;
use crate::core::report::DayEntry;
use crate::models::ReportTotals;
use serde::Serialize;

/// Riga "piatta" di un giorno, con gli stessi formati del report testuale.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DayExport {
    pub date: String,
    pub start: String,
    pub end: String,
    pub duration: String,
    pub remarks: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct ReportExport {
    pub year: i32,
    pub month: u32,
    pub employee_id: String,
    pub days: Vec<DayExport>,
    pub totals: ReportTotals,
}

impl From<&DayEntry> for DayExport {
    fn from(d: &DayEntry) -> Self {
        Self {
            date: d.date.clone(),
            start: d.start_str(),
            end: d.end_str(),
            duration: d.duration_str(),
            remarks: d.status.remark().to_string(),
        }
    }
}

impl From<&MonthReport> for ReportExport {
    fn from(r: &MonthReport) -> Self {
        Self {
            year: r.year,
            month: r.month,
            employee_id: r.employee_id.clone(),
            days: r.days.iter().map(DayExport::from).collect(),
            totals: r.totals,
        }
    }
}
