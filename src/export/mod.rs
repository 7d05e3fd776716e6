//! Export of category summaries
//!
//! - CSV: one row per category (spreadsheet-compatible)
//! - JSON / YAML: the full summary document including window and totals

pub mod csv;
pub mod json;
pub mod yaml;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::reports::{CategoryReport, SummaryList};

pub use self::csv::export_summary_csv;
pub use self::json::export_summary_json;
pub use self::yaml::export_summary_yaml;

/// Output formats for `expenses summary`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportFormat {
    #[default]
    Table,
    Csv,
    Json,
    Yaml,
}

/// One exported category row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub category_id: String,
    pub category: String,
    pub icon: String,
    /// Decimal text, sign as stored
    pub total: String,
    pub expense_count: usize,
    pub percentage: u8,
}

/// A complete summary export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryExport {
    pub generated_at: DateTime<Utc>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub grand_total: String,
    pub expense_count: usize,
    pub categories: Vec<SummaryRecord>,
}

impl SummaryExport {
    pub fn from_report(report: &CategoryReport) -> Self {
        Self {
            generated_at: Utc::now(),
            start: report.window.start,
            end: report.window.end,
            grand_total: report.grand_total().to_decimal_string(),
            expense_count: report.included_entries(),
            categories: summary_records(&report.list),
        }
    }
}

/// Flatten presented rows into export records
pub fn summary_records(list: &SummaryList) -> Vec<SummaryRecord> {
    list.rows()
        .iter()
        .map(|row| SummaryRecord {
            category_id: row.summary.category_id().to_string(),
            category: row.summary.category_name().to_string(),
            icon: row.summary.icon().resource_name().to_string(),
            total: row.summary.total_amount().to_decimal_string(),
            expense_count: row.summary.expense_count(),
            percentage: row.percentage,
        })
        .collect()
}


#[cfg(test)]
mod tests {
    use super::test_support::sample_report;
    use super::*;

    #[test]
    fn test_summary_records() {
        let records = summary_records(&sample_report().list);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].category_id, "food");
        assert_eq!(records[0].icon, "ic_food");
        assert_eq!(records[0].total, "30.00");
        assert_eq!(records[0].percentage, 86);
    }

    #[test]
    fn test_export_document() {
        let export = SummaryExport::from_report(&sample_report());
        assert_eq!(export.grand_total, "35.00");
        assert_eq!(export.expense_count, 3);
        assert!(export.start.is_none());
    }
}
