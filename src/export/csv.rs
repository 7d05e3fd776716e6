//! CSV export of category summaries

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::reports::SummaryList;

use super::summary_records;

/// Column names, matching the fields of [`super::SummaryRecord`]
pub const SUMMARY_CSV_HEADER: [&str; 6] = [
    "category_id",
    "category",
    "icon",
    "total",
    "expense_count",
    "percentage",
];

/// Write one CSV row per category, with a header
///
/// The header is written even when there are no categories.
pub fn export_summary_csv<W: Write>(list: &SummaryList, writer: W) -> ExpenseResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    if list.is_empty() {
        csv_writer
            .write_record(SUMMARY_CSV_HEADER)
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    for record in summary_records(list) {
        csv_writer
            .serialize(&record)
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::test_support::sample_report;

    #[test]
    fn test_export_csv() {
        let mut buffer = Vec::new();
        export_summary_csv(&sample_report().list, &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], SUMMARY_CSV_HEADER.join(","));
        assert_eq!(lines[1], "food,Food,ic_food,30.00,2,86");
        assert_eq!(lines[2], "transport,Transport,ic_transport,5.00,1,14");
    }

    #[test]
    fn test_export_empty_list_writes_header_only() {
        let mut buffer = Vec::new();
        export_summary_csv(&crate::reports::present(&[]), &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(
            output,
            "category_id,category,icon,total,expense_count,percentage\n"
        );
    }
}
