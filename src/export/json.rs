//! JSON export of category summaries

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::reports::CategoryReport;

use super::SummaryExport;

/// Write the summary document as pretty-printed JSON
pub fn export_summary_json<W: Write>(report: &CategoryReport, writer: &mut W) -> ExpenseResult<()> {
    let export = SummaryExport::from_report(report);

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}

/// Read back a JSON summary export
pub fn import_summary_json(json: &str) -> ExpenseResult<SummaryExport> {
    serde_json::from_str(json).map_err(|e| ExpenseError::Import(e.to_string()))
}
