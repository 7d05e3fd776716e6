//! YAML export of category summaries

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::reports::CategoryReport;

use super::SummaryExport;

/// Write the summary document as YAML with a short header comment
pub fn export_summary_yaml<W: Write>(report: &CategoryReport, writer: &mut W) -> ExpenseResult<()> {
    let export = SummaryExport::from_report(report);

    writeln!(writer, "# Expense summary")
        .and_then(|_| writeln!(writer, "# Generated: {}", export.generated_at))
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    serde_yaml::to_writer(&mut *writer, &export).map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}
