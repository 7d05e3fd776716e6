//! CSV import of expense entries
//!
//! Expected header: `description,category,amount,date` with optional
//! `has_photo` and `id` columns. Amounts use [`Money::parse`] syntax.

use std::io::Read;

use serde::Deserialize;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{EntryId, ExpenseEntry, Money};

#[derive(Debug, Deserialize)]
struct CsvRow {
    description: String,
    #[serde(default)]
    category: String,
    amount: String,
    #[serde(default)]
    date: String,
    #[serde(default)]
    has_photo: String,
    #[serde(default)]
    id: String,
}

/// Parse entries from CSV; the first bad row aborts the import
pub fn import_csv<R: Read>(reader: R) -> ExpenseResult<Vec<ExpenseEntry>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut entries = Vec::new();

    for (index, row) in reader.deserialize::<CsvRow>().enumerate() {
        // Line 1 is the header
        let line = index + 2;
        let row = row.map_err(|e| ExpenseError::Import(format!("line {}: {}", line, e)))?;

        let amount = Money::parse(&row.amount)
            .map_err(|e| ExpenseError::Import(format!("line {}: {}", line, e)))?;

        let id = if row.id.is_empty() {
            EntryId::generate()
        } else {
            EntryId::new(row.id)
        };

        entries.push(ExpenseEntry {
            id,
            description: row.description,
            category_name: row.category,
            amount,
            date: row.date,
            has_photo: parse_flag(&row.has_photo),
        });
    }

    tracing::info!(entries = entries.len(), "parsed CSV import");
    Ok(entries)
}

fn parse_flag(text: &str) -> bool {
    matches!(
        text.to_ascii_lowercase().as_str(),
        "true" | "yes" | "y" | "1"
    )
}
