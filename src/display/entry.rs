//! Entry row formatting
//!
//! Amounts are always shown as magnitudes and icons come from the same
//! case-insensitive catalog lookup the aggregator uses.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{CategoryCatalog, CategoryIcon, ExpenseEntry, Money};

/// Amount text without sign
pub fn format_amount(amount: Money, symbol: &str) -> String {
    amount.abs().format_with_symbol(symbol)
}

/// "1 expense" / "N expenses"
pub fn format_expense_count(count: usize) -> String {
    if count == 1 {
        "1 expense".to_string()
    } else {
        format!("{} expenses", count)
    }
}

/// Icon for an entry's category name
pub fn entry_icon(entry: &ExpenseEntry, catalog: &CategoryCatalog) -> CategoryIcon {
    catalog.resolve(&entry.category_name).icon
}

/// Display strings for one entry
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct EntryRow {
    #[tabled(rename = "")]
    pub icon: String,
    #[tabled(rename = "Description")]
    pub description: String,
    #[tabled(rename = "Category")]
    pub category: String,
    #[tabled(rename = "Amount")]
    pub amount: String,
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Photo")]
    pub photo: String,
}

impl EntryRow {
    pub fn from_entry(entry: &ExpenseEntry, catalog: &CategoryCatalog, symbol: &str) -> Self {
        let category = catalog.resolve(&entry.category_name);
        Self {
            icon: category.icon.glyph().to_string(),
            description: entry.description.clone(),
            category: category.name.clone(),
            amount: format_amount(entry.amount, symbol),
            date: entry.date.clone(),
            photo: if entry.has_photo { "yes" } else { "" }.to_string(),
        }
    }
}

/// Render entries as a table
pub fn format_entry_table(entries: &[ExpenseEntry], catalog: &CategoryCatalog, symbol: &str) -> String {
    if entries.is_empty() {
        return "No expenses recorded.\n\nRun 'expenses entry add' to record one.".to_string();
    }

    let rows: Vec<EntryRow> = entries
        .iter()
        .map(|e| EntryRow::from_entry(e, catalog, symbol))
        .collect();

    let mut output = Table::new(rows).with(Style::psql()).to_string();
    output.push('\n');
    output.push_str(&format_expense_count(entries.len()));
    output
}
