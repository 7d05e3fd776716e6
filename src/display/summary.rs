//! Category summary formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::CategoryCatalog;
use crate::reports::{PresentedSummary, SummaryList};

use super::entry::{format_amount, format_expense_count};

/// Display strings for one presented summary
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct SummaryRow {
    #[tabled(rename = "")]
    pub icon: String,
    #[tabled(rename = "Category")]
    pub category: String,
    #[tabled(rename = "Total")]
    pub total: String,
    #[tabled(rename = "Expenses")]
    pub count: String,
    #[tabled(rename = "Share")]
    pub share: String,
}

impl SummaryRow {
    pub fn from_presented(row: &PresentedSummary, symbol: &str) -> Self {
        Self {
            icon: row.summary.icon().glyph().to_string(),
            category: row.summary.category_name().to_string(),
            total: format_amount(row.summary.total_amount(), symbol),
            count: format_expense_count(row.summary.expense_count()),
            share: format!("{}%", row.percentage),
        }
    }
}

/// Render a presented summary list as a table with a total line
pub fn format_summary_table(list: &SummaryList, symbol: &str) -> String {
    if list.is_empty() {
        return "No expenses to summarize.".to_string();
    }

    let rows: Vec<SummaryRow> = list
        .rows()
        .iter()
        .map(|r| SummaryRow::from_presented(r, symbol))
        .collect();

    let mut output = Table::new(rows).with(Style::psql()).to_string();
    output.push_str(&format!(
        "\nTotal: {} across {}",
        format_amount(list.grand_total(), symbol),
        format_expense_count(list.expense_count())
    ));
    output
}

/// Render the catalog with icons
pub fn format_catalog(catalog: &CategoryCatalog) -> String {
    let mut output = String::from("Categories:\n");
    for category in catalog.categories() {
        output.push_str(&format!(
            "  {} {:<15} {}\n",
            category.icon.glyph(),
            category.name,
            category.icon.resource_name()
        ));
    }
    let fallback = catalog.fallback();
    output.push_str(&format!(
        "  {} {:<15} {} (anything else)\n",
        fallback.icon.glyph(),
        fallback.name,
        fallback.icon.resource_name()
    ));
    output
}
