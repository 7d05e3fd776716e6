//! Category Report
//!
//! Pulls entries from a data source and runs them through aggregation and
//! presentation for a reporting window.

use crate::error::ExpenseResult;
use crate::models::{CategoryCatalog, CategorySummary, Money};
use crate::storage::EntrySource;

use super::aggregate::Aggregator;
use super::presenter::{Presenter, SummaryList};
use super::window::AggregationWindow;

/// Spending per category for one window
#[derive(Debug, Clone)]
pub struct CategoryReport {
    pub window: AggregationWindow,
    /// Summaries in first-seen order, before presentation
    pub summaries: Vec<CategorySummary>,
    /// Presented rows in the requested order
    pub list: SummaryList,
    /// Entries the source returned, including those outside the window
    pub fetched_entries: usize,
}

impl CategoryReport {
    /// Fetch, aggregate and present
    pub fn generate(
        source: &dyn EntrySource,
        catalog: &CategoryCatalog,
        window: AggregationWindow,
        presenter: Presenter,
    ) -> ExpenseResult<Self> {
        let entries = source.fetch_entries()?;
        let summaries = Aggregator::new(catalog).summarize_window(&entries, &window);
        let list = presenter.present(&summaries);

        tracing::info!(
            fetched = entries.len(),
            categories = summaries.len(),
            "category report generated"
        );

        Ok(Self {
            window,
            summaries,
            list,
            fetched_entries: entries.len(),
        })
    }

    pub fn grand_total(&self) -> Money {
        self.list.grand_total()
    }

    /// Entries that fell inside the window
    pub fn included_entries(&self) -> usize {
        self.list.expense_count()
    }
}
