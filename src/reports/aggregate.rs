//! Folding expense entries into per-category summaries
//!
//! Entries are visited in input order and each one is resolved against the
//! catalog; the resulting summaries keep the order in which their category
//! was first seen. Unknown category names land in the catalog's fallback
//! bucket, so aggregation never fails.

use std::collections::HashMap;

use crate::models::{CategoryCatalog, CategoryId, CategorySummary, ExpenseCategory, ExpenseEntry, Money};

use super::window::AggregationWindow;

/// Running totals for one category while folding
struct Bucket<'c> {
    category: &'c ExpenseCategory,
    total: Money,
    count: usize,
}

/// Groups entries by resolved category
#[derive(Debug, Clone, Copy)]
pub struct Aggregator<'a> {
    catalog: &'a CategoryCatalog,
}

impl<'a> Aggregator<'a> {
    pub fn new(catalog: &'a CategoryCatalog) -> Self {
        Self { catalog }
    }

    /// One summary per resolved category, in first-seen order
    pub fn summarize(&self, entries: &[ExpenseEntry]) -> Vec<CategorySummary> {
        self.fold(entries.iter())
    }

    /// Like [`summarize`](Self::summarize), restricted to entries inside `window`
    pub fn summarize_window(
        &self,
        entries: &[ExpenseEntry],
        window: &AggregationWindow,
    ) -> Vec<CategorySummary> {
        self.fold(entries.iter().filter(|entry| window.contains(entry)))
    }

    fn fold<'e>(&self, entries: impl Iterator<Item = &'e ExpenseEntry>) -> Vec<CategorySummary> {
        let mut buckets: Vec<Bucket<'a>> = Vec::new();
        let mut index: HashMap<&CategoryId, usize> = HashMap::new();
        let mut folded = 0usize;
        let mut unmatched = 0usize;

        for entry in entries {
            let category = match self.catalog.find(&entry.category_name) {
                Some(category) => category,
                None => {
                    unmatched += 1;
                    tracing::trace!(
                        entry = %entry.id,
                        category = %entry.category_name,
                        "unknown category, using fallback"
                    );
                    self.catalog.fallback()
                }
            };

            let slot = *index.entry(&category.id).or_insert_with(|| {
                buckets.push(Bucket {
                    category,
                    total: Money::zero(),
                    count: 0,
                });
                buckets.len() - 1
            });

            let bucket = &mut buckets[slot];
            bucket.total += entry.amount;
            bucket.count += 1;
            folded += 1;
        }

        tracing::debug!(
            entries = folded,
            categories = buckets.len(),
            unmatched,
            "summarized expenses"
        );

        buckets
            .into_iter()
            .map(|b| CategorySummary::new(b.category, b.total, b.count))
            .collect()
    }
}

/// Summarize against the standard catalog
pub fn summarize(entries: &[ExpenseEntry]) -> Vec<CategorySummary> {
    Aggregator::new(&CategoryCatalog::standard()).summarize(entries)
}

/// Merge two summary collections by category id
///
/// Categories keep the order of `first`, followed by categories that only
/// appear in `second`, in their order there.
pub fn merge_summaries(
    first: &[CategorySummary],
    second: &[CategorySummary],
) -> Vec<CategorySummary> {
    let mut merged: Vec<CategorySummary> = first.to_vec();

    for summary in second {
        match merged
            .iter_mut()
            .find(|m| m.category_id() == summary.category_id())
        {
            Some(existing) => *existing = existing.combined_with(summary),
            None => merged.push(summary.clone()),
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryIcon;

    fn entry(category: &str, cents: i64) -> ExpenseEntry {
        ExpenseEntry::new("test", category, Money::from_cents(cents), "2024-03-01")
    }

    #[test]
    fn test_empty_input() {
        assert!(summarize(&[]).is_empty());
    }

    #[test]
    fn test_case_insensitive_grouping() {
        let summaries = summarize(&[entry("Food", 2000), entry("food", 1000), entry("Transport", 500)]);

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].category_name(), "Food");
        assert_eq!(summaries[0].total_amount().cents(), 3000);
        assert_eq!(summaries[0].expense_count(), 2);
        assert_eq!(summaries[1].category_name(), "Transport");
        assert_eq!(summaries[1].total_amount().cents(), 500);
        assert_eq!(summaries[1].expense_count(), 1);
    }

    #[test]
    fn test_unknown_category_uses_fallback() {
        let summaries = summarize(&[entry("Unknown", 700), entry("", 100), entry("Other", 50)]);

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].category_id().as_str(), "other");
        assert_eq!(summaries[0].icon(), CategoryIcon::Default);
        assert_eq!(summaries[0].total_amount().cents(), 850);
        assert_eq!(summaries[0].expense_count(), 3);
    }

    #[test]
    fn test_first_seen_order() {
        let summaries = summarize(&[
            entry("bills", 1),
            entry("Zoo", 1),
            entry("food", 1),
            entry("BILLS", 1),
        ]);
        let names: Vec<_> = summaries.iter().map(|s| s.category_name()).collect();
        assert_eq!(names, vec!["Bills", "Other", "Food"]);
    }

    #[test]
    fn test_signed_amounts_are_summed_as_stored() {
        let summaries = summarize(&[entry("Shopping", -1500), entry("Shopping", 400)]);
        assert_eq!(summaries[0].total_amount().cents(), -1100);
    }

    #[test]
    fn test_overflowing_totals_saturate() {
        let huge = 9_000_000_000_000_000_000;
        let summaries = summarize(&[entry("Food", huge), entry("food", huge)]);

        assert_eq!(summaries[0].total_amount().cents(), i64::MAX);
        assert_eq!(summaries[0].expense_count(), 2);

        let summaries = summarize(&[entry("Food", -huge), entry("Food", -huge)]);
        assert_eq!(summaries[0].total_amount().cents(), i64::MIN);
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = CategoryCatalog::with_categories(vec![ExpenseCategory::new(
            "pets",
            "Pets",
            CategoryIcon::Default,
        )])
        .unwrap();
        let summaries = Aggregator::new(&catalog).summarize(&[entry("PETS", 300), entry("Food", 100)]);

        assert_eq!(summaries[0].category_id().as_str(), "pets");
        assert_eq!(summaries[1].category_id().as_str(), "other");
    }

    #[test]
    fn test_merge_preserves_first_seen_order() {
        let left = summarize(&[entry("Food", 100), entry("Bills", 200)]);
        let right = summarize(&[entry("Transport", 50), entry("food", 25)]);

        let merged = merge_summaries(&left, &right);
        let names: Vec<_> = merged.iter().map(|s| s.category_name()).collect();
        assert_eq!(names, vec!["Food", "Bills", "Transport"]);
        assert_eq!(merged[0].total_amount().cents(), 125);
        assert_eq!(merged[0].expense_count(), 2);
    }
}
