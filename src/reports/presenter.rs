//! Display-ready category summaries
//!
//! The presenter attaches a share-of-total percentage to each summary and
//! applies the requested ordering. Row selection is forwarded to a
//! caller-supplied [`SelectionSink`]; nothing here knows about navigation.

use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{CategorySummary, Money};

/// How a share of the grand total becomes a whole percentage
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum PercentageRounding {
    /// Round half up (85.7 -> 86)
    #[default]
    Nearest,
    /// Drop the fraction (85.7 -> 85)
    Truncate,
}

/// Ordering of presented rows
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum SummaryOrder {
    /// The order the aggregator first saw each category
    #[default]
    Discovery,
    /// Largest signed total first, ties by category name
    #[value(alias = "largest")]
    LargestFirst,
}

/// A summary together with its share of the grand total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentedSummary {
    pub summary: CategorySummary,
    /// Whole percentage in `0..=100`
    pub percentage: u8,
}

/// Receives the summary behind a selected row
pub trait SelectionSink {
    fn on_select(&mut self, summary: &CategorySummary);
}

impl<F> SelectionSink for F
where
    F: FnMut(&CategorySummary),
{
    fn on_select(&mut self, summary: &CategorySummary) {
        self(summary)
    }
}

/// Ordered, click-addressable rows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SummaryList {
    rows: Vec<PresentedSummary>,
    grand_total: Money,
}

impl SummaryList {
    pub fn rows(&self) -> &[PresentedSummary] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<PresentedSummary> {
        self.rows
    }

    pub fn grand_total(&self) -> Money {
        self.grand_total
    }

    /// Total number of entries across all rows
    pub fn expense_count(&self) -> usize {
        self.rows.iter().map(|r| r.summary.expense_count()).sum()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PresentedSummary> {
        self.rows.get(index)
    }

    /// Hand the summary at `index` to `sink`
    pub fn select<S: SelectionSink + ?Sized>(
        &self,
        index: usize,
        sink: &mut S,
    ) -> ExpenseResult<()> {
        let row = self
            .rows
            .get(index)
            .ok_or_else(|| ExpenseError::row_not_found(index))?;
        sink.on_select(&row.summary);
        Ok(())
    }
}

/// Computes percentages and ordering for a set of summaries
#[derive(Debug, Clone, Copy, Default)]
pub struct Presenter {
    pub rounding: PercentageRounding,
    pub order: SummaryOrder,
}

impl Presenter {
    pub fn new(rounding: PercentageRounding, order: SummaryOrder) -> Self {
        Self { rounding, order }
    }

    pub fn present(&self, summaries: &[CategorySummary]) -> SummaryList {
        let grand_total: Money = summaries.iter().map(|s| s.total_amount()).sum();

        let mut rows: Vec<PresentedSummary> = summaries
            .iter()
            .map(|summary| PresentedSummary {
                percentage: percentage_of(summary.total_amount(), grand_total, self.rounding),
                summary: summary.clone(),
            })
            .collect();

        if self.order == SummaryOrder::LargestFirst {
            sort_largest_first(&mut rows);
        }

        SummaryList { rows, grand_total }
    }
}

/// Present with nearest rounding, in discovery order
pub fn present(summaries: &[CategorySummary]) -> SummaryList {
    Presenter::default().present(summaries)
}

/// Stable sort by signed total descending, ties by name ascending
///
/// A net-refund category (negative total) sorts after every spending one.
pub fn sort_largest_first(rows: &mut [PresentedSummary]) {
    rows.sort_by(|a, b| {
        b.summary
            .total_amount()
            .cmp(&a.summary.total_amount())
            .then_with(|| a.summary.category_name().cmp(b.summary.category_name()))
    });
}

/// Share of `grand_total` taken by `total`, as a whole percentage
///
/// Zero when the grand total is zero. A share of the opposite sign to the
/// grand total counts as 0 and a share larger than the total as 100.
pub fn percentage_of(total: Money, grand_total: Money, rounding: PercentageRounding) -> u8 {
    if grand_total.is_zero() || total.is_zero() {
        return 0;
    }
    if total.is_negative() != grand_total.is_negative() {
        return 0;
    }

    let part = i128::from(total.cents()).abs();
    let whole = i128::from(grand_total.cents()).abs();

    let pct = match rounding {
        PercentageRounding::Truncate => part * 100 / whole,
        PercentageRounding::Nearest => (part * 200 + whole) / (whole * 2),
    };

    pct.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryKind, ExpenseCategory};

    fn summary(kind: CategoryKind, cents: i64, count: usize) -> CategorySummary {
        CategorySummary::new(&kind.category(), Money::from_cents(cents), count)
    }

    #[test]
    fn test_percentages_nearest() {
        let list = present(&[
            summary(CategoryKind::Food, 3000, 2),
            summary(CategoryKind::Transport, 500, 1),
        ]);

        assert_eq!(list.grand_total().cents(), 3500);
        assert_eq!(list.rows()[0].percentage, 86);
        assert_eq!(list.rows()[1].percentage, 14);
        assert_eq!(list.expense_count(), 3);
    }

    #[test]
    fn test_percentages_truncate() {
        let presenter = Presenter::new(PercentageRounding::Truncate, SummaryOrder::Discovery);
        let list = presenter.present(&[
            summary(CategoryKind::Food, 3000, 2),
            summary(CategoryKind::Transport, 500, 1),
        ]);

        assert_eq!(list.rows()[0].percentage, 85);
        assert_eq!(list.rows()[1].percentage, 14);
    }

    #[test]
    fn test_zero_grand_total() {
        let list = present(&[
            summary(CategoryKind::Food, 0, 2),
            summary(CategoryKind::Bills, 0, 1),
        ]);
        assert!(list.rows().iter().all(|r| r.percentage == 0));
        assert!(present(&[]).is_empty());
    }

    #[test]
    fn test_negative_amounts_share_like_positive() {
        let list = present(&[
            summary(CategoryKind::Food, -750, 1),
            summary(CategoryKind::Bills, -250, 1),
        ]);
        assert_eq!(list.rows()[0].percentage, 75);
        assert_eq!(list.rows()[1].percentage, 25);
    }

    #[test]
    fn test_mixed_signs_are_clamped() {
        assert_eq!(
            percentage_of(Money::from_cents(-100), Money::from_cents(400), PercentageRounding::Nearest),
            0
        );
        assert_eq!(
            percentage_of(Money::from_cents(500), Money::from_cents(400), PercentageRounding::Nearest),
            100
        );
    }

    #[test]
    fn test_largest_first_with_name_tiebreak() {
        let presenter = Presenter::new(PercentageRounding::Nearest, SummaryOrder::LargestFirst);
        let list = presenter.present(&[
            summary(CategoryKind::Transport, 500, 1),
            summary(CategoryKind::Shopping, 900, 3),
            summary(CategoryKind::Bills, 500, 1),
        ]);

        let names: Vec<_> = list.rows().iter().map(|r| r.summary.category_name()).collect();
        assert_eq!(names, vec!["Shopping", "Bills", "Transport"]);
    }

    #[test]
    fn test_largest_first_uses_signed_totals() {
        let presenter = Presenter::new(PercentageRounding::Nearest, SummaryOrder::LargestFirst);
        let list = presenter.present(&[
            summary(CategoryKind::Shopping, -1000, 1),
            summary(CategoryKind::Food, 500, 2),
            summary(CategoryKind::Bills, -1000, 1),
        ]);

        let names: Vec<_> = list.rows().iter().map(|r| r.summary.category_name()).collect();
        assert_eq!(names, vec!["Food", "Bills", "Shopping"]);
    }

    #[test]
    fn test_discovery_order_is_kept() {
        let list = present(&[
            summary(CategoryKind::Transport, 100, 1),
            summary(CategoryKind::Food, 900, 1),
        ]);
        assert_eq!(list.rows()[0].summary.category_name(), "Transport");
    }

    #[test]
    fn test_select_invokes_sink_with_row_summary() {
        let list = present(&[
            summary(CategoryKind::Food, 100, 1),
            summary(CategoryKind::Bills, 300, 2),
        ]);

        let mut selected: Vec<String> = Vec::new();
        let mut sink = |s: &CategorySummary| selected.push(s.category_name().to_string());
        list.select(1, &mut sink).unwrap();
        assert_eq!(selected, vec!["Bills".to_string()]);
    }

    #[test]
    fn test_select_out_of_range() {
        let list = present(&[summary(CategoryKind::Food, 100, 1)]);
        let mut calls = 0;
        let mut sink = |_: &CategorySummary| calls += 1;

        let err = list.select(3, &mut sink).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(calls, 0);
    }

    struct Recorder(Vec<ExpenseCategory>);

    impl SelectionSink for Recorder {
        fn on_select(&mut self, summary: &CategorySummary) {
            self.0.push(ExpenseCategory::new(
                summary.category_id().clone(),
                summary.category_name(),
                summary.icon(),
            ));
        }
    }

    #[test]
    fn test_custom_sink() {
        let list = present(&[summary(CategoryKind::Entertainment, 100, 1)]);
        let mut recorder = Recorder(Vec::new());
        list.select(0, &mut recorder).unwrap();
        assert_eq!(recorder.0, vec![CategoryKind::Entertainment.category()]);
    }
}
