//! Per-category aggregation results

use serde::{Deserialize, Serialize};

use super::category::{CategoryIcon, ExpenseCategory};
use super::ids::CategoryId;
use super::money::Money;

/// Total and count of the entries that resolved to one category
///
/// Values are finished when handed out; the running totals live in the
/// aggregator while it folds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    category_id: CategoryId,
    category_name: String,
    total_amount: Money,
    expense_count: usize,
    icon: CategoryIcon,
}

impl CategorySummary {
    pub fn new(category: &ExpenseCategory, total_amount: Money, expense_count: usize) -> Self {
        Self {
            category_id: category.id.clone(),
            category_name: category.name.clone(),
            total_amount,
            expense_count,
            icon: category.icon,
        }
    }

    pub fn category_id(&self) -> &CategoryId {
        &self.category_id
    }

    pub fn category_name(&self) -> &str {
        &self.category_name
    }

    pub fn total_amount(&self) -> Money {
        self.total_amount
    }

    pub fn expense_count(&self) -> usize {
        self.expense_count
    }

    pub fn icon(&self) -> CategoryIcon {
        self.icon
    }

    /// A copy with `other`'s total and count added in
    pub fn combined_with(&self, other: &CategorySummary) -> Self {
        Self {
            total_amount: self.total_amount + other.total_amount,
            expense_count: self.expense_count + other.expense_count,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryKind;

    #[test]
    fn test_combined_with() {
        let food = CategoryKind::Food.category();
        let a = CategorySummary::new(&food, Money::from_cents(300), 2);
        let b = CategorySummary::new(&food, Money::from_cents(150), 1);

        let merged = a.combined_with(&b);
        assert_eq!(merged.total_amount().cents(), 450);
        assert_eq!(merged.expense_count(), 3);
        assert_eq!(merged.category_name(), "Food");
        assert_eq!(merged.icon(), CategoryIcon::Food);
    }
}
