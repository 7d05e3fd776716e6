//! Core data models
//!
//! Expense entries, the category catalog with its icon set, and the
//! per-category summaries produced by aggregation.

pub mod category;
pub mod entry;
pub mod ids;
pub mod money;
pub mod summary;

pub use category::{CategoryCatalog, CategoryIcon, CategoryKind, ExpenseCategory};
pub use entry::{EntryValidationError, ExpenseEntry};
pub use ids::{CategoryId, EntryId};
pub use money::{Money, MoneyParseError};
pub use summary::CategorySummary;
