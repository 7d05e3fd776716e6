//! Display formatting for terminal output

pub mod entry;
pub mod summary;

pub use entry::{entry_icon, format_amount, format_entry_table, format_expense_count, EntryRow};
pub use summary::{format_catalog, format_summary_table, SummaryRow};
