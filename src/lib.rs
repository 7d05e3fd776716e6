//! Expense Tracker - personal expense tracking with category summaries
//!
//! Expense entries are grouped into per-category summaries and presented
//! with their share of the grand total.
//!
//! # Architecture
//!
//! - `models`: entries, money, the category catalog and summaries
//! - `reports`: aggregation, reporting windows and presentation
//! - `display`: terminal formatting of entries and summaries
//! - `storage`: entry sources (JSON file, in-memory, CSV import)
//! - `export`: CSV, JSON and YAML summary export
//! - `config`: paths and user settings
//! - `cli`: command handlers for the `expenses` binary
//!
//! # Example
//!
//! ```
//! use expense_tracker::models::{ExpenseEntry, Money};
//! use expense_tracker::reports::{present, summarize};
//!
//! let entries = vec![
//!     ExpenseEntry::new("Lunch", "Food", Money::from_cents(2000), "2024-03-01"),
//!     ExpenseEntry::new("Snack", "food", Money::from_cents(1000), "2024-03-01"),
//!     ExpenseEntry::new("Bus", "Transport", Money::from_cents(500), "2024-03-02"),
//! ];
//!
//! let list = present(&summarize(&entries));
//! assert_eq!(list.rows()[0].summary.category_name(), "Food");
//! assert_eq!(list.rows()[0].percentage, 86);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
