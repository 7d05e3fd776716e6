//! CLI command handlers
//!
//! Bridges clap argument parsing with the storage and report layers.

pub mod entry;
pub mod summary;

pub use entry::{handle_entry_command, EntryCommands};
pub use summary::{handle_summary_command, SummaryArgs};
