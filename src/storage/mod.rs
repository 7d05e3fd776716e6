//! Storage layer
//!
//! The entry sources the reports read from: a JSON file store with atomic
//! writes, an in-memory source, and CSV import.

pub mod entries;
pub mod file_io;
pub mod import;
pub mod source;

pub use entries::JsonEntryStore;
pub use file_io::{read_json, write_json_atomic};
pub use import::import_csv;
pub use source::{validate_entries, EntrySource, MemoryEntrySource};

use crate::config::paths::ExpensePaths;
use crate::error::ExpenseError;

/// Storage coordinator
pub struct Storage {
    paths: ExpensePaths,
    pub entries: JsonEntryStore,
}

impl Storage {
    pub fn new(paths: ExpensePaths) -> Result<Self, ExpenseError> {
        paths.ensure_directories()?;

        Ok(Self {
            entries: JsonEntryStore::new(paths.entries_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), ExpenseError> {
        self.entries.load()
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), ExpenseError> {
        self.entries.save()
    }
}
