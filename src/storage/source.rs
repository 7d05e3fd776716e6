//! Entry sources
//!
//! The aggregator works on already-materialized entries. Whatever produces
//! them implements [`EntrySource`] and is responsible for handing over data
//! that satisfies the entry contract.

use std::collections::HashSet;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseEntry, Money};

/// Supplies the entries to summarize
pub trait EntrySource {
    fn fetch_entries(&self) -> ExpenseResult<Vec<ExpenseEntry>>;
}

/// A fixed set of entries held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryEntrySource {
    entries: Vec<ExpenseEntry>,
}

impl MemoryEntrySource {
    pub fn new(entries: Vec<ExpenseEntry>) -> Self {
        Self { entries }
    }
}

impl EntrySource for MemoryEntrySource {
    fn fetch_entries(&self) -> ExpenseResult<Vec<ExpenseEntry>> {
        Ok(self.entries.clone())
    }
}

/// Check the boundary contract: every entry valid, ids unique
///
/// The magnitudes of all amounts must also add up without overflowing, so
/// every per-category total and the grand total of a valid collection are
/// exact.
pub fn validate_entries(entries: &[ExpenseEntry]) -> ExpenseResult<()> {
    let mut seen = HashSet::with_capacity(entries.len());
    let mut magnitude = Money::zero();

    for entry in entries {
        entry
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        if !seen.insert(&entry.id) {
            return Err(ExpenseError::duplicate_entry(entry.id.as_str()));
        }

        magnitude = magnitude.checked_add(entry.amount.abs()).ok_or_else(|| {
            ExpenseError::Validation(format!(
                "Expense amounts are too large to total (at entry {})",
                entry.id
            ))
        })?;
    }

    Ok(())
}
