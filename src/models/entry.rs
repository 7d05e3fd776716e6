//! Expense entry model
//!
//! One recorded expense as handed over by the data source. The date is kept
//! as display text; it is only parsed when a report is restricted to a window.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::EntryId;
use super::money::Money;

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    pub id: EntryId,

    pub description: String,

    /// Soft reference to a category by name
    #[serde(default)]
    pub category_name: String,

    /// Stored amount; display always shows the magnitude
    pub amount: Money,

    /// Display-formatted date
    #[serde(default)]
    pub date: String,

    #[serde(default)]
    pub has_photo: bool,
}

impl ExpenseEntry {
    /// Create an entry with a freshly generated id
    pub fn new(
        description: impl Into<String>,
        category_name: impl Into<String>,
        amount: Money,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: EntryId::generate(),
            description: description.into(),
            category_name: category_name.into(),
            amount,
            date: date.into(),
            has_photo: false,
        }
    }

    /// Replace the generated id with a known one
    pub fn with_id(mut self, id: impl Into<EntryId>) -> Self {
        self.id = id.into();
        self
    }

    /// Mark the entry as having an attached photo
    pub fn with_photo(mut self, has_photo: bool) -> Self {
        self.has_photo = has_photo;
        self
    }

    /// Check the data-source contract for a single entry
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if self.id.is_empty() {
            return Err(EntryValidationError::EmptyId);
        }
        if self.description.trim().is_empty() {
            return Err(EntryValidationError::EmptyDescription(self.id.to_string()));
        }
        if !self.amount.is_within_limit() {
            return Err(EntryValidationError::AmountOutOfRange(self.id.to_string()));
        }
        Ok(())
    }
}

impl fmt::Display for ExpenseEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description, self.amount.abs())
    }
}

/// Validation errors for entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    EmptyId,
    EmptyDescription(String),
    AmountOutOfRange(String),
}

impl fmt::Display for EntryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "Expense entry id cannot be empty"),
            Self::EmptyDescription(id) => {
                write!(f, "Expense entry {} has an empty description", id)
            }
            Self::AmountOutOfRange(id) => write!(
                f,
                "Expense entry {} exceeds the amount limit of {}",
                id,
                Money::MAX_AMOUNT
            ),
        }
    }
}

impl std::error::Error for EntryValidationError {}
