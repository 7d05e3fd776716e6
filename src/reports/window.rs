//! Reporting windows
//!
//! Entry dates are display strings. They are only parsed when a report is
//! bounded by a start or end date; an entry whose date cannot be read is left
//! out of a bounded window.

use chrono::NaiveDate;

use crate::models::ExpenseEntry;

/// Date formats accepted for entry dates, tried in order
pub const ENTRY_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%b %d, %Y", "%d %b %Y"];

/// Inclusive date range; a missing bound is open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregationWindow {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl AggregationWindow {
    /// A window that keeps every entry
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Whether `entry` falls inside the window
    pub fn contains(&self, entry: &ExpenseEntry) -> bool {
        if self.is_unbounded() {
            return true;
        }

        let Some(date) = parse_entry_date(&entry.date) else {
            tracing::debug!(entry = %entry.id, date = %entry.date, "unreadable date, outside window");
            return false;
        };

        self.start.map_or(true, |start| date >= start) && self.end.map_or(true, |end| date <= end)
    }
}

/// Parse an entry date using [`ENTRY_DATE_FORMATS`]
pub fn parse_entry_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    ENTRY_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
}
