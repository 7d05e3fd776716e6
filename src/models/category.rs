//! Expense categories, their icons and the category catalog
//!
//! Entries refer to categories by name only. Resolution against the catalog
//! is case-insensitive and never fails: a name that matches nothing lands in
//! the default "Other" category.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use crate::error::{ExpenseError, ExpenseResult};

/// The fixed icon set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CategoryIcon {
    Food,
    Transport,
    Shopping,
    Bills,
    Entertainment,
    #[default]
    Default,
}

impl CategoryIcon {
    /// Stable resource name for renderers that ship their own artwork
    pub fn resource_name(&self) -> &'static str {
        match self {
            Self::Food => "ic_food",
            Self::Transport => "ic_transport",
            Self::Shopping => "ic_shopping",
            Self::Bills => "ic_bills",
            Self::Entertainment => "ic_entertainment",
            Self::Default => "ic_default",
        }
    }

    /// Glyph used by the terminal tables
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Food => "🍔",
            Self::Transport => "🚌",
            Self::Shopping => "🛍",
            Self::Bills => "🧾",
            Self::Entertainment => "🎬",
            Self::Default => "💸",
        }
    }
}

impl fmt::Display for CategoryIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.resource_name())
    }
}

/// The closed set of built-in categories, plus the fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    Food,
    Transport,
    Shopping,
    Bills,
    Entertainment,
    Other,
}

impl CategoryKind {
    /// The catalog kinds in display order (excludes `Other`)
    pub fn catalog() -> &'static [Self] {
        &[
            Self::Food,
            Self::Transport,
            Self::Shopping,
            Self::Bills,
            Self::Entertainment,
        ]
    }

    /// Case-insensitive lookup; anything unknown is `Other`
    pub fn from_name(name: &str) -> Self {
        let wanted = name.trim();
        Self::catalog()
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .unwrap_or(Self::Other)
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Shopping => "shopping",
            Self::Bills => "bills",
            Self::Entertainment => "entertainment",
            Self::Other => "other",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Shopping => "Shopping",
            Self::Bills => "Bills",
            Self::Entertainment => "Entertainment",
            Self::Other => "Other",
        }
    }

    pub fn icon(&self) -> CategoryIcon {
        match self {
            Self::Food => CategoryIcon::Food,
            Self::Transport => CategoryIcon::Transport,
            Self::Shopping => CategoryIcon::Shopping,
            Self::Bills => CategoryIcon::Bills,
            Self::Entertainment => CategoryIcon::Entertainment,
            Self::Other => CategoryIcon::Default,
        }
    }

    pub fn category(&self) -> ExpenseCategory {
        ExpenseCategory::new(self.id(), self.name(), self.icon())
    }
}

/// A named grouping with a display icon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseCategory {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub icon: CategoryIcon,
}

impl ExpenseCategory {
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>, icon: CategoryIcon) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon,
        }
    }

    /// The fallback category for names the catalog doesn't know
    pub fn other() -> Self {
        CategoryKind::Other.category()
    }

    fn matches_name(&self, name: &str) -> bool {
        self.name.trim().eq_ignore_ascii_case(name.trim())
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The catalog of known categories and the fallback they resolve to
#[derive(Debug, Clone)]
pub struct CategoryCatalog {
    categories: Vec<ExpenseCategory>,
    fallback: ExpenseCategory,
}

impl CategoryCatalog {
    /// Food, Transport, Shopping, Bills and Entertainment
    pub fn standard() -> Self {
        Self {
            categories: CategoryKind::catalog().iter().map(|k| k.category()).collect(),
            fallback: ExpenseCategory::other(),
        }
    }

    /// Build a custom catalog
    ///
    /// Ids must be unique (and must not collide with the fallback's id) so an
    /// id always determines a single name and icon. Names must be non-empty
    /// and unique ignoring case, otherwise resolution would be ambiguous.
    pub fn with_categories(categories: Vec<ExpenseCategory>) -> ExpenseResult<Self> {
        let fallback = ExpenseCategory::other();

        for (i, category) in categories.iter().enumerate() {
            if category.id.is_empty() || category.name.trim().is_empty() {
                return Err(ExpenseError::Validation(format!(
                    "Category at position {} needs an id and a name",
                    i
                )));
            }

            let earlier = &categories[..i];
            if category.id == fallback.id || earlier.iter().any(|c| c.id == category.id) {
                return Err(ExpenseError::Duplicate {
                    entity_type: "Category id",
                    identifier: category.id.to_string(),
                });
            }
            if category.matches_name(&fallback.name)
                || earlier.iter().any(|c| c.matches_name(&category.name))
            {
                return Err(ExpenseError::Duplicate {
                    entity_type: "Category name",
                    identifier: category.name.clone(),
                });
            }
        }

        Ok(Self {
            categories,
            fallback,
        })
    }

    /// Resolve a category name; unknown names resolve to the fallback
    pub fn resolve(&self, name: &str) -> &ExpenseCategory {
        self.find(name).unwrap_or(&self.fallback)
    }

    /// Resolve a category name, returning `None` for unknown names
    pub fn find(&self, name: &str) -> Option<&ExpenseCategory> {
        self.categories.iter().find(|c| c.matches_name(name))
    }

    pub fn categories(&self) -> &[ExpenseCategory] {
        &self.categories
    }

    pub fn fallback(&self) -> &ExpenseCategory {
        &self.fallback
    }
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
