//! Spending category model
//!
//! A category is a named bucket with a budget ceiling and accumulated spend.
//! Keys and budgets are fixed when the ledger is configured; only the spent
//! amount moves afterwards, and only upwards.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Presentation data carried alongside a category (icon, color)
///
/// The ledger never inspects these values; they are passed through to
/// whatever renders the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMeta {
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
}

impl CategoryMeta {
    pub fn new(icon: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            color: color.into(),
        }
    }
}

/// A budget category identified by a stable key (e.g. "housing")
///
/// Serialize-only: categories are built through [`Category::new`] so the
/// ledger can validate them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    key: String,
    budgeted: Money,
    spent: Money,
    meta: CategoryMeta,
}

impl Category {
    /// Create a new category with nothing spent yet
    pub fn new(key: impl Into<String>, budgeted: Money) -> Self {
        Self {
            key: key.into(),
            budgeted,
            spent: Money::zero(),
            meta: CategoryMeta::default(),
        }
    }

    /// Set an opening spent amount
    pub fn with_spent(mut self, spent: Money) -> Self {
        self.spent = spent;
        self
    }

    /// Attach display metadata
    pub fn with_meta(mut self, meta: CategoryMeta) -> Self {
        self.meta = meta;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn budgeted(&self) -> Money {
        self.budgeted
    }

    pub fn spent(&self) -> Money {
        self.spent
    }

    pub fn meta(&self) -> &CategoryMeta {
        &self.meta
    }

    /// Budget left in this category; negative when overspent
    pub fn remaining(&self) -> Money {
        self.budgeted - self.spent
    }

    /// Add to the spent amount. Callers must pass a positive amount.
    pub(crate) fn add_spent(&mut self, amount: Money) {
        debug_assert!(amount.is_positive());
        self.spent += amount;
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.key.trim().is_empty() {
            return Err(CategoryValidationError::EmptyKey);
        }

        if self.budgeted.is_negative() {
            return Err(CategoryValidationError::NegativeBudget(self.key.clone()));
        }

        if self.spent.is_negative() {
            return Err(CategoryValidationError::NegativeSpent(self.key.clone()));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyKey,
    NegativeBudget(String),
    NegativeSpent(String),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyKey => write!(f, "Category key cannot be empty"),
            Self::NegativeBudget(key) => {
                write!(f, "Category '{}' has a negative budget", key)
            }
            Self::NegativeSpent(key) => {
                write!(f, "Category '{}' has a negative spent amount", key)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}
