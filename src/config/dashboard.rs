//! Dashboard configuration
//!
//! The category set, opening balances and seeded history a ledger is built
//! from. Read from YAML or JSON; amounts are written in currency units
//! (e.g. `24.50`), not cents.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};

/// One configured spending category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub key: String,
    pub budgeted: f64,
    /// Spending already made before the session starts
    #[serde(default)]
    pub spent: f64,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
}

impl CategoryConfig {
    pub fn new(key: impl Into<String>, budgeted: f64, spent: f64) -> Self {
        Self {
            key: key.into(),
            budgeted,
            spent,
            icon: String::new(),
            color: String::new(),
        }
    }

    pub fn with_meta(mut self, icon: impl Into<String>, color: impl Into<String>) -> Self {
        self.icon = icon.into();
        self.color = color.into();
        self
    }
}

/// Kind of a seeded history entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedKind {
    Expense,
    Income,
}

/// A transaction shown in the history at startup
///
/// Seeds are display-only: the opening `income` and per-category `spent`
/// figures are expected to already include them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedTransaction {
    pub kind: SeedKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub amount: f64,
    pub description: String,
    /// Age of the entry relative to ledger construction
    #[serde(default)]
    pub days_ago: u32,
}

impl SeedTransaction {
    pub fn expense(category: &str, amount: f64, description: &str, days_ago: u32) -> Self {
        Self {
            kind: SeedKind::Expense,
            category: Some(category.to_string()),
            amount,
            description: description.to_string(),
            days_ago,
        }
    }

    pub fn income(amount: f64, description: &str, days_ago: u32) -> Self {
        Self {
            kind: SeedKind::Income,
            category: None,
            amount,
            description: description.to_string(),
            days_ago,
        }
    }
}

/// Static configuration a ledger is constructed from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Income already received before the session starts
    #[serde(default)]
    pub income: f64,

    /// Categories in display order
    #[serde(default)]
    pub categories: Vec<CategoryConfig>,

    /// Seeded transactions (any order; sorted newest first on load)
    #[serde(default)]
    pub history: Vec<SeedTransaction>,
}

impl Default for DashboardConfig {
    /// The BudgetPro demo dashboard
    fn default() -> Self {
        Self {
            income: 5250.0,
            categories: vec![
                CategoryConfig::new("housing", 2000.0, 1800.0).with_meta("🏠", "blue"),
                CategoryConfig::new("food", 800.0, 642.0).with_meta("🍕", "orange"),
                CategoryConfig::new("transportation", 500.0, 380.0).with_meta("🚗", "purple"),
                CategoryConfig::new("entertainment", 400.0, 285.0).with_meta("🎬", "pink"),
                CategoryConfig::new("healthcare", 300.0, 180.0).with_meta("🏥", "red"),
                CategoryConfig::new("utilities", 600.0, 560.0).with_meta("💡", "yellow"),
            ],
            history: vec![
                SeedTransaction::expense("food", 24.50, "Pizza Palace", 0),
                SeedTransaction::expense("housing", 1800.0, "Rent Payment", 1),
                SeedTransaction::income(5250.0, "Salary Deposit", 2),
                SeedTransaction::expense("transportation", 52.30, "Gas Station", 3),
            ],
        }
    }
}

impl DashboardConfig {
    /// A configuration with categories only: no income, no history
    pub fn with_categories(categories: Vec<CategoryConfig>) -> Self {
        Self {
            income: 0.0,
            categories,
            history: Vec::new(),
        }
    }

    /// Load a configuration file, choosing the format from its extension
    ///
    /// `.json` files are read as JSON; anything else is read as YAML.
    pub fn load(path: &Path) -> LedgerResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            LedgerError::Io(format!(
                "Failed to read dashboard file {}: {}",
                path.display(),
                e
            ))
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let config = if is_json {
            serde_json::from_str(&contents).map_err(|e| {
                LedgerError::Config(format!("Failed to parse {}: {}", path.display(), e))
            })?
        } else {
            serde_yaml::from_str(&contents).map_err(|e| {
                LedgerError::Config(format!("Failed to parse {}: {}", path.display(), e))
            })?
        };

        tracing::debug!(path = %path.display(), "loaded dashboard configuration");
        Ok(config)
    }

    /// Load `explicit` if given, else `fallback` if that file exists, else
    /// the built-in demo dashboard
    pub fn load_or_default(explicit: Option<&Path>, fallback: &Path) -> LedgerResult<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None if fallback.exists() => Self::load(fallback),
            None => {
                tracing::debug!("no dashboard file found, using built-in demo data");
                Ok(Self::default())
            }
        }
    }

    /// Write this configuration as YAML
    pub fn save(&self, path: &Path) -> LedgerResult<()> {
        let contents = serde_yaml::to_string(self)?;
        std::fs::write(path, contents).map_err(|e| {
            LedgerError::Io(format!(
                "Failed to write dashboard file {}: {}",
                path.display(),
                e
            ))
        })
    }
}
