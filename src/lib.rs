//! BudgetPro - personal budget dashboard
//!
//! This library provides the core of the BudgetPro dashboard: a ledger that
//! tracks income and spending against per-category budgets, plus the
//! configuration, display and export layers around it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Money, categories, transactions and validated inputs
//! - `ledger`: The ledger engine, derived summaries and change events
//! - `config`: Paths, user settings and dashboard configuration
//! - `display`: Terminal formatting of ledger views
//! - `export`: JSON/YAML dashboard snapshots
//! - `import`: CSV transaction replay
//! - `cli`: Command handlers used by the `budgetpro` binary
//! - `logging`: Tracing subscriber setup
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use budgetpro::config::DashboardConfig;
//! use budgetpro::models::ExpenseInput;
//! use budgetpro::LedgerEngine;
//!
//! let mut ledger = LedgerEngine::from_config(&DashboardConfig::default())?;
//! ledger.record_expense(ExpenseInput::new("food", 24.50, "Lunch"))?;
//!
//! let summary = ledger.summary();
//! assert_eq!(summary.total_expenses.to_string(), "$3871.50");
//! # Ok::<(), budgetpro::LedgerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod import;
pub mod ledger;
pub mod logging;
pub mod models;

pub use error::{LedgerError, LedgerResult};
pub use ledger::LedgerEngine;
