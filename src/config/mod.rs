//! Configuration module for BudgetPro
//!
//! This module provides:
//! - config directory resolution
//! - user settings persistence
//! - the dashboard configuration a ledger is built from

pub mod dashboard;
pub mod paths;
pub mod settings;

pub use dashboard::{CategoryConfig, DashboardConfig, SeedKind, SeedTransaction};
pub use paths::BudgetPaths;
pub use settings::Settings;
