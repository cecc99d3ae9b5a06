//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing in `main.rs` with the ledger.

pub mod dashboard;
pub mod record;

pub use dashboard::{
    handle_categories_command, handle_export_command, handle_recent_command,
    handle_replay_command, handle_summary_command, print_dashboard,
};
pub use record::{handle_expense_command, handle_income_command};
