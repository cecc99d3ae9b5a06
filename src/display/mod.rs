//! Display formatting for terminal output
//!
//! Renders the ledger's read models (summary, category statuses, recent
//! transactions) as text. Nothing here feeds back into the ledger.

pub mod category;
pub mod format;
pub mod summary;
pub mod transaction;

pub use category::{format_category_line, format_category_table};
pub use format::{format_category_name, format_relative_date};
pub use summary::format_summary;
pub use transaction::{format_recent_transactions, format_transaction_row};
