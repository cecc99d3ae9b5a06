//! Core data models for BudgetPro
//!
//! This module contains the data structures of the ledger domain: money,
//! categories, transactions and the typed inputs for recording them.

pub mod category;
pub mod ids;
pub mod input;
pub mod money;
pub mod transaction;

pub use category::{Category, CategoryMeta, CategoryValidationError};
pub use ids::TransactionId;
pub use input::{ExpenseInput, IncomeInput};
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionKind};
