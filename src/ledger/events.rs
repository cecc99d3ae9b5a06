//! Change notifications emitted by the ledger
//!
//! Every successful mutation queues one event. A presentation layer drains
//! the queue and refreshes only the views named by each event's
//! [`Invalidation`].

use serde::Serialize;

use crate::models::Transaction;

/// A successful mutation of the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LedgerEvent {
    ExpenseRecorded {
        revision: u64,
        transaction: Transaction,
    },
    IncomeRecorded {
        revision: u64,
        transaction: Transaction,
    },
}

impl LedgerEvent {
    /// Ledger revision produced by this mutation
    pub fn revision(&self) -> u64 {
        match self {
            Self::ExpenseRecorded { revision, .. } | Self::IncomeRecorded { revision, .. } => {
                *revision
            }
        }
    }

    pub fn transaction(&self) -> &Transaction {
        match self {
            Self::ExpenseRecorded { transaction, .. }
            | Self::IncomeRecorded { transaction, .. } => transaction,
        }
    }

    /// The dashboard views made stale by this mutation
    pub fn invalidation(&self) -> Invalidation {
        match self {
            Self::ExpenseRecorded { transaction, .. } => Invalidation {
                summary: true,
                category: transaction.category().map(str::to_string),
                recent_transactions: true,
            },
            Self::IncomeRecorded { .. } => Invalidation {
                summary: true,
                category: None,
                recent_transactions: true,
            },
        }
    }
}

/// Which derived views need re-reading after a mutation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Invalidation {
    pub summary: bool,
    /// Key of the single category whose status changed, if any
    pub category: Option<String>,
    pub recent_transactions: bool,
}

impl Invalidation {
    pub fn affects_category(&self, key: &str) -> bool {
        self.category.as_deref() == Some(key)
    }
}
