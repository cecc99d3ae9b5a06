//! Transaction model
//!
//! A transaction is an immutable record of one income or expense event.
//! Only expenses reference a category; the enum makes an income with a
//! category (or an expense without one) unrepresentable.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// What kind of event a transaction records
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money spent from a category
    Expense { category: String },
    /// Money received
    Income,
}

impl TransactionKind {
    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense { .. })
    }

    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }

    /// The category key, for expenses
    pub fn category(&self) -> Option<&str> {
        match self {
            Self::Expense { category } => Some(category),
            Self::Income => None,
        }
    }

    /// Short lowercase label ("expense" / "income")
    pub fn label(&self) -> &'static str {
        match self {
            Self::Expense { .. } => "expense",
            Self::Income => "income",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expense { category } => write!(f, "Expense ({})", category),
            Self::Income => write!(f, "Income"),
        }
    }
}

/// A recorded financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    id: TransactionId,

    #[serde(flatten)]
    kind: TransactionKind,

    /// Always strictly positive; the kind carries the direction
    amount: Money,

    description: String,

    timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Create an expense against a category.
    ///
    /// Callers are responsible for having validated the amount, description
    /// and category key.
    pub(crate) fn expense(
        category: impl Into<String>,
        amount: Money,
        description: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            kind: TransactionKind::Expense {
                category: category.into(),
            },
            amount,
            description: description.into(),
            timestamp,
        }
    }

    /// Create an income record
    pub(crate) fn income(
        amount: Money,
        description: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            kind: TransactionKind::Income,
            amount,
            description: description.into(),
            timestamp,
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn kind(&self) -> &TransactionKind {
        &self.kind
    }

    /// The category key, for expenses
    pub fn category(&self) -> Option<&str> {
        self.kind.category()
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn is_expense(&self) -> bool {
        self.kind.is_expense()
    }

    pub fn is_income(&self) -> bool {
        self.kind.is_income()
    }

    /// Amount with the direction applied (negative for expenses)
    pub fn signed_amount(&self) -> Money {
        if self.is_expense() {
            -self.amount
        } else {
            self.amount
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_expense() { "-" } else { "+" };
        write!(
            f,
            "{} {} {}{} ({})",
            self.timestamp.format("%Y-%m-%d"),
            self.description,
            sign,
            self.amount,
            self.kind
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expense_carries_category() {
        let txn = Transaction::expense("food", Money::from_cents(2450), "Pizza Palace", Utc::now());

        assert!(txn.is_expense());
        assert!(!txn.is_income());
        assert_eq!(txn.category(), Some("food"));
        assert_eq!(txn.signed_amount().cents(), -2450);
        assert_eq!(txn.kind().label(), "expense");
    }

    #[test]
    fn test_income_has_no_category() {
        let txn = Transaction::income(Money::from_cents(525000), "Salary Deposit", Utc::now());

        assert!(txn.is_income());
        assert_eq!(txn.category(), None);
        assert_eq!(txn.signed_amount().cents(), 525000);
    }

    #[test]
    fn test_serialized_shape() {
        let txn = Transaction::expense("food", Money::from_cents(2450), "Pizza Palace", Utc::now());
        let value = serde_json::to_value(&txn).unwrap();

        assert_eq!(value["kind"], "expense");
        assert_eq!(value["category"], "food");
        assert_eq!(value["amount"], 2450);
        assert_eq!(value["description"], "Pizza Palace");

        let income = Transaction::income(Money::from_cents(100), "Gift", Utc::now());
        let value = serde_json::to_value(&income).unwrap();
        assert_eq!(value["kind"], "income");
        assert!(value.get("category").is_none());
    }

    #[test]
    fn test_display() {
        let txn = Transaction::expense("food", Money::from_cents(2450), "Pizza Palace", Utc::now());
        let shown = txn.to_string();
        assert!(shown.contains("Pizza Palace"));
        assert!(shown.contains("-$24.50"));
        assert!(shown.contains("Expense (food)"));
    }
}
