//! Typed inputs for the two ledger mutations
//!
//! Front ends collect form fields however they like and hand the ledger one
//! of these structs. Validation happens once, in the ledger, through the
//! helpers below.

use serde::{Deserialize, Serialize};

use super::money::Money;
use crate::error::{LedgerError, LedgerResult};

/// Input for recording an expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseInput {
    pub category: String,
    pub amount: f64,
    pub description: String,
}

impl ExpenseInput {
    pub fn new(category: impl Into<String>, amount: f64, description: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            amount,
            description: description.into(),
        }
    }

    /// Build from raw text form fields
    ///
    /// Fails with `InvalidAmount` when the amount text is not a number.
    pub fn from_form(category: &str, amount: &str, description: &str) -> LedgerResult<Self> {
        Ok(Self::new(category.trim(), parse_amount_field(amount)?, description))
    }
}

/// Input for recording income
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeInput {
    pub source: String,
    pub amount: f64,
}

impl IncomeInput {
    pub fn new(source: impl Into<String>, amount: f64) -> Self {
        Self {
            source: source.into(),
            amount,
        }
    }

    /// Build from raw text form fields
    pub fn from_form(source: &str, amount: &str) -> LedgerResult<Self> {
        Ok(Self::new(source, parse_amount_field(amount)?))
    }
}

fn parse_amount_field(text: &str) -> LedgerResult<f64> {
    Money::parse(text)
        .map(|m| m.as_f64())
        .map_err(|_| LedgerError::invalid_amount(format!("'{}' is not a number", text.trim())))
}

/// Convert a raw amount into a strictly positive `Money`
pub(crate) fn validate_amount(amount: f64) -> LedgerResult<Money> {
    if !amount.is_finite() {
        return Err(LedgerError::invalid_amount(format!("{} is not finite", amount)));
    }
    if amount <= 0.0 {
        return Err(LedgerError::invalid_amount(format!("{} must be greater than zero", amount)));
    }
    match Money::from_amount(amount) {
        Some(money) if money.is_positive() => Ok(money),
        Some(_) => Err(LedgerError::invalid_amount(format!(
            "{} is less than one cent",
            amount
        ))),
        None => Err(LedgerError::invalid_amount(format!("{} is out of range", amount))),
    }
}

/// Trim a description, rejecting blank text
pub(crate) fn validate_description(description: &str) -> LedgerResult<String> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::EmptyDescription);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_amount() {
        assert_eq!(validate_amount(24.5).unwrap(), Money::from_cents(2450));
        assert_eq!(validate_amount(0.01).unwrap(), Money::from_cents(1));
    }

    #[test]
    fn test_validate_amount_rejects_degenerate_values() {
        for bad in [0.0, -5.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 0.001, 1e300] {
            let err = validate_amount(bad).unwrap_err();
            assert!(matches!(err, LedgerError::InvalidAmount(_)), "{}", bad);
        }
    }

    #[test]
    fn test_validate_description() {
        assert_eq!(validate_description("  Pizza Palace ").unwrap(), "Pizza Palace");
        assert!(matches!(
            validate_description(" \t "),
            Err(LedgerError::EmptyDescription)
        ));
    }

    #[test]
    fn test_expense_from_form() {
        let input = ExpenseInput::from_form(" food ", "$24.50", "Pizza Palace").unwrap();
        assert_eq!(input.category, "food");
        assert_eq!(input.amount, 24.5);

        let input = ExpenseInput::from_form("food", "0.009", "Gum").unwrap();
        assert_eq!(validate_amount(input.amount).unwrap(), Money::from_cents(1));

        let err = ExpenseInput::from_form("food", "twenty", "Pizza").unwrap_err();
        assert!(matches!(err, LedgerError::InvalidAmount(_)));
    }

    #[test]
    fn test_income_from_form() {
        let input = IncomeInput::from_form("Freelance", "1,200.00").unwrap();
        assert_eq!(input.amount, 1200.0);
        assert!(IncomeInput::from_form("Freelance", "").is_err());
    }
}
