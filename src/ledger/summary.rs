//! Derived dashboard figures
//!
//! Nothing in here is stored on the ledger; every value is recomputed from
//! the current state on each read.

use serde::Serialize;

use crate::models::{Category, CategoryMeta, Money};

/// Headline figures for the whole ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub income: Money,
    pub total_expenses: Money,
    /// `income - total_expenses`; negative when expenses exceed income
    pub remaining: Money,
    /// Whole-number percentage of income left over. `None` when there is no
    /// income to divide by.
    pub savings_rate: Option<i64>,
}

impl Summary {
    pub(crate) fn compute(income: Money, total_expenses: Money) -> Self {
        let remaining = income - total_expenses;
        Self {
            income,
            total_expenses,
            remaining,
            savings_rate: rounded_percent(remaining, income),
        }
    }

    pub fn is_over_budget(&self) -> bool {
        self.remaining.is_negative()
    }
}

/// Budget position of a single category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryStatus {
    pub key: String,
    pub meta: CategoryMeta,
    pub budgeted: Money,
    pub spent: Money,
    /// `budgeted - spent`; negative signals overspend
    pub remaining: Money,
    /// Whole-number percentage of the budget used. `None` when the budget is
    /// zero.
    pub percent_used: Option<i64>,
}

impl CategoryStatus {
    pub(crate) fn of(category: &Category) -> Self {
        Self {
            key: category.key().to_string(),
            meta: category.meta().clone(),
            budgeted: category.budgeted(),
            spent: category.spent(),
            remaining: category.remaining(),
            percent_used: rounded_percent(category.spent(), category.budgeted()),
        }
    }

    pub fn is_overspent(&self) -> bool {
        self.remaining.is_negative()
    }
}

/// `round(numerator / denominator * 100)` with halves rounded up, computed in
/// exact integer arithmetic. `None` for a zero denominator.
pub(crate) fn rounded_percent(numerator: Money, denominator: Money) -> Option<i64> {
    let den = i128::from(denominator.cents());
    if den == 0 {
        return None;
    }
    let num = i128::from(numerator.cents()) * 100;
    // floor(num / den + 1/2) == floor((2 * num + den) / (2 * den)) for den > 0
    let (num, den) = if den < 0 { (-num, -den) } else { (num, den) };
    let rounded = (2 * num + den).div_euclid(2 * den);
    Some(i64::try_from(rounded).unwrap_or(if rounded > 0 { i64::MAX } else { i64::MIN }))
}
