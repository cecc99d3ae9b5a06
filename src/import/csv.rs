//! CSV replay
//!
//! Applies rows of `kind,category,amount,description` to a ledger in file
//! order, through the same recording operations a form would use. Replay
//! stops at the first row that fails; rows before it stay applied.

use std::io::Read;

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{LedgerError, LedgerResult};
use crate::ledger::LedgerEngine;
use crate::models::{ExpenseInput, IncomeInput, Transaction};

/// One row of a replay file
#[derive(Debug, Clone, Deserialize)]
struct ReplayRow {
    kind: String,
    #[serde(default)]
    category: Option<String>,
    amount: String,
    description: String,
}

/// Outcome of a successful replay
#[derive(Debug, Clone, Default)]
pub struct ReplayReport {
    /// Transactions recorded, in file order
    pub recorded: Vec<Transaction>,
}

impl ReplayReport {
    pub fn expense_count(&self) -> usize {
        self.recorded.iter().filter(|t| t.is_expense()).count()
    }

    pub fn income_count(&self) -> usize {
        self.recorded.iter().filter(|t| t.is_income()).count()
    }
}

/// Replay every row of a CSV source into `ledger`
///
/// The first line must be a header naming the columns `kind`, `category`,
/// `amount` and `description` (any order).
pub fn replay_csv<R: Read>(ledger: &mut LedgerEngine, source: R) -> LedgerResult<ReplayReport> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(source);
    let headers = reader.headers()?.clone();
    let mut report = ReplayReport::default();

    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let import_err = |reason: String| LedgerError::Import { line, reason };

        let row: ReplayRow = record
            .deserialize(Some(&headers))
            .map_err(|e| import_err(e.to_string()))?;
        let transaction = apply_row(ledger, row).map_err(|e| import_err(e.to_string()))?;

        debug!(line, id = %transaction.id(), "replayed row");
        report.recorded.push(transaction);
    }

    info!(
        expenses = report.expense_count(),
        income = report.income_count(),
        "replay finished"
    );
    Ok(report)
}

fn apply_row(ledger: &mut LedgerEngine, row: ReplayRow) -> LedgerResult<Transaction> {
    match row.kind.to_lowercase().as_str() {
        "expense" => {
            let category = row.category.unwrap_or_default();
            let input = ExpenseInput::from_form(&category, &row.amount, &row.description)?;
            ledger.record_expense(input)
        }
        "income" => {
            if row.category.is_some() {
                return Err(LedgerError::Config(
                    "income rows cannot have a category".into(),
                ));
            }
            let input = IncomeInput::from_form(&row.description, &row.amount)?;
            ledger.record_income(input)
        }
        other => Err(LedgerError::Config(format!(
            "unknown kind '{}' (expected expense or income)",
            other
        ))),
    }
}
