//! Recording CLI commands
//!
//! Each command records one transaction on top of the configured dashboard
//! and then re-renders only the views the resulting event invalidated.

use chrono::Utc;

use crate::config::Settings;
use crate::display::{format_category_line, format_summary, format_transaction_row};
use crate::error::LedgerResult;
use crate::ledger::LedgerEngine;
use crate::models::{ExpenseInput, IncomeInput};

/// Record an expense from raw command-line fields
pub fn handle_expense_command(
    ledger: &mut LedgerEngine,
    settings: &Settings,
    category: &str,
    amount: &str,
    description: &str,
) -> LedgerResult<()> {
    let input = ExpenseInput::from_form(category, amount, description)?;
    let transaction = ledger.record_expense(input)?;

    println!("Expense added successfully!");
    println!(
        "  {}",
        format_transaction_row(&transaction, ledger, settings, Utc::now())
    );
    refresh_views(ledger, settings)
}

/// Record income from raw command-line fields
pub fn handle_income_command(
    ledger: &mut LedgerEngine,
    settings: &Settings,
    source: &str,
    amount: &str,
) -> LedgerResult<()> {
    let input = IncomeInput::from_form(source, amount)?;
    let transaction = ledger.record_income(input)?;

    println!("Income added successfully!");
    println!(
        "  {}",
        format_transaction_row(&transaction, ledger, settings, Utc::now())
    );
    refresh_views(ledger, settings)
}

fn refresh_views(ledger: &mut LedgerEngine, settings: &Settings) -> LedgerResult<()> {
    let symbol = &settings.currency_symbol;

    for event in ledger.take_events() {
        let invalidation = event.invalidation();

        if invalidation.summary {
            println!();
            print!("{}", format_summary(&ledger.summary(), symbol));
        }
        if let Some(key) = &invalidation.category {
            println!();
            println!("{}", format_category_line(&ledger.category_status(key)?, symbol));
        }
    }

    Ok(())
}
