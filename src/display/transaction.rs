//! Recent transaction list formatting

use chrono::{DateTime, Utc};

use super::format::format_relative_date;
use crate::config::Settings;
use crate::ledger::LedgerEngine;
use crate::models::Transaction;

const INCOME_ICON: &str = "💰";

/// Format a single transaction row: icon, description, relative date, signed amount
pub fn format_transaction_row(
    transaction: &Transaction,
    ledger: &LedgerEngine,
    settings: &Settings,
    now: DateTime<Utc>,
) -> String {
    let icon = match transaction.category() {
        Some(key) => ledger
            .category(key)
            .map(|c| c.meta().icon.as_str())
            .unwrap_or(""),
        None => INCOME_ICON,
    };
    let sign = if transaction.is_expense() { "-" } else { "+" };

    format!(
        "{:<2} {:<28} {:<12} {:>12}",
        icon,
        transaction.description(),
        format_relative_date(transaction.timestamp(), now, &settings.date_format),
        format!(
            "{}{}",
            sign,
            transaction.amount().format_with_symbol(&settings.currency_symbol)
        )
    )
}

/// Format the newest `limit` transactions of a ledger
pub fn format_recent_transactions(
    ledger: &LedgerEngine,
    limit: i64,
    settings: &Settings,
    now: DateTime<Utc>,
) -> String {
    let recent = ledger.recent_transactions(limit);
    if recent.is_empty() {
        return "No transactions yet.\n".to_string();
    }

    let mut output = String::new();
    for transaction in recent {
        output.push_str(&format_transaction_row(transaction, ledger, settings, now));
        output.push('\n');
    }
    output
}
