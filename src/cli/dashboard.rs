//! Dashboard CLI commands
//!
//! Read-only views of the ledger, plus replaying and exporting.

use std::fs::File;
use std::io;
use std::path::Path;

use chrono::Utc;

use crate::config::Settings;
use crate::display::{format_category_table, format_recent_transactions, format_summary};
use crate::error::{LedgerError, LedgerResult};
use crate::export::{export_json, export_yaml, ExportFormat};
use crate::import::replay_csv;
use crate::ledger::LedgerEngine;

/// Print the summary card
pub fn handle_summary_command(ledger: &LedgerEngine, settings: &Settings) {
    print!("{}", format_summary(&ledger.summary(), &settings.currency_symbol));
}

/// Print the category table
pub fn handle_categories_command(ledger: &LedgerEngine, settings: &Settings) {
    println!(
        "{}",
        format_category_table(&ledger.category_statuses(), &settings.currency_symbol)
    );
}

/// Print the most recent transactions
pub fn handle_recent_command(ledger: &LedgerEngine, settings: &Settings, limit: Option<i64>) {
    let limit = limit.unwrap_or(settings.recent_limit);
    print!(
        "{}",
        format_recent_transactions(ledger, limit, settings, Utc::now())
    );
}

/// Print the whole dashboard: summary, categories, recent transactions
pub fn print_dashboard(ledger: &LedgerEngine, settings: &Settings) {
    println!("Budget Overview");
    println!("===============");
    handle_summary_command(ledger, settings);
    println!();
    handle_categories_command(ledger, settings);
    println!();
    println!("Recent Transactions");
    println!("-------------------");
    handle_recent_command(ledger, settings, None);
}

/// Replay a CSV file into the ledger, then print the dashboard
pub fn handle_replay_command(
    ledger: &mut LedgerEngine,
    settings: &Settings,
    file: &Path,
) -> LedgerResult<()> {
    let source = File::open(file).map_err(|e| {
        LedgerError::Io(format!("Failed to open {}: {}", file.display(), e))
    })?;

    let report = replay_csv(ledger, source)?;
    // The dashboard below is a full refresh
    ledger.take_events();

    println!(
        "Replayed {} transactions ({} expenses, {} income) from {}",
        report.recorded.len(),
        report.expense_count(),
        report.income_count(),
        file.display()
    );
    println!();
    print_dashboard(ledger, settings);
    Ok(())
}

/// Write a dashboard snapshot to stdout
pub fn handle_export_command(
    ledger: &LedgerEngine,
    settings: &Settings,
    format: ExportFormat,
) -> LedgerResult<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        ExportFormat::Json => export_json(ledger, settings.recent_limit, &mut handle),
        ExportFormat::Yaml => export_yaml(ledger, settings.recent_limit, &mut handle),
    }
}
