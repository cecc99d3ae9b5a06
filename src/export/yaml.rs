//! YAML export of the dashboard

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::export::json::DashboardSnapshot;
use crate::ledger::LedgerEngine;

/// Write a YAML snapshot preceded by a comment header
pub fn export_yaml<W: Write>(
    ledger: &LedgerEngine,
    recent_limit: i64,
    writer: &mut W,
) -> LedgerResult<()> {
    let snapshot = DashboardSnapshot::capture(ledger, recent_limit);
    let export_err = |e: std::io::Error| LedgerError::Export(e.to_string());

    writeln!(writer, "# BudgetPro dashboard snapshot").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", snapshot.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", snapshot.app_version).map_err(export_err)?;
    writeln!(writer, "# Amounts are in cents.").map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &snapshot).map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}
