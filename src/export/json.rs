//! JSON export of the dashboard
//!
//! A snapshot bundles every read model a dashboard renders from, so another
//! front end can display the ledger without linking against it.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{LedgerError, LedgerResult};
use crate::ledger::{CategoryStatus, LedgerEngine, Summary};
use crate::models::Transaction;

/// Current snapshot schema version
pub const SNAPSHOT_SCHEMA_VERSION: &str = "1.0.0";

/// Everything a dashboard shows, at one revision of the ledger
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    pub revision: u64,
    pub summary: Summary,
    pub categories: Vec<CategoryStatus>,
    pub recent_transactions: Vec<Transaction>,
}

impl DashboardSnapshot {
    /// Capture the ledger's current views, keeping `recent_limit` transactions
    pub fn capture(ledger: &LedgerEngine, recent_limit: i64) -> Self {
        Self {
            schema_version: SNAPSHOT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            revision: ledger.revision(),
            summary: ledger.summary(),
            categories: ledger.category_statuses(),
            recent_transactions: ledger
                .recent_transactions(recent_limit)
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}

/// Write a pretty-printed JSON snapshot
pub fn export_json<W: Write>(
    ledger: &LedgerEngine,
    recent_limit: i64,
    writer: &mut W,
) -> LedgerResult<()> {
    let snapshot = DashboardSnapshot::capture(ledger, recent_limit);
    serde_json::to_writer_pretty(&mut *writer, &snapshot)
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| LedgerError::Export(e.to_string()))?;
    Ok(())
}
