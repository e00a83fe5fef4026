//! # Report Commands
//!
//! Writes the parked-vehicles report to a timestamped text file.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use parkline_core::Clock;
use parkline_store::Store;
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::LedgerState;

/// Where the report went.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportWritten {
    pub path: PathBuf,
    pub generated_at: DateTime<Utc>,
    pub parked: usize,
}

/// Writes `vehicles_YYYY-MM-DD_HH-MM-SS.txt` into the reports directory.
///
/// The timestamp comes from the ledger's clock and the ledger stays locked
/// while the file is written, so the report is a consistent snapshot.
///
/// ## Errors
/// - `STORAGE_ERROR`: the directory or file can't be written
pub fn write_report<C: Clock>(
    store: &Store,
    ledger: &LedgerState<C>,
) -> Result<ReportWritten, ApiError> {
    debug!("write_report command");
    let writer = store.reports();

    let written = ledger.with_ledger(|ledger| {
        let generated_at = ledger.clock().now();
        writer.write(ledger, generated_at).map(|path| ReportWritten {
            path,
            generated_at,
            parked: ledger.active_vehicles().len(),
        })
    })?;
    Ok(written)
}
