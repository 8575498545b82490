//! Reading JSON snapshots from disk.
//!
//! Recurring streams are decoded record by record: a malformed record is
//! logged and skipped, the rest of the batch is kept. A document that is not
//! an array at all is a caller error.

use std::path::Path;

use centwise_core::budget::BudgetMatrix;
use centwise_core::recurring::RecurringStream;
use centwise_shared::{AppError, AppResult};
use serde_json::Value;
use tracing::warn;

/// Reads recurring streams from a JSON file.
pub fn read_streams(path: &Path) -> AppResult<Vec<RecurringStream>> {
    let raw = std::fs::read_to_string(path)?;
    decode_streams(&raw)
}

/// Reads a budget matrix from a JSON file.
pub fn read_matrix(path: &Path) -> AppResult<BudgetMatrix> {
    let raw = std::fs::read_to_string(path)?;
    decode_matrix(&raw)
}

/// Decodes a JSON array of recurring streams, skipping malformed records.
pub fn decode_streams(raw: &str) -> AppResult<Vec<RecurringStream>> {
    let document: Value =
        serde_json::from_str(raw).map_err(|err| AppError::Parse(err.to_string()))?;
    let Value::Array(records) = document else {
        return Err(AppError::InvalidInput(
            "expected a JSON array of recurring streams".to_string(),
        ));
    };

    let total = records.len();
    let streams: Vec<RecurringStream> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(stream) => Some(stream),
            Err(err) => {
                warn!(index, error = %err, "Skipping malformed recurring stream record");
                None
            }
        })
        .collect();

    if streams.len() < total {
        warn!(
            kept = streams.len(),
            skipped = total - streams.len(),
            "Some recurring stream records were skipped"
        );
    }

    Ok(streams)
}

/// Decodes a budget matrix.
pub fn decode_matrix(raw: &str) -> AppResult<BudgetMatrix> {
    serde_json::from_str(raw).map_err(|err| AppError::Parse(err.to_string()))
}
