//! Recurring stream error types.

use centwise_shared::AppError;
use thiserror::Error;

/// Errors raised for caller mistakes when selecting upcoming charges.
///
/// Bad individual records are never errors; they are skipped.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecurringError {
    /// Look-ahead window is negative.
    #[error("Look-ahead window must not be negative, got {0} days")]
    NegativeWindow(i64),

    /// Look-ahead window runs past the supported calendar range.
    #[error("Look-ahead window of {0} days is out of range")]
    WindowOutOfRange(i64),

    /// Sum of the selected amounts does not fit in a `Decimal`.
    #[error("Total of upcoming charges is out of range")]
    TotalOutOfRange,

    /// Reminder snooze duration is negative.
    #[error("Reminder snooze must not be negative, got {0} hours")]
    NegativeSnooze(i64),

    /// Reminder snooze duration is too large to represent.
    #[error("Reminder snooze of {0} hours is out of range")]
    SnoozeOutOfRange(i64),
}

impl From<RecurringError> for AppError {
    fn from(err: RecurringError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
