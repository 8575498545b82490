//! Budget error types.

use centwise_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Budget input contract violations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BudgetError {
    /// Planned or actual amount is negative.
    #[error("Amount cannot be negative (period {period}, category {category})")]
    NegativeAmount {
        /// Period label.
        period: String,
        /// Category name.
        category: String,
    },

    /// A period does not carry the same categories as the first period.
    #[error("Category mismatch in period {period}: expected {expected:?}, got {found:?}")]
    CategoryMismatch {
        /// Period label.
        period: String,
        /// Categories of the first period.
        expected: Vec<String>,
        /// Categories of this period.
        found: Vec<String>,
    },

    /// A total or percentage does not fit in a `Decimal`.
    #[error("Amount out of range (period {period}, category {category})")]
    AmountOutOfRange {
        /// Period label, or "all periods" for cross-period rollups.
        period: String,
        /// Category name, or "all categories" for period rollups.
        category: String,
    },

    /// Status thresholds are not in ascending order.
    #[error("Status thresholds must satisfy warning <= danger <= over, got {warning}/{danger}/{over}")]
    InvalidThresholds {
        /// Warning threshold.
        warning: Decimal,
        /// Danger threshold.
        danger: Decimal,
        /// Over threshold.
        over: Decimal,
    },
}

impl From<BudgetError> for AppError {
    fn from(err: BudgetError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
