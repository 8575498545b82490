//! Budget utilization status.
//!
//! One classification shared by every view that colours a budget line:
//! utilization is `actual / planned * 100`, compared against three
//! ascending thresholds.

use centwise_shared::config::BudgetConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::BudgetError;

/// Utilization (percent) at which a line turns to warning.
pub const WARNING_PERCENT: u32 = 70;
/// Utilization (percent) at which a line turns to danger.
pub const DANGER_PERCENT: u32 = 90;
/// Utilization (percent) above which a line is over budget.
pub const OVER_PERCENT: u32 = 100;

/// Utilization status of a budget line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    /// Below the warning threshold.
    Healthy,
    /// At or above warning, below danger.
    Warning,
    /// At or above danger, not above the over threshold.
    Danger,
    /// Above the over threshold.
    Over,
}

/// Ascending utilization thresholds, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusThresholds {
    warning: Decimal,
    danger: Decimal,
    over: Decimal,
}

impl StatusThresholds {
    /// Creates thresholds.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::InvalidThresholds` unless
    /// `0 <= warning <= danger <= over`.
    pub fn new(warning: Decimal, danger: Decimal, over: Decimal) -> Result<Self, BudgetError> {
        if warning < Decimal::ZERO || warning > danger || danger > over {
            return Err(BudgetError::InvalidThresholds {
                warning,
                danger,
                over,
            });
        }
        Ok(Self {
            warning,
            danger,
            over,
        })
    }

    /// Builds thresholds from configuration.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::InvalidThresholds` if the configured values are
    /// not ascending.
    pub fn from_config(config: &BudgetConfig) -> Result<Self, BudgetError> {
        Self::new(
            Decimal::from(config.warning_percent),
            Decimal::from(config.danger_percent),
            Decimal::from(config.over_percent),
        )
    }

    /// Classifies `actual` spend against `planned`.
    #[must_use]
    pub fn classify(&self, actual: Decimal, planned: Decimal) -> BudgetStatus {
        if planned <= Decimal::ZERO {
            return if actual > Decimal::ZERO {
                BudgetStatus::Over
            } else {
                BudgetStatus::Healthy
            };
        }

        // Too large to represent means far past any threshold.
        let Some(utilization) = actual
            .checked_div(planned)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        else {
            return BudgetStatus::Over;
        };
        if utilization < self.warning {
            BudgetStatus::Healthy
        } else if utilization < self.danger {
            BudgetStatus::Warning
        } else if utilization <= self.over {
            BudgetStatus::Danger
        } else {
            BudgetStatus::Over
        }
    }
}

impl Default for StatusThresholds {
    fn default() -> Self {
        Self {
            warning: Decimal::from(WARNING_PERCENT),
            danger: Decimal::from(DANGER_PERCENT),
            over: Decimal::from(OVER_PERCENT),
        }
    }
}

/// Classifies `actual` spend against `planned` with the default thresholds.
#[must_use]
pub fn classify(actual: Decimal, planned: Decimal) -> BudgetStatus {
    StatusThresholds::default().classify(actual, planned)
}

/// Classifies `actual` spend against `planned` with custom thresholds.
#[must_use]
pub fn classify_with(
    actual: Decimal,
    planned: Decimal,
    thresholds: &StatusThresholds,
) -> BudgetStatus {
    thresholds.classify(actual, planned)
}
