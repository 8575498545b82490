//! Budget aggregation: per-period and whole-range rollups.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;
use tracing::trace;

use super::error::BudgetError;
use super::status::StatusThresholds;
use super::types::{
    BudgetLineItem, BudgetMatrix, BudgetReport, CategoryTotals, MonthlyTotals, PeriodTotals,
};

/// Label used in errors for rollups spanning every period.
const ALL_PERIODS: &str = "all periods";
/// Label used in errors for rollups spanning every category.
const ALL_CATEGORIES: &str = "all categories";

/// Running sums for one slice of a matrix.
#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    planned: Decimal,
    actual: Decimal,
    savings: Decimal,
    over: Decimal,
}

impl Tally {
    fn from_item(item: &BudgetLineItem) -> Self {
        Self {
            planned: item.planned,
            actual: item.actual,
            savings: item.savings_contribution(),
            over: item.over_amount(),
        }
    }

    /// Adds `other` in place; `None` when a sum leaves the decimal range.
    fn checked_merge(&mut self, other: &Self) -> Option<()> {
        *self = Self {
            planned: self.planned.checked_add(other.planned)?,
            actual: self.actual.checked_add(other.actual)?,
            savings: self.savings.checked_add(other.savings)?,
            over: self.over.checked_add(other.over)?,
        };
        Some(())
    }
}

fn out_of_range(period: &str, category: &str) -> BudgetError {
    BudgetError::AmountOutOfRange {
        period: period.to_string(),
        category: category.to_string(),
    }
}

/// Aggregates budget matrices into period and overall totals.
#[derive(Debug, Clone, Copy, Default)]
pub struct BudgetAggregator {
    thresholds: StatusThresholds,
}

impl BudgetAggregator {
    /// Creates an aggregator with the default status thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an aggregator with custom status thresholds.
    #[must_use]
    pub const fn with_thresholds(thresholds: StatusThresholds) -> Self {
        Self { thresholds }
    }

    /// Calculates `(percentage_saved, percentage_over_budget)`.
    ///
    /// Both are relative to `planned` and rounded to 2 places. A zero
    /// `planned` yields `(0, 0)`, even when something was spent. Returns
    /// `None` when a percentage does not fit in a `Decimal`.
    #[must_use]
    pub fn percentages(planned: Decimal, actual: Decimal) -> Option<(Decimal, Decimal)> {
        if planned.is_zero() {
            return Some((Decimal::ZERO, Decimal::ZERO));
        }

        let percent_of_planned = |delta: Decimal| {
            delta
                .checked_div(planned)?
                .checked_mul(Decimal::ONE_HUNDRED)
                .map(|pct| pct.round_dp(2))
        };
        let saved = percent_of_planned(planned.checked_sub(actual)?)?;
        let over = percent_of_planned(actual.checked_sub(planned)?)?;
        Some((saved, over))
    }

    /// Validates a matrix.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::NegativeAmount` for a negative planned or actual
    /// amount, and `BudgetError::CategoryMismatch` when a period's categories
    /// differ from the first period's.
    pub fn validate(matrix: &BudgetMatrix) -> Result<(), BudgetError> {
        let expected: BTreeSet<&str> = matrix.category_names().into_iter().collect();

        for period in &matrix.periods {
            let found: BTreeSet<&str> = period.categories.keys().map(String::as_str).collect();
            if found != expected {
                return Err(BudgetError::CategoryMismatch {
                    period: period.label.clone(),
                    expected: expected.iter().map(ToString::to_string).collect(),
                    found: found.iter().map(ToString::to_string).collect(),
                });
            }

            for (category, item) in &period.categories {
                if item.planned < Decimal::ZERO || item.actual < Decimal::ZERO {
                    return Err(BudgetError::NegativeAmount {
                        period: period.label.clone(),
                        category: category.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Aggregates a matrix.
    ///
    /// Overall percentages are recomputed from summed amounts, never averaged
    /// from period percentages.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`BudgetAggregator::validate`], and
    /// `BudgetError::AmountOutOfRange` when a total or percentage does not
    /// fit in a `Decimal`.
    pub fn aggregate(&self, matrix: &BudgetMatrix) -> Result<BudgetReport, BudgetError> {
        Self::validate(matrix)?;

        let mut overall = Tally::default();
        let mut by_category: BTreeMap<&str, Tally> = BTreeMap::new();
        let mut per_period = Vec::with_capacity(matrix.periods.len());

        for period in &matrix.periods {
            let mut period_tally = Tally::default();
            let mut categories = Vec::with_capacity(period.categories.len());

            for (category, item) in &period.categories {
                let tally = Tally::from_item(item);
                period_tally
                    .checked_merge(&tally)
                    .ok_or_else(|| out_of_range(&period.label, category))?;
                by_category
                    .entry(category.as_str())
                    .or_default()
                    .checked_merge(&tally)
                    .ok_or_else(|| out_of_range(ALL_PERIODS, category))?;
                categories.push(self.category_totals(&period.label, category, &tally)?);
            }

            overall
                .checked_merge(&period_tally)
                .ok_or_else(|| out_of_range(ALL_PERIODS, ALL_CATEGORIES))?;
            let (percentage_saved, percentage_over_budget) =
                Self::percentages(period_tally.planned, period_tally.actual)
                    .ok_or_else(|| out_of_range(&period.label, ALL_CATEGORIES))?;

            per_period.push(PeriodTotals {
                label: period.label.clone(),
                planned: period_tally.planned,
                actual: period_tally.actual,
                percentage_saved,
                percentage_over_budget,
                savings_contribution: period_tally.savings,
                over_amount: period_tally.over,
                categories,
            });
        }

        let (percentage_saved, percentage_over_budget) =
            Self::percentages(overall.planned, overall.actual)
                .ok_or_else(|| out_of_range(ALL_PERIODS, ALL_CATEGORIES))?;
        let categories = by_category
            .iter()
            .map(|(category, tally)| self.category_totals(ALL_PERIODS, category, tally))
            .collect::<Result<Vec<_>, _>>()?;

        trace!(
            periods = per_period.len(),
            categories = categories.len(),
            total_planned = %overall.planned,
            total_actual = %overall.actual,
            "Aggregated budget matrix"
        );

        Ok(BudgetReport {
            per_period,
            overall: MonthlyTotals {
                total_planned: overall.planned,
                total_actual: overall.actual,
                percentage_saved,
                percentage_over_budget,
                savings_contribution: overall.savings,
                over_amount: overall.over,
                status: self.thresholds.classify(overall.actual, overall.planned),
                categories,
            },
        })
    }

    fn category_totals(
        &self,
        period: &str,
        category: &str,
        tally: &Tally,
    ) -> Result<CategoryTotals, BudgetError> {
        let (percentage_saved, percentage_over_budget) =
            Self::percentages(tally.planned, tally.actual)
                .ok_or_else(|| out_of_range(period, category))?;

        Ok(CategoryTotals {
            category: category.to_string(),
            planned: tally.planned,
            actual: tally.actual,
            // Both sides are non-negative, so this cannot overflow.
            remaining: tally.planned - tally.actual,
            savings_contribution: tally.savings,
            over_amount: tally.over,
            percentage_saved,
            percentage_over_budget,
            status: self.thresholds.classify(tally.actual, tally.planned),
        })
    }
}
