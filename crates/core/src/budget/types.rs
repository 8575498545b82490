//! Budget data types.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::status::BudgetStatus;

/// Planned vs actual spend for one category in one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetLineItem {
    /// Amount allocated.
    pub planned: Decimal,
    /// Amount spent or estimated.
    pub actual: Decimal,
    /// Precomputed remainder carried by upstream data. Never trusted;
    /// see [`BudgetLineItem::remaining`].
    #[serde(default, skip_serializing)]
    pub remaining: Option<Decimal>,
}

impl BudgetLineItem {
    /// Creates a line item.
    #[must_use]
    pub const fn new(planned: Decimal, actual: Decimal) -> Self {
        Self {
            planned,
            actual,
            remaining: None,
        }
    }

    /// Unspent allocation, recomputed as `planned - actual`.
    #[must_use]
    pub fn remaining(&self) -> Decimal {
        self.planned - self.actual
    }

    /// Positive part of the remainder.
    #[must_use]
    pub fn savings_contribution(&self) -> Decimal {
        self.remaining().max(Decimal::ZERO)
    }

    /// Overspend, as a positive amount.
    #[must_use]
    pub fn over_amount(&self) -> Decimal {
        (-self.remaining()).max(Decimal::ZERO)
    }
}

/// One period (week, month) of a budget matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetPeriod {
    /// Period label (e.g. "Week 1").
    pub label: String,
    /// Line items keyed by category name.
    pub categories: BTreeMap<String, BudgetLineItem>,
}

impl BudgetPeriod {
    /// Creates a period from `(category, item)` pairs.
    #[must_use]
    pub fn new<I, S>(label: impl Into<String>, categories: I) -> Self
    where
        I: IntoIterator<Item = (S, BudgetLineItem)>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            categories: categories
                .into_iter()
                .map(|(name, item)| (name.into(), item))
                .collect(),
        }
    }

    /// Category names in this period, sorted.
    #[must_use]
    pub fn category_names(&self) -> Vec<&str> {
        self.categories.keys().map(String::as_str).collect()
    }
}

/// Periods x categories table of planned vs actual spend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetMatrix {
    /// Ordered periods; every period carries the same categories.
    pub periods: Vec<BudgetPeriod>,
}

impl BudgetMatrix {
    /// Creates a matrix.
    #[must_use]
    pub const fn new(periods: Vec<BudgetPeriod>) -> Self {
        Self { periods }
    }

    /// Category names of the matrix, empty when there are no periods.
    #[must_use]
    pub fn category_names(&self) -> Vec<&str> {
        self.periods
            .first()
            .map(BudgetPeriod::category_names)
            .unwrap_or_default()
    }
}

/// Totals for one category, within a period or across the whole matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotals {
    /// Category name.
    pub category: String,
    /// Planned amount.
    pub planned: Decimal,
    /// Actual amount.
    pub actual: Decimal,
    /// `planned - actual`.
    pub remaining: Decimal,
    /// Sum of positive per-period remainders.
    pub savings_contribution: Decimal,
    /// Sum of per-period overspends.
    pub over_amount: Decimal,
    /// `(planned - actual) / planned * 100`, 0 when nothing is planned.
    pub percentage_saved: Decimal,
    /// `(actual - planned) / planned * 100`, 0 when nothing is planned.
    pub percentage_over_budget: Decimal,
    /// Utilization status.
    pub status: BudgetStatus,
}

/// Totals for one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTotals {
    /// Period label.
    pub label: String,
    /// Sum of planned amounts.
    pub planned: Decimal,
    /// Sum of actual amounts.
    pub actual: Decimal,
    /// Percentage saved.
    pub percentage_saved: Decimal,
    /// Percentage over budget.
    pub percentage_over_budget: Decimal,
    /// Sum of positive category remainders; overspends are not netted.
    pub savings_contribution: Decimal,
    /// Sum of category overspends.
    pub over_amount: Decimal,
    /// Per-category breakdown.
    pub categories: Vec<CategoryTotals>,
}

/// Totals across every period of a matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTotals {
    /// Sum of planned amounts.
    pub total_planned: Decimal,
    /// Sum of actual amounts.
    pub total_actual: Decimal,
    /// Percentage saved, recomputed from the summed totals.
    pub percentage_saved: Decimal,
    /// Percentage over budget, recomputed from the summed totals.
    pub percentage_over_budget: Decimal,
    /// Sum of period savings contributions.
    pub savings_contribution: Decimal,
    /// Sum of period overspends.
    pub over_amount: Decimal,
    /// Utilization status of the whole range.
    pub status: BudgetStatus,
    /// Per-category rollup across all periods.
    pub categories: Vec<CategoryTotals>,
}

/// Result of aggregating a budget matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetReport {
    /// Totals per period, in matrix order.
    pub per_period: Vec<PeriodTotals>,
    /// Totals across all periods.
    pub overall: MonthlyTotals,
}
