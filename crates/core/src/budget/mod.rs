//! Budget aggregation and status classification.

pub mod error;
pub mod service;
pub mod status;
pub mod types;


pub use error::BudgetError;
pub use service::BudgetAggregator;
pub use status::{BudgetStatus, StatusThresholds, classify, classify_with};
pub use types::{
    BudgetLineItem, BudgetMatrix, BudgetPeriod, BudgetReport, CategoryTotals, MonthlyTotals,
    PeriodTotals,
};
