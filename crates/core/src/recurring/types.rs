//! Recurring stream data types.

use centwise_shared::types::{AccountId, PageRequest, PageResponse, StreamId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Date format used by the aggregation service.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Direction of money for a recurring stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamDirection {
    /// Money coming in (salary, refunds).
    Inflow,
    /// Money going out (subscriptions, bills).
    Outflow,
}

/// Detected repetition frequency of a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StreamFrequency {
    /// Every 7 days.
    Weekly,
    /// Every 14 days.
    Biweekly,
    /// Twice a month.
    SemiMonthly,
    /// Once a calendar month.
    Monthly,
    /// Once a year.
    Annually,
    /// Not detected, or a value this crate does not know.
    #[serde(other)]
    Unknown,
}

/// A repeating payment or income pattern reported by the aggregation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringStream {
    /// Stream identifier.
    pub stream_id: StreamId,
    /// Account the stream was detected on.
    #[serde(default)]
    pub account_id: Option<AccountId>,
    /// Merchant name, preferred for display.
    #[serde(default)]
    pub merchant_name: Option<String>,
    /// Raw description.
    #[serde(default)]
    pub description: Option<String>,
    /// Amount of the most recent occurrence. Negative means outflow.
    pub last_amount: Decimal,
    /// Date of the most recent occurrence, as delivered (`YYYY-MM-DD`).
    #[serde(default)]
    pub last_date: Option<String>,
    /// Detected frequency.
    #[serde(default)]
    pub frequency: Option<StreamFrequency>,
    /// Explicit direction tag, when the service provides one.
    #[serde(default)]
    pub direction: Option<StreamDirection>,
    /// Inactive streams are never upcoming.
    pub active: bool,
}

impl RecurringStream {
    /// Display label: merchant name if set, else description, else the ID.
    #[must_use]
    pub fn label(&self) -> &str {
        [&self.merchant_name, &self.description]
            .into_iter()
            .flatten()
            .map(|s| s.trim())
            .find(|s| !s.is_empty())
            .unwrap_or_else(|| self.stream_id.as_str())
    }

    /// Parsed last occurrence date, `None` when missing or unparseable.
    #[must_use]
    pub fn last_occurrence(&self) -> Option<NaiveDate> {
        let raw = self.last_date.as_deref()?.trim();
        NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
    }

    /// Direction from the explicit tag, falling back to the amount sign.
    #[must_use]
    pub fn direction(&self) -> StreamDirection {
        self.direction.unwrap_or(if self.last_amount.is_sign_negative() {
            StreamDirection::Outflow
        } else {
            StreamDirection::Inflow
        })
    }

    /// Unsigned amount of the last occurrence.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.last_amount.abs()
    }
}

/// A stream selected as coming due, with its projected due date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingCharge {
    /// The selected stream.
    pub stream: RecurringStream,
    /// Projected due date.
    pub due_date: NaiveDate,
}

/// Upcoming charges ordered by due date, with their total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpcomingCharges {
    /// Selected charges, ascending by due date, ties in input order.
    pub items: Vec<UpcomingCharge>,
    /// Sum of `|last_amount|` over `items`.
    pub total_amount: Decimal,
}

impl UpcomingCharges {
    /// Number of selected charges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when nothing is coming due.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The first `n` charges.
    #[must_use]
    pub fn first(&self, n: usize) -> &[UpcomingCharge] {
        &self.items[..n.min(self.items.len())]
    }

    /// One page of charges.
    #[must_use]
    pub fn page(&self, request: PageRequest) -> PageResponse<UpcomingCharge> {
        PageResponse::from_slice(&self.items, request)
    }
}
