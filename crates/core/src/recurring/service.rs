//! Upcoming-charge selection over a snapshot of recurring streams.

use centwise_shared::DueDateProjection;
use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use tracing::{debug, trace};

use super::error::RecurringError;
use super::projection::project_due_date;
use super::types::{RecurringStream, UpcomingCharge, UpcomingCharges};

/// Default look-ahead window in days.
pub const DEFAULT_WINDOW_DAYS: i64 = 13;

/// Selects the active streams due within `window_days` of `reference_date`.
///
/// The due date is the stream's last occurrence date as stored. A stream is
/// selected iff it is active and `due_date <= reference_date + window_days`.
/// Results are sorted ascending by due date, ties kept in input order, and
/// `total_amount` is the sum of `|last_amount|` over the selection.
///
/// Streams without a parseable last date are skipped.
///
/// # Errors
///
/// Returns `RecurringError::NegativeWindow` if `window_days` is negative and
/// `RecurringError::TotalOutOfRange` if the total does not fit in a `Decimal`.
pub fn select_upcoming(
    streams: &[RecurringStream],
    reference_date: NaiveDate,
    window_days: i64,
) -> Result<UpcomingCharges, RecurringError> {
    select_upcoming_with(
        streams,
        reference_date,
        window_days,
        DueDateProjection::LastOccurrence,
    )
}

/// Same as [`select_upcoming`], with an explicit due date projection.
///
/// # Errors
///
/// Returns `RecurringError::NegativeWindow` if `window_days` is negative,
/// `RecurringError::WindowOutOfRange` if the window end is not a valid date
/// and `RecurringError::TotalOutOfRange` if the total does not fit in a
/// `Decimal`.
pub fn select_upcoming_with(
    streams: &[RecurringStream],
    reference_date: NaiveDate,
    window_days: i64,
    projection: DueDateProjection,
) -> Result<UpcomingCharges, RecurringError> {
    if window_days < 0 {
        return Err(RecurringError::NegativeWindow(window_days));
    }
    let horizon = reference_date
        .checked_add_days(Days::new(window_days.unsigned_abs()))
        .ok_or(RecurringError::WindowOutOfRange(window_days))?;

    let mut items: Vec<UpcomingCharge> = streams
        .iter()
        .filter(|stream| stream.active)
        .filter_map(|stream| {
            let Some(due_date) = project_due_date(stream, reference_date, projection) else {
                debug!(
                    stream_id = %stream.stream_id,
                    last_date = ?stream.last_date,
                    "Skipping recurring stream without a usable last date"
                );
                return None;
            };
            (due_date <= horizon).then(|| UpcomingCharge {
                stream: stream.clone(),
                due_date,
            })
        })
        .collect();

    // Stable: equal due dates keep input order.
    items.sort_by_key(|charge| charge.due_date);

    let total_amount = items
        .iter()
        .try_fold(Decimal::ZERO, |total, charge| {
            total.checked_add(charge.stream.amount())
        })
        .ok_or(RecurringError::TotalOutOfRange)?;

    trace!(
        selected = items.len(),
        considered = streams.len(),
        %total_amount,
        %horizon,
        "Selected upcoming charges"
    );

    Ok(UpcomingCharges {
        items,
        total_amount,
    })
}
