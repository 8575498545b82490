//! Due date projection for recurring streams.

use centwise_shared::DueDateProjection;
use chrono::{Days, Months, NaiveDate};

use super::types::{RecurringStream, StreamFrequency};

/// Distance between two occurrences of a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Interval {
    Days(u64),
    Months(u32),
}

impl StreamFrequency {
    fn interval(self) -> Option<Interval> {
        match self {
            Self::Weekly => Some(Interval::Days(7)),
            Self::Biweekly => Some(Interval::Days(14)),
            Self::SemiMonthly => Some(Interval::Days(15)),
            Self::Monthly => Some(Interval::Months(1)),
            Self::Annually => Some(Interval::Months(12)),
            Self::Unknown => None,
        }
    }
}

/// Projects the due date of `stream` relative to `reference_date`.
///
/// Returns `None` when the stream has no usable last occurrence date.
/// With [`DueDateProjection::LastOccurrence`] the due date is the last
/// occurrence itself. With [`DueDateProjection::AdvanceByFrequency`] it is the
/// first occurrence on or after `reference_date`; streams without a known
/// frequency keep their last occurrence date.
#[must_use]
pub fn project_due_date(
    stream: &RecurringStream,
    reference_date: NaiveDate,
    projection: DueDateProjection,
) -> Option<NaiveDate> {
    let last = stream.last_occurrence()?;

    match projection {
        DueDateProjection::LastOccurrence => Some(last),
        DueDateProjection::AdvanceByFrequency => {
            let Some(interval) = stream.frequency.and_then(StreamFrequency::interval) else {
                return Some(last);
            };
            Some(advance(last, interval, reference_date))
        }
    }
}

fn advance(last: NaiveDate, interval: Interval, reference_date: NaiveDate) -> NaiveDate {
    if last >= reference_date {
        return last;
    }

    match interval {
        Interval::Days(step) => {
            let behind = (reference_date - last).num_days().unsigned_abs();
            let steps = behind.div_ceil(step);
            last.checked_add_days(Days::new(steps * step))
                .unwrap_or(last)
        }
        Interval::Months(step) => {
            // Offsets are taken from `last` so month-end dates do not drift.
            let mut n = 1u32;
            loop {
                match last.checked_add_months(Months::new(step.saturating_mul(n))) {
                    Some(due) if due >= reference_date => return due,
                    Some(_) => n = n.saturating_add(1),
                    None => return last,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use centwise_shared::types::StreamId;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn stream(last_date: &str, frequency: Option<StreamFrequency>) -> RecurringStream {
        RecurringStream {
            stream_id: StreamId::new("s"),
            account_id: None,
            merchant_name: None,
            description: None,
            last_amount: dec!(-10),
            last_date: Some(last_date.to_string()),
            frequency,
            direction: None,
            active: true,
        }
    }

    #[test]
    fn test_last_occurrence_is_literal() {
        let s = stream("2026-09-01", Some(StreamFrequency::Monthly));
        let due = project_due_date(&s, date(2026, 10, 17), DueDateProjection::LastOccurrence);

        assert_eq!(due, Some(date(2026, 9, 1)));
    }

    #[test]
    fn test_unparseable_date_has_no_projection() {
        let s = stream("not-a-date", Some(StreamFrequency::Monthly));

        assert_eq!(
            project_due_date(&s, date(2026, 10, 17), DueDateProjection::LastOccurrence),
            None
        );
        assert_eq!(
            project_due_date(&s, date(2026, 10, 17), DueDateProjection::AdvanceByFrequency),
            None
        );
    }

    #[rstest]
    #[case(StreamFrequency::Weekly, "2026-10-01", date(2026, 10, 22))]
    #[case(StreamFrequency::Weekly, "2026-10-10", date(2026, 10, 17))]
    #[case(StreamFrequency::Biweekly, "2026-10-01", date(2026, 10, 29))]
    #[case(StreamFrequency::SemiMonthly, "2026-10-01", date(2026, 10, 31))]
    #[case(StreamFrequency::Monthly, "2026-09-20", date(2026, 10, 20))]
    #[case(StreamFrequency::Monthly, "2026-01-31", date(2026, 10, 31))]
    #[case(StreamFrequency::Annually, "2025-11-02", date(2026, 11, 2))]
    #[case(StreamFrequency::Unknown, "2026-09-20", date(2026, 9, 20))]
    fn test_advance_by_frequency(
        #[case] frequency: StreamFrequency,
        #[case] last_date: &str,
        #[case] expected: NaiveDate,
    ) {
        let s = stream(last_date, Some(frequency));
        let due = project_due_date(&s, date(2026, 10, 17), DueDateProjection::AdvanceByFrequency);

        assert_eq!(due, Some(expected));
    }

    #[test]
    fn test_future_last_date_is_not_advanced() {
        let s = stream("2026-10-25", Some(StreamFrequency::Weekly));
        let due = project_due_date(&s, date(2026, 10, 17), DueDateProjection::AdvanceByFrequency);

        assert_eq!(due, Some(date(2026, 10, 25)));
    }

    #[test]
    fn test_missing_frequency_keeps_last_date() {
        let s = stream("2026-09-20", None);
        let due = project_due_date(&s, date(2026, 10, 17), DueDateProjection::AdvanceByFrequency);

        assert_eq!(due, Some(date(2026, 9, 20)));
    }
}
