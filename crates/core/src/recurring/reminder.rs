//! Snooze gate for the upcoming-charges reminder.
//!
//! The host remembers when the user last dismissed the reminder and passes
//! that timestamp in explicitly; nothing is read from ambient storage.

use chrono::{DateTime, Duration, Utc};

use super::error::RecurringError;

/// Default time a dismissed reminder stays hidden.
pub const DEFAULT_SNOOZE_HOURS: i64 = 24;

/// Decides whether the upcoming-charges reminder should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderGate {
    snooze: Duration,
}

impl ReminderGate {
    /// Creates a gate that hides the reminder for `hours` after a dismissal.
    ///
    /// # Errors
    ///
    /// Returns `RecurringError::NegativeSnooze` if `hours` is negative.
    pub fn from_hours(hours: i64) -> Result<Self, RecurringError> {
        if hours < 0 {
            return Err(RecurringError::NegativeSnooze(hours));
        }
        Duration::try_hours(hours)
            .map(|snooze| Self { snooze })
            .ok_or(RecurringError::SnoozeOutOfRange(hours))
    }

    /// Snooze duration.
    #[must_use]
    pub const fn snooze(&self) -> Duration {
        self.snooze
    }

    /// Returns true if the reminder is due at `now`.
    ///
    /// Never dismissed means due. A dismissal stamped in the future counts as
    /// a dismissal at `now`.
    #[must_use]
    pub fn is_due(&self, now: DateTime<Utc>, last_dismissed_at: Option<DateTime<Utc>>) -> bool {
        let Some(dismissed) = last_dismissed_at else {
            return true;
        };
        let dismissed = dismissed.min(now);
        match dismissed.checked_add_signed(self.snooze) {
            Some(reopens_at) => now >= reopens_at,
            None => false,
        }
    }
}

impl Default for ReminderGate {
    fn default() -> Self {
        Self {
            snooze: Duration::hours(DEFAULT_SNOOZE_HOURS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_never_dismissed_is_due() {
        assert!(ReminderGate::default().is_due(at(9), None));
    }

    #[test]
    fn test_recent_dismissal_snoozes() {
        let gate = ReminderGate::from_hours(4).unwrap();

        assert!(!gate.is_due(at(12), Some(at(9))));
        assert!(gate.is_due(at(13), Some(at(9))));
        assert!(gate.is_due(at(20), Some(at(9))));
    }

    #[test]
    fn test_future_dismissal_counts_as_now() {
        let gate = ReminderGate::from_hours(1).unwrap();

        assert!(!gate.is_due(at(9), Some(at(22))));
    }

    #[test]
    fn test_zero_snooze_is_always_due() {
        let gate = ReminderGate::from_hours(0).unwrap();

        assert!(gate.is_due(at(9), Some(at(9))));
    }

    #[test]
    fn test_negative_snooze_rejected() {
        assert_eq!(
            ReminderGate::from_hours(-1),
            Err(RecurringError::NegativeSnooze(-1))
        );
    }
}
