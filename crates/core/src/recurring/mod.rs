//! Recurring streams and upcoming-charge selection.

pub mod error;
pub mod projection;
pub mod reminder;
pub mod service;
pub mod types;


pub use error::RecurringError;
pub use projection::project_due_date;
pub use reminder::ReminderGate;
pub use service::{DEFAULT_WINDOW_DAYS, select_upcoming, select_upcoming_with};
pub use types::{
    RecurringStream, StreamDirection, StreamFrequency, UpcomingCharge, UpcomingCharges,
};
