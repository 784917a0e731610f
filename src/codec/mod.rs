//! Conversions between the display form of ad fields and their stored form.

pub mod hours;
pub mod week_days;

use thiserror::Error;

pub use hours::{MINUTES_PER_DAY, to_display, to_minutes};
pub use week_days::{WEEK_DAY_DELIMITER, join_week_days, split_week_days};

/// Failures raised while converting ad fields between display and storage forms.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The hour string is not a zero-padded `HH:MM` value inside a day.
    #[error("`{input}` is not a valid HH:MM hour")]
    Format { input: String },
    /// The minute count falls outside `[0, 1439]`.
    #[error("{minutes} is outside the minute-of-day range 0..=1439")]
    Range { minutes: i64 },
    /// A stored week-day element is not a small integer.
    #[error("`{element}` is not a valid week day")]
    WeekDay { element: String },
}
