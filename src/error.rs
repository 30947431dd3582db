// File: ./src/error.rs
//! Errors raised while parsing a single meeting pattern.
//!
//! Every variant is local to one pattern: the schedule compiler records it,
//! logs it and moves on to the next pattern of the row.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("expected at least 3 ' | '-separated fields, found {found}: '{pattern}'")]
    FieldCount { found: usize, pattern: String },

    #[error("invalid date '{0}' (expected YYYY-MM-DD)")]
    Date(String),

    #[error("invalid date range '{0}'")]
    DateRange(String),

    #[error("invalid time '{0}' (expected h:mm am|pm)")]
    Time(String),

    #[error("invalid time range '{0}'")]
    TimeRange(String),

    #[error("no recognizable weekday in '{0}'")]
    Weekdays(String),

    #[error("recurrence rule rejected: {0}")]
    Recurrence(String),
}

pub type FormatResult<T> = std::result::Result<T, FormatError>;
