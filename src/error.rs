use chrono::NaiveDate;

use crate::Unit;

/// Error type for calendar operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Weekday name is not one of the seven lowercase English names.
    #[error("Unknown weekday: {0}")]
    UnknownWeekday(String),

    /// Navigation unit is not one of days, weeks, months or years.
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    /// Navigation would leave the representable date range.
    #[error("Cannot shift {date} by {amount} {unit}: result is out of range")]
    OutOfRange {
        date:   NaiveDate,
        amount: i64,
        unit:   Unit,
    },

    /// Formatting pattern contains an item the formatter cannot parse.
    #[error("Invalid format pattern: {0}")]
    InvalidPattern(String),

    /// Writing the formatted output failed.
    #[error(transparent)]
    Format(#[from] std::fmt::Error),
}
