//! Window configuration errors.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while constructing a [`super::MonthWindow`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    /// The window must span at least one month.
    #[error("Month count must be at least 1")]
    ZeroMonths,

    /// The window spans more months than a chart can show.
    #[error("Month count {month_count} exceeds the maximum of {max}")]
    TooManyMonths {
        /// Requested number of months.
        month_count: u32,
        /// Largest accepted number of months.
        max: u32,
    },

    /// The window reaches outside the representable calendar.
    #[error("A window of {month_count} months ending {reference_date} is outside the supported calendar")]
    OutOfRange {
        /// Requested number of months.
        month_count: u32,
        /// Reference date the window ends at.
        reference_date: NaiveDate,
    },
}
