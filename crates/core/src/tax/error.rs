//! Tax error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while building a rate policy or validating calculator input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxError {
    // ========== Policy Errors ==========
    /// Rate outside `[0, 1)`.
    #[error("Tax rate must be at least 0 and below 1, got {rate}")]
    RateOutOfRange {
        /// Offending rate.
        rate: Decimal,
    },

    /// Progressive schedule with no brackets.
    #[error("Progressive schedule must have at least one bracket")]
    EmptySchedule,

    /// First bracket starts below zero.
    #[error("Bracket threshold cannot be negative, got {threshold}")]
    NegativeThreshold {
        /// Offending threshold.
        threshold: Decimal,
    },

    /// Thresholds are not strictly increasing.
    #[error("Bracket thresholds must be strictly increasing: {current} follows {previous}")]
    ThresholdsNotIncreasing {
        /// Threshold of the earlier bracket.
        previous: Decimal,
        /// Threshold of the later bracket.
        current: Decimal,
    },

    /// Filing deadline is not a date that exists every year.
    #[error("Filing deadline {month}/{day} is not a valid date in every year")]
    InvalidDeadline {
        /// Month (1-12).
        month: u32,
        /// Day of month.
        day: u32,
    },

    // ========== Calculator Input Errors ==========
    /// Calculator income must be positive.
    #[error("Income must be greater than zero, got {0}")]
    NonPositiveIncome(Decimal),

    /// Calculator expense cannot be negative.
    #[error("Expense cannot be negative, got {0}")]
    NegativeExpense(Decimal),
}
