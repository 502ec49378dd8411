//! Aggregation result types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Totals over a set of transactions.
///
/// `profit` is always exactly `total_income - total_expense` and may be negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of income amounts.
    pub total_income: Decimal,
    /// Sum of expense amounts.
    pub total_expense: Decimal,
    /// Income minus expense.
    pub profit: Decimal,
}

impl Totals {
    /// Builds totals from the two partition sums.
    #[must_use]
    pub fn new(total_income: Decimal, total_expense: Decimal) -> Self {
        Self {
            total_income,
            total_expense,
            profit: total_income.saturating_sub(total_expense),
        }
    }

    /// Returns true if there was no activity at all.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.total_income.is_zero() && self.total_expense.is_zero()
    }
}
