//! Bucket data types.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::window::MonthPeriod;
use crate::transaction::{Transaction, TransactionType};

/// A calendar month, the grouping key for buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct YearMonth {
    /// Calendar year.
    pub year: i32,
    /// Month number (1-12).
    pub month: u32,
}

impl YearMonth {
    /// Returns the month containing `date`.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Number of months from `self` to `other` (negative if `other` is earlier).
    #[must_use]
    pub fn months_until(self, other: Self) -> i64 {
        (i64::from(other.year) - i64::from(self.year)) * 12 + i64::from(other.month)
            - i64::from(self.month)
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Income and expense totals for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyBucket {
    /// Chart label (e.g., "Jan 2026").
    pub period_label: String,
    /// Calendar year.
    pub year: i32,
    /// Month number (1-12).
    pub month: u32,
    /// First day of the month.
    pub period_start: NaiveDate,
    /// Last day of the month.
    pub period_end: NaiveDate,
    /// Sum of income in the month.
    pub income: Decimal,
    /// Sum of expense in the month.
    pub expense: Decimal,
    /// Income minus expense.
    pub net: Decimal,
}

impl MonthlyBucket {
    /// Creates a zero bucket for `period`.
    #[must_use]
    pub fn empty(period: &MonthPeriod) -> Self {
        Self {
            period_label: period.start.format("%b %Y").to_string(),
            year: period.key.year,
            month: period.key.month,
            period_start: period.start,
            period_end: period.end,
            income: Decimal::ZERO,
            expense: Decimal::ZERO,
            net: Decimal::ZERO,
        }
    }

    /// Adds a transaction's amount to the matching side.
    pub fn record(&mut self, transaction: &Transaction) {
        match transaction.kind {
            TransactionType::Income => self.income = self.income.saturating_add(transaction.amount),
            TransactionType::Expense => {
                self.expense = self.expense.saturating_add(transaction.amount);
            }
        }
        self.net = self.income.saturating_sub(self.expense);
    }

    /// Returns the grouping key.
    #[must_use]
    pub fn key(&self) -> YearMonth {
        YearMonth {
            year: self.year,
            month: self.month,
        }
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.income.is_zero() && self.expense.is_zero()
    }
}
