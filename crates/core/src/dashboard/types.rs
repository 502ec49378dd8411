//! Dashboard data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::aggregation::Totals;
use crate::bucketing::MonthlyBucket;
use crate::tax::{FilingStatus, TaxResult};
use crate::transaction::RejectedRecord;

/// Headline figures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Total income over the whole snapshot.
    pub total_income: Decimal,
    /// Total expense over the whole snapshot.
    pub total_expense: Decimal,
    /// Income minus expense.
    pub profit: Decimal,
    /// Tax estimated on `profit`.
    pub estimated_tax: Decimal,
}

impl Summary {
    /// Combines totals with the tax computed on their profit.
    #[must_use]
    pub fn new(totals: &Totals, tax: &TaxResult) -> Self {
        Self {
            total_income: totals.total_income,
            total_expense: totals.total_expense,
            profit: totals.profit,
            estimated_tax: tax.tax_amount,
        }
    }
}

/// Month-over-month change between the last two buckets, in percent.
///
/// A change is `None` when the previous month's value is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trend {
    /// Change in income.
    pub income_change_percent: Option<Decimal>,
    /// Change in expense.
    pub expense_change_percent: Option<Decimal>,
    /// Change in net (relative to the magnitude of the previous net).
    pub net_change_percent: Option<Decimal>,
}

impl Trend {
    /// Compares `current` against `previous`.
    #[must_use]
    pub fn between(previous: &MonthlyBucket, current: &MonthlyBucket) -> Self {
        Self {
            income_change_percent: change_percent(previous.income, current.income),
            expense_change_percent: change_percent(previous.expense, current.expense),
            net_change_percent: change_percent(previous.net, current.net),
        }
    }

    /// Trend for the last two months of a series; `None` for fewer than two months.
    #[must_use]
    pub fn from_buckets(buckets: &[MonthlyBucket]) -> Option<Self> {
        match buckets {
            [.., previous, current] => Some(Self::between(previous, current)),
            _ => None,
        }
    }
}

fn change_percent(previous: Decimal, current: Decimal) -> Option<Decimal> {
    if previous.is_zero() {
        return None;
    }
    current
        .checked_sub(previous)?
        .checked_div(previous.abs())?
        .checked_mul(Decimal::ONE_HUNDRED)
        .map(|percent| percent.round_dp(2))
}

/// Combined engine output for one user snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardReport {
    /// Date the window and deadline are anchored to.
    pub reference_date: NaiveDate,
    /// Totals over every valid transaction plus estimated tax.
    pub summary: Summary,
    /// One bucket per month of the window, oldest first.
    pub monthly: Vec<MonthlyBucket>,
    /// Totals restricted to transactions inside the window.
    pub window_totals: Totals,
    /// Tax breakdown on `summary.profit`.
    pub tax: TaxResult,
    /// Change between the last two months, if the window has two or more.
    pub trend: Option<Trend>,
    /// Next filing deadline.
    pub filing: Option<FilingStatus>,
    /// Candidates excluded from computation.
    pub rejected: Vec<RejectedRecord>,
}
