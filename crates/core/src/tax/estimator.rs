//! Tax estimation from taxable income.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::TaxError;
use super::policy::RatePolicy;

/// Tax breakdown for a taxable-income figure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    /// Income the tax is computed on (profit; may be negative).
    pub taxable_income: Decimal,
    /// Tax owed; zero whenever `taxable_income <= 0`.
    pub tax_amount: Decimal,
    /// `taxable_income - tax_amount`.
    pub net_profit: Decimal,
    /// `tax_amount / taxable_income` rounded to 4 dp; zero when nothing is taxable.
    pub effective_rate: Decimal,
}

/// Applies a [`RatePolicy`] to taxable income.
pub struct TaxEstimator;

impl TaxEstimator {
    /// Estimates tax on `taxable_income`. Never fails for any input.
    #[must_use]
    pub fn estimate(taxable_income: Decimal, policy: &RatePolicy) -> TaxResult {
        let tax_amount = policy.tax_on(taxable_income);
        let effective_rate = if taxable_income > Decimal::ZERO {
            tax_amount
                .checked_div(taxable_income)
                .map_or(Decimal::ZERO, |rate| rate.round_dp(4))
        } else {
            Decimal::ZERO
        };

        TaxResult {
            taxable_income,
            tax_amount,
            net_profit: taxable_income.saturating_sub(tax_amount),
            effective_rate,
        }
    }

    /// Standalone calculator: taxable income is `income - expense`.
    ///
    /// # Errors
    ///
    /// Returns [`TaxError::NonPositiveIncome`] when `income <= 0` and
    /// [`TaxError::NegativeExpense`] when `expense < 0`.
    pub fn estimate_from_totals(
        income: Decimal,
        expense: Decimal,
        policy: &RatePolicy,
    ) -> Result<TaxResult, TaxError> {
        if income <= Decimal::ZERO {
            return Err(TaxError::NonPositiveIncome(income));
        }
        if expense < Decimal::ZERO {
            return Err(TaxError::NegativeExpense(expense));
        }

        Ok(Self::estimate(income.saturating_sub(expense), policy))
    }
}
