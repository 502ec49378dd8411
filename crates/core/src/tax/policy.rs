//! Rate policies.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::TaxError;

/// A progressive bracket: income above `threshold` (up to the next bracket) is taxed at `rate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Income at which the bracket starts.
    pub threshold: Decimal,
    /// Rate in `[0, 1)`.
    pub rate: Decimal,
}

impl TaxBracket {
    /// Creates a bracket.
    #[must_use]
    pub const fn new(threshold: Decimal, rate: Decimal) -> Self {
        Self { threshold, rate }
    }
}

/// Shape of a rate policy, as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PolicyKind {
    /// One rate for all positive income.
    Flat {
        /// Rate in `[0, 1)`.
        rate: Decimal,
    },
    /// Marginal brackets ordered by threshold.
    Progressive {
        /// Brackets with strictly increasing thresholds.
        brackets: Vec<TaxBracket>,
    },
}

/// A validated, immutable rate policy.
///
/// Can only be obtained through a constructor or deserialization, both of
/// which run the same validation, so computing tax never fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PolicyKind", into = "PolicyKind")]
pub struct RatePolicy(PolicyKind);

impl RatePolicy {
    /// Creates a flat policy.
    ///
    /// # Errors
    ///
    /// Returns [`TaxError::RateOutOfRange`] if `rate` is outside `[0, 1)`.
    pub fn flat(rate: Decimal) -> Result<Self, TaxError> {
        Self::try_from(PolicyKind::Flat { rate })
    }

    /// Creates a progressive policy.
    ///
    /// # Errors
    ///
    /// Returns an error if the schedule is empty, a threshold is negative or
    /// not strictly increasing, or a rate is outside `[0, 1)`.
    pub fn progressive(brackets: Vec<TaxBracket>) -> Result<Self, TaxError> {
        Self::try_from(PolicyKind::Progressive { brackets })
    }

    /// Returns the validated shape.
    #[must_use]
    pub const fn kind(&self) -> &PolicyKind {
        &self.0
    }

    /// Tax owed on `taxable_income`. Zero for non-positive income.
    #[must_use]
    pub fn tax_on(&self, taxable_income: Decimal) -> Decimal {
        if taxable_income <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        match &self.0 {
            PolicyKind::Flat { rate } => taxable_income.saturating_mul(*rate),
            PolicyKind::Progressive { brackets } => {
                let mut tax = Decimal::ZERO;
                for (index, bracket) in brackets.iter().enumerate() {
                    if taxable_income <= bracket.threshold {
                        break;
                    }
                    let ceiling = brackets
                        .get(index + 1)
                        .map_or(taxable_income, |next| next.threshold.min(taxable_income));
                    let portion = ceiling - bracket.threshold;
                    tax = tax.saturating_add(portion.saturating_mul(bracket.rate));
                }
                tax
            }
        }
    }

    /// Rate applied to the next unit of income above `taxable_income`.
    #[must_use]
    pub fn marginal_rate(&self, taxable_income: Decimal) -> Decimal {
        if taxable_income < Decimal::ZERO {
            return Decimal::ZERO;
        }

        match &self.0 {
            PolicyKind::Flat { rate } => *rate,
            PolicyKind::Progressive { brackets } => brackets
                .iter()
                .take_while(|bracket| bracket.threshold <= taxable_income)
                .last()
                .map_or(Decimal::ZERO, |bracket| bracket.rate),
        }
    }
}

impl Default for RatePolicy {
    /// Flat 15%, the standard small-business rate.
    fn default() -> Self {
        Self(PolicyKind::Flat {
            rate: Decimal::new(15, 2),
        })
    }
}

impl TryFrom<PolicyKind> for RatePolicy {
    type Error = TaxError;

    fn try_from(kind: PolicyKind) -> Result<Self, Self::Error> {
        match &kind {
            PolicyKind::Flat { rate } => validate_rate(*rate)?,
            PolicyKind::Progressive { brackets } => validate_brackets(brackets)?,
        }
        Ok(Self(kind))
    }
}

impl From<RatePolicy> for PolicyKind {
    fn from(policy: RatePolicy) -> Self {
        policy.0
    }
}

fn validate_rate(rate: Decimal) -> Result<(), TaxError> {
    if rate < Decimal::ZERO || rate >= Decimal::ONE {
        return Err(TaxError::RateOutOfRange { rate });
    }
    Ok(())
}

fn validate_brackets(brackets: &[TaxBracket]) -> Result<(), TaxError> {
    let first = brackets.first().ok_or(TaxError::EmptySchedule)?;
    if first.threshold < Decimal::ZERO {
        return Err(TaxError::NegativeThreshold {
            threshold: first.threshold,
        });
    }

    for pair in brackets.windows(2) {
        if pair[1].threshold <= pair[0].threshold {
            return Err(TaxError::ThresholdsNotIncreasing {
                previous: pair[0].threshold,
                current: pair[1].threshold,
            });
        }
    }

    brackets
        .iter()
        .try_for_each(|bracket| validate_rate(bracket.rate))
}
