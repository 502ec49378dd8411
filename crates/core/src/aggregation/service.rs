//! Aggregation service.

use rust_decimal::Decimal;

use super::types::Totals;
use crate::transaction::{Transaction, TransactionType};

/// Service for summing transactions by direction.
pub struct AggregationService;

impl AggregationService {
    /// Sums income and expense amounts and derives profit.
    ///
    /// Sums saturate at the `Decimal` bounds instead of panicking.
    #[must_use]
    pub fn aggregate(transactions: &[Transaction]) -> Totals {
        Self::aggregate_iter(transactions)
    }

    /// Aggregates any iterator of transaction references.
    #[must_use]
    pub fn aggregate_iter<'a, I>(transactions: I) -> Totals
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let (income, expense) = transactions.into_iter().fold(
            (Decimal::ZERO, Decimal::ZERO),
            |(income, expense), tx| match tx.kind {
                TransactionType::Income => (income.saturating_add(tx.amount), expense),
                TransactionType::Expense => (income, expense.saturating_add(tx.amount)),
            },
        );

        Totals::new(income, expense)
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    #[test]
    fn test_aggregate_income_and_expense() {
        let transactions = vec![
            Transaction::income(dec!(100000), day()),
            Transaction::expense(dec!(40000), day()),
        ];

        let totals = AggregationService::aggregate(&transactions);

        assert_eq!(totals.total_income, dec!(100000));
        assert_eq!(totals.total_expense, dec!(40000));
        assert_eq!(totals.profit, dec!(60000));
    }

    #[test]
    fn test_aggregate_loss() {
        let transactions = vec![
            Transaction::income(dec!(10.10), day()),
            Transaction::expense(dec!(20.20), day()),
        ];

        let totals = AggregationService::aggregate(&transactions);

        assert_eq!(totals.profit, dec!(-10.10));
    }

    #[test]
    fn test_aggregate_empty() {
        let totals = AggregationService::aggregate(&[]);
        assert_eq!(totals, Totals::default());
        assert!(totals.is_zero());
    }

    #[test]
    fn test_no_float_drift() {
        // 0.1 + 0.2 is the classic binary float failure.
        let transactions = vec![
            Transaction::income(dec!(0.1), day()),
            Transaction::income(dec!(0.2), day()),
        ];

        let totals = AggregationService::aggregate(&transactions);

        assert_eq!(totals.total_income, dec!(0.3));
    }

    #[test]
    fn test_saturates_instead_of_panicking() {
        let transactions = vec![
            Transaction::income(Decimal::MAX, day()),
            Transaction::income(Decimal::MAX, day()),
        ];

        let totals = AggregationService::aggregate(&transactions);

        assert_eq!(totals.total_income, Decimal::MAX);
    }
}
