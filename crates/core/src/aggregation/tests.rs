//! Property-based tests for aggregation.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::AggregationService;
use crate::transaction::{Transaction, TransactionType};

fn transaction_strategy() -> impl Strategy<Value = Transaction> {
    (
        prop_oneof![Just(TransactionType::Income), Just(TransactionType::Expense)],
        0i64..1_000_000_000i64,
        0u32..365,
    )
        .prop_map(|(kind, cents, offset)| {
            let day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + chrono::Days::new(u64::from(offset));
            let amount = Decimal::new(cents, 2);
            match kind {
                TransactionType::Income => Transaction::income(amount, day),
                TransactionType::Expense => Transaction::expense(amount, day),
            }
        })
}

proptest! {
    /// Feature: dashboard-engine, Property 2: Profit Identity
    /// For any valid set, totals are non-negative and profit = income - expense.
    #[test]
    fn test_profit_identity(
        transactions in prop::collection::vec(transaction_strategy(), 0..60),
    ) {
        let totals = AggregationService::aggregate(&transactions);

        prop_assert!(totals.total_income >= Decimal::ZERO);
        prop_assert!(totals.total_expense >= Decimal::ZERO);
        prop_assert_eq!(totals.profit, totals.total_income - totals.total_expense);
    }

    /// Feature: dashboard-engine, Property 2: Profit Identity
    /// Partition sums match a direct filter-and-sum.
    #[test]
    fn test_partition_sums(
        transactions in prop::collection::vec(transaction_strategy(), 0..60),
    ) {
        let expected_income: Decimal = transactions
            .iter()
            .filter(|t| t.kind == TransactionType::Income)
            .map(|t| t.amount)
            .sum();
        let expected_expense: Decimal = transactions
            .iter()
            .filter(|t| t.kind == TransactionType::Expense)
            .map(|t| t.amount)
            .sum();

        let totals = AggregationService::aggregate(&transactions);

        prop_assert_eq!(totals.total_income, expected_income);
        prop_assert_eq!(totals.total_expense, expected_expense);
    }

    /// Feature: dashboard-engine, Property 3: Order Independence
    /// The result depends only on the multiset of transactions.
    #[test]
    fn test_order_independence(
        transactions in prop::collection::vec(transaction_strategy(), 0..60),
    ) {
        let mut reversed = transactions.clone();
        reversed.reverse();

        prop_assert_eq!(
            AggregationService::aggregate(&transactions),
            AggregationService::aggregate(&reversed)
        );
    }
}
