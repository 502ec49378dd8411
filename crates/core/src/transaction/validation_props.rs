//! Property-based tests for transaction validation.
//!
//! Feature: dashboard-engine, Property 1: Partial-failure validation

use chrono::NaiveDate;
use chrono_tz::Tz;
use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::Value;

use super::error::RejectionReason;
use super::types::RawTransaction;
use super::validation::{validate_transaction, validate_transactions};

/// Strategy to generate a non-negative amount with cents precision.
fn non_negative_amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a strictly negative amount.
fn negative_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(-cents, 2))
}

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2040, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn kind_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("income"), Just("expense")]
}

fn candidate(kind: &str, amount: Decimal, date: NaiveDate) -> RawTransaction {
    RawTransaction::new(
        format!("{kind}-{date}"),
        kind,
        Value::String(amount.to_string()),
        date.format("%Y-%m-%d").to_string(),
    )
}

/// Either a valid candidate or one with a negative amount, tagged with validity.
fn mixed_candidate() -> impl Strategy<Value = (RawTransaction, bool)> {
    prop_oneof![
        (kind_strategy(), non_negative_amount(), date_strategy())
            .prop_map(|(k, a, d)| (candidate(k, a, d), true)),
        (kind_strategy(), negative_amount(), date_strategy())
            .prop_map(|(k, a, d)| (candidate(k, a, d), false)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property 1.1: Non-negative amounts with valid fields are accepted unchanged.
    #[test]
    fn prop_valid_candidate_accepted(
        kind in kind_strategy(),
        amount in non_negative_amount(),
        date in date_strategy(),
    ) {
        let tx = validate_transaction(&candidate(kind, amount, date), Tz::UTC);
        prop_assert!(tx.is_ok(), "expected acceptance, got {:?}", tx);
        let tx = tx.unwrap();
        prop_assert_eq!(tx.amount, amount);
        prop_assert_eq!(tx.occurred_on, date);
    }

    /// Property 1.2: Negative amounts are always rejected.
    #[test]
    fn prop_negative_amount_rejected(
        kind in kind_strategy(),
        amount in negative_amount(),
        date in date_strategy(),
    ) {
        let result = validate_transaction(&candidate(kind, amount, date), Tz::UTC);
        prop_assert_eq!(result, Err(RejectionReason::NegativeAmount(amount)));
    }

    /// Property 1.3: Every candidate lands in exactly one of valid/rejected,
    /// and rejected indices point at the invalid inputs.
    #[test]
    fn prop_partition_is_complete(
        candidates in prop::collection::vec(mixed_candidate(), 0..40),
    ) {
        let raw: Vec<RawTransaction> = candidates.iter().map(|(c, _)| c.clone()).collect();
        let outcome = validate_transactions(&raw, Tz::UTC);

        prop_assert_eq!(outcome.valid.len() + outcome.rejected.len(), raw.len());

        let expected_rejected: Vec<usize> = candidates
            .iter()
            .enumerate()
            .filter(|(_, (_, ok))| !ok)
            .map(|(i, _)| i)
            .collect();
        let actual_rejected: Vec<usize> = outcome.rejected.iter().map(|r| r.index).collect();
        prop_assert_eq!(actual_rejected, expected_rejected);
    }
}
