//! Transaction domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money received.
    Income,
    /// Money spent.
    Expense,
}

impl TransactionType {
    /// Parses a type label, ignoring surrounding whitespace and case.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        if label.eq_ignore_ascii_case("income") {
            Some(Self::Income)
        } else if label.eq_ignore_ascii_case("expense") {
            Some(Self::Expense)
        } else {
            None
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// A validated income or expense event.
///
/// Instances produced by the validator always carry a non-negative amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Caller's record identifier, passed through untouched.
    pub id: Option<String>,
    /// Income or expense.
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Non-negative amount.
    pub amount: Decimal,
    /// Calendar date in the caller's timezone.
    pub occurred_on: NaiveDate,
}

impl Transaction {
    /// Creates an income transaction without an identifier.
    #[must_use]
    pub fn income(amount: Decimal, occurred_on: NaiveDate) -> Self {
        Self {
            id: None,
            kind: TransactionType::Income,
            amount,
            occurred_on,
        }
    }

    /// Creates an expense transaction without an identifier.
    #[must_use]
    pub fn expense(amount: Decimal, occurred_on: NaiveDate) -> Self {
        Self {
            id: None,
            kind: TransactionType::Expense,
            amount,
            occurred_on,
        }
    }

    /// Attaches the caller's identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Returns the amount signed by direction (income positive, expense negative).
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

/// An unvalidated transaction candidate as handed over by the caller.
///
/// Every field is optional; `amount` accepts JSON numbers or numeric strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTransaction {
    /// Record identifier; any string, never validated.
    #[serde(default)]
    pub id: Option<String>,
    /// `"income"` or `"expense"`.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Amount as stored.
    #[serde(default)]
    pub amount: Option<serde_json::Value>,
    /// Date (`YYYY-MM-DD`) or timestamp.
    #[serde(default, alias = "date")]
    pub occurred_at: Option<String>,
}

impl RawTransaction {
    /// Builds a candidate from string parts. Mostly useful for callers mapping rows by hand.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        kind: impl Into<String>,
        amount: impl Into<serde_json::Value>,
        occurred_at: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            kind: Some(kind.into()),
            amount: Some(amount.into()),
            occurred_at: Some(occurred_at.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_type_is_case_insensitive() {
        assert_eq!(TransactionType::parse("income"), Some(TransactionType::Income));
        assert_eq!(TransactionType::parse(" Expense "), Some(TransactionType::Expense));
        assert_eq!(TransactionType::parse("INCOME"), Some(TransactionType::Income));
        assert_eq!(TransactionType::parse("transfer"), None);
        assert_eq!(TransactionType::parse(""), None);
    }

    #[test]
    fn test_signed_amount() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert_eq!(Transaction::income(dec!(25.50), date).signed_amount(), dec!(25.50));
        assert_eq!(Transaction::expense(dec!(25.50), date).signed_amount(), dec!(-25.50));
    }

    #[test]
    fn test_raw_transaction_deserializes_row() {
        let raw: RawTransaction = serde_json::from_str(
            r#"{"id": "0195f3a2-7c1e-7b9a-9a4e-2f1c3d4e5f60", "user_id": "u1", "type": "income", "amount": "1500.00", "date": "2026-02-14"}"#,
        )
        .unwrap();
        assert_eq!(raw.kind.as_deref(), Some("income"));
        assert_eq!(raw.amount, Some(serde_json::Value::from("1500.00")));
        assert_eq!(raw.occurred_at.as_deref(), Some("2026-02-14"));
    }

    #[test]
    fn test_raw_transaction_null_amount_is_missing() {
        let raw: RawTransaction = serde_json::from_str(r#"{"type": "expense", "amount": null}"#).unwrap();
        assert!(raw.amount.is_none());
        assert!(raw.id.is_none());
    }
}
