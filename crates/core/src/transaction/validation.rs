//! Validation of raw transaction candidates.
//!
//! Each candidate is checked independently: a malformed record is reported
//! and skipped, the rest of the snapshot is still processed.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use super::error::{RejectedRecord, RejectionReason};
use super::types::{RawTransaction, Transaction, TransactionType};

/// Result of validating a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    /// Accepted transactions, in input order.
    pub valid: Vec<Transaction>,
    /// Rejected candidates, in input order.
    pub rejected: Vec<RejectedRecord>,
}

impl ValidationOutcome {
    /// Returns true if no candidate was rejected.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Validates every candidate in `raw`, localizing timestamps to `tz`.
#[must_use]
pub fn validate_transactions(raw: &[RawTransaction], tz: Tz) -> ValidationOutcome {
    let mut outcome = ValidationOutcome {
        valid: Vec::with_capacity(raw.len()),
        rejected: Vec::new(),
    };

    for (index, candidate) in raw.iter().enumerate() {
        match validate_transaction(candidate, tz) {
            Ok(transaction) => outcome.valid.push(transaction),
            Err(reason) => {
                warn!(index, id = ?candidate.id, %reason, "Rejected transaction record");
                outcome.rejected.push(RejectedRecord {
                    index,
                    id: candidate.id.clone(),
                    reason,
                });
            }
        }
    }

    outcome
}

/// Validates a single candidate.
///
/// Checks run in the order type, amount, date; the first failure wins.
/// The identifier is only trimmed; it never causes a rejection.
///
/// # Errors
///
/// Returns the reason the candidate cannot be used.
pub fn validate_transaction(raw: &RawTransaction, tz: Tz) -> Result<Transaction, RejectionReason> {
    let kind = parse_kind(raw.kind.as_deref())?;
    let amount = parse_amount(raw.amount.as_ref())?;
    let occurred_on = parse_date(raw.occurred_at.as_deref(), tz)?;

    Ok(Transaction {
        id: raw
            .id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string),
        kind,
        amount,
        occurred_on,
    })
}

fn parse_kind(kind: Option<&str>) -> Result<TransactionType, RejectionReason> {
    let kind = kind.map(str::trim).filter(|s| !s.is_empty());
    let kind = kind.ok_or(RejectionReason::MissingType)?;
    TransactionType::parse(kind).ok_or_else(|| RejectionReason::UnknownType(kind.to_string()))
}

fn parse_amount(amount: Option<&Value>) -> Result<Decimal, RejectionReason> {
    let amount = match amount {
        None | Some(Value::Null) => return Err(RejectionReason::MissingAmount),
        Some(Value::Number(n)) => parse_decimal(&n.to_string())?,
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Err(RejectionReason::MissingAmount);
            }
            parse_decimal(s)?
        }
        Some(other) => return Err(RejectionReason::NonNumericAmount(other.to_string())),
    };

    if amount < Decimal::ZERO {
        return Err(RejectionReason::NegativeAmount(amount));
    }

    Ok(amount)
}

/// Parses plain or scientific notation, distinguishing junk from overflow.
fn parse_decimal(text: &str) -> Result<Decimal, RejectionReason> {
    if let Ok(value) = Decimal::from_str(text) {
        return Ok(value);
    }
    if let Ok(value) = Decimal::from_scientific(text) {
        return Ok(value);
    }

    // serde_json renders large floats as e.g. "1e+40"; those are numbers, just too big.
    if text.parse::<f64>().is_ok_and(f64::is_finite) {
        Err(RejectionReason::AmountOutOfRange(text.to_string()))
    } else {
        Err(RejectionReason::NonNumericAmount(text.to_string()))
    }
}

fn parse_date(date: Option<&str>, tz: Tz) -> Result<NaiveDate, RejectionReason> {
    let date = date.map(str::trim).filter(|s| !s.is_empty());
    let date = date.ok_or(RejectionReason::MissingDate)?;

    if let Ok(day) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return Ok(day);
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(date) {
        return Ok(instant.with_timezone(&tz).date_naive());
    }

    // Postgres `timestamptz` text form, e.g. "2026-01-05 10:00:00+00".
    if let Ok(instant) = DateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S%.f%#z") {
        return Ok(instant.with_timezone(&tz).date_naive());
    }

    // Offset-less timestamps are stored in UTC.
    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(date, format) {
            return Ok(Utc.from_utc_datetime(&naive).with_timezone(&tz).date_naive());
        }
    }

    Err(RejectionReason::UnparseableDate(date.to_string()))
}
