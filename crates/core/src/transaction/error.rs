//! Per-record validation errors.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a raw candidate was excluded from computation.
///
/// These never abort a run; they are collected and reported alongside the result.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "code", content = "detail", rename_all = "snake_case")]
pub enum RejectionReason {
    /// No type supplied.
    #[error("Transaction type is missing")]
    MissingType,

    /// Type is neither income nor expense.
    #[error("Unknown transaction type: {0}")]
    UnknownType(String),

    /// No amount supplied.
    #[error("Amount is missing")]
    MissingAmount,

    /// Amount is not a number or numeric string.
    #[error("Amount is not numeric: {0}")]
    NonNumericAmount(String),

    /// Amount is numeric but exceeds decimal precision bounds.
    #[error("Amount is out of range: {0}")]
    AmountOutOfRange(String),

    /// Amount is below zero.
    #[error("Amount cannot be negative: {0}")]
    NegativeAmount(Decimal),

    /// No date supplied.
    #[error("Date is missing")]
    MissingDate,

    /// Date is present but not in a recognized format.
    #[error("Date could not be parsed: {0}")]
    UnparseableDate(String),
}

/// A rejected candidate, reported back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedRecord {
    /// Position of the candidate in the input snapshot.
    pub index: usize,
    /// Raw identifier, if one was supplied.
    pub id: Option<String>,
    /// Reason for rejection.
    pub reason: RejectionReason,
}
