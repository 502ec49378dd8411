//! Transaction records and their validation.
//!
//! This module handles the boundary between caller snapshots and the engine:
//! - Loosely typed raw candidates as returned by a persistence query
//! - Validated, strongly typed transactions
//! - Per-record rejection reasons (non-fatal)

pub mod error;
pub mod types;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use error::{RejectedRecord, RejectionReason};
pub use types::{RawTransaction, Transaction, TransactionType};
pub use validation::{validate_transaction, validate_transactions, ValidationOutcome};
