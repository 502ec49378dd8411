//! Tax estimation.
//!
//! This module provides:
//! - [`RatePolicy`], a flat or progressive schedule validated once at construction
//! - [`TaxEstimator`], a pure function from taxable income to a [`TaxResult`]
//! - [`FilingDeadline`], the annual due date and days remaining

pub mod deadline;
pub mod error;
pub mod estimator;
pub mod policy;


pub use deadline::{FilingDeadline, FilingStatus};
pub use error::TaxError;
pub use estimator::{TaxEstimator, TaxResult};
pub use policy::{PolicyKind, RatePolicy, TaxBracket};
