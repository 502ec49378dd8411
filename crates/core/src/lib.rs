//! Core computation for Hisab.
//!
//! This crate contains pure financial computation with ZERO I/O dependencies.
//! It turns a user's transaction snapshot into dashboard figures.
//!
//! # Modules
//!
//! - `transaction` - Record validation and normalization
//! - `aggregation` - Income, expense and profit totals
//! - `bucketing` - Trailing calendar-month series
//! - `tax` - Rate policies, tax estimation and filing deadlines
//! - `dashboard` - Report composition and per-call configuration

pub mod aggregation;
pub mod bucketing;
pub mod dashboard;
pub mod tax;
pub mod transaction;
