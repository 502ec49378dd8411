//! Dashboard composition.
//!
//! This module ties the engine together:
//! - [`DashboardContext`], the per-user configuration bundle
//! - [`DashboardService`], which validates, aggregates, buckets and estimates tax
//! - [`DashboardReport`], the combined result handed to presentation

pub mod context;
pub mod error;
pub mod service;
pub mod types;


pub use context::DashboardContext;
pub use error::ConfigurationError;
pub use service::DashboardService;
pub use types::{DashboardReport, Summary, Trend};
