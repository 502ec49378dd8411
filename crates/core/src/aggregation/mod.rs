//! Income, expense and profit totals.

pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use service::AggregationService;
pub use types::Totals;
