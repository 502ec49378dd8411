//! Dashboard composition service.

use chrono::NaiveDate;
use tracing::debug;

use super::context::DashboardContext;
use super::error::ConfigurationError;
use super::types::{DashboardReport, Summary, Trend};
use crate::aggregation::AggregationService;
use crate::bucketing::{BucketingService, MonthWindow};
use crate::tax::TaxEstimator;
use crate::transaction::{validate_transactions, RawTransaction, Transaction, ValidationOutcome};

/// Service producing the combined dashboard view.
pub struct DashboardService;

impl DashboardService {
    /// Validates a raw snapshot and composes the full report.
    ///
    /// Malformed records are reported in `rejected` and excluded; an empty
    /// valid set produces an all-zero report.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::Window`] if no window can be built for
    /// `reference_date`. Nothing is computed in that case.
    pub fn compose(
        raw: &[RawTransaction],
        context: &DashboardContext,
        reference_date: NaiveDate,
    ) -> Result<DashboardReport, ConfigurationError> {
        // Fail on configuration before touching the data.
        let window = context.window(reference_date)?;

        let ValidationOutcome { valid, rejected } = validate_transactions(raw, context.timezone());
        let mut report = Self::summarize_in(&valid, context, &window);
        report.rejected = rejected;

        debug!(
            reference_date = %reference_date,
            valid = valid.len(),
            rejected = report.rejected.len(),
            "Composed dashboard from raw snapshot"
        );

        Ok(report)
    }

    /// Composes the report from already validated transactions.
    ///
    /// Aggregation and bucketing run in parallel; tax is estimated on the
    /// aggregated profit once both are done.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::Window`] if no window can be built for `reference_date`.
    pub fn summarize(
        transactions: &[Transaction],
        context: &DashboardContext,
        reference_date: NaiveDate,
    ) -> Result<DashboardReport, ConfigurationError> {
        let window = context.window(reference_date)?;
        Ok(Self::summarize_in(transactions, context, &window))
    }

    fn summarize_in(
        transactions: &[Transaction],
        context: &DashboardContext,
        window: &MonthWindow,
    ) -> DashboardReport {
        let reference_date = window.reference_date();

        let (totals, (monthly, window_totals)) = rayon::join(
            || AggregationService::aggregate(transactions),
            || {
                (
                    BucketingService::bucket(transactions, window),
                    BucketingService::window_totals(transactions, window),
                )
            },
        );

        let tax = TaxEstimator::estimate(totals.profit, context.rate_policy());

        debug!(
            transactions = transactions.len(),
            months = monthly.len(),
            outside_window = BucketingService::count_outside(transactions, window),
            profit = %totals.profit,
            tax = %tax.tax_amount,
            "Summarized transactions"
        );

        DashboardReport {
            reference_date,
            summary: Summary::new(&totals, &tax),
            trend: Trend::from_buckets(&monthly),
            monthly,
            window_totals,
            tax,
            filing: context.filing_deadline().next_after(reference_date),
            rejected: Vec::new(),
        }
    }
}
