//! Bucketing service.

use super::types::MonthlyBucket;
use super::window::MonthWindow;
use crate::aggregation::{AggregationService, Totals};
use crate::transaction::Transaction;

/// Service for folding transactions into calendar-month buckets.
pub struct BucketingService;

impl BucketingService {
    /// Produces exactly one bucket per month of `window`, oldest first.
    ///
    /// Months without activity are zero-filled. Transactions dated outside
    /// the window are ignored here (they still count in overall totals).
    #[must_use]
    pub fn bucket(transactions: &[Transaction], window: &MonthWindow) -> Vec<MonthlyBucket> {
        let mut buckets: Vec<MonthlyBucket> =
            window.periods().iter().map(MonthlyBucket::empty).collect();

        for transaction in transactions {
            if let Some(bucket) = window
                .index_of(transaction.occurred_on)
                .and_then(|index| buckets.get_mut(index))
            {
                bucket.record(transaction);
            }
        }

        buckets
    }

    /// Totals restricted to transactions dated inside `window`.
    ///
    /// Equals the column sums of [`Self::bucket`] for the same input.
    #[must_use]
    pub fn window_totals(transactions: &[Transaction], window: &MonthWindow) -> Totals {
        AggregationService::aggregate_iter(
            transactions
                .iter()
                .filter(|transaction| window.contains(transaction.occurred_on)),
        )
    }

    /// Number of transactions dated outside `window`.
    #[must_use]
    pub fn count_outside(transactions: &[Transaction], window: &MonthWindow) -> usize {
        transactions
            .iter()
            .filter(|transaction| !window.contains(transaction.occurred_on))
            .count()
    }
}
