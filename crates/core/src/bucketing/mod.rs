//! Calendar-month bucketing for time-series charts.
//!
//! A [`MonthWindow`] fixes the trailing months to report on; the
//! [`BucketingService`] folds transactions into one bucket per month,
//! zero-filling months without activity.

pub mod error;
pub mod service;
pub mod types;
pub mod window;


pub use error::WindowError;
pub use service::BucketingService;
pub use types::{MonthlyBucket, YearMonth};
pub use window::{check_month_count, MonthPeriod, MonthWindow, MAX_MONTHS};
