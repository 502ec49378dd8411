//! Configuration error types.

use thiserror::Error;

use crate::bucketing::WindowError;
use crate::tax::TaxError;

/// Fatal configuration errors, raised before any computation runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Invalid rate policy or filing deadline.
    #[error("Invalid tax configuration: {0}")]
    Tax(#[from] TaxError),

    /// Invalid month window.
    #[error("Invalid window configuration: {0}")]
    Window(#[from] WindowError),

    /// Timezone name not found in the IANA database.
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
}
