//! Per-call configuration bundle.

use chrono::NaiveDate;
use chrono_tz::Tz;
use hisab_shared::config::{AppConfig, TaxSettings};

use super::error::ConfigurationError;
use crate::bucketing::{check_month_count, MonthWindow, WindowError};
use crate::tax::{FilingDeadline, RatePolicy, TaxBracket};

/// Everything the engine needs besides the transactions and the reference date.
///
/// Built once (typically from [`AppConfig`]) and shared read-only across calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardContext {
    rate_policy: RatePolicy,
    month_count: u32,
    timezone: Tz,
    filing_deadline: FilingDeadline,
}

impl DashboardContext {
    /// Creates a context using UTC and the default filing deadline.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::Window`] if `month_count` is zero or
    /// above [`MAX_MONTHS`](crate::bucketing::MAX_MONTHS).
    pub fn new(rate_policy: RatePolicy, month_count: u32) -> Result<Self, ConfigurationError> {
        check_month_count(month_count)?;

        Ok(Self {
            rate_policy,
            month_count,
            timezone: Tz::UTC,
            filing_deadline: FilingDeadline::default(),
        })
    }

    /// Sets the timezone used to assign timestamps to calendar months.
    #[must_use]
    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    /// Sets the annual filing deadline.
    #[must_use]
    pub fn with_filing_deadline(mut self, filing_deadline: FilingDeadline) -> Self {
        self.filing_deadline = filing_deadline;
        self
    }

    /// Builds a context from application configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the rate policy, deadline, month count or timezone is invalid.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigurationError> {
        let rate_policy = rate_policy_from(&config.tax)?;
        let filing_deadline = FilingDeadline::new(config.tax.filing_month, config.tax.filing_day)?;
        let timezone: Tz = config
            .window
            .timezone
            .parse()
            .map_err(|_| ConfigurationError::UnknownTimezone(config.window.timezone.clone()))?;

        Ok(Self::new(rate_policy, config.window.month_count)?
            .with_timezone(timezone)
            .with_filing_deadline(filing_deadline))
    }

    /// The validated rate policy.
    #[must_use]
    pub const fn rate_policy(&self) -> &RatePolicy {
        &self.rate_policy
    }

    /// Number of trailing months in the series.
    #[must_use]
    pub const fn month_count(&self) -> u32 {
        self.month_count
    }

    /// Timezone for timestamp localization.
    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Annual filing deadline.
    #[must_use]
    pub const fn filing_deadline(&self) -> FilingDeadline {
        self.filing_deadline
    }

    /// The month window ending at `reference_date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the window is not representable.
    pub fn window(&self, reference_date: NaiveDate) -> Result<MonthWindow, WindowError> {
        MonthWindow::new(self.month_count, reference_date)
    }
}

fn rate_policy_from(settings: &TaxSettings) -> Result<RatePolicy, ConfigurationError> {
    let policy = if settings.brackets.is_empty() {
        RatePolicy::flat(settings.flat_rate)?
    } else {
        RatePolicy::progressive(
            settings
                .brackets
                .iter()
                .map(|b| TaxBracket::new(b.threshold, b.rate))
                .collect(),
        )?
    };
    Ok(policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bucketing::MAX_MONTHS;
    use crate::tax::{PolicyKind, TaxError};
    use hisab_shared::config::BracketSettings;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_default_config() {
        let context = DashboardContext::from_config(&AppConfig::default()).unwrap();

        assert_eq!(context.rate_policy(), &RatePolicy::default());
        assert_eq!(context.month_count(), 6);
        assert_eq!(context.timezone(), Tz::Asia__Dhaka);
        assert_eq!(context.filing_deadline(), FilingDeadline::default());
    }

    #[test]
    fn test_brackets_take_precedence() {
        let mut config = AppConfig::default();
        config.tax.brackets = vec![
            BracketSettings {
                threshold: dec!(0),
                rate: dec!(0),
            },
            BracketSettings {
                threshold: dec!(350000),
                rate: dec!(0.05),
            },
        ];

        let context = DashboardContext::from_config(&config).unwrap();

        assert!(matches!(
            context.rate_policy().kind(),
            PolicyKind::Progressive { brackets } if brackets.len() == 2
        ));
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let mut config = AppConfig::default();
        config.tax.flat_rate = dec!(1.5);
        assert_eq!(
            DashboardContext::from_config(&config),
            Err(ConfigurationError::Tax(TaxError::RateOutOfRange { rate: dec!(1.5) }))
        );

        let mut config = AppConfig::default();
        config.window.month_count = 0;
        assert_eq!(
            DashboardContext::from_config(&config),
            Err(ConfigurationError::Window(WindowError::ZeroMonths))
        );

        let mut config = AppConfig::default();
        config.window.month_count = 3_000_000;
        assert_eq!(
            DashboardContext::from_config(&config),
            Err(ConfigurationError::Window(WindowError::TooManyMonths {
                month_count: 3_000_000,
                max: MAX_MONTHS,
            }))
        );

        let mut config = AppConfig::default();
        config.window.timezone = "Mars/Olympus".into();
        assert_eq!(
            DashboardContext::from_config(&config),
            Err(ConfigurationError::UnknownTimezone("Mars/Olympus".into()))
        );

        let mut config = AppConfig::default();
        config.tax.filing_day = 31;
        assert!(matches!(
            DashboardContext::from_config(&config),
            Err(ConfigurationError::Tax(TaxError::InvalidDeadline { month: 11, day: 31 }))
        ));
    }
}
