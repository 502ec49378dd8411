//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Tax estimation configuration.
    #[serde(default)]
    pub tax: TaxSettings,
    /// Monthly series configuration.
    #[serde(default)]
    pub window: WindowSettings,
}

/// Tax estimation configuration.
///
/// When `brackets` is non-empty a progressive schedule is used and
/// `flat_rate` is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxSettings {
    /// Flat rate applied to positive profit (e.g., 0.15 for 15%).
    #[serde(default = "default_flat_rate")]
    pub flat_rate: Decimal,
    /// Progressive brackets, ordered by threshold.
    #[serde(default)]
    pub brackets: Vec<BracketSettings>,
    /// Month of the annual filing deadline (1-12).
    #[serde(default = "default_filing_month")]
    pub filing_month: u32,
    /// Day of the annual filing deadline.
    #[serde(default = "default_filing_day")]
    pub filing_day: u32,
}

fn default_flat_rate() -> Decimal {
    Decimal::new(15, 2)
}

fn default_filing_month() -> u32 {
    11
}

fn default_filing_day() -> u32 {
    30
}

impl Default for TaxSettings {
    fn default() -> Self {
        Self {
            flat_rate: default_flat_rate(),
            brackets: Vec::new(),
            filing_month: default_filing_month(),
            filing_day: default_filing_day(),
        }
    }
}

/// A single progressive bracket as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BracketSettings {
    /// Income at which the bracket starts.
    pub threshold: Decimal,
    /// Rate applied to income inside the bracket.
    pub rate: Decimal,
}

/// Monthly series configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct WindowSettings {
    /// Number of trailing calendar months in the series.
    #[serde(default = "default_month_count")]
    pub month_count: u32,
    /// IANA timezone used to assign timestamps to calendar months.
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_month_count() -> u32 {
    6
}

fn default_timezone() -> String {
    "Asia/Dhaka".to_string()
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            month_count: default_month_count(),
            timezone: default_timezone(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from the `config/` directory and environment.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Loads configuration from `{dir}/default`, `{dir}/{RUN_MODE}` and
    /// `HISAB__*` environment variables, later sources overriding earlier ones.
    ///
    /// # Errors
    ///
    /// Returns an error if a source is malformed or a value has the wrong type.
    pub fn load_from(dir: &str) -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name(&format!("{dir}/default")).required(false))
            .add_source(config::File::with_name(&format!("{dir}/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("HISAB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
