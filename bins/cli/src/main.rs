//! Hisab CLI
//!
//! Reads a transaction snapshot and prints the dashboard report as JSON.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hisab_core::dashboard::{DashboardContext, DashboardService};
use hisab_core::tax::TaxEstimator;
use hisab_core::transaction::RawTransaction;
use hisab_shared::AppConfig;

#[derive(Parser)]
#[command(name = "hisab")]
#[command(version, about = "Income, expense and tax dashboard for freelancers")]
struct Cli {
    /// Directory holding `default.toml` and per-mode overrides
    #[arg(long, global = true)]
    config: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose the dashboard from a JSON array of transactions
    Dashboard {
        /// Path to the snapshot file
        #[arg(short, long)]
        input: PathBuf,

        /// Reference date (YYYY-MM-DD); defaults to today
        #[arg(long = "as-of")]
        as_of: Option<NaiveDate>,
    },

    /// Estimate tax from income and expense figures
    Estimate {
        /// Gross income
        #[arg(long)]
        income: Decimal,

        /// Deductible expenses
        #[arg(long, default_value = "0")]
        expense: Decimal,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hisab=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(dir) => AppConfig::load_from(dir),
        None => AppConfig::load(),
    }
    .context("Failed to load configuration")?;
    let context = DashboardContext::from_config(&config).context("Invalid configuration")?;

    let output = match cli.command {
        Commands::Dashboard { input, as_of } => {
            let reference_date = as_of.unwrap_or_else(|| Local::now().date_naive());
            let body = fs::read_to_string(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;
            let snapshot: Vec<RawTransaction> = serde_json::from_str(&body)
                .with_context(|| format!("Failed to parse {}", input.display()))?;

            let report = DashboardService::compose(&snapshot, &context, reference_date)?;
            info!(
                reference_date = %reference_date,
                records = snapshot.len(),
                rejected = report.rejected.len(),
                "Dashboard composed"
            );
            to_json(&report, cli.pretty)?
        }
        Commands::Estimate { income, expense } => {
            let result =
                TaxEstimator::estimate_from_totals(income, expense, context.rate_policy())?;
            to_json(&result, cli.pretty)?
        }
    };

    println!("{output}");
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
