//! Collection performance reports
//!
//! Fetches the pre-aggregated collection statistics (or reads a saved
//! response) and prints the same yearly figures, monthly series and
//! insights the dashboard shows.

mod client;
mod config;
mod reports;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use collection_stats::{CollectionStats, Metric, TimeWindow};
use shared::CONFIG;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use config::{Config, FileConfig};

/// Default config file path
const CONFIG_FILE: &str = "cobranza.toml";

/// Load the config file. An explicit path must exist; the default one is optional.
fn load_config_file(path: Option<&Path>) -> Result<FileConfig> {
    match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!(
                    "Config file '{}' not found.\n\n\
                    Copy cobranza.toml.example to get started.",
                    path.display()
                );
            }
            FileConfig::load(path)
        }
        None => {
            let default = Path::new(CONFIG_FILE);
            if default.exists() {
                FileConfig::load(default)
            } else {
                debug!("no {} found, using built-in defaults", CONFIG_FILE);
                Ok(FileConfig::default())
            }
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "cobranza-report")]
#[command(about = "Collection performance reports from the cobranza API")]
struct Args {
    /// Config file (default: ./cobranza.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// API base URL (overrides API_URL and the config file)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Read the payload from a saved JSON response instead of the API
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Yearly average efficiency and amounts collected
    Summary,

    /// Year-over-year insights and recommendations
    Insights {
        /// Baseline year (default: from config)
        #[arg(long)]
        from: Option<String>,

        /// Year compared against the baseline (default: from config)
        #[arg(long)]
        to: Option<String>,
    },

    /// Month-by-month table for one metric
    Series {
        /// efficiency, collected or due
        #[arg(short, long, default_value = "efficiency")]
        metric: Metric,

        /// Trailing months to show (e.g. 3, 6) or "all"
        #[arg(short, long, default_value = "all")]
        window: TimeWindow,

        /// Only this year
        #[arg(long)]
        year: Option<String>,
    },

    /// Export the 12-month series of one metric as CSV
    Export {
        /// Output CSV path
        #[arg(short, long)]
        output: PathBuf,

        /// efficiency, collected or due
        #[arg(short, long, default_value = "collected")]
        metric: Metric,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the payload from `--input` or the API
async fn load_stats(input: Option<&Path>, config: &Config) -> Result<CollectionStats> {
    match input {
        Some(path) => client::load_from_file(path),
        None => client::fetch_collection_stats(&config.api_url, config.timeout)
            .await
            .with_context(|| format!("Could not load collection stats from {}", config.api_url)),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let file_config = load_config_file(args.config.as_deref())?;
    let config = Config::resolve(&file_config, std::env::var("API_URL").ok(), args.api_url.clone());
    debug!(?config, "resolved configuration");

    let stats = load_stats(args.input.as_deref(), &config).await?;
    if stats.is_empty() {
        warn!("collection stats payload has no monthly records");
    } else {
        info!(years = stats.years().count(), "collection stats loaded");
    }

    let years = config.year_refs();

    match args.command {
        Command::Summary => reports::print_summary(&stats, &years),

        Command::Insights { from, to } => {
            let (from, to) = config.comparison_for(&stats, from, to);
            reports::print_insights(&stats, &from, &to, config.efficiency_target, CONFIG.recommendations);
        }

        Command::Series { metric, window, year } => {
            let years = match year.as_deref() {
                Some(year) => vec![year],
                None => years,
            };
            reports::print_series(&stats, &years, metric, window);
        }

        Command::Export { output, metric } => {
            let rows = reports::export_series_csv(&output, &stats, &years, metric)?;
            println!("  Generated {} ({} months, {} years)", output.display(), rows, years.len());
        }
    }

    Ok(())
}
