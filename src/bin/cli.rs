//! wikilake CLI
//!
//! Local execution entry point for the ingestion and scraping flows.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use wikilake::{
    error::Result,
    models::Config,
    pipeline,
    storage::{LocalStore, S3Store},
    utils::http,
};

/// wikilake - Wikimedia pageviews datalake ingestion
#[derive(Parser, Debug)]
#[command(name = "wikilake", version, about = "Pageview ingestion and article scraping")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "wikilake.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the top-pageviews report and persist raw + transformed views
    Ingest {
        /// Report date (YYYY-MM-DD); overrides the configured date
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Scrape paragraph text from an article page
    Scrape {
        /// Article URL; overrides the configured URL
        #[arg(long)]
        url: Option<String>,
    },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config);
    if let Err(e) = config.validate() {
        log::error!("Config validation failed: {}", e);
        return Err(e);
    }

    let client = http::create_client(&config.http)?;

    match cli.command {
        Command::Ingest { date } => {
            let date = match date {
                Some(date) => date,
                None => config.ingest.parse_date()?,
            };

            let local = LocalStore::new(&config.storage.data_dir);
            let s3 = S3Store::from_config(&config.storage).await?;

            let report = pipeline::run_ingest(&config, &client, &local, &s3, date).await?;

            log::info!(
                "Ingested {} records for {}",
                report.record_count,
                report.date
            );
            log::info!("Raw views: {}", report.raw_location);
            log::info!("JSON lines: {}", report.views_location);
        }

        Command::Scrape { url } => {
            let url = url.unwrap_or_else(|| config.scrape.article_url.clone());
            let text = pipeline::run_scrape(&client, &url).await?;
            println!("{text}");
        }

        Command::Validate => {
            log::info!("Validating configuration...");
            // validate() already ran above; getting here means it passed.
            log::info!("✓ Config OK ({})", cli.config.display());
        }
    }

    log::info!("Done!");

    Ok(())
}
