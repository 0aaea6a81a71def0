use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::error;
use migration_flows::config::{Config, LISTING_URL, OUTPUT_DIR, SITE_BASE_URL};
use migration_flows::http::build_client;
use migration_flows::{find_candidates, run, PipelineError};

/// Download the State-to-State migration flow spreadsheets and check that each one loads
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Listing page to scan for spreadsheet links
    #[arg(long, default_value = LISTING_URL)]
    url: String,

    /// Base that relative links are resolved against
    #[arg(long, default_value = SITE_BASE_URL)]
    base_url: String,

    /// Directory the spreadsheets are written to
    #[arg(long, default_value = OUTPUT_DIR)]
    output_dir: PathBuf,

    #[arg(long, default_value_t = 300)]
    timeout_secs: u64,

    #[arg(long, default_value_t = 30)]
    connect_timeout_secs: u64,

    /// Extra attempts per file after a timeout, connection error or 5xx response
    #[arg(long, default_value_t = 2)]
    retries: u32,

    #[arg(long, default_value_t = 2000)]
    retry_delay_ms: u64,

    /// Only print the matched links as JSON, don't download anything
    #[arg(long)]
    list: bool,
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Config {
            listing_url: cli.url.clone(),
            base_url: cli.base_url.clone(),
            output_dir: cli.output_dir.clone(),
            connect_timeout: Duration::from_secs(cli.connect_timeout_secs),
            request_timeout: Duration::from_secs(cli.timeout_secs),
            retries: cli.retries,
            retry_delay: Duration::from_millis(cli.retry_delay_ms),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = Config::from(&cli);

    if cli.list {
        return list_candidates(&config);
    }

    match run(&config) {
        Ok(_) => Ok(()),
        Err(PipelineError::Listing(e)) => {
            // A missing listing page ends the run but isn't a process failure.
            println!("Failed to access the webpage. {}", e);
            Ok(())
        }
        Err(e) => Err(e).context("Download run failed"),
    }
}

fn list_candidates(config: &Config) -> Result<()> {
    let client = build_client(config).context("Failed to build HTTP client")?;
    let links = match find_candidates(&client, config) {
        Ok(links) => links,
        Err(PipelineError::Listing(e)) => {
            error!("Failed to access the webpage. {}", e);
            return Ok(());
        }
        Err(e) => return Err(e).context("Failed to collect candidate links"),
    };

    let json =
        serde_json::to_string_pretty(&links).context("Failed to serialize candidate links")?;
    println!("{}", json);
    Ok(())
}
