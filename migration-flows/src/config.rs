use std::path::PathBuf;
use std::time::Duration;

/// Census Bureau page listing the yearly State-to-State migration flow tables.
pub const LISTING_URL: &str =
    "https://www.census.gov/data/tables/time-series/demo/geographic-mobility/state-to-state-migration.html";

/// Relative hrefs on the listing page are resolved against this.
pub const SITE_BASE_URL: &str = "https://www.census.gov";

pub const OUTPUT_DIR: &str = "migration_flows";

// The file server rejects requests that don't look like they come from a browser.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub const SPREADSHEET_ACCEPT: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet, application/vnd.ms-excel";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub listing_url: String,
    pub base_url: String,
    pub output_dir: PathBuf,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Extra attempts for a file download after a timeout, connection error or 5xx.
    pub retries: u32,
    pub retry_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            listing_url: LISTING_URL.to_string(),
            base_url: SITE_BASE_URL.to_string(),
            output_dir: PathBuf::from(OUTPUT_DIR),
            connect_timeout: Duration::from_secs(30),
            request_timeout: Duration::from_secs(300),
            retries: 2,
            retry_delay: Duration::from_secs(2),
        }
    }
}
