use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};
use reqwest::blocking::Client;
use url::Url;

use crate::artifact::{ensure_output_dir, write_artifact, Artifact, SpreadsheetFormat};
use crate::config::Config;
use crate::error::{FetchError, PipelineError, ValidationError};
use crate::http::{build_client, download_with_retry, fetch_listing};
use crate::links::{extract_links, CandidateLink};
use crate::validate::validate_artifact;

/// Terminal state of one candidate link.
#[derive(Debug)]
pub enum CandidateOutcome {
    /// Written and loaded as a spreadsheet.
    Counted(Artifact),
    /// The download failed; nothing was written.
    Skipped(FetchError),
    /// Written, failed to load, then removed.
    Deleted(Artifact, ValidationError),
    /// The payload could not be written to disk.
    Failed(io::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub matched: usize,
    pub downloaded: usize,
    pub skipped: usize,
    pub rejected: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &CandidateOutcome) {
        self.matched += 1;
        match outcome {
            CandidateOutcome::Counted(_) => self.downloaded += 1,
            CandidateOutcome::Skipped(_) => self.skipped += 1,
            CandidateOutcome::Deleted(..) => self.rejected += 1,
            CandidateOutcome::Failed(_) => self.failed += 1,
        }
    }
}

/// Output directory that is only created when the first file is about to be written.
struct OutputDir {
    path: PathBuf,
    ready: bool,
}

impl OutputDir {
    fn new(path: &Path) -> Self {
        OutputDir {
            path: path.to_path_buf(),
            ready: false,
        }
    }

    fn prepare(&mut self) -> io::Result<&Path> {
        if !self.ready {
            ensure_output_dir(&self.path)?;
            self.ready = true;
        }
        Ok(&self.path)
    }
}

/// Fetch the listing page and return the candidate links it contains.
pub fn find_candidates(client: &Client, config: &Config) -> Result<Vec<CandidateLink>, PipelineError> {
    let base = Url::parse(&config.base_url).map_err(|source| PipelineError::BaseUrl {
        url: config.base_url.clone(),
        source,
    })?;

    info!("Fetching listing page {}", config.listing_url);
    let html = fetch_listing(client, &config.listing_url).map_err(PipelineError::Listing)?;
    let links = extract_links(&html, &base);
    info!("Found {} candidate links", links.len());
    Ok(links)
}

/// Download, store and verify every candidate on the listing page.
pub fn run(config: &Config) -> Result<RunSummary, PipelineError> {
    let client = build_client(config).map_err(PipelineError::Client)?;
    let links = find_candidates(&client, config)?;

    let mut summary = RunSummary::default();
    for outcome in download_all(&client, config, &links) {
        summary.record(&outcome);
    }

    println!(
        "\nDownload complete. Successfully downloaded {} files.",
        summary.downloaded
    );
    info!(
        "{} matched, {} skipped, {} rejected, {} failed to write",
        summary.matched, summary.skipped, summary.rejected, summary.failed
    );
    Ok(summary)
}

/// Process each candidate in order, one at a time.
pub fn download_all(
    client: &Client,
    config: &Config,
    links: &[CandidateLink],
) -> Vec<CandidateOutcome> {
    let mut output_dir = OutputDir::new(&config.output_dir);
    links
        .iter()
        .map(|link| process_candidate(client, config, link, &mut output_dir))
        .collect()
}

fn print_content_type(content_type: Option<&str>) {
    println!("Content-Type: {}", content_type.unwrap_or("No content type"));
}

fn process_candidate(
    client: &Client,
    config: &Config,
    link: &CandidateLink,
    output_dir: &mut OutputDir,
) -> CandidateOutcome {
    let provisional_name = link.provisional_file_name();
    println!("Downloading {}...", provisional_name);
    println!("URL: {}", link.url);

    let download = match download_with_retry(
        client,
        link.url.as_str(),
        config.retries,
        config.retry_delay,
    ) {
        Ok(download) => download,
        Err(FetchError::Status {
            status,
            content_type,
        }) => {
            print_content_type(content_type.as_deref());
            println!(
                "Failed to download {}. Status code: {}",
                provisional_name,
                status.as_u16()
            );
            return CandidateOutcome::Skipped(FetchError::Status {
                status,
                content_type,
            });
        }
        Err(e) => {
            println!("Error downloading {}: {}", provisional_name, e);
            return CandidateOutcome::Skipped(e);
        }
    };

    print_content_type(download.content_type.as_deref());
    let format = SpreadsheetFormat::from_content_type(download.content_type.as_deref());

    let artifact = match output_dir
        .prepare()
        .and_then(|dir| write_artifact(dir, link.year, format, &download.bytes))
    {
        Ok(artifact) => artifact,
        Err(e) => {
            println!("Error downloading {}: {}", provisional_name, e);
            return CandidateOutcome::Failed(e);
        }
    };

    match validate_artifact(&artifact.path, format) {
        Ok(rows) => {
            info!("{} loaded with {} rows", artifact.path.display(), rows);
            println!("Successfully downloaded and verified {}", artifact.file_name());
            CandidateOutcome::Counted(artifact)
        }
        Err(e) => {
            println!("Downloaded file is not a valid Excel file: {}", e);
            if let Err(remove_err) = fs::remove_file(&artifact.path) {
                warn!(
                    "failed to remove invalid file {}: {}",
                    artifact.path.display(),
                    remove_err
                );
            }
            CandidateOutcome::Deleted(artifact, e)
        }
    }
}
