pub mod artifact;
pub mod config;
pub mod error;
pub mod http;
pub mod links;
pub mod pipeline;
pub mod validate;

#[cfg(test)]
pub mod tests;

// Re-export key types and functions for easier access
pub use crate::artifact::{artifact_path, Artifact, SpreadsheetFormat};
pub use crate::config::Config;
pub use crate::error::{FetchError, PipelineError, ValidationError};
pub use crate::links::{extract_links, matches_title, year_from_title, CandidateLink};
pub use crate::pipeline::{download_all, find_candidates, run, CandidateOutcome, RunSummary};
pub use crate::validate::validate_artifact;
