use reqwest::StatusCode;
use thiserror::Error;

/// Why an HTTP GET did not produce a usable body.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Status code: {}", .status.as_u16())]
    Status {
        status: StatusCode,
        content_type: Option<String>,
    },
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl FetchError {
    /// Timeouts, connection failures and 5xx responses are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Status { status, .. } => status.is_server_error(),
            FetchError::Transport(e) => e.is_timeout() || e.is_connect(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("failed to open workbook: {0}")]
    Open(String),
    #[error("workbook contains no worksheets")]
    NoWorksheet,
    #[error("failed to read first worksheet: {0}")]
    Sheet(String),
}

/// Errors that end the whole run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("failed to access the webpage: {0}")]
    Listing(#[source] FetchError),
    #[error("invalid base url {url}: {source}")]
    BaseUrl {
        url: String,
        source: url::ParseError,
    },
}
