use std::thread;
use std::time::Duration;

use log::{debug, warn};
use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::StatusCode;

use crate::config::{Config, BROWSER_USER_AGENT, SPREADSHEET_ACCEPT};
use crate::error::FetchError;

/// Body and declared type of a successful file download.
#[derive(Debug, Clone)]
pub struct Download {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

pub fn build_client(config: &Config) -> reqwest::Result<Client> {
    Client::builder()
        .connect_timeout(config.connect_timeout)
        .timeout(config.request_timeout)
        .build()
}

pub fn fetch_listing(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client.get(url).send()?;
    if response.status() != StatusCode::OK {
        return Err(FetchError::Status {
            status: response.status(),
            content_type: content_type(&response),
        });
    }
    Ok(response.text()?)
}

pub fn download_file(client: &Client, url: &str) -> Result<Download, FetchError> {
    let response = client
        .get(url)
        .header(USER_AGENT, BROWSER_USER_AGENT)
        .header(ACCEPT, SPREADSHEET_ACCEPT)
        .send()?;

    let content_type = content_type(&response);
    debug!("{} -> {} ({:?})", url, response.status(), content_type);

    if response.status() != StatusCode::OK {
        return Err(FetchError::Status {
            status: response.status(),
            content_type,
        });
    }

    let bytes = response.bytes()?.to_vec();
    Ok(Download {
        bytes,
        content_type,
    })
}

fn content_type(response: &Response) -> Option<String> {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// `download_file`, repeated up to `retries` more times while the failure is transient.
pub fn download_with_retry(
    client: &Client,
    url: &str,
    retries: u32,
    delay: Duration,
) -> Result<Download, FetchError> {
    let mut attempt = 0;
    loop {
        match download_file(client, url) {
            Err(e) if attempt < retries && e.is_retryable() => {
                attempt += 1;
                warn!(
                    "attempt {} for {} failed ({}), retrying in {:?}",
                    attempt, url, e, delay
                );
                thread::sleep(delay);
            }
            result => return result,
        }
    }
}
