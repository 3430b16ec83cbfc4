//! Resource fetcher implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::domain::{AppError, SourceConfig};
use crate::ports::{FetchOutcome, ResourceFetcher};

/// Blocking HTTP client for workbook and text bank downloads.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &SourceConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl ResourceFetcher for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<FetchOutcome, AppError> {
        let response =
            self.client.get(url.clone()).send().map_err(|e| AppError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Ok(FetchOutcome::Missing { status: status.as_u16() });
        }

        let body = response.bytes().map_err(|e| AppError::Http(e.to_string()))?;
        Ok(FetchOutcome::Found(body.to_vec()))
    }
}
