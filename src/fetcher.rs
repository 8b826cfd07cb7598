//! HTTP fetch of the raw page HTML
//!
//! One timed GET per run. The screenshot stage does not reuse this
//! response; the browser fetches the page again on its own.

use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::error::SnapshotError;

/// HTTP client wrapper for the single page fetch
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new(config: &Config) -> Result<Self, SnapshotError> {
        let client = reqwest::Client::builder()
            .timeout(config.fetch_timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| SnapshotError::ConfigurationError(e.to_string()))?;

        Ok(Self { client })
    }

    /// Fetch the raw response body.
    ///
    /// The bytes are returned untouched so the HTML artifact can be
    /// persisted verbatim. Any status other than 200 is an error
    /// carrying the status code. There is no retry; transport failures
    /// propagate directly.
    pub async fn fetch(&self, url: &Url) -> Result<Vec<u8>, SnapshotError> {
        debug!("Fetching {}", url);

        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(SnapshotError::HttpStatus(status.as_u16()));
        }

        let body = response.bytes().await?;
        debug!("Fetched {} bytes from {}", body.len(), url);

        Ok(body.to_vec())
    }
}
