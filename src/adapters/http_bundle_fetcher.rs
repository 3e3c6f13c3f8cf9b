//! Bundle fetcher backed by the gist HTTP API.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use url::Url;

use crate::domain::{AppError, Bundle, BundleFile};
use crate::ports::BundleFetcher;

const DEFAULT_ENDPOINT: &str = "https://api.github.com/gists/";
const FETCH_TIMEOUT_SECS: u64 = 30;

// The gist API rejects requests without a user agent.
const USER_AGENT: &str = concat!("sprig/", env!("CARGO_PKG_VERSION"));

/// HTTP client performing a single unauthenticated GET per bundle id.
#[derive(Debug, Clone)]
pub struct HttpBundleFetcher {
    endpoint: Url,
    client: Client,
}

/// Wire shape of the endpoint's response body.
#[derive(Debug, Deserialize)]
struct BundleBody {
    files: BTreeMap<String, BundleFile>,
}

impl HttpBundleFetcher {
    /// Create a fetcher against a custom endpoint (used by tests).
    pub fn new(endpoint: Url) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { endpoint, client })
    }

    /// Create a fetcher against the default gist endpoint.
    pub fn default_endpoint() -> Result<Self, AppError> {
        let endpoint = Url::parse(DEFAULT_ENDPOINT)
            .map_err(|e| AppError::config_error(format!("Invalid bundle endpoint: {e}")))?;
        Self::new(endpoint)
    }

    fn bundle_url(&self, id: &str) -> Result<Url, AppError> {
        self.endpoint
            .join(id)
            .map_err(|e| AppError::Fetch { id: id.to_string(), details: e.to_string() })
    }
}

impl BundleFetcher for HttpBundleFetcher {
    fn fetch(&self, id: &str) -> Result<Bundle, AppError> {
        let url = self.bundle_url(id)?;

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| AppError::Fetch { id: id.to_string(), details: e.to_string() })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Fetch { id: id.to_string(), details: format!("HTTP {status}") });
        }

        let body = response
            .text()
            .map_err(|e| AppError::Fetch { id: id.to_string(), details: e.to_string() })?;

        let parsed: BundleBody = serde_json::from_str(&body)
            .map_err(|e| AppError::BundleParse { id: id.to_string(), details: e.to_string() })?;

        Ok(Bundle { id: id.to_string(), files: parsed.files })
    }
}
