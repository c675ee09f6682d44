//! Shared plumbing for tools backed by a RapidAPI endpoint.
//!
//! RapidAPI authenticates every request with the same two headers, so the
//! key and host live here and each tool only supplies a path.

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use super::ToolError;

pub const KEY_HEADER: &str = "X-RapidAPI-Key";
pub const HOST_HEADER: &str = "X-RapidAPI-Host";

/// A RapidAPI endpoint bound to one host and API key.
#[derive(Clone)]
pub struct RapidApiClient {
    client: Client,
    api_key: String,
    host: String,
    base_url: String,
}

impl RapidApiClient {
    /// Returns `ToolError::MissingApiKey` when `api_key` is blank.
    pub fn new(
        client: Client,
        api_key: &str,
        host: &str,
        base_url: &str,
        service: &'static str,
    ) -> Result<Self, ToolError> {
        if api_key.trim().is_empty() {
            return Err(ToolError::MissingApiKey { service });
        }

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            host: host.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full URL for `path` on this endpoint.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET `path` and decode the body as JSON.
    pub async fn get_json(&self, path: &str) -> Result<Value, ToolError> {
        let url = self.url(path);
        debug!(url = %url, host = %self.host, "RapidAPI request");

        let response = self
            .client
            .get(&url)
            .header(KEY_HEADER, &self.api_key)
            .header(HOST_HEADER, &self.host)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, url = %url, "RapidAPI returned an error");
            return Err(ToolError::Status { url, status });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
