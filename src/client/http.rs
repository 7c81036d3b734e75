//! reqwest-backed stats client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, header};
use serde_json::Value;

use super::{StatsApi, StatsPayload};
use crate::error::FetchError;

/// Connect timeout; the overall bound is applied by the widget
const CONNECT_TIMEOUT: Duration = Duration::from_secs(3);

/// Plain HTTP client for the stats endpoint.
///
/// Requests go out without cookies or credentials and ask for JSON.
pub struct HttpStatsClient {
    http: HttpClient,
}

impl HttpStatsClient {
    /// Create a new client
    pub fn new() -> Result<Self, FetchError> {
        let http = HttpClient::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .user_agent(concat!("visitor-counter/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self { http })
    }
}

#[async_trait]
impl StatsApi for HttpStatsClient {
    async fn fetch_stats(&self, url: &str) -> Result<StatsPayload, FetchError> {
        log::debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(FetchError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| FetchError::PayloadInvalid(format!("Failed to parse response: {}", e)))?;

        StatsPayload::from_json(&body)
    }
}
