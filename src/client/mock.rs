//! Mock stats client for testing
//!
//! Serves queued responses in order, optionally after a delay, and records
//! every requested URL.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use super::{StatsApi, StatsPayload};
use crate::error::FetchError;

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockStatsClient::new().with_stats(5, 100);
/// let stats = mock.fetch_stats("http://example.test/stats").await?;
/// assert_eq!(stats.today, 5);
/// ```
#[derive(Clone, Default)]
pub struct MockStatsClient {
    /// Responses served in order; the last one repeats
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Delay applied before answering
    delay: Arc<Mutex<Option<Duration>>>,
    /// URLs requested so far
    requests: Arc<Mutex<Vec<String>>>,
}

#[derive(Clone)]
enum MockResponse {
    Stats(StatsPayload),
    Network(String),
    Status(u16),
    Payload(String),
    Body(Value),
}

impl MockStatsClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response
    pub fn with_stats(self, today: u64, total: u64) -> Self {
        self.push(MockResponse::Stats(StatsPayload { today, total }));
        self
    }

    /// Queue a transport failure
    pub fn with_network_error(self, msg: &str) -> Self {
        self.push(MockResponse::Network(msg.to_string()));
        self
    }

    /// Queue a non-2xx response
    pub fn with_status(self, status: u16) -> Self {
        self.push(MockResponse::Status(status));
        self
    }

    /// Queue a malformed payload
    pub fn with_invalid_payload(self, msg: &str) -> Self {
        self.push(MockResponse::Payload(msg.to_string()));
        self
    }

    /// Queue a raw response body, validated like a real one
    pub fn with_body(self, body: Value) -> Self {
        self.push(MockResponse::Body(body));
        self
    }

    /// Answer every request after `delay`
    pub fn with_delay(self, delay: Duration) -> Self {
        if let Ok(mut guard) = self.delay.try_lock() {
            *guard = Some(delay);
        }
        self
    }

    fn push(&self, response: MockResponse) {
        if let Ok(mut guard) = self.responses.try_lock() {
            guard.push_back(response);
        }
    }

    /// Number of fetches made so far
    pub async fn call_count(&self) -> usize {
        self.requests.lock().await.len()
    }

    /// URLs requested so far
    pub async fn requested_urls(&self) -> Vec<String> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl StatsApi for MockStatsClient {
    async fn fetch_stats(&self, url: &str) -> Result<StatsPayload, FetchError> {
        self.requests.lock().await.push(url.to_string());

        let delay = *self.delay.lock().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let response = {
            let mut queue = self.responses.lock().await;
            if queue.len() > 1 {
                queue.pop_front()
            } else {
                queue.front().cloned()
            }
        };

        match response {
            Some(MockResponse::Stats(payload)) => Ok(payload),
            Some(MockResponse::Network(msg)) => Err(FetchError::Network(msg)),
            Some(MockResponse::Status(status)) => Err(FetchError::HttpStatus(status)),
            Some(MockResponse::Payload(msg)) => Err(FetchError::PayloadInvalid(msg)),
            Some(MockResponse::Body(body)) => StatsPayload::from_json(&body),
            None => Err(FetchError::Network("no mock response configured".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_serves_in_order_and_repeats_last() {
        let mock = MockStatsClient::new().with_status(500).with_stats(1, 2);

        assert!(matches!(
            mock.fetch_stats("u").await,
            Err(FetchError::HttpStatus(500))
        ));
        assert_eq!(mock.fetch_stats("u").await.unwrap().total, 2);
        assert_eq!(mock.fetch_stats("u").await.unwrap().total, 2);
        assert_eq!(mock.call_count().await, 3);
    }

    #[tokio::test]
    async fn test_mock_records_urls() {
        let mock = MockStatsClient::new().with_stats(0, 0);
        mock.fetch_stats("http://a.test/stats").await.unwrap();
        assert_eq!(mock.requested_urls().await, vec!["http://a.test/stats"]);
    }

    #[tokio::test]
    async fn test_mock_without_responses_fails() {
        let mock = MockStatsClient::new();
        assert!(mock.fetch_stats("u").await.is_err());
    }
}
