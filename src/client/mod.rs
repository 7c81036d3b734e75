//! Stats endpoint client

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FetchError;

pub mod http;
#[cfg(test)]
pub mod mock;

pub use http::HttpStatsClient;
#[cfg(test)]
pub use mock::MockStatsClient;

/// Remote visitor statistics source
#[async_trait]
pub trait StatsApi: Send + Sync {
    /// Fetch the current today/total counts from `url`
    async fn fetch_stats(&self, url: &str) -> Result<StatsPayload, FetchError>;
}

/// Counts as returned by the stats endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsPayload {
    /// Visitors today
    pub today: u64,

    /// Visitors all time
    pub total: u64,
}

impl StatsPayload {
    /// Parse a response body. Extra fields such as `lastUpdated` are ignored.
    pub fn from_json(body: &Value) -> Result<Self, FetchError> {
        let obj = body
            .as_object()
            .ok_or_else(|| FetchError::PayloadInvalid("expected a JSON object".to_string()))?;

        let field = |name: &str| -> Result<u64, FetchError> {
            let value = obj.get(name).unwrap_or(&Value::Null);
            parse_count(value, true).ok_or_else(|| {
                FetchError::PayloadInvalid(format!("'{}' is not a valid count: {}", name, value))
            })
        };

        Ok(Self {
            today: field("today")?,
            total: field("total")?,
        })
    }

    /// Stamp the counts with a capture time
    pub fn captured_at(self, at: DateTime<Utc>) -> StatsSnapshot {
        StatsSnapshot {
            today: self.today,
            total: self.total,
            captured_at: at,
        }
    }
}

/// One today/total pair at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub today: u64,
    pub total: u64,
    pub captured_at: DateTime<Utc>,
}

/// Interpret a JSON value as a visitor count.
///
/// Accepts finite, non-negative, integral numbers. With `allow_strings`,
/// strings holding such a number (after trimming) are accepted too.
pub fn parse_count(value: &Value, allow_strings: bool) -> Option<u64> {
    match value {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                return Some(u);
            }
            n.as_f64().and_then(integral_count)
        }
        Value::String(s) if allow_strings => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed
                .parse::<u64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().and_then(integral_count))
        }
        _ => None,
    }
}

fn integral_count(f: f64) -> Option<u64> {
    if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 {
        Some(f as u64)
    } else {
        None
    }
}
