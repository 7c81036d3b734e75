//! Cached snapshot encoding and freshness

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

use super::{CACHE_KEY, KeyValueStore};
use crate::client::{StatsSnapshot, parse_count};
use crate::error::CacheError;

/// Persisted form of a snapshot: `{ "ts": epoch-ms, "today": n, "total": n }`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub ts: i64,
    pub today: u64,
    pub total: u64,
}

impl CacheEntry {
    pub fn from_snapshot(snapshot: &StatsSnapshot) -> Self {
        Self {
            ts: snapshot.captured_at.timestamp_millis(),
            today: snapshot.today,
            total: snapshot.total,
        }
    }

    /// Decode a stored value. Every field must be a JSON number and `ts`
    /// must be a representable instant.
    pub fn decode(raw: &str) -> Result<Self, CacheError> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| CacheError::Invalid(e.to_string()))?;
        let obj = value
            .as_object()
            .ok_or_else(|| CacheError::Invalid("not a JSON object".to_string()))?;

        let ts = obj
            .get("ts")
            .and_then(|v| {
                v.as_i64()
                    .or_else(|| v.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
            })
            .ok_or_else(|| CacheError::Invalid("missing or non-numeric 'ts'".to_string()))?;
        if DateTime::from_timestamp_millis(ts).is_none() {
            return Err(CacheError::Invalid(format!("timestamp out of range: {}", ts)));
        }

        let count = |name: &str| {
            obj.get(name)
                .and_then(|v| parse_count(v, false))
                .ok_or_else(|| CacheError::Invalid(format!("missing or non-numeric '{}'", name)))
        };

        Ok(Self {
            ts,
            today: count("today")?,
            total: count("total")?,
        })
    }

    pub fn encode(&self) -> Result<String, CacheError> {
        serde_json::to_string(self).map_err(|e| CacheError::Invalid(e.to_string()))
    }

    /// Milliseconds since the entry was written (negative under clock skew)
    pub fn age_ms(&self, now: DateTime<Utc>) -> i64 {
        now.timestamp_millis().saturating_sub(self.ts)
    }

    /// Fresh while strictly younger than `ttl`
    pub fn is_fresh(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        self.age_ms(now) < ttl.as_millis() as i64
    }

    pub fn to_snapshot(&self) -> Result<StatsSnapshot, CacheError> {
        let captured_at = DateTime::from_timestamp_millis(self.ts)
            .ok_or_else(|| CacheError::Invalid(format!("timestamp out of range: {}", self.ts)))?;
        Ok(StatsSnapshot {
            today: self.today,
            total: self.total,
            captured_at,
        })
    }
}

/// Read the cached snapshot if it is present, well-formed and fresh.
///
/// `Ok(None)` means nothing is stored; a corrupt or stale entry is an error
/// the caller treats as a miss.
pub fn read_cache<S: KeyValueStore + ?Sized>(
    store: &S,
    ttl: Duration,
    now: DateTime<Utc>,
) -> Result<Option<StatsSnapshot>, CacheError> {
    let raw = match store.get(CACHE_KEY)? {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Ok(None),
    };

    let entry = CacheEntry::decode(&raw)?;
    if !entry.is_fresh(ttl, now) {
        return Err(CacheError::Expired {
            age_ms: entry.age_ms(now),
        });
    }

    entry.to_snapshot().map(Some)
}

/// Overwrite the cached snapshot
pub fn write_cache<S: KeyValueStore + ?Sized>(
    store: &mut S,
    snapshot: &StatsSnapshot,
) -> Result<(), CacheError> {
    let encoded = CacheEntry::from_snapshot(snapshot).encode()?;
    store.set(CACHE_KEY, &encoded)
}
