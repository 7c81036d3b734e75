//! `--format json` envelope
//!
//! Panels printed by `show` and `watch` have the shape
//! `{ "data": ..., "meta": { "timestamp": ..., "version": ... } }` so scripts
//! can tell when a panel was rendered and by which release.

use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T> {
    pub data: T,
    pub meta: Metadata,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Metadata {
    /// RFC 3339 render time
    pub timestamp: String,
    pub version: String,
}

impl<T> JsonOutput<T> {
    /// Stamp `data` with the current time and crate version
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}

/// Wrap `data` in the envelope and pretty-print it
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data))
}
