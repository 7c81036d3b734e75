//! Local cache for the last known visitor counts
//!
//! The widget persists one snapshot under a fixed key so a fresh value can be
//! shown before the network answers. Storage is pluggable through
//! [`KeyValueStore`]: SQLite on disk, or memory for `--no-cache` and tests.

pub mod entry;
pub mod memory;
pub mod storage;

use std::time::Duration;

use crate::error::CacheError;

/// Key under which the snapshot is stored
pub const CACHE_KEY: &str = "visitor-counter:cache:v1";

/// Cache TTL configuration
pub struct CacheTtl;

impl CacheTtl {
    /// Visitor counts move quickly; the endpoint caches on its side too
    pub const STATS: Duration = Duration::from_secs(5 * 60); // 5 min
}

/// Minimal string key-value capability the widget needs
pub trait KeyValueStore: Send {
    /// Read a raw value
    fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Overwrite a raw value
    fn set(&mut self, key: &str, value: &str) -> Result<(), CacheError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), CacheError> {
        (**self).set(key, value)
    }
}

// Re-export main types
pub use entry::{CacheEntry, read_cache, write_cache};
pub use memory::MemoryStore;
pub use storage::SqliteStore;
