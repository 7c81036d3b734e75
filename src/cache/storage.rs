//! SQLite-backed key-value storage

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::{Path, PathBuf};

use super::KeyValueStore;
use crate::error::CacheError;

/// Schema version - increment to trigger nuke-and-rebuild
const SCHEMA_VERSION: i32 = 1;

const DB_FILE: &str = "cache.db";

type Result<T> = std::result::Result<T, CacheError>;

/// Persistent store at `~/.cache/visitor-counter/cache.db`
pub struct SqliteStore {
    conn: Connection,
    path: PathBuf,
}

impl SqliteStore {
    /// Get the cache directory path (~/.cache/visitor-counter on Linux)
    pub fn cache_dir() -> Result<PathBuf> {
        let cache_base = dirs::cache_dir().ok_or(CacheError::NoHome)?;
        Ok(cache_base.join("visitor-counter"))
    }

    /// Resolve an optional directory override
    pub fn resolve_dir(dir: Option<&str>) -> Result<PathBuf> {
        match dir {
            Some(d) => Ok(PathBuf::from(d)),
            None => Self::cache_dir(),
        }
    }

    /// Open storage in a specific directory
    pub fn open_at(cache_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(cache_dir)
            .map_err(|e| CacheError::Io(format!("Failed to create cache dir: {}", e)))?;

        let db_path = cache_dir.join(DB_FILE);
        let conn = Connection::open(&db_path)?;

        // Check schema version - nuke if mismatched
        let version: i32 = conn
            .pragma_query_value(None, "user_version", |r| r.get(0))
            .unwrap_or(0);

        if version != 0 && version != SCHEMA_VERSION {
            log::info!(
                "Cache schema version mismatch ({} != {}), rebuilding",
                version,
                SCHEMA_VERSION
            );
            drop(conn);
            std::fs::remove_file(&db_path)
                .map_err(|e| CacheError::Io(format!("Failed to remove cache DB: {}", e)))?;
            return Self::open_at(cache_dir);
        }

        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY NOT NULL,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            );
            "#,
        )?;

        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;

        Ok(Self {
            conn,
            path: db_path,
        })
    }

    /// Database file location
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Clear all entries
    pub fn clear_all(&self) -> Result<ClearStats> {
        let removed = self.conn.execute("DELETE FROM kv", [])?;
        Ok(ClearStats {
            entries_removed: removed,
        })
    }

    /// Get storage statistics
    pub fn stats(&self) -> Result<StoreStats> {
        let (entries, size, newest): (i64, i64, Option<i64>) = self.conn.query_row(
            "SELECT COUNT(*), COALESCE(SUM(LENGTH(value)), 0), MAX(updated_at) FROM kv",
            [],
            |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
        )?;

        Ok(StoreStats {
            entries: entries as usize,
            total_size_bytes: size as usize,
            last_write: newest,
        })
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)",
            params![key, value, Utc::now().timestamp()],
        )?;
        Ok(())
    }
}

/// Statistics about a clear operation
#[derive(Debug)]
pub struct ClearStats {
    pub entries_removed: usize,
}

/// Statistics about stored entries
#[derive(Debug)]
pub struct StoreStats {
    pub entries: usize,
    pub total_size_bytes: usize,
    /// Unix seconds of the most recent write
    pub last_write: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_storage() -> (SqliteStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let storage = SqliteStore::open_at(dir.path()).unwrap();
        (storage, dir)
    }

    #[test]
    fn test_set_get() {
        let (mut storage, _dir) = test_storage();
        storage.set("key1", "value").unwrap();
        assert_eq!(storage.get("key1").unwrap().as_deref(), Some("value"));
        assert_eq!(storage.get("other").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites() {
        let (mut storage, _dir) = test_storage();
        storage.set("key1", "old").unwrap();
        storage.set("key1", "new").unwrap();
        assert_eq!(storage.get("key1").unwrap().as_deref(), Some("new"));
        assert_eq!(storage.stats().unwrap().entries, 1);
    }

    #[test]
    fn test_persists_across_reopen() {
        let dir = TempDir::new().unwrap();
        {
            let mut storage = SqliteStore::open_at(dir.path()).unwrap();
            storage.set("k", "v").unwrap();
        }
        let storage = SqliteStore::open_at(dir.path()).unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_clear_all() {
        let (mut storage, _dir) = test_storage();
        storage.set("k1", "d1").unwrap();
        storage.set("k2", "d2").unwrap();

        let stats = storage.clear_all().unwrap();
        assert_eq!(stats.entries_removed, 2);
        assert!(storage.get("k1").unwrap().is_none());
    }

    #[test]
    fn test_stats() {
        let (mut storage, _dir) = test_storage();
        assert_eq!(storage.stats().unwrap().entries, 0);
        assert!(storage.stats().unwrap().last_write.is_none());

        storage.set("k1", "data1").unwrap();
        let stats = storage.stats().unwrap();
        assert_eq!(stats.entries, 1);
        assert_eq!(stats.total_size_bytes, 5);
        assert!(stats.last_write.is_some());
    }

    #[test]
    fn test_schema_mismatch_rebuilds() {
        let dir = TempDir::new().unwrap();
        {
            let conn = Connection::open(dir.path().join(DB_FILE)).unwrap();
            conn.pragma_update(None, "user_version", 99).unwrap();
        }
        let mut storage = SqliteStore::open_at(dir.path()).unwrap();
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
    }
}
