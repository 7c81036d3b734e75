//! Cache management commands

use chrono::Utc;

use crate::cache::{CACHE_KEY, CacheEntry, KeyValueStore, SqliteStore};
use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::cli::context::CommandContext;
use crate::error::Result;
use crate::output::formatters::{format_age, format_size};

/// Show cache status/statistics
pub fn status(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let cache = ctx.open_disk_store()?;
    let stats = cache.stats()?;
    let entry = cache
        .get(CACHE_KEY)?
        .and_then(|raw| CacheEntry::decode(&raw).ok());
    let now = Utc::now();

    match ctx.format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "entries": stats.entries,
                "total_size_bytes": stats.total_size_bytes,
                "total_size_human": format_size(stats.total_size_bytes),
                "last_write_timestamp": stats.last_write,
                "snapshot": entry.map(|e| serde_json::json!({
                    "ts": e.ts,
                    "today": e.today,
                    "total": e.total,
                    "fresh": e.is_fresh(ctx.settings.cache_ttl, now),
                })),
                "path": cache.path().display().to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        _ => {
            println!("Cache Status");
            println!("────────────────────────────────────────");
            println!("Location:       {}", cache.path().display());
            println!("Entries:        {}", stats.entries);
            println!("Total size:     {}", format_size(stats.total_size_bytes));

            match entry {
                Some(e) => {
                    let state = if e.is_fresh(ctx.settings.cache_ttl, now) {
                        "fresh"
                    } else {
                        "expired"
                    };
                    println!(
                        "Snapshot:       today {}, total {} ({}, {})",
                        e.today,
                        e.total,
                        format_age(e.age_ms(now)),
                        state
                    );
                }
                None => println!("Snapshot:       none"),
            }
        }
    }

    Ok(())
}

/// Clear all cache entries
pub fn clear(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let cache = ctx.open_disk_store()?;
    let stats = cache.clear_all()?;

    match ctx.format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "entries_removed": stats.entries_removed,
                "success": true,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        _ => {
            if stats.entries_removed > 0 {
                println!("Cleared {} cache entries", stats.entries_removed);
            } else {
                println!("Cache was already empty");
            }
        }
    }

    Ok(())
}

/// Show cache path
pub fn path(opts: &GlobalOptions) -> Result<()> {
    let path = SqliteStore::resolve_dir(opts.cache_dir_ref())?;
    println!("{}", path.display());
    Ok(())
}
