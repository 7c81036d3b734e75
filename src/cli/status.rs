//! Status command implementation

use chrono::Utc;
use colored::Colorize;

use crate::cache::{CACHE_KEY, CacheEntry, KeyValueStore};
use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::cli::context::CommandContext;
use crate::config::Config;
use crate::error::Result;
use crate::output::formatters::{format_age, format_local};
use crate::widget::format_count;

/// Display configuration and cached snapshot status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let config_path = Config::resolve_path(opts.config_ref())?;
    let store = ctx.open_store();
    let entry = store
        .get(CACHE_KEY)
        .ok()
        .flatten()
        .and_then(|raw| CacheEntry::decode(&raw).ok());
    let now = Utc::now();

    if ctx.format == OutputFormat::Json {
        let json = serde_json::json!({
            "config_path": config_path.display().to_string(),
            "config_exists": config_path.exists(),
            "endpoint": ctx.settings.endpoint,
            "locale": ctx.settings.locale.tag(),
            "refresh_secs": ctx.settings.refresh_interval.as_secs(),
            "cache": entry.map(|e| serde_json::json!({
                "ts": e.ts,
                "today": e.today,
                "total": e.total,
                "fresh": e.is_fresh(ctx.settings.cache_ttl, now),
            })),
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    println!("{}\n", "Visitor Counter Status".bold());

    if config_path.exists() {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!("Config file: {} {}", config_path.display().to_string().cyan(), "(not found)".dimmed());
    }

    match ctx.settings.endpoint {
        Some(ref url) => println!("{} Endpoint: {}", "✓".green(), url),
        None => {
            println!("{} No endpoint configured (placeholder mode)", "○".dimmed());
            println!("  → Run 'visitor-counter init --api-url <URL>' to set one");
        }
    }

    println!("{} Number format: {}", "○".dimmed(), ctx.settings.locale.tag());
    println!(
        "{} Refresh interval: {}s",
        "○".dimmed(),
        ctx.settings.refresh_interval.as_secs()
    );

    match entry {
        Some(entry) => {
            let age = format_age(entry.age_ms(now));
            let when = entry
                .to_snapshot()
                .map(|s| format_local(s.captured_at))
                .unwrap_or_else(|_| "unknown".to_string());
            let counts = format!(
                "today {}, total {}",
                format_count(entry.today, ctx.settings.locale),
                format_count(entry.total, ctx.settings.locale)
            );
            if entry.is_fresh(ctx.settings.cache_ttl, now) {
                println!("{} Cached snapshot: {} ({}, {})", "✓".green(), counts, when, age);
            } else {
                println!(
                    "{} Cached snapshot expired: {} ({}, {})",
                    "⚠".yellow(),
                    counts,
                    when,
                    age
                );
            }
        }
        None => println!("{} No cached snapshot", "○".dimmed()),
    }

    println!();
    Ok(())
}
