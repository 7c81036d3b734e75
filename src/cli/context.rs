//! Command execution context
//!
//! Merges the config file with CLI/env overrides and builds the widget
//! parts commands need.

use crate::cache::{KeyValueStore, MemoryStore, SqliteStore};
use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::HttpStatsClient;
use crate::config::{Config, validate_api_url};
use crate::error::Result;
use crate::widget::{Display, StatsWidget, WidgetSettings};

/// Store handed to the widget
pub type BoxedStore = Box<dyn KeyValueStore>;

/// Context for command execution containing config and runtime options.
pub struct CommandContext {
    /// Loaded configuration (defaults when no file exists)
    pub config: Config,
    /// Widget settings after applying overrides
    pub settings: WidgetSettings,
    /// Output format preference
    pub format: OutputFormat,
    cache_dir: Option<String>,
    no_cache: bool,
}

impl CommandContext {
    /// Load config and apply overrides.
    ///
    /// # Errors
    /// Returns error if an existing config file cannot be parsed, or the
    /// endpoint override is not an http(s) URL.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_or_default(opts.config_ref())?;

        if let Some(api) = opts.api_ref().filter(|a| !a.trim().is_empty()) {
            validate_api_url(api)?;
        }

        let settings = WidgetSettings::from_config(&config, opts.api_ref(), opts.locale_ref());

        Ok(Self {
            config,
            settings,
            format: opts.format,
            cache_dir: opts.cache_dir.clone(),
            no_cache: opts.no_cache,
        })
    }

    /// Open the snapshot store.
    ///
    /// An unavailable disk cache degrades to memory; it never fails the command.
    pub fn open_store(&self) -> BoxedStore {
        if self.no_cache {
            return Box::new(MemoryStore::new());
        }

        let opened = SqliteStore::resolve_dir(self.cache_dir.as_deref())
            .and_then(|dir| SqliteStore::open_at(&dir));
        match opened {
            Ok(store) => Box::new(store),
            Err(e) => {
                log::warn!("Cache unavailable, continuing without it: {}", e);
                Box::new(MemoryStore::new())
            }
        }
    }

    /// Open the on-disk store for cache management commands
    pub fn open_disk_store(&self) -> Result<SqliteStore> {
        let dir = SqliteStore::resolve_dir(self.cache_dir.as_deref())?;
        Ok(SqliteStore::open_at(&dir)?)
    }

    /// Build a widget rendering into `display`
    pub fn widget<D: Display>(
        &self,
        display: D,
    ) -> Result<StatsWidget<HttpStatsClient, BoxedStore, D>> {
        let api = HttpStatsClient::new()?;
        Ok(StatsWidget::new(
            self.settings.clone(),
            api,
            self.open_store(),
            display,
        ))
    }
}
