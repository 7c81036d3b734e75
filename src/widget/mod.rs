//! Visitor statistics widget
//!
//! One render cycle: show a fresh cached snapshot right away, fetch the
//! current counts with a bounded timeout, then either render and cache them
//! or leave the panel exactly as it was. Failures never reach the user; they
//! are logged and the next tick tries again.

pub mod display;
pub mod format;

use chrono::Utc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::cache::{CacheTtl, KeyValueStore, read_cache, write_cache};
use crate::client::{StatsApi, StatsPayload, StatsSnapshot};
use crate::config::{Config, DEFAULT_REMOVED_MESSAGE};
use crate::error::FetchError;

pub use display::{Display, Panel, SharedPanel, Slot};
pub use format::{NumberLocale, PLACEHOLDER, format_count};

/// Widget timing and presentation settings
#[derive(Debug, Clone)]
pub struct WidgetSettings {
    /// Stats endpoint; `None` switches to placeholder mode
    pub endpoint: Option<String>,

    /// Maximum age of a cached snapshot that may be shown
    pub cache_ttl: Duration,

    /// Upper bound for one fetch
    pub fetch_timeout: Duration,

    /// Delay between render cycles
    pub refresh_interval: Duration,

    /// Hint text for placeholder mode
    pub removed_message: String,

    pub locale: NumberLocale,
}

impl WidgetSettings {
    pub const FETCH_TIMEOUT: Duration = Duration::from_millis(4500);
    pub const REFRESH_INTERVAL: Duration = Duration::from_secs(10 * 60);

    pub fn new(endpoint: Option<String>) -> Self {
        Self {
            endpoint,
            cache_ttl: CacheTtl::STATS,
            fetch_timeout: Self::FETCH_TIMEOUT,
            refresh_interval: Self::REFRESH_INTERVAL,
            removed_message: DEFAULT_REMOVED_MESSAGE.to_string(),
            locale: NumberLocale::default(),
        }
    }

    /// Build settings from the config file plus CLI/env overrides
    pub fn from_config(config: &Config, endpoint: Option<&str>, locale: Option<&str>) -> Self {
        let endpoint = endpoint
            .filter(|url| !url.trim().is_empty())
            .or_else(|| {
                config
                    .api_url
                    .as_deref()
                    .filter(|url| !url.trim().is_empty())
            })
            .map(str::to_string);

        let mut settings = Self::new(endpoint);
        settings.removed_message = config.removed_message().to_string();
        settings.locale = NumberLocale::resolve(locale.or(config.locale.as_deref()));
        if let Some(secs) = config.refresh_secs.filter(|s| *s > 0) {
            settings.refresh_interval = Duration::from_secs(secs);
        }
        settings
    }
}

/// Result of one render cycle
#[derive(Debug)]
pub enum UpdateOutcome {
    /// No endpoint configured; placeholders and the removal hint are shown
    Placeholder,

    /// Fresh counts were rendered and cached
    Updated(StatsSnapshot),

    /// The fetch failed and the panel was left as it was
    Retained { from_cache: bool, error: FetchError },
}

/// Renders visitor counts into a [`Display`]
pub struct StatsWidget<A, S, D> {
    settings: WidgetSettings,
    api: A,
    store: S,
    display: D,
}

impl<A, S, D> StatsWidget<A, S, D>
where
    A: StatsApi,
    S: KeyValueStore,
    D: Display,
{
    pub fn new(settings: WidgetSettings, api: A, store: S, display: D) -> Self {
        Self {
            settings,
            api,
            store,
            display,
        }
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Run one full cycle
    pub async fn update_once(&mut self) -> UpdateOutcome {
        let Some(url) = self.settings.endpoint.clone() else {
            self.render_placeholder();
            return UpdateOutcome::Placeholder;
        };

        let cached = self.load_cached();
        if let Some(ref snapshot) = cached {
            log::debug!(
                "Showing cached stats from {}",
                snapshot.captured_at.to_rfc3339()
            );
            self.render_counts(snapshot.today, snapshot.total);
            self.display.flush();
        }

        match fetch_with_timeout(&self.api, &url, self.settings.fetch_timeout).await {
            Ok(payload) => {
                let snapshot = payload.captured_at(Utc::now());
                self.render_counts(snapshot.today, snapshot.total);
                if let Err(e) = write_cache(&mut self.store, &snapshot) {
                    log::debug!("Failed to write stats cache: {}", e);
                }
                self.display.flush();
                UpdateOutcome::Updated(snapshot)
            }
            Err(error) => {
                if cached.is_none() {
                    self.keep_placeholders();
                    self.display.flush();
                }
                log::warn!("visitor-counter: {}", error);
                UpdateOutcome::Retained {
                    from_cache: cached.is_some(),
                    error,
                }
            }
        }
    }

    /// Start the widget: first cycle now, then one per refresh interval.
    ///
    /// Without an endpoint the placeholders are rendered once and no timer
    /// is started. Must be called from within a tokio runtime.
    pub fn initialize(mut self) -> WidgetHandle
    where
        A: 'static,
        S: 'static,
        D: 'static,
    {
        if self.settings.endpoint.is_none() {
            self.render_placeholder();
            return WidgetHandle {
                stop: None,
                task: None,
            };
        }

        let (stop_tx, mut stop_rx) = watch::channel(false);
        let period = self.settings.refresh_interval;

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            // A slow cycle pushes the next tick back instead of bunching ticks up
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    _ = stop_rx.changed() => break,
                    _ = ticker.tick() => {}
                }
                tokio::select! {
                    biased;
                    _ = stop_rx.changed() => break,
                    _ = self.update_once() => {}
                }
            }
            log::debug!("Widget refresh timer stopped");
        });

        WidgetHandle {
            stop: Some(stop_tx),
            task: Some(task),
        }
    }

    /// Placeholder mode: dashes plus the removal hint
    fn render_placeholder(&mut self) {
        self.display.set_text(Slot::Today, PLACEHOLDER);
        self.display.set_text(Slot::Total, PLACEHOLDER);
        let message = self.settings.removed_message.clone();
        self.display.set_text(Slot::Hint, &message);
        self.display.flush();
    }

    fn render_counts(&mut self, today: u64, total: u64) {
        let locale = self.settings.locale;
        self.display.set_text(Slot::Today, &format_count(today, locale));
        self.display.set_text(Slot::Total, &format_count(total, locale));
    }

    /// Keep existing text; only empty slots fall back to the dash
    fn keep_placeholders(&mut self) {
        for slot in [Slot::Today, Slot::Total] {
            if let Some(text) = self.display.text(slot)
                && text.is_empty()
            {
                self.display.set_text(slot, PLACEHOLDER);
            }
        }
    }

    fn load_cached(&self) -> Option<StatsSnapshot> {
        match read_cache(&self.store, self.settings.cache_ttl, Utc::now()) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                log::debug!("Ignoring cached stats: {}", e);
                None
            }
        }
    }
}

/// Fetch bounded by `limit`; the request is dropped when the bound passes
async fn fetch_with_timeout<A: StatsApi + ?Sized>(
    api: &A,
    url: &str,
    limit: Duration,
) -> Result<StatsPayload, FetchError> {
    match tokio::time::timeout(limit, api.fetch_stats(url)).await {
        Ok(result) => result,
        Err(_) => Err(FetchError::Timeout(limit)),
    }
}

/// Owns the refresh timer of an initialized widget.
///
/// Dropping the handle aborts the timer task.
pub struct WidgetHandle {
    stop: Option<watch::Sender<bool>>,
    task: Option<JoinHandle<()>>,
}

impl WidgetHandle {
    /// Whether a refresh timer is running
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Stop the timer and wait for the task to end
    pub async fn shutdown(mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(true);
        }
        if let Some(task) = self.task.take()
            && let Err(e) = task.await
        {
            log::debug!("Widget task ended abnormally: {}", e);
        }
    }
}

impl Drop for WidgetHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
