//! Configuration management for the visitor counter

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Hint shown when no stats endpoint is configured
pub const DEFAULT_REMOVED_MESSAGE: &str = "Visitor statistics have been removed.";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Stats endpoint URL. Absent means placeholder mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Number locale tag (e.g. `en-US`, `de`, `ko-KR`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Hint text shown in placeholder mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed_message: Option<String>,

    /// Refresh interval override in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_secs: Option<u64>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".visitor-counter").join("config.yaml"))
    }

    /// Resolve an optional override into a concrete path
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration, falling back to defaults when no file exists.
    ///
    /// The widget runs fine without a config file (it just shows placeholders),
    /// so only a file that exists but cannot be parsed is an error.
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        match Self::load_from(Self::resolve_path(path)?) {
            Ok(config) => Ok(config),
            Err(crate::error::Error::Config(ConfigError::NotFound)) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        Ok(())
    }

    /// Reject values the widget cannot work with
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url) = self.api_url {
            validate_api_url(url)?;
        }
        if self.refresh_secs == Some(0) {
            return Err(ConfigError::Invalid("refresh_secs must be greater than 0".to_string()).into());
        }
        Ok(())
    }

    /// Hint text for placeholder mode
    pub fn removed_message(&self) -> &str {
        self.removed_message
            .as_deref()
            .unwrap_or(DEFAULT_REMOVED_MESSAGE)
    }
}

/// Check that an endpoint looks like an absolute http(s) URL
pub fn validate_api_url(url: &str) -> Result<()> {
    let parsed = reqwest::Url::parse(url)
        .map_err(|e| ConfigError::Invalid(format!("api_url '{}': {}", url, e)))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::Invalid(format!(
            "api_url must use http or https, got '{}'",
            other
        ))
        .into()),
    }
}
