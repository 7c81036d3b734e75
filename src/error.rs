//! Error types for the visitor counter

use std::time::Duration;
use thiserror::Error;

/// Result type alias for visitor counter operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures of a single stats fetch.
///
/// None of these reach the user: the widget logs them and keeps whatever
/// the panel already shows.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {0}")]
    HttpStatus(u16),

    #[error("Invalid payload: {0}")]
    PayloadInvalid(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            FetchError::Network("Failed to connect to stats endpoint".to_string())
        } else if err.is_decode() {
            FetchError::PayloadInvalid(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

/// Local cache errors
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Could not determine cache directory")]
    NoHome,

    #[error("Cache I/O error: {0}")]
    Io(String),

    #[error("Cache database error: {0}")]
    Database(String),

    #[error("Invalid cache entry: {0}")]
    Invalid(String),

    #[error("Cache entry expired ({age_ms} ms old)")]
    Expired { age_ms: i64 },
}

impl From<rusqlite::Error> for CacheError {
    fn from(err: rusqlite::Error) -> Self {
        CacheError::Database(err.to_string())
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `visitor-counter init` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_http_status_message() {
        let err = FetchError::HttpStatus(503);
        assert_eq!(err.to_string(), "HTTP 503");
    }

    #[test]
    fn test_fetch_error_timeout_message() {
        let err = FetchError::Timeout(Duration::from_millis(4500));
        let msg = err.to_string();
        assert!(msg.contains("timed out"));
        assert!(msg.contains("4.5"));
    }

    #[test]
    fn test_fetch_error_payload() {
        let err = FetchError::PayloadInvalid("today is not a number".to_string());
        assert!(err.to_string().contains("today is not a number"));
    }

    #[test]
    fn test_cache_error_expired() {
        let err = CacheError::Expired { age_ms: 301_000 };
        assert!(err.to_string().contains("301000"));
    }

    #[test]
    fn test_config_error_not_found() {
        let err = ConfigError::NotFound;
        assert!(err.to_string().contains("visitor-counter init"));
    }

    #[test]
    fn test_error_from_fetch_error() {
        let err: Error = FetchError::HttpStatus(404).into();

        match err {
            Error::Fetch(FetchError::HttpStatus(404)) => (),
            _ => panic!("Expected Error::Fetch(FetchError::HttpStatus(404))"),
        }
    }

    #[test]
    fn test_error_from_config_error() {
        let err: Error = ConfigError::NotFound.into();

        match err {
            Error::Config(ConfigError::NotFound) => (),
            _ => panic!("Expected Error::Config(ConfigError::NotFound)"),
        }
    }

    #[test]
    fn test_config_error_from_yaml_error() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("api_url: [oops").unwrap_err();
        let config_err: ConfigError = yaml_err.into();

        match config_err {
            ConfigError::ParseError(_) => (),
            _ => panic!("Expected ConfigError::ParseError"),
        }
    }
}
