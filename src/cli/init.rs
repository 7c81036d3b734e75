//! Init command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::config::{Config, validate_api_url};
use crate::error::{ConfigError, Result};
use crate::widget::NumberLocale;

/// Write the endpoint (and optional settings) into the config file.
///
/// Existing values not given on the command line are kept.
pub fn run(
    opts: &GlobalOptions,
    api_url: &str,
    number_locale: Option<&str>,
    refresh_secs: Option<u64>,
) -> Result<()> {
    validate_api_url(api_url)?;
    if refresh_secs == Some(0) {
        return Err(ConfigError::Invalid("--refresh-secs must be greater than 0".to_string()).into());
    }

    let path = Config::resolve_path(opts.config_ref())?;
    let mut config = Config::load_or_default(opts.config_ref())?;

    config.api_url = Some(api_url.to_string());
    if let Some(locale) = number_locale {
        config.locale = Some(locale.to_string());
    }
    if let Some(secs) = refresh_secs {
        config.refresh_secs = Some(secs);
    }

    config.save_to(path.clone())?;

    println!("{} Saved configuration to {}", "✓".green(), path.display().to_string().cyan());
    println!("  Endpoint: {}", api_url);
    println!(
        "  Numbers:  {}",
        NumberLocale::resolve(config.locale.as_deref()).tag()
    );
    Ok(())
}
