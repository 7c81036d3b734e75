//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod cache;
pub mod completions;
pub mod context;
pub mod init;
pub mod show;
pub mod status;
pub mod watch;

pub use args::OutputFormat;
pub use context::CommandContext;

/// Visitor counter - site visitor statistics in your terminal
#[derive(Parser, Debug)]
#[command(name = "visitor-counter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "VISITOR_COUNTER_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "VISITOR_COUNTER_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Stats endpoint URL (overrides api_url from config)
    #[arg(long, global = true, env = "VISITOR_COUNTER_API", hide_env = true)]
    pub api: Option<String>,

    /// Number locale, e.g. en-US, de, fr, plain
    #[arg(long, global = true, env = "VISITOR_COUNTER_LOCALE", hide_env = true)]
    pub locale: Option<String>,

    /// Override cache directory
    #[arg(long, global = true, env = "VISITOR_COUNTER_CACHE_DIR", hide_env = true)]
    pub cache_dir: Option<String>,

    /// Do not read or write the on-disk snapshot cache
    #[arg(long, global = true, env = "VISITOR_COUNTER_NO_CACHE", hide_env = true)]
    pub no_cache: bool,

    /// Enable debug logging
    #[arg(long, global = true, env = "VISITOR_COUNTER_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch and show visitor counts once
    Show,

    /// Keep showing visitor counts, refreshing periodically until Ctrl-C
    Watch,

    /// Write the config file
    Init {
        /// Stats endpoint URL
        #[arg(long = "api-url")]
        api_url: String,

        /// Number locale to store in the config
        #[arg(long = "number-locale")]
        number_locale: Option<String>,

        /// Refresh interval in seconds for `watch`
        #[arg(long = "refresh-secs")]
        refresh_secs: Option<u64>,
    },

    /// Show configuration and cache status
    Status,

    /// Display version information
    Version,

    /// Manage the local snapshot cache
    #[command(subcommand)]
    Cache(CacheCommands),

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   visitor-counter completion bash > /etc/bash_completion.d/visitor-counter
  zsh:    visitor-counter completion zsh > \"${fpath[1]}/_visitor-counter\"
  fish:   visitor-counter completion fish > ~/.config/fish/completions/visitor-counter.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Cache management subcommands
#[derive(Subcommand, Debug)]
pub enum CacheCommands {
    /// Show cache statistics and the stored snapshot
    Status,

    /// Remove all cached entries
    Clear,

    /// Print the cache directory
    Path,
}
