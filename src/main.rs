//! Visitor counter - site visitor statistics in your terminal

use clap::Parser;

mod cache;
mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod widget;

use cli::args::GlobalOptions;
use cli::{CacheCommands, Cli, Commands};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// Route diagnostics to stderr. Fetch failures are logged at `warn`, which
/// stays hidden unless `--debug` or `RUST_LOG` asks for it.
fn init_logging(debug: bool) {
    let default_filter = if debug { "debug" } else { "error" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Show => cli::show::run(&opts).await,
        Commands::Watch => cli::watch::run(&opts).await,
        Commands::Init {
            ref api_url,
            ref number_locale,
            refresh_secs,
        } => cli::init::run(&opts, api_url, number_locale.as_deref(), refresh_secs),
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("visitor-counter version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Cache(ref cmd) => match cmd {
            CacheCommands::Status => cli::cache::status(&opts),
            CacheCommands::Clear => cli::cache::clear(&opts),
            CacheCommands::Path => cli::cache::path(&opts),
        },
        Commands::Completion { shell } => {
            cli::completions::run(shell);
            Ok(())
        }
    }
}
