//! countryctl - browse and search the REST Countries list from the terminal
//!
//! - `browse` (default): interactive TUI with a landing page and a country
//!   browser (debounced search, clear shortcut, card grid)
//! - `list`: fetch once, filter, print a table or JSON
//! - `config`: inspect or create ~/.countryctl/config.toml

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use countryctl_core::{Config, CountrySource, HttpCountrySource};
use tracing::debug;

mod config;
mod list;
mod progress;
mod tracing_setup;
mod tui;

#[derive(Parser, Debug)]
#[command(
    name = "countryctl",
    author,
    version,
    about = "Browse and search the world's countries from the terminal",
    long_about = "Fetches the REST Countries list once, filters it by name as you type \
                  (debounced), and shows the matches as a grid of cards."
)]
struct Cli {
    /// Suppress progress spinners (for scripts and pipes)
    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Config file (default: ~/.countryctl/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the country list endpoint
    #[arg(long, global = true, value_name = "URL")]
    endpoint: Option<String>,

    /// Override the search debounce delay in milliseconds
    #[arg(long, global = true, value_name = "MS")]
    debounce_ms: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the interactive country browser (default)
    Browse,
    /// Print countries matching a search
    List(list::ListArgs),
    /// Manage countryctl configuration (init, show, path)
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Browse);
    progress::init_quiet_mode(cli.quiet);

    // The TUI owns the terminal, so its logs go to a file
    let log_file = matches!(command, Commands::Browse).then(Config::log_path);
    tracing_setup::init(&tracing_setup::TracingConfig {
        debug: cli.debug,
        log_file,
    })?;

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    if let Some(endpoint) = cli.endpoint {
        config.api.endpoint = endpoint;
    }
    if let Some(ms) = cli.debounce_ms {
        config.search.debounce_ms = ms;
    }
    debug!(?config, "Effective configuration");

    match command {
        Commands::Browse => {
            let source: Arc<dyn CountrySource> = Arc::new(HttpCountrySource::from_config(&config)?);
            tui::run(&config, source)
        }
        Commands::List(args) => {
            let source = HttpCountrySource::from_config(&config)?;
            list::run_list(args, &source, config.display.thousands_separator).await
        }
        Commands::Config(args) => config::run_config(args, &config_path, &config),
    }
}
