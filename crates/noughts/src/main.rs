//! Noughts - terminal tic-tac-toe.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use noughts::{Config, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config =
        Config::load(&cli.config)?.with_overrides(cli.player_x, cli.player_o, cli.log_file);

    initialize_tracing(&config)?;
    info!(config = ?config, "Configuration resolved");

    run_tui(&config)
}

/// Logs go to a file so they never draw over the board.
fn initialize_tracing(config: &Config) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_tracing_install_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config =
            Config::default().with_overrides(None, None, Some(dir.path().join("noughts.log")));

        // Only one global subscriber per process; the next install must fail loudly.
        initialize_tracing(&config).ok();
        let err = initialize_tracing(&config).unwrap_err();
        assert!(err.to_string().starts_with("Failed to install tracing subscriber"));
        assert!(dir.path().join("noughts.log").exists());
    }
}
