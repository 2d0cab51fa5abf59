//! Command-line interface for noughts.

use clap::Parser;
use std::path::PathBuf;

/// Noughts - two-player tic-tac-toe with a running scoreboard
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional)
    #[arg(short, long, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Name for the player using X
    #[arg(long)]
    pub player_x: Option<String>,

    /// Name for the player using O
    #[arg(long)]
    pub player_o: Option<String>,

    /// File to write logs to while the game is on screen
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
