//! Noughts - two-player tic-tac-toe in the terminal.
//!
//! Game rules and round bookkeeping live in [`noughts_core`]; this crate
//! draws them with ratatui and feeds mouse and keyboard input back in.
//!
//! # Example
//!
//! ```no_run
//! use noughts::{Config, run_tui};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = Config::default();
//! run_tui(&config)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod tui;

pub use config::{Config, ConfigError};
pub use tui::run_tui;
