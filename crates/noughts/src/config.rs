//! Configuration file and command-line overrides.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_core::PlayerNames;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings read from `noughts.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Starting name for X.
    player_x: String,

    /// Starting name for O.
    player_o: String,

    /// File receiving log output while the terminal is in use.
    log_file: PathBuf,

    /// Tracing filter used when `RUST_LOG` is unset.
    log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        let names = PlayerNames::default();
        Self {
            player_x: names.get(noughts_core::Mark::X).to_string(),
            player_o: names.get(noughts_core::Mark::O).to_string(),
            log_file: PathBuf::from("noughts.log"),
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(player_x = %config.player_x, player_o = %config.player_o, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if it exists, defaults otherwise.
    ///
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line values over the file.
    pub fn with_overrides(
        mut self,
        player_x: Option<String>,
        player_o: Option<String>,
        log_file: Option<PathBuf>,
    ) -> Self {
        if let Some(name) = player_x {
            self.player_x = name;
        }
        if let Some(name) = player_o {
            self.player_o = name;
        }
        if let Some(path) = log_file {
            self.log_file = path;
        }
        self
    }

    /// Names the session starts with.
    pub fn player_names(&self) -> PlayerNames {
        PlayerNames::new(self.player_x.clone(), self.player_o.clone())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
