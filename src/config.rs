//! Game configuration loaded from an optional TOML file.

use crate::controller::Mode;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tictactoe_rules::Mark;
use tracing::{debug, info, instrument};

/// Delay before the heuristic opponent plays, in milliseconds.
pub const DEFAULT_OPPONENT_DELAY_MS: u64 = 400;

/// Tunable game settings.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Delay before the heuristic's move, in milliseconds.
    #[serde(default = "default_opponent_delay_ms")]
    opponent_delay_ms: u64,

    /// Mark played by the heuristic in human-vs-heuristic games.
    #[serde(default = "default_opponent_mark")]
    opponent_mark: Mark,

    /// Mode highlighted when the mode menu opens.
    #[serde(default)]
    default_mode: Mode,
}

fn default_opponent_delay_ms() -> u64 {
    DEFAULT_OPPONENT_DELAY_MS
}

fn default_opponent_mark() -> Mark {
    Mark::O
}

impl GameConfig {
    /// Creates a configuration from explicit values.
    #[instrument]
    pub fn new(opponent_delay_ms: u64, opponent_mark: Mark, default_mode: Mode) -> Self {
        Self {
            opponent_delay_ms,
            opponent_mark,
            default_mode,
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            opponent_delay_ms = config.opponent_delay_ms,
            opponent_mark = %config.opponent_mark,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Delay before the heuristic's move.
    pub fn opponent_delay(&self) -> Duration {
        Duration::from_millis(self.opponent_delay_ms)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            opponent_delay_ms: default_opponent_delay_ms(),
            opponent_mark: default_opponent_mark(),
            default_mode: Mode::default(),
        }
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
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
