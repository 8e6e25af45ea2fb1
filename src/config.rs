//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for a console session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Let the computer make the opening move.
    #[getter(copy)]
    computer_first: bool,

    /// Seed for the computer's random opening. Drawn from the OS when unset.
    #[getter(copy)]
    seed: Option<u64>,

    /// Write logs to this file instead of stderr.
    log_file: Option<PathBuf>,
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config = Self::from_toml(&content)?;
        info!(computer_first = config.computer_first, seed = ?config.seed, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Applies command-line overrides on top of file values.
    pub fn with_overrides(mut self, computer_first: bool, seed: Option<u64>) -> Self {
        self.computer_first |= computer_first;
        if seed.is_some() {
            self.seed = seed;
        }
        self
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_from_empty_file() {
        let config = GameConfig::from_toml("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert!(!config.computer_first());
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "computer_first = true\nseed = 99\nlog_file = \"game.log\"").unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        assert!(config.computer_first());
        assert_eq!(config.seed(), Some(99));
        assert_eq!(config.log_file(), &Some(PathBuf::from("game.log")));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = GameConfig::from_toml("difficulty = 3").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let err = GameConfig::from_file("/nonexistent/minimax_tictactoe.toml").unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
    }

    #[test]
    fn test_cli_overrides() {
        let config = GameConfig::from_toml("seed = 1").unwrap().with_overrides(true, Some(5));
        assert!(config.computer_first());
        assert_eq!(config.seed(), Some(5));

        let kept = GameConfig::from_toml("seed = 1").unwrap().with_overrides(false, None);
        assert_eq!(kept.seed(), Some(1));
    }
}
