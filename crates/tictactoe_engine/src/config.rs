//! Game session configuration.

use crate::error::ConfigError;
use crate::search::Scoring;
use crate::{Mode, Player};
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a [`Controller`](crate::Controller).
///
/// Every field has a default, so an empty TOML file is valid:
///
/// ```toml
/// mode = "vs-computer"
/// computer_mark = "O"
/// scoring = "flat"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct EngineConfig {
    /// Opponent selection.
    #[serde(default)]
    mode: Mode,

    /// Mark the engine plays in [`Mode::VsComputer`].
    #[serde(default = "default_computer_mark")]
    computer_mark: Player,

    /// Terminal scoring used by the search.
    #[serde(default)]
    scoring: Scoring,
}

fn default_computer_mark() -> Player {
    Player::O
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            computer_mark: default_computer_mark(),
            scoring: Scoring::default(),
        }
    }
}

impl EngineConfig {
    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            mode = %config.mode,
            computer_mark = %config.computer_mark,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}
