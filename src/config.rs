//! Rule configuration.
//!
//! The only tunable of the standard variant is the starting stone count.
//! Configs are plain serde structs so they can be loaded from JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::layout::{DEFAULT_STONES_PER_PIT, MAX_STONES_PER_PIT};

/// Errors raised while loading a [`RulesConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("stones per pit must be at least 1")]
    NoStones,

    #[error("stones per pit must be at most {max}, got {0}", max = MAX_STONES_PER_PIT)]
    TooManyStones(u32),
}

/// Board setup parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Stones in each ordinary pit at the start of a game.
    pub stones_per_pit: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            stones_per_pit: DEFAULT_STONES_PER_PIT,
        }
    }
}

impl RulesConfig {
    /// Parses and validates a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: RulesConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stones_per_pit == 0 {
            return Err(ConfigError::NoStones);
        }
        if self.stones_per_pit > MAX_STONES_PER_PIT {
            return Err(ConfigError::TooManyStones(self.stones_per_pit));
        }
        Ok(())
    }
}
