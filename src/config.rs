//! Player tuning configuration
//!
//! Every tunable number of the player rules lives in `PlayerConfig`. The
//! defaults reproduce the standard rules exactly, so a config file only has
//! to mention what it changes:
//!
//! ```json
//! { "carrying_capacity": 1500, "max_health": 120, "starting_health": 120 }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::effects::DEFAULT_GREEN_SWIRLY_THRESHOLD;

/// How much a player can carry in kilograms by default
pub const DEFAULT_CARRYING_CAPACITY: i32 = 1000;

/// Damage a stink bomb deals to each nearby enemy by default
pub const DEFAULT_STINK_BOMB_DAMAGE: i32 = 100;

/// Errors that can occur while loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Tunable numbers for a player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Maximum total inventory weight
    pub carrying_capacity: i32,

    /// Max health a new player starts with
    pub max_health: i32,

    /// Current health a new player starts with
    pub starting_health: i32,

    /// Heal amount above which pickups play the green swirly
    pub green_swirly_heal_threshold: i32,

    /// Damage a stink bomb deals to each nearby enemy
    pub stink_bomb_damage: i32,
}

impl PlayerConfig {
    /// Parses and validates a JSON config
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: PlayerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a JSON config file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        info!(path = %path.display(), ?config, "loaded player config");
        Ok(config)
    }

    /// Rejects configs the player rules cannot work with
    ///
    /// Negative capacities would make every pickup fail, and a negative
    /// stink bomb would heal enemies. Health values are not checked; the
    /// player accepts any starting health.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.carrying_capacity < 0 {
            return Err(ConfigError::Invalid(format!(
                "carrying_capacity must not be negative (got {})",
                self.carrying_capacity
            )));
        }
        if self.stink_bomb_damage < 0 {
            return Err(ConfigError::Invalid(format!(
                "stink_bomb_damage must not be negative (got {})",
                self.stink_bomb_damage
            )));
        }
        Ok(())
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            carrying_capacity: DEFAULT_CARRYING_CAPACITY,
            max_health: 0,
            starting_health: 0,
            green_swirly_heal_threshold: DEFAULT_GREEN_SWIRLY_THRESHOLD,
            stink_bomb_damage: DEFAULT_STINK_BOMB_DAMAGE,
        }
    }
}
