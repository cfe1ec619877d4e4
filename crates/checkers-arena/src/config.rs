//! Configuration file loading for the arena.
//!
//! Settings come from `arena.toml` in the working directory (or a path
//! given on the command line). Missing keys, or a missing file, fall back to
//! defaults; command-line flags override whatever the file says.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// A search depth of zero never produces a move.
    #[error("Invalid search depth for {0}: must be at least 1")]
    InvalidDepth(&'static str),
}

/// Arena settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Search depth for Dark, in plies. Defaults to 3.
    #[serde(default = "default_depth")]
    pub dark_depth: u32,
    /// Search depth for Light, in plies. Defaults to 3.
    #[serde(default = "default_depth")]
    pub light_depth: u32,
    /// Hops played before the game is declared drawn. Defaults to 200.
    #[serde(default = "default_max_plies")]
    pub max_plies: usize,
}

fn default_depth() -> u32 {
    3
}

fn default_max_plies() -> usize {
    200
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            dark_depth: default_depth(),
            light_depth: default_depth(),
            max_plies: default_max_plies(),
        }
    }
}

impl ArenaConfig {
    /// Loads configuration from `path`, or from [`Self::config_path()`].
    ///
    /// A missing file yields the defaults; an unreadable or malformed one is
    /// an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = path.map_or_else(Self::config_path, Path::to_path_buf);
        let config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            tracing::debug!(path = %config_path.display(), "loaded config");
            toml::from_str(&content)?
        } else {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            Self::default()
        };
        Ok(config)
    }

    /// Returns the default configuration path, `arena.toml`.
    pub fn config_path() -> PathBuf {
        PathBuf::from("arena.toml")
    }

    /// Rejects settings that cannot produce a game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dark_depth == 0 {
            return Err(ConfigError::InvalidDepth("Dark"));
        }
        if self.light_depth == 0 {
            return Err(ConfigError::InvalidDepth("Light"));
        }
        Ok(())
    }
}
