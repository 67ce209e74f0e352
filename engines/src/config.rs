//! Search configuration.

use serde::Deserialize;
use thiserror::Error;

/// Plies searched per move when nothing else is configured
pub const DEFAULT_DEPTH: u8 = 9;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid search config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("search depth must be at least 1")]
    ZeroDepth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SearchConfig {
    /// Plies searched from the root
    #[serde(default = "default_depth")]
    pub depth: u8,
    /// Alpha-beta cut-offs; off gives plain exhaustive minimax
    #[serde(default = "default_pruning")]
    pub pruning: bool,
}

fn default_depth() -> u8 {
    DEFAULT_DEPTH
}

fn default_pruning() -> bool {
    true
}

impl SearchConfig {
    pub fn with_depth(depth: u8) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }

    /// Parse a JSON object such as `{"depth": 6, "pruning": true}`.
    /// Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = serde_json::from_str(json)?;
        if config.depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(config)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            pruning: true,
        }
    }
}
