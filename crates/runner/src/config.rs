//! Configuration loading for the simulation
//!
//! Supports JSON configuration files for:
//! - Roster bootstrap (agent count, money supply, production, pricing step)
//! - Market settings (price scale)
//! - Run settings (periods, shuffle seed)

use bazaar_market::MarketConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::bootstrap::BootstrapConfig;

/// Root configuration for a simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Roster bootstrap
    #[serde(default)]
    pub bootstrap: BootstrapConfig,

    /// Market settings
    #[serde(default)]
    pub market: MarketConfig,

    /// Number of periods to run
    #[serde(default = "default_periods")]
    pub periods: u64,

    /// Seed for the demand shuffle; a fresh one is drawn when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_periods() -> u64 {
    10
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            bootstrap: BootstrapConfig::default(),
            market: MarketConfig::default(),
            periods: default_periods(),
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),
}
