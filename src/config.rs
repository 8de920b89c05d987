//! Graph store configuration
//!
//! Every field has a default, so an empty YAML document is a valid config.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Tuning for a `GraphStore`
///
/// None of these settings change filtering results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Keep a per-node index of incident edges grouped by label, so a
    /// neighbor scan only visits edges of the requested label
    pub index_edges_by_label: bool,

    /// Expected number of nodes (pre-allocation hint)
    pub node_capacity: usize,

    /// Expected number of edges (pre-allocation hint)
    pub edge_capacity: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            index_edges_by_label: false,
            node_capacity: 1024,
            edge_capacity: 4096,
        }
    }
}

impl GraphConfig {
    /// Parse a config from YAML text
    pub fn from_yaml_str(text: &str) -> ConfigResult<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    /// Load a config from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&text)?;
        info!("Loaded graph config from {:?}: {:?}", path, config);
        Ok(config)
    }
}
