//! CLI configuration with TOML file support.

use std::path::{Path, PathBuf};

use anchorpath_finder::FinderConfig;
use anchorpath_utils::LogFormat;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(String),
}

/// Configuration for the `anchorpath` command.
///
/// Loaded from a TOML file via [`CliConfig::from_toml_file`]; command-line
/// flags override individual fields.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CliConfig {
    /// Registry snapshot to answer queries from.
    #[serde(default)]
    pub registry: Option<PathBuf>,

    /// Anchor token (symbol or address). Falls back to the snapshot's.
    #[serde(default)]
    pub anchor_token: Option<String>,

    /// Maximum conversions on a token→anchor route.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_max_depth() -> usize {
    FinderConfig::default().max_depth
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Finder settings derived from this configuration.
    pub fn finder_config(&self) -> FinderConfig {
        FinderConfig {
            max_depth: self.max_depth,
        }
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            registry: None,
            anchor_token: None,
            max_depth: default_max_depth(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
        }
    }
}
