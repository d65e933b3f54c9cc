//! Configuration file management.
//!
//! Handles reading and validating the optional `.sops-acl.toml` file.
//!
//! ```toml
//! root = "./sops"
//!
//! [keys]
//! types = ["age"]
//!
//! [graph]
//! format = "png"
//! output = "sops_hierarchy"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::graph::GraphFormat;
use crate::error::{ConfigError, Result};

/// Settings read from `.sops-acl.toml`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// SOPS root directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    pub keys: KeysConfig,
    pub graph: GraphConfig,
}

/// Key file handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeysConfig {
    /// Key record types kept from `key.json` files.
    pub types: Vec<String>,
}

/// Graph export defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// One of `png`, `svg`, `pdf`, `dot`.
    pub format: String,
    /// Output file name without extension.
    pub output: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for KeysConfig {
    fn default() -> Self {
        Self {
            types: constants::DEFAULT_KEY_TYPES
                .iter()
                .map(|t| t.to_string())
                .collect(),
        }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            format: constants::DEFAULT_GRAPH_FORMAT.to_string(),
            output: constants::DEFAULT_GRAPH_OUTPUT.to_string(),
        }
    }
}

impl Config {
    /// Configuration with built-in defaults.
    pub fn new() -> Self {
        Self {
            root: None,
            keys: KeysConfig::default(),
            graph: GraphConfig::default(),
        }
    }

    /// Path to the configuration file in the current directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `.sops-acl.toml` in the
    /// current directory is used when present, and defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file can't be read,
    /// `ConfigError::Parse` if the TOML is malformed, or
    /// `ConfigError::InvalidValue` if validation fails.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => {
                let path = Self::config_path();
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    debug!("no config file, using defaults");
                    Ok(Self::new())
                }
            }
        }
    }

    /// Load and validate a specific configuration file.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config = Self::from_toml(&contents)?;

        debug!(
            root = ?config.root,
            key_types = config.keys.types.len(),
            "config loaded"
        );
        Ok(config)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// The configured graph format.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an unsupported format.
    pub fn graph_format(&self) -> Result<GraphFormat> {
        self.graph.format.parse().map_err(|reason| {
            ConfigError::InvalidValue {
                field: "graph.format",
                reason,
            }
            .into()
        })
    }

    /// Validate the configuration contents.
    ///
    /// Checks:
    /// - At least one key type is listed, none of them empty
    /// - The graph format is supported
    /// - The graph output name is not empty
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` on validation failure.
    pub fn validate(&self) -> Result<()> {
        debug!("validating config");

        if self.keys.types.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "keys.types",
                reason: "at least one key type is required".to_string(),
            }
            .into());
        }
        if self.keys.types.iter().any(|t| t.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "keys.types",
                reason: "key types cannot be empty".to_string(),
            }
            .into());
        }

        self.graph_format()?;

        if self.graph.output.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "graph.output",
                reason: "output name cannot be empty".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
