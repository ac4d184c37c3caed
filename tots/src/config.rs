//! Converter configuration.
//!
//! Configuration can be loaded from a `tots.toml` file and turned into a
//! [`Converter`](crate::Converter) with
//! [`Converter::from_config`](crate::Converter::from_config):
//!
//! ```toml
//! prefix = "I"
//! suffix = "Dto"
//! indent = "  "
//! export = true
//! debug = false
//!
//! [types."chrono::DateTime"]
//! ts_type = "string"
//! ts_doc = "RFC 3339 timestamp"
//! ```
//!
//! Keys of the `types` table are override keys: qualified identities for
//! structures and named types, kind names such as `u64` for scalars.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::options::TypeOptions;

/// Default configuration filename.
pub const CONFIG_FILENAME: &str = "tots.toml";

/// Error loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML for [`ConverterConfig`].
    #[error("Invalid TOML configuration: {0}")]
    InvalidToml(#[from] toml::de::Error),
}

/// Settings of a converter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Prepended to every interface name.
    pub prefix: String,

    /// Appended to every interface name.
    pub suffix: String,

    /// Indentation unit of field lines.
    pub indent: String,

    /// Whether interfaces are declared with `export`.
    pub export: bool,

    /// Whether to emit debug traces of the walk.
    pub debug: bool,

    /// Global overrides keyed by type key.
    pub types: BTreeMap<String, TypeOptions>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            suffix: String::new(),
            indent: "    ".to_string(),
            export: true,
            debug: false,
            types: BTreeMap::new(),
        }
    }
}

impl ConverterConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file.
    ///
    /// Reads `path`, or [`CONFIG_FILENAME`] in the working directory when no
    /// path is given. A missing file yields the default configuration.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = path
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path).map_err(|source| ConfigError::Io {
            path: config_path.clone(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}
