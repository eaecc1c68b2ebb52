//! Configuration loading for the sift search gateway.
//!
//! Configuration is a single TOML file naming the two external endpoints
//! (search index and document store), the database partition to scope
//! operations to, and paging defaults:
//!
//! ```toml
//! database = "chef_prod"
//!
//! [index]
//! url = "http://localhost:8983/solr"
//!
//! [store]
//! url = "http://localhost:5984"
//!
//! [search]
//! rows = 1000
//! ```

#![warn(missing_docs)]

mod error;

use std::{fs, path::Path, time::Duration};

use serde::Deserialize;

pub use error::ConfigError;

/// Default configuration filename.
pub const CONFIG_FILENAME: &str = "sift.toml";

/// Default transport timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default page size.
const DEFAULT_ROWS: usize = 1000;

/// Loaded gateway configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Database partition every operation is scoped to.
    pub database: String,
    /// Search index endpoint.
    pub index: Endpoint,
    /// Document store endpoint.
    pub store: Endpoint,
    /// Search defaults.
    #[serde(default)]
    pub search: SearchSettings,
}

/// One external HTTP endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Endpoint {
    /// Base URL of the service.
    pub url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Endpoint {
    /// Returns the per-request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Search defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Default page size when the caller does not specify one.
    pub rows: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self { rows: DEFAULT_ROWS }
    }
}

/// Serde default for [`Endpoint::timeout_secs`].
fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Config {
    /// Loads and validates configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&contents, path)
    }

    /// Parses and validates configuration from a TOML string.
    ///
    /// The `path` parameter is used for error reporting.
    pub fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Rejects empty required values.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.database.is_empty() {
            return Err(ConfigError::EmptyValue { field: "database" });
        }
        if self.index.url.is_empty() {
            return Err(ConfigError::EmptyValue { field: "index.url" });
        }
        if self.store.url.is_empty() {
            return Err(ConfigError::EmptyValue { field: "store.url" });
        }
        Ok(())
    }
}
