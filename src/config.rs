//! Process configuration, built once at startup and handed to collaborators.
//!
//! Layering (later wins): serde defaults, `unibook.toml` (or an explicit
//! `--config` path), then `UNIBOOK_*` environment variables with `__` as the
//! nesting separator, e.g. `UNIBOOK_INDEXER__BASE_URL`.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    pub name: String,
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { name: "unibook".to_string(), version: env!("CARGO_PKG_VERSION").to_string() }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct IndexerConfig {
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self { base_url: "http://127.0.0.1:8980".to_string(), timeout_ms: 10_000 }
    }
}

impl IndexerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { filter: "info".to_string() }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub indexer: IndexerConfig,
    /// Used when a tool call or CLI command names no market.
    pub default_market: Option<String>,
    pub log: LogConfig,
}

impl AppConfig {
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_layered(path, env_layer())
    }

    fn load_layered(path: Option<&Path>, env: config::Environment) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("unibook").required(false),
        };
        Self::from_builder(config::Config::builder().add_source(file).add_source(env))
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        let cfg: AppConfig = builder.build()?.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.indexer.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("indexer.base_url is empty".to_string()));
        }
        if self.indexer.timeout_ms == 0 {
            return Err(ConfigError::Invalid("indexer.timeout_ms must be positive".to_string()));
        }
        Ok(())
    }
}

// UNIBOOK_INDEXER__BASE_URL -> indexer.base_url. Values stay strings; serde converts
// the numeric fields, so e.g. a version of "1.0" is not reparsed as a float.
fn env_layer() -> config::Environment {
    config::Environment::with_prefix("UNIBOOK").prefix_separator("_").separator("__")
}
