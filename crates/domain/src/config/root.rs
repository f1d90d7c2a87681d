use super::cache::CacheConfig;
use super::client::ClientConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use crate::endpoint::Endpoint;
use serde::{Deserialize, Serialize};
use std::fs;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values passed on the command line, applied over the file contents
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub timeout_ms: Option<u64>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load from a TOML file (or defaults when no path is given) and apply overrides.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(base_url) = overrides.base_url {
            self.client.base_url = base_url;
        }
        if let Some(timeout_ms) = overrides.timeout_ms {
            self.client.timeout_ms = timeout_ms;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        Endpoint::parse(&self.client.base_url).map_err(|e| {
            ConfigError::Validation(format!(
                "client.base_url '{}' cannot be parsed: {}",
                self.client.base_url, e
            ))
        })?;

        if self.client.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "client.timeout_ms must be greater than zero".into(),
            ));
        }
        if self.cache.max_cost_bytes == 0 {
            return Err(ConfigError::Validation(
                "cache.max_cost_bytes must be greater than zero".into(),
            ));
        }
        if self.cache.ttl_secs == 0 {
            return Err(ConfigError::Validation(
                "cache.ttl_secs must be greater than zero".into(),
            ));
        }
        if self.cache.sample_size == 0 {
            return Err(ConfigError::Validation(
                "cache.sample_size must be greater than zero".into(),
            ));
        }

        Ok(())
    }
}
