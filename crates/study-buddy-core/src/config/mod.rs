//! Configuration management for the Study Buddy server.

mod sub_configs;

#[cfg(test)]
mod tests;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

pub use sub_configs::{LoggingConfig, McpConfig, ServerConfig, StorageConfig};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub mcp: McpConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    /// Load configuration from files and environment.
    ///
    /// Configuration is loaded in order:
    /// 1. config/default.toml (base settings)
    /// 2. config/{STUDY_BUDDY_ENV}.toml (environment-specific)
    /// 3. Environment variables with STUDY_BUDDY__ prefix, e.g.
    ///    `STUDY_BUDDY__MCP__TCP_PORT=4000`
    pub fn load() -> CoreResult<Self> {
        let env = std::env::var("STUDY_BUDDY_ENV").unwrap_or_else(|_| "development".to_string());

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                config::Environment::with_prefix("STUDY_BUDDY")
                    .prefix_separator("__")
                    .separator("__"),
            );

        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// Missing sections fall back to their defaults.
    pub fn from_file(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CoreError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| CoreError::ConfigError(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called by both loaders, and again by the binary after CLI/env
    /// overrides are applied.
    pub fn validate(&self) -> CoreResult<()> {
        self.mcp.validate()?;
        self.logging.validate()?;
        self.storage.validate()?;
        Ok(())
    }
}
