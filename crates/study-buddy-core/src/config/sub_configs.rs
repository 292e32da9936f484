//! Sub-configuration structures for Study Buddy components.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Server identity reported in the MCP `initialize` response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub name: String,
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "study-buddy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// MCP (Model Context Protocol) transport configuration.
///
/// Supports stdio (default) and TCP transports.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct McpConfig {
    /// Transport type: "stdio" or "tcp"
    #[serde(default = "default_transport")]
    pub transport: String,

    /// Maximum size of one request line in bytes (default: 10MB)
    #[serde(default = "default_max_payload_size")]
    pub max_payload_size: usize,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// TCP bind address (default: "127.0.0.1")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// TCP port number (default: 3100)
    #[serde(default = "default_tcp_port")]
    pub tcp_port: u16,

    /// Maximum concurrent TCP connections (default: 32)
    #[serde(default = "default_max_connections")]
    pub max_connections: usize,
}

fn default_transport() -> String {
    "stdio".to_string()
}

fn default_max_payload_size() -> usize {
    10_485_760 // 10MB
}

fn default_request_timeout() -> u64 {
    30
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_tcp_port() -> u16 {
    3100
}

fn default_max_connections() -> usize {
    32
}

impl Default for McpConfig {
    fn default() -> Self {
        Self {
            transport: default_transport(),
            max_payload_size: default_max_payload_size(),
            request_timeout: default_request_timeout(),
            bind_address: default_bind_address(),
            tcp_port: default_tcp_port(),
            max_connections: default_max_connections(),
        }
    }
}

impl McpConfig {
    /// Validate the MCP configuration.
    ///
    /// # Validation Rules
    ///
    /// - `transport`: "stdio" or "tcp" (case-insensitive)
    /// - `max_payload_size`, `request_timeout`: > 0
    /// - `bind_address`: non-empty when transport = "tcp"
    /// - `tcp_port`: non-zero when transport = "tcp"
    /// - `max_connections`: > 0 when transport = "tcp"
    pub fn validate(&self) -> CoreResult<()> {
        let transport = self.transport.to_lowercase();
        if transport != "stdio" && transport != "tcp" {
            return Err(CoreError::ConfigError(format!(
                "mcp.transport must be 'stdio' or 'tcp', got '{}'",
                self.transport
            )));
        }

        if self.max_payload_size == 0 {
            return Err(CoreError::ConfigError(
                "mcp.max_payload_size must be greater than 0".into(),
            ));
        }

        if self.request_timeout == 0 {
            return Err(CoreError::ConfigError(
                "mcp.request_timeout must be greater than 0".into(),
            ));
        }

        if transport == "tcp" {
            if self.bind_address.trim().is_empty() {
                return Err(CoreError::ConfigError(
                    "mcp.bind_address must not be empty for tcp transport".into(),
                ));
            }
            if self.tcp_port == 0 {
                return Err(CoreError::ConfigError(
                    "mcp.tcp_port must be in range 1-65535".into(),
                ));
            }
            if self.max_connections == 0 {
                return Err(CoreError::ConfigError(
                    "mcp.max_connections must be greater than 0".into(),
                ));
            }
        }

        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// "pretty" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> CoreResult<()> {
        if self.format != "pretty" && self.format != "json" {
            return Err(CoreError::ConfigError(format!(
                "logging.format must be 'pretty' or 'json', got '{}'",
                self.format
            )));
        }
        if self.level.trim().is_empty() {
            return Err(CoreError::ConfigError(
                "logging.level must not be empty".into(),
            ));
        }
        Ok(())
    }

    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}

/// Deck storage configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// "memory" or "file"
    #[serde(default = "default_storage_backend")]
    pub backend: String,

    /// Directory for the file backend
    #[serde(default = "default_storage_path")]
    pub path: String,
}

fn default_storage_backend() -> String {
    "memory".to_string()
}

fn default_storage_path() -> String {
    "study_buddy_data".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_storage_backend(),
            path: default_storage_path(),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> CoreResult<()> {
        match self.backend.as_str() {
            "memory" => Ok(()),
            "file" if self.path.trim().is_empty() => Err(CoreError::ConfigError(
                "storage.path must not be empty for the file backend".into(),
            )),
            "file" => Ok(()),
            other => Err(CoreError::ConfigError(format!(
                "storage.backend must be 'memory' or 'file', got '{}'",
                other
            ))),
        }
    }
}
