//! Tests for default configuration values.

use crate::config::{Config, LoggingConfig, McpConfig, ServerConfig, StorageConfig};

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.server.name, "study-buddy");
    assert_eq!(config.mcp.transport, "stdio");
    assert_eq!(config.storage.backend, "memory");
    assert!(config.validate().is_ok(), "defaults must validate");
}

#[test]
fn test_server_config_defaults() {
    let server = ServerConfig::default();
    assert_eq!(server.name, "study-buddy");
    assert_eq!(server.version, env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_mcp_config_defaults() {
    let mcp = McpConfig::default();

    assert_eq!(mcp.transport, "stdio", "Transport must be stdio");
    assert_eq!(mcp.max_payload_size, 10_485_760, "Max payload must be 10MB");
    assert_eq!(mcp.request_timeout, 30, "Request timeout must be 30 seconds");
    assert_eq!(mcp.bind_address, "127.0.0.1");
    assert_eq!(mcp.tcp_port, 3100);
    assert_eq!(mcp.max_connections, 32);
}

#[test]
fn test_logging_config_defaults() {
    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert_eq!(logging.format, "pretty");
    assert!(!logging.is_json());
}

#[test]
fn test_storage_config_defaults() {
    let storage = StorageConfig::default();
    assert_eq!(storage.backend, "memory");
    assert_eq!(storage.path, "study_buddy_data");
}

#[test]
fn test_partial_toml_fills_defaults() {
    let config: Config = toml::from_str(
        r#"
        [mcp]
        transport = "tcp"
        tcp_port = 4000
        "#,
    )
    .unwrap();

    assert_eq!(config.mcp.transport, "tcp");
    assert_eq!(config.mcp.tcp_port, 4000);
    assert_eq!(config.mcp.request_timeout, 30);
    assert_eq!(config.storage.backend, "memory");
    assert_eq!(config.server.name, "study-buddy");
}
