//! Tests for configuration validation and file loading.

use std::io::Write;

use crate::config::Config;
use crate::error::CoreError;

fn assert_config_error(config: &Config, needle: &str) {
    match config.validate() {
        Err(CoreError::ConfigError(msg)) => assert!(
            msg.contains(needle),
            "expected message containing '{needle}', got '{msg}'"
        ),
        other => panic!("expected ConfigError, got {other:?}"),
    }
}

#[test]
fn test_rejects_unknown_transport() {
    let mut config = Config::default();
    config.mcp.transport = "carrier-pigeon".to_string();
    assert_config_error(&config, "mcp.transport");
}

#[test]
fn test_transport_is_case_insensitive() {
    let mut config = Config::default();
    config.mcp.transport = "TCP".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_rejects_zero_payload_and_timeout() {
    let mut config = Config::default();
    config.mcp.max_payload_size = 0;
    assert_config_error(&config, "max_payload_size");

    let mut config = Config::default();
    config.mcp.request_timeout = 0;
    assert_config_error(&config, "request_timeout");
}

#[test]
fn test_tcp_requires_port_bind_and_connections() {
    let mut config = Config::default();
    config.mcp.transport = "tcp".to_string();
    config.mcp.tcp_port = 0;
    assert_config_error(&config, "tcp_port");

    let mut config = Config::default();
    config.mcp.transport = "tcp".to_string();
    config.mcp.bind_address = "  ".to_string();
    assert_config_error(&config, "bind_address");

    let mut config = Config::default();
    config.mcp.transport = "tcp".to_string();
    config.mcp.max_connections = 0;
    assert_config_error(&config, "max_connections");
}

#[test]
fn test_stdio_ignores_tcp_fields() {
    let mut config = Config::default();
    config.mcp.tcp_port = 0;
    config.mcp.max_connections = 0;
    assert!(config.validate().is_ok());
}

#[test]
fn test_rejects_unknown_storage_backend() {
    let mut config = Config::default();
    config.storage.backend = "rocksdb".to_string();
    assert_config_error(&config, "storage.backend");
}

#[test]
fn test_file_backend_requires_path() {
    let mut config = Config::default();
    config.storage.backend = "file".to_string();
    config.storage.path = String::new();
    assert_config_error(&config, "storage.path");
}

#[test]
fn test_rejects_unknown_log_format() {
    let mut config = Config::default();
    config.logging.format = "xml".to_string();
    assert_config_error(&config, "logging.format");
}

#[test]
fn test_from_file_round_trip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
        [storage]
        backend = "file"
        path = "/tmp/decks"

        [logging]
        format = "json"
        "#
    )
    .unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.storage.backend, "file");
    assert_eq!(config.storage.path, "/tmp/decks");
    assert!(config.logging.is_json());
}

#[test]
fn test_from_file_missing_file() {
    let result = Config::from_file(std::path::Path::new("/definitely/not/here.toml"));
    assert!(matches!(result, Err(CoreError::ConfigError(_))));
}

#[test]
fn test_from_file_invalid_values_fail_validation() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[mcp]\ntransport = \"sse\"").unwrap();
    let result = Config::from_file(file.path());
    assert!(matches!(result, Err(CoreError::ConfigError(_))));
}
