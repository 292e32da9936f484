//! Study Buddy MCP Server
//!
//! Serves the flashcard tools over stdio (default) or TCP.
//!
//! # Configuration priority
//!
//! CLI flag, then its environment variable, then the config file, then the
//! built-in defaults. Logging goes to stderr; stdout carries JSON-RPC only.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use study_buddy_core::config::Config;
use study_buddy_mcp::server::{McpServer, TransportMode};

/// Study Buddy MCP server - flashcard decks and study sessions
#[derive(Parser, Debug)]
#[command(name = "study-buddy-mcp")]
#[command(version)]
#[command(about = "MCP server exposing flashcard deck and study session tools")]
struct Cli {
    /// Path to a TOML configuration file (skips the layered config/ lookup)
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,

    /// Transport: stdio or tcp
    #[arg(long, env = "STUDY_BUDDY_TRANSPORT")]
    transport: Option<String>,

    /// TCP port (tcp transport only)
    #[arg(long, env = "STUDY_BUDDY_TCP_PORT")]
    port: Option<u16>,

    /// TCP bind address (tcp transport only)
    #[arg(long = "bind", env = "STUDY_BUDDY_BIND_ADDRESS")]
    bind_address: Option<String>,

    /// Deck storage backend: memory or file
    #[arg(long, env = "STUDY_BUDDY_STORAGE_BACKEND")]
    storage_backend: Option<String>,

    /// Directory for the file storage backend
    #[arg(long, env = "STUDY_BUDDY_STORAGE_PATH")]
    storage_path: Option<String>,
}

/// Apply CLI/env overrides to config. Called before validation.
fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(ref transport) = cli.transport {
        config.mcp.transport = transport.clone();
    }
    if let Some(port) = cli.port {
        config.mcp.tcp_port = port;
    }
    if let Some(ref bind) = cli.bind_address {
        config.mcp.bind_address = bind.clone();
    }
    if let Some(ref backend) = cli.storage_backend {
        config.storage.backend = backend.clone();
    }
    if let Some(ref path) = cli.storage_path {
        config.storage.path = path.clone();
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match cli.config_path {
        Some(ref path) => Config::from_file(path)?,
        None => Config::load()?,
    };
    apply_overrides(&mut config, cli);
    config.validate()?;
    Ok(config)
}

/// Logging must write to stderr. `RUST_LOG` wins over `logging.level`.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    if config.logging.is_json() {
        fmt()
            .json()
            .with_writer(io::stderr)
            .with_env_filter(filter)
            .init();
    } else {
        fmt()
            .with_writer(io::stderr)
            .with_env_filter(filter)
            .with_target(false)
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_tracing(&config);

    info!(
        "{} {} starting (transport={}, storage={})",
        config.server.name, config.server.version, config.mcp.transport, config.storage.backend
    );

    let server = McpServer::new(config).await?;
    match server.transport_mode()? {
        TransportMode::Stdio => server.run().await?,
        TransportMode::Tcp => server.run_tcp().await?,
    }

    info!("MCP Server shutdown complete");
    Ok(())
}
