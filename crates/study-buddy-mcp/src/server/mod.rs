//! MCP Server implementation.
//!
//! ## Module Structure
//! - `mod.rs`: `McpServer`, store construction, the stdio loop, and the
//!   per-line request handling shared by both transports
//! - `transport.rs`: TCP transport (`run_tcp`, `handle_client`) and
//!   `read_line_bounded`

pub mod transport;

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::Semaphore;
use tracing::{debug, error, info, warn};

use study_buddy_core::config::Config;
use study_buddy_core::stubs::InMemoryDeckStore;
use study_buddy_core::traits::DeckStore;
use study_buddy_storage::FileDeckStore;

use crate::handlers::Handlers;
use crate::protocol::{error_codes, JsonRpcId, JsonRpcRequest, JsonRpcResponse};
use crate::tools::ToolRegistry;

// ============================================================================
// Transport Mode
// ============================================================================

/// Transport mode for the MCP server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportMode {
    /// Standard input/output transport (default).
    /// Used for process-based MCP clients.
    #[default]
    Stdio,

    /// TCP socket transport, newline-delimited JSON per connection.
    Tcp,
}

impl FromStr for TransportMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "stdio" => Ok(Self::Stdio),
            "tcp" => Ok(Self::Tcp),
            other => Err(anyhow::anyhow!(
                "Unknown transport '{}'. Expected 'stdio' or 'tcp'.",
                other
            )),
        }
    }
}

// ============================================================================
// MCP Server
// ============================================================================

/// MCP Server state.
///
/// Handlers are Arc-wrapped so TCP client tasks can share them.
pub struct McpServer {
    pub(in crate::server) config: Config,
    pub(in crate::server) handlers: Arc<Handlers>,
    /// Connection semaphore for limiting concurrent TCP connections.
    pub(in crate::server) connection_semaphore: Arc<Semaphore>,
    /// Active connection counter for monitoring.
    pub(in crate::server) active_connections: Arc<AtomicUsize>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the file backend cannot create its directory.
    pub async fn new(config: Config) -> Result<Self> {
        info!(
            "Initializing MCP Server (storage backend={})...",
            config.storage.backend
        );

        let store = Self::open_store(&config).await?;
        let registry = Arc::new(ToolRegistry::with_default_tools());
        info!("Registered {} tools", registry.len());

        let handlers = Handlers::new(store, registry, config.server.clone());
        let max_connections = config.mcp.max_connections;

        Ok(Self {
            config,
            handlers: Arc::new(handlers),
            connection_semaphore: Arc::new(Semaphore::new(max_connections)),
            active_connections: Arc::new(AtomicUsize::new(0)),
        })
    }

    async fn open_store(config: &Config) -> Result<Arc<dyn DeckStore>> {
        match config.storage.backend.to_ascii_lowercase().as_str() {
            "file" => {
                let path = PathBuf::from(&config.storage.path);
                let store = FileDeckStore::open(&path).await.map_err(|e| {
                    error!("FATAL: Failed to open deck directory {:?}: {}", path, e);
                    anyhow::anyhow!("Failed to open FileDeckStore at {:?}: {}", path, e)
                })?;
                info!("Opened FileDeckStore at {:?}", path);
                Ok(Arc::new(store))
            }
            "memory" => {
                info!("Using InMemoryDeckStore (decks are lost on exit)");
                Ok(Arc::new(InMemoryDeckStore::new()))
            }
            other => Err(anyhow::anyhow!(
                "Unknown storage backend '{}'. Expected 'memory' or 'file'.",
                other
            )),
        }
    }

    /// Transport selected by `config.mcp.transport`.
    pub fn transport_mode(&self) -> Result<TransportMode> {
        self.config.mcp.transport.parse()
    }

    pub fn handlers(&self) -> &Arc<Handlers> {
        &self.handlers
    }

    /// Run the server in stdio mode until stdin reaches EOF.
    pub async fn run(&self) -> Result<()> {
        let reader = BufReader::new(tokio::io::stdin());
        let writer = tokio::io::BufWriter::new(tokio::io::stdout());

        info!("Server ready, waiting for requests on stdin...");
        self.serve(reader, writer).await?;
        info!("stdin closed (EOF), server run loop exiting");
        Ok(())
    }

    /// Serve newline-delimited JSON-RPC from `reader`, writing responses to
    /// `writer`, until EOF.
    ///
    /// Malformed lines get an error response and the loop continues.
    pub async fn serve<R, W>(&self, mut reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let max_bytes = self.config.mcp.max_payload_size;
        let timeout = Duration::from_secs(self.config.mcp.request_timeout);
        let mut line = String::new();

        loop {
            line.clear();

            let response = match transport::read_line_bounded(&mut reader, &mut line, max_bytes).await
            {
                Ok(0) => break,
                Ok(_) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    debug!("Received: {}", trimmed);
                    self.handle_request(trimmed, timeout).await
                }
                Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                    warn!("Rejecting oversized request: {}", e);
                    Some(JsonRpcResponse::error(
                        None,
                        error_codes::INVALID_REQUEST,
                        format!("Invalid request: {}", e),
                    ))
                }
                Err(e) => {
                    error!("FATAL: Failed to read from input: {}", e);
                    return Err(anyhow::anyhow!("input read error: {}", e));
                }
            };

            if let Some(response) = response {
                write_response(&mut writer, &response).await?;
            }
        }

        Ok(())
    }

    /// Handle a single JSON-RPC line. `None` means nothing is written back.
    pub async fn handle_request(&self, input: &str, timeout: Duration) -> Option<JsonRpcResponse> {
        let request = match parse_request(input) {
            Ok(request) => request,
            Err(response) => return Some(response),
        };
        dispatch_with_timeout(&self.handlers, request, timeout).await
    }
}

/// Parse one line into a request, or the error response to send instead.
pub(in crate::server) fn parse_request(input: &str) -> Result<JsonRpcRequest, JsonRpcResponse> {
    let request: JsonRpcRequest = serde_json::from_str(input).map_err(|e| {
        warn!("Failed to parse request: {}", e);
        JsonRpcResponse::error(None, error_codes::PARSE_ERROR, format!("Parse error: {}", e))
    })?;

    if request.jsonrpc != "2.0" {
        return Err(JsonRpcResponse::error(
            request.id,
            error_codes::INVALID_REQUEST,
            "Invalid JSON-RPC version. Expected '2.0'.",
        ));
    }

    Ok(request)
}

/// Dispatch with a deadline. Notifications (no `id`) never get a response,
/// not even on timeout.
pub(in crate::server) async fn dispatch_with_timeout(
    handlers: &Handlers,
    request: JsonRpcRequest,
    timeout: Duration,
) -> Option<JsonRpcResponse> {
    let request_id: Option<JsonRpcId> = request.id.clone();
    let is_notification = request_id.is_none();
    let method = request.method.clone();

    let response = match tokio::time::timeout(timeout, handlers.dispatch(request)).await {
        Ok(response) => response,
        Err(_) => {
            error!(
                "Request '{}' timed out after {}s",
                method,
                timeout.as_secs()
            );
            JsonRpcResponse::error(
                request_id,
                error_codes::REQUEST_TIMEOUT,
                format!("Request timed out after {}s", timeout.as_secs()),
            )
        }
    };

    if is_notification || response.is_no_response() {
        debug!("Notification '{}' handled, no response", method);
        return None;
    }
    Some(response)
}

pub(in crate::server) async fn write_response<W: AsyncWrite + Unpin>(
    writer: &mut W,
    response: &JsonRpcResponse,
) -> Result<()> {
    let response_json = serde_json::to_string(response)?;
    debug!("Sending: {}", response_json);

    writer.write_all(response_json.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    async fn memory_server() -> McpServer {
        McpServer::new(Config::default()).await.unwrap()
    }

    async fn serve_lines(server: &McpServer, input: &str) -> Vec<Value> {
        let mut output = Vec::new();
        server.serve(input.as_bytes(), &mut output).await.unwrap();
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_transport_mode_default() {
        assert_eq!(TransportMode::default(), TransportMode::Stdio);
    }

    #[test]
    fn test_transport_mode_parse() {
        assert_eq!("stdio".parse::<TransportMode>().unwrap(), TransportMode::Stdio);
        assert_eq!("TCP".parse::<TransportMode>().unwrap(), TransportMode::Tcp);
        assert!("sse".parse::<TransportMode>().is_err());
    }

    #[tokio::test]
    async fn test_file_backend_opens_directory() {
        let tempdir = tempfile::TempDir::new().unwrap();
        let mut config = Config::default();
        config.storage.backend = "file".into();
        config.storage.path = tempdir.path().join("decks").display().to_string();

        let server = McpServer::new(config).await.unwrap();
        assert!(tempdir.path().join("decks").is_dir());
        assert_eq!(server.handlers().store().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_serve_answers_each_request_in_order() {
        let server = memory_server().await;
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
            "\n",
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
            "\n\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"configureDeck","arguments":{"deckLength":5}}}"#,
            "\n"
        );

        let responses = serve_lines(&server, input).await;
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["id"], 1);
        assert_eq!(responses[0]["result"]["protocolVersion"], "2024-11-05");
        assert_eq!(responses[1]["id"], 2);
        assert_eq!(responses[1]["result"]["structuredContent"]["deckLength"], 5);
    }

    #[tokio::test]
    async fn test_serve_recovers_from_parse_error() {
        let server = memory_server().await;
        let input = concat!(
            "{not json\n",
            r#"{"jsonrpc":"2.0","id":7,"method":"ping"}"#,
            "\n"
        );

        let responses = serve_lines(&server, input).await;
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["error"]["code"], -32700);
        assert_eq!(responses[1]["id"], 7);
        assert!(responses[1]["result"].is_object());
    }

    #[tokio::test]
    async fn test_serve_rejects_wrong_version() {
        let server = memory_server().await;
        let responses =
            serve_lines(&server, "{\"jsonrpc\":\"1.0\",\"id\":3,\"method\":\"ping\"}\n").await;

        assert_eq!(responses[0]["id"], 3);
        assert_eq!(responses[0]["error"]["code"], -32600);
    }

    #[tokio::test]
    async fn test_serve_rejects_oversized_line_and_continues() {
        let mut config = Config::default();
        config.mcp.max_payload_size = 64;
        let server = McpServer::new(config).await.unwrap();

        let big = format!(
            "{{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"ping\",\"params\":{{\"pad\":\"{}\"}}}}\n",
            "x".repeat(200)
        );
        let input = format!("{big}{{\"jsonrpc\":\"2.0\",\"id\":2,\"method\":\"ping\"}}\n");

        let responses = serve_lines(&server, &input).await;
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["error"]["code"], -32600);
        assert_eq!(responses[1]["id"], 2);
    }

    #[tokio::test]
    async fn test_null_id_request_gets_response() {
        let server = memory_server().await;
        let responses = serve_lines(
            &server,
            "{\"jsonrpc\":\"2.0\",\"id\":null,\"method\":\"tools/call\",\"params\":{\"name\":\"configureDeck\"}}\n",
        )
        .await;

        assert_eq!(responses.len(), 1);
        assert!(responses[0]["id"].is_null());
        assert_eq!(responses[0]["result"]["structuredContent"]["deckLength"], 10);
    }

    #[tokio::test]
    async fn test_unknown_notification_gets_no_response() {
        let server = memory_server().await;
        let responses =
            serve_lines(&server, "{\"jsonrpc\":\"2.0\",\"method\":\"notifications/cancelled\"}\n")
                .await;
        assert!(responses.is_empty());
    }

    #[tokio::test]
    async fn test_handle_request_without_trailing_newline_at_eof() {
        let server = memory_server().await;
        let responses = serve_lines(&server, r#"{"jsonrpc":"2.0","id":9,"method":"tools/list"}"#).await;
        assert_eq!(responses[0]["result"]["tools"].as_array().unwrap().len(), 6);
    }
}
