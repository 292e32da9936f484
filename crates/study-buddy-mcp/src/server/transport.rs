//! TCP transport and bounded line reads for the MCP server.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, BufReader};
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

use crate::handlers::Handlers;
use crate::protocol::{error_codes, JsonRpcResponse};

use super::{dispatch_with_timeout, parse_request, write_response, McpServer};

/// Monotonic per-process connection id, used to tag client log lines.
static CONNECTION_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Read a line from an async buffered reader with a byte size limit.
///
/// `BufReader::read_line()` allocates until it finds a newline; this reads
/// chunk by chunk through `fill_buf()` instead. When the limit is exceeded
/// the rest of the offending line is drained, so the next call starts at
/// the next message, and an `InvalidData` error is returned.
///
/// Returns the number of bytes read; 0 means EOF.
pub async fn read_line_bounded<R: AsyncBufRead + Unpin>(
    reader: &mut R,
    buf: &mut String,
    max_bytes: usize,
) -> std::io::Result<usize> {
    let mut total = 0usize;
    let mut raw = Vec::new();

    loop {
        let available = reader.fill_buf().await?;
        if available.is_empty() {
            break;
        }

        let (end, found_newline) = match available.iter().position(|&b| b == b'\n') {
            Some(pos) => (pos + 1, true),
            None => (available.len(), false),
        };

        if total + end > max_bytes {
            reader.consume(end);
            if !found_newline {
                loop {
                    let rest = reader.fill_buf().await?;
                    if rest.is_empty() {
                        break;
                    }
                    match rest.iter().position(|&b| b == b'\n') {
                        Some(pos) => {
                            reader.consume(pos + 1);
                            break;
                        }
                        None => {
                            let len = rest.len();
                            reader.consume(len);
                        }
                    }
                }
            }
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!(
                    "Line exceeds {} byte limit ({} bytes read so far)",
                    max_bytes,
                    total + end
                ),
            ));
        }

        raw.extend_from_slice(&available[..end]);
        total += end;
        reader.consume(end);

        if found_newline {
            break;
        }
    }

    match String::from_utf8(raw) {
        Ok(s) => buf.push_str(&s),
        Err(e) => buf.push_str(&String::from_utf8_lossy(e.as_bytes())),
    }

    Ok(total)
}

impl McpServer {
    /// Run the server in TCP mode.
    ///
    /// Accepts connections on `bind_address:tcp_port` and spawns a task per
    /// client. At most `max_connections` clients are served at once; further
    /// clients wait for a permit.
    ///
    /// # Errors
    ///
    /// Returns error if the address is invalid or the listener cannot bind.
    pub async fn run_tcp(&self) -> Result<()> {
        let bind_addr: SocketAddr = format!(
            "{}:{}",
            self.config.mcp.bind_address, self.config.mcp.tcp_port
        )
        .parse()
        .map_err(|e| {
            anyhow::anyhow!(
                "Invalid TCP bind address '{}:{}': {}",
                self.config.mcp.bind_address,
                self.config.mcp.tcp_port,
                e
            )
        })?;

        let listener = TcpListener::bind(bind_addr).await.map_err(|e| {
            error!("FATAL: Failed to bind TCP listener to {}: {}", bind_addr, e);
            anyhow::anyhow!("Failed to bind TCP listener to {}: {}", bind_addr, e)
        })?;

        info!(
            "MCP Server listening on TCP {} (max_connections={})",
            bind_addr, self.config.mcp.max_connections
        );

        loop {
            let (stream, peer_addr) = match listener.accept().await {
                Ok(conn) => conn,
                Err(e) => {
                    error!("Failed to accept TCP connection: {}", e);
                    continue;
                }
            };

            let handlers = Arc::clone(&self.handlers);
            let semaphore = Arc::clone(&self.connection_semaphore);
            let active_connections = Arc::clone(&self.active_connections);
            let timeout = Duration::from_secs(self.config.mcp.request_timeout);
            let max_bytes = self.config.mcp.max_payload_size;
            let conn_tag = format!("C{:03}", CONNECTION_COUNTER.fetch_add(1, Ordering::Relaxed));

            tokio::spawn(async move {
                let _permit = match semaphore.acquire().await {
                    Ok(p) => p,
                    Err(_) => {
                        error!("[{}] Semaphore closed for client {}", conn_tag, peer_addr);
                        return;
                    }
                };

                let active = active_connections.fetch_add(1, Ordering::SeqCst) + 1;
                info!("[{}] Client connected: {} (active={})", conn_tag, peer_addr, active);

                let (reader, writer) = stream.into_split();
                if let Err(e) = handle_client(
                    BufReader::new(reader),
                    writer,
                    &handlers,
                    timeout,
                    max_bytes,
                    &conn_tag,
                )
                .await
                {
                    warn!("[{}] Client {} error: {}", conn_tag, peer_addr, e);
                }

                let active = active_connections.fetch_sub(1, Ordering::SeqCst) - 1;
                info!("[{}] Client disconnected: {} (active={})", conn_tag, peer_addr, active);
            });
        }
    }
}

/// Serve one TCP client until EOF.
///
/// The first line that is not valid JSON-RPC gets a parse-error response and
/// the connection is closed.
pub(in crate::server) async fn handle_client<R, W>(
    mut reader: R,
    mut writer: W,
    handlers: &Handlers,
    timeout: Duration,
    max_bytes: usize,
    conn_tag: &str,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut line = String::new();

    loop {
        line.clear();

        match read_line_bounded(&mut reader, &mut line, max_bytes).await {
            Ok(0) => {
                debug!("[{}] closed connection (EOF)", conn_tag);
                return Ok(());
            }
            Ok(_) => {}
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                warn!("[{}] oversized request rejected: {}", conn_tag, e);
                let response = JsonRpcResponse::error(
                    None,
                    error_codes::INVALID_REQUEST,
                    format!("Invalid request: {}", e),
                );
                write_response(&mut writer, &response).await?;
                continue;
            }
            Err(e) => return Err(e.into()),
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        debug!("[{}] received: {}", conn_tag, trimmed);

        let request = match parse_request(trimmed) {
            Ok(request) => request,
            Err(response) => {
                let is_parse_error = response
                    .error
                    .as_ref()
                    .is_some_and(|e| e.code == error_codes::PARSE_ERROR);
                write_response(&mut writer, &response).await?;
                if is_parse_error {
                    warn!("[{}] sent invalid JSON, closing connection", conn_tag);
                    return Err(anyhow::anyhow!("[{}] client sent invalid JSON-RPC", conn_tag));
                }
                continue;
            }
        };

        if let Some(response) = dispatch_with_timeout(handlers, request, timeout).await {
            write_response(&mut writer, &response).await?;
        }
    }
}
