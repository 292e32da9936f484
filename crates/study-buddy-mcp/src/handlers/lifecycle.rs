//! MCP lifecycle handlers.

use serde_json::json;
use tracing::{info, warn};

use crate::protocol::{JsonRpcId, JsonRpcResponse, PROTOCOL_VERSION};

use super::core::Handlers;

impl Handlers {
    /// Handle MCP initialize request.
    ///
    /// The tool list is fixed at startup, so `listChanged` is false.
    pub(crate) async fn handle_initialize(&self, id: Option<JsonRpcId>) -> JsonRpcResponse {
        info!("MCP initialize request received");

        match self.store.count().await {
            Ok(count) => info!(
                decks = count,
                backend = self.store.backend().as_str(),
                "Deck store ready"
            ),
            Err(e) => warn!(error = %e, "Could not count stored decks"),
        }

        JsonRpcResponse::success(
            id,
            json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": {
                    "tools": {
                        "listChanged": false
                    }
                },
                "serverInfo": {
                    "name": self.server_info.name,
                    "version": self.server_info.version
                }
            }),
        )
    }

    /// Handle MCP initialized notification. Produces no response.
    pub(crate) fn handle_initialized_notification(&self) -> JsonRpcResponse {
        info!("MCP initialized notification received");
        JsonRpcResponse::no_response()
    }

    pub(crate) fn handle_ping(&self, id: Option<JsonRpcId>) -> JsonRpcResponse {
        JsonRpcResponse::success(id, json!({}))
    }

    /// Handle MCP shutdown request.
    ///
    /// Stores write through on every save, so there is nothing to flush.
    pub(crate) async fn handle_shutdown(&self, id: Option<JsonRpcId>) -> JsonRpcResponse {
        info!("MCP shutdown request received");
        JsonRpcResponse::success(id, json!({}))
    }
}
