//! Core Handlers struct and dispatch logic.

use std::sync::Arc;

use tracing::debug;

use study_buddy_core::config::ServerConfig;
use study_buddy_core::traits::DeckStore;

use crate::protocol::{error_codes, methods, JsonRpcRequest, JsonRpcResponse};
use crate::tools::ToolRegistry;

/// Request handlers for the MCP server.
///
/// Holds the deck store and the immutable tool registry; there is no other
/// shared state between calls. Cheap to share behind an `Arc` across
/// connections.
pub struct Handlers {
    pub(crate) store: Arc<dyn DeckStore>,
    pub(crate) registry: Arc<ToolRegistry>,
    pub(crate) server_info: ServerConfig,
}

impl Handlers {
    pub fn new(
        store: Arc<dyn DeckStore>,
        registry: Arc<ToolRegistry>,
        server_info: ServerConfig,
    ) -> Self {
        Self {
            store,
            registry,
            server_info,
        }
    }

    /// Handlers with every tool registered and default server identity.
    pub fn with_store(store: Arc<dyn DeckStore>) -> Self {
        Self::new(
            store,
            Arc::new(ToolRegistry::with_default_tools()),
            ServerConfig::default(),
        )
    }

    pub fn store(&self) -> &Arc<dyn DeckStore> {
        &self.store
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Dispatch a request to the appropriate handler.
    pub async fn dispatch(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        debug!("Dispatching method: {}", request.method);

        match request.method.as_str() {
            // MCP lifecycle methods
            methods::INITIALIZE => self.handle_initialize(request.id).await,
            methods::INITIALIZED => self.handle_initialized_notification(),
            methods::PING => self.handle_ping(request.id),
            methods::SHUTDOWN => self.handle_shutdown(request.id).await,

            // MCP tools protocol
            methods::TOOLS_LIST => self.handle_tools_list(request.id).await,
            methods::TOOLS_CALL => self.handle_tools_call(request.id, request.params).await,

            _ => JsonRpcResponse::error(
                request.id,
                error_codes::METHOD_NOT_FOUND,
                format!("Method not found: {}", request.method),
            ),
        }
    }
}
