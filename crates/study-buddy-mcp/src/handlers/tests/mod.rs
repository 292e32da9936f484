//! MCP handler tests.
//!
//! Tests go through `Handlers::dispatch` exactly as a transport would and
//! assert on the JSON-RPC response.
//!
//! # Test Helper Variants
//!
//! - `create_test_handlers()`: in-memory deck store
//! - `create_test_handlers_with_file_store()`: `FileDeckStore` in a tempdir;
//!   keep the returned `TempDir` alive for the whole test
//! - `create_failing_handlers()`: every store call fails with `StorageError`


use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tempfile::TempDir;

use study_buddy_core::stubs::InMemoryDeckStore;
use study_buddy_core::traits::{DeckStore, StorageBackend};
use study_buddy_core::types::{Deck, DeckId, DeckSummary, NewDeck};
use study_buddy_core::{CoreError, CoreResult};
use study_buddy_storage::FileDeckStore;

use crate::handlers::Handlers;
use crate::protocol::{JsonRpcId, JsonRpcRequest};

pub(crate) fn create_test_handlers() -> Handlers {
    Handlers::with_store(Arc::new(InMemoryDeckStore::new()))
}

pub(crate) async fn create_test_handlers_with_file_store() -> (Handlers, TempDir) {
    let tempdir = TempDir::new().expect("Failed to create tempdir");
    let store = FileDeckStore::open(tempdir.path())
        .await
        .expect("Failed to open file deck store");
    (Handlers::with_store(Arc::new(store)), tempdir)
}

pub(crate) fn create_failing_handlers() -> Handlers {
    Handlers::with_store(Arc::new(FailingDeckStore))
}

pub(crate) fn make_request(
    method: &str,
    id: Option<JsonRpcId>,
    params: Option<Value>,
) -> JsonRpcRequest {
    JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        id,
        method: method.to_string(),
        params,
    }
}

/// Call a tool through `tools/call` and return the envelope (the JSON-RPC
/// `result`). Panics if the call produced a JSON-RPC error.
pub(crate) async fn call_tool(handlers: &Handlers, name: &str, arguments: Value) -> Value {
    let request = make_request(
        "tools/call",
        Some(JsonRpcId::Number(1)),
        Some(json!({ "name": name, "arguments": arguments })),
    );
    let response = handlers.dispatch(request).await;
    assert!(
        response.error.is_none(),
        "tools/call must not return a JSON-RPC error: {:?}",
        response.error
    );
    response.result.expect("tools/call must return a result")
}

/// Text of the envelope's first content item.
pub(crate) fn envelope_text(envelope: &Value) -> &str {
    envelope["content"][0]["text"]
        .as_str()
        .expect("content[0].text must be a string")
}

pub(crate) fn is_error(envelope: &Value) -> bool {
    envelope["isError"].as_bool().expect("isError must be a boolean")
}

/// Assert the uniform failure shape and return the error text.
pub(crate) fn assert_failure(envelope: &Value) -> &str {
    assert!(is_error(envelope), "expected isError=true, got {envelope}");
    assert!(
        envelope.get("structuredContent").is_none(),
        "failures must not carry structuredContent"
    );
    let text = envelope_text(envelope);
    assert!(text.starts_with("Error: "), "unexpected error text: {text}");
    text
}

/// Deck store whose every call fails, for the storage-error path.
pub(crate) struct FailingDeckStore;

#[async_trait]
impl DeckStore for FailingDeckStore {
    async fn save(&self, _deck: NewDeck) -> CoreResult<DeckId> {
        Err(CoreError::StorageError("write refused".into()))
    }

    async fn load(&self, _id: DeckId) -> CoreResult<Deck> {
        Err(CoreError::StorageError("connection lost".into()))
    }

    async fn list(&self, _user_id: Option<&str>) -> CoreResult<Vec<DeckSummary>> {
        Err(CoreError::StorageError("connection lost".into()))
    }

    async fn count(&self) -> CoreResult<usize> {
        Err(CoreError::StorageError("connection lost".into()))
    }

    fn backend(&self) -> StorageBackend {
        StorageBackend::InMemory
    }
}
