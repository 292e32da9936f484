//! Tool dispatch logic for MCP tool calls.

use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::protocol::{error_codes, JsonRpcId, JsonRpcResponse};
use crate::tools::Operation;

use super::super::Handlers;
use super::envelope::{ToolOutput, ToolResult};
use super::error::ToolError;

impl Handlers {
    pub(crate) async fn handle_tools_list(&self, id: Option<JsonRpcId>) -> JsonRpcResponse {
        debug!("Handling tools/list request");
        let tools = self.registry.definitions();
        JsonRpcResponse::success(id, json!({ "tools": tools }))
    }

    pub(crate) async fn handle_tools_call(
        &self,
        id: Option<JsonRpcId>,
        params: Option<Value>,
    ) -> JsonRpcResponse {
        let params = match params {
            Some(p) => p,
            None => {
                return JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    "Missing params for tools/call",
                );
            }
        };

        let tool_name = match params.get("name").and_then(|v| v.as_str()) {
            Some(n) => n,
            None => {
                return JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    "Missing 'name' parameter in tools/call",
                );
            }
        };

        let arguments = params.get("arguments").cloned().unwrap_or(Value::Null);
        let result = self.call_tool(tool_name, arguments).await;
        JsonRpcResponse::success(id, result.into_value())
    }

    /// Invoke a tool by name (or alias).
    ///
    /// Never fails: unknown names, invalid arguments and store failures all
    /// come back as an `isError` envelope.
    pub async fn call_tool(&self, name: &str, arguments: Value) -> ToolResult {
        let outcome = self.run_tool(name, arguments).await;
        if let Err(ref e) = outcome {
            warn!(tool = name, kind = e.kind(), error = %e, "Tool call failed");
        }
        ToolResult::from_outcome(outcome)
    }

    async fn run_tool(&self, name: &str, arguments: Value) -> Result<ToolOutput, ToolError> {
        let tool = self
            .registry
            .resolve(name)
            .ok_or_else(|| ToolError::UnknownOperation(name.to_string()))?;

        let arguments = match arguments {
            Value::Null => json!({}),
            Value::Object(_) => arguments,
            other => {
                return Err(ToolError::validation(
                    "arguments",
                    format!("must be an object, got {}", json_type(&other)),
                ));
            }
        };

        debug!(
            tool = tool.name(),
            requested = name,
            "Dispatching tool call"
        );

        match tool.operation {
            Operation::ConfigureDeck => self.call_configure_deck(arguments).await,
            Operation::SelectDeck => self.call_select_deck(arguments).await,
            Operation::SaveDeck => self.call_save_deck(arguments).await,
            Operation::StartStudySession | Operation::StartStudySessionFromScratch => {
                self.call_start_study_session(arguments, tool.name()).await
            }
            Operation::StartStudySessionFromDeck => {
                self.call_start_study_session_from_deck(arguments).await
            }
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
