//! The uniform tool result envelope.
//!
//! ```json
//! {
//!   "structuredContent": { ... },
//!   "content": [{"type": "text", "text": "..."}],
//!   "isError": false
//! }
//! ```
//!
//! On failure `structuredContent` is omitted and the single text item is
//! `"Error: <description>"`.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::error::ToolError;

/// One item of the `content` array. Only text is produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

impl ContentItem {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: "text".to_string(),
            text: text.into(),
        }
    }
}

/// What a successful handler produces: the machine payload plus the
/// narration for the orchestrator.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolOutput {
    pub structured: Value,
    pub narration: String,
}

impl ToolOutput {
    /// Encode a response DTO as the structured payload.
    pub fn new<T: Serialize>(response: &T, narration: impl Into<String>) -> Result<Self, ToolError> {
        Ok(Self {
            structured: serde_json::to_value(response)?,
            narration: narration.into(),
        })
    }
}

/// Wire shape of a `tools/call` result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structured_content: Option<Value>,
    pub content: Vec<ContentItem>,
    pub is_error: bool,
}

impl ToolResult {
    pub fn success(output: ToolOutput) -> Self {
        Self {
            structured_content: Some(output.structured),
            content: vec![ContentItem::text(output.narration)],
            is_error: false,
        }
    }

    pub fn failure(error: &ToolError) -> Self {
        Self {
            structured_content: None,
            content: vec![ContentItem::text(format!("Error: {}", error))],
            is_error: true,
        }
    }

    /// Total mapping from a handler outcome to the envelope.
    pub fn from_outcome(outcome: Result<ToolOutput, ToolError>) -> Self {
        match outcome {
            Ok(output) => Self::success(output),
            Err(error) => Self::failure(&error),
        }
    }

    /// Narration or error text of the first content item.
    pub fn text(&self) -> &str {
        self.content.first().map(|c| c.text.as_str()).unwrap_or("")
    }

    /// JSON value for the JSON-RPC `result` field.
    pub fn into_value(self) -> Value {
        let content: Vec<Value> = self
            .content
            .into_iter()
            .map(|item| json!({ "type": item.kind, "text": item.text }))
            .collect();

        let mut result = json!({
            "content": content,
            "isError": self.is_error,
        });
        if let (Some(structured), Some(obj)) = (self.structured_content, result.as_object_mut()) {
            obj.insert("structuredContent".to_string(), structured);
        }
        result
    }
}
