//! Tool-level failures.
//!
//! Every variant ends up as an `isError: true` envelope whose text is
//! `"Error: "` followed by the variant's Display output.

use thiserror::Error;

use study_buddy_core::CoreError;

/// Failure of a single tool invocation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToolError {
    /// Arguments did not match the tool's schema. Raised before any
    /// store call.
    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },

    /// No stored deck has this id. The id is kept exactly as the caller
    /// sent it.
    #[error("Deck not found: {deck_id}")]
    NotFound { deck_id: String },

    /// The deck store could not complete the call.
    #[error("Storage error: {0}")]
    Storage(String),

    /// No tool is registered under this name.
    #[error("Unknown tool: {0}")]
    UnknownOperation(String),

    /// The result payload could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ToolError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ToolError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Short machine-readable kind, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            ToolError::Validation { .. } => "validation",
            ToolError::NotFound { .. } => "not_found",
            ToolError::Storage(_) => "storage",
            ToolError::UnknownOperation(_) => "unknown_operation",
            ToolError::Serialization(_) => "serialization",
        }
    }
}

impl From<CoreError> for ToolError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::DeckNotFound { id } => ToolError::NotFound {
                deck_id: id.to_string(),
            },
            CoreError::SerializationError(msg) => ToolError::Serialization(msg),
            CoreError::StorageError(msg) => ToolError::Storage(msg),
            // A config error out of a store is still a failed store call.
            other @ CoreError::ConfigError(_) => ToolError::Storage(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(err: serde_json::Error) -> Self {
        ToolError::Serialization(err.to_string())
    }
}
