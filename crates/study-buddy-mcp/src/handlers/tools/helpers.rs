//! Request parsing shared by all tool handlers.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use super::super::Handlers;
use super::error::ToolError;
use super::validate::ValidateInto;

impl Handlers {
    /// Deserialize tool arguments into `T` and validate them.
    ///
    /// Runs to completion before the caller touches the store, so invalid
    /// input never causes a partial write.
    pub(crate) fn parse_request_validated<T>(
        &self,
        arguments: Value,
        tool_name: &str,
    ) -> Result<T::Output, ToolError>
    where
        T: DeserializeOwned + ValidateInto,
    {
        let request: T = serde_json::from_value(arguments).map_err(|e| {
            warn!(tool = tool_name, error = %e, "Malformed tool arguments");
            ToolError::validation("arguments", e.to_string())
        })?;

        request.validate().map_err(|e| {
            warn!(tool = tool_name, error = %e, "Tool argument validation failed");
            e
        })
    }
}
