//! MCP tool definitions and the tool registry.
//!
//! # Module Structure
//!
//! - `types`: `ToolDefinition`, the advertised name/description/schema
//! - `names`: Tool name constants for dispatch matching
//! - `aliases`: Legacy tool names accepted by `tools/call`
//! - `definitions`: Tool definitions by category (deck, session)
//! - `registry`: Immutable name -> operation table built at startup

pub mod aliases;
pub mod definitions;
pub mod names;
pub mod registry;
pub mod types;

pub use self::definitions::get_tool_definitions;
pub use self::names as tool_names;
pub use self::registry::{Operation, RegisteredTool, ToolRegistry};
pub use self::types::ToolDefinition;
