//! Request handlers for MCP methods.
//!
//! This module provides the main `Handlers` struct that dispatches JSON-RPC
//! requests to their appropriate handler methods.
//!
//! # Module Organization
//!
//! - `core`: Handlers struct and method dispatch
//! - `lifecycle`: MCP lifecycle handlers (initialize, ping, shutdown)
//! - `tools`: MCP tool call handlers and the result envelope

mod core;
mod lifecycle;
pub mod tools;

#[cfg(test)]
pub(crate) mod tests;

pub use self::core::Handlers;
pub use self::tools::{ToolError, ToolOutput, ToolResult};
