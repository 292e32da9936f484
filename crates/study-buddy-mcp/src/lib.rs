//! Study Buddy MCP Server Library
//!
//! JSON-RPC 2.0 server implementing the Model Context Protocol (MCP) for
//! flashcard deck configuration, persistence, and study sessions.
//!
//! This library exposes the handlers and protocol types for integration testing.

pub mod handlers;
pub mod protocol;
pub mod server;
pub mod tools;
