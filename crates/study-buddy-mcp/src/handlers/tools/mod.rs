//! MCP tool call handlers.
//!
//! - configureDeck, selectDeck, saveDeck (deck_tools.rs)
//! - startStudySession, startStudySessionFromScratch, startStudySessionFromDeck (session_tools.rs)
//!
//! Every handler returns `Result<ToolOutput, ToolError>`; `dispatch.rs`
//! turns that into the `ToolResult` envelope.

mod deck_tools;
mod dispatch;
mod helpers;
mod session_tools;
mod validate;

pub mod deck_dtos;
pub mod envelope;
pub mod error;
pub mod session_dtos;

pub use self::envelope::{ContentItem, ToolOutput, ToolResult};
pub use self::error::ToolError;
