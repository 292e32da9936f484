//! Tool definitions advertised through `tools/list`.
//!
//! 6 tools exposed:
//! - Deck (3): configureDeck, selectDeck, saveDeck
//! - Session (3): startStudySession, startStudySessionFromScratch, startStudySessionFromDeck

pub(crate) mod deck;
pub(crate) mod session;

use serde_json::{json, Value};

use study_buddy_core::types::{Difficulty, Language};

use crate::tools::types::ToolDefinition;

/// Get all tool definitions for the `tools/list` response.
pub fn get_tool_definitions() -> Vec<ToolDefinition> {
    let mut tools = Vec::with_capacity(6);

    // Deck tools (3)
    tools.extend(deck::definitions());

    // Session tools (3)
    tools.extend(session::definitions());

    tools
}

// Shared schema fragments.

pub(crate) fn language_schema(description: &str) -> Value {
    json!({
        "type": "string",
        "enum": Language::literals(),
        "description": description
    })
}

pub(crate) fn difficulty_schema(description: &str) -> Value {
    json!({
        "type": "string",
        "enum": Difficulty::literals(),
        "description": description
    })
}

pub(crate) fn cards_schema(description: &str) -> Value {
    json!({
        "type": "array",
        "description": description,
        "items": {
            "type": "object",
            "required": ["word", "translation"],
            "properties": {
                "word": {
                    "type": "string",
                    "description": "Word in the study language"
                },
                "translation": {
                    "type": "string",
                    "description": "Translation of the word"
                }
            }
        }
    })
}
