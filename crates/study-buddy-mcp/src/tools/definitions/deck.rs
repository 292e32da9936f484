//! Deck tool definitions: configure, list, and persist decks.

use serde_json::json;

use super::{cards_schema, difficulty_schema, language_schema};
use crate::tools::names;
use crate::tools::types::ToolDefinition;

/// Returns deck tool definitions (3 tools).
pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        // configureDeck
        ToolDefinition::new(
            names::CONFIGURE_DECK,
            "Configure a new flashcard deck. Every field is optional: language \
             defaults to spanish, deckLength to 10 and difficulty to beginner. \
             Returns the effective settings; generate that many cards and call \
             startStudySession with them.",
            json!({
                "type": "object",
                "properties": {
                    "studyLanguage": language_schema(
                        "Language for the flashcard deck (default: spanish)"
                    ),
                    "deckLength": {
                        "type": "integer",
                        "minimum": 1,
                        "maximum": 200,
                        "default": 10,
                        "description": "Number of flashcards to include. Common options: 5, 10, 15, 20, 25, 30, 40, 50. Range: 1-200"
                    },
                    "difficulty": difficulty_schema(
                        "Difficulty level of the flashcards (default: beginner)"
                    )
                }
            }),
        ),
        // selectDeck
        ToolDefinition::new(
            names::SELECT_DECK,
            "List saved flashcard decks so the user can pick one to study, or \
             choose to create a new deck.",
            json!({
                "type": "object",
                "properties": {
                    "userId": {
                        "type": "string",
                        "description": "Only list decks saved by this user. Omit to list every deck."
                    }
                }
            }),
        ),
        // saveDeck
        ToolDefinition::new(
            names::SAVE_DECK,
            "Save a generated flashcard deck for later study. Returns the new \
             deckId; cards are stored in the given order.",
            json!({
                "type": "object",
                "required": ["name", "language", "difficulty", "cards"],
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "Display name of the deck"
                    },
                    "language": language_schema("Language of the deck"),
                    "difficulty": difficulty_schema("Difficulty level of the deck"),
                    "cards": cards_schema("Flashcards in study order"),
                    "userId": {
                        "type": "string",
                        "description": "User the deck belongs to"
                    }
                }
            }),
        ),
    ]
}
