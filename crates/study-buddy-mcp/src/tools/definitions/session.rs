//! Study session tool definitions.

use serde_json::{json, Value};

use super::{cards_schema, difficulty_schema, language_schema};
use crate::tools::names;
use crate::tools::types::ToolDefinition;

fn session_schema() -> Value {
    json!({
        "type": "object",
        "required": ["studyLanguage", "difficulty", "deck"],
        "properties": {
            "studyLanguage": language_schema("Language for the study session"),
            "difficulty": difficulty_schema("Difficulty level of the flashcards"),
            "deck": cards_schema("Flashcards to study, in order")
        }
    })
}

/// Returns session tool definitions (3 tools).
pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        // startStudySession
        ToolDefinition::new(
            names::START_STUDY_SESSION,
            "Start a language flashcard study session with a generated deck. \
             Call configureDeck first if the user has not chosen a language, \
             length, or difficulty.",
            session_schema(),
        ),
        // startStudySessionFromScratch
        ToolDefinition::new(
            names::START_STUDY_SESSION_FROM_SCRATCH,
            "Start a study session from a freshly generated deck without saving it.",
            session_schema(),
        ),
        // startStudySessionFromDeck
        ToolDefinition::new(
            names::START_STUDY_SESSION_FROM_DECK,
            "Start a study session from a saved deck. Use selectDeck to find deck ids.",
            json!({
                "type": "object",
                "required": ["deckId"],
                "properties": {
                    "deckId": {
                        "type": "string",
                        "description": "Id returned by saveDeck or listed by selectDeck"
                    }
                }
            }),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_definitions_count() {
        assert_eq!(definitions().len(), 3, "Should have 3 session tools");
    }

    #[test]
    fn test_direct_and_scratch_share_schema() {
        let tools = definitions();
        assert_eq!(tools[0].input_schema, tools[1].input_schema);
        assert_eq!(
            tools[0].required_fields(),
            vec!["studyLanguage", "difficulty", "deck"]
        );
    }

    #[test]
    fn test_from_deck_requires_deck_id() {
        let tools = definitions();
        let from_deck = tools
            .iter()
            .find(|t| t.name == "startStudySessionFromDeck")
            .unwrap();
        assert_eq!(from_deck.required_fields(), vec!["deckId"]);
    }
}
