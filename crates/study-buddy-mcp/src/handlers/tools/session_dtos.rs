//! DTOs for study session tools.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use study_buddy_core::types::{Deck, DeckId, Difficulty, Flashcard, Language};

use super::error::ToolError;
use super::validate::{parse_cards, parse_enum, parse_string, require, ValidateInto};

/// Request parameters for startStudySession and startStudySessionFromScratch.
///
/// # Example JSON
/// ```json
/// {"studyLanguage": "german", "difficulty": "intermediate",
///  "deck": [{"word": "Hund", "translation": "dog"}]}
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySessionRequest {
    #[serde(default, alias = "language")]
    pub study_language: Option<Value>,
    #[serde(default)]
    pub difficulty: Option<Value>,
    #[serde(default)]
    pub deck: Option<Value>,
}

/// Validated session input. No field has a default.
#[derive(Debug, Clone, PartialEq)]
pub struct StudySession {
    pub language: Language,
    pub difficulty: Difficulty,
    pub deck: Vec<Flashcard>,
}

impl ValidateInto for StudySessionRequest {
    type Output = StudySession;

    fn validate(&self) -> Result<StudySession, ToolError> {
        let language: Language = parse_enum(
            "studyLanguage",
            require("studyLanguage", self.study_language.as_ref())?,
        )?;
        let difficulty: Difficulty =
            parse_enum("difficulty", require("difficulty", self.difficulty.as_ref())?)?;
        let deck = parse_cards("deck", require("deck", self.deck.as_ref())?)?;

        Ok(StudySession {
            language,
            difficulty,
            deck,
        })
    }
}

/// Request parameters for startStudySessionFromDeck.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySessionFromDeckRequest {
    #[serde(default)]
    pub deck_id: Option<Value>,
}

/// Deck ids are opaque to callers: any string is accepted here, and one
/// that names no stored deck is reported as not found by the handler.
impl ValidateInto for StudySessionFromDeckRequest {
    type Output = String;

    fn validate(&self) -> Result<String, ToolError> {
        parse_string("deckId", require("deckId", self.deck_id.as_ref())?)
    }
}

/// Response for startStudySession and startStudySessionFromScratch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySessionResponse {
    pub study_language: Language,
    pub difficulty: Difficulty,
    pub deck: Vec<Flashcard>,
}

impl From<StudySession> for StudySessionResponse {
    fn from(session: StudySession) -> Self {
        Self {
            study_language: session.language,
            difficulty: session.difficulty,
            deck: session.deck,
        }
    }
}

impl StudySessionResponse {
    pub fn narration(&self) -> String {
        session_narration(self.deck.len(), self.study_language, self.difficulty)
    }
}

/// Response for startStudySessionFromDeck: the loaded deck.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckSessionResponse {
    pub deck_id: DeckId,
    pub name: String,
    pub study_language: Language,
    pub difficulty: Difficulty,
    pub deck: Vec<Flashcard>,
}

impl From<Deck> for DeckSessionResponse {
    fn from(deck: Deck) -> Self {
        Self {
            deck_id: deck.id,
            name: deck.name,
            study_language: deck.language,
            difficulty: deck.difficulty,
            deck: deck.cards,
        }
    }
}

impl DeckSessionResponse {
    pub fn narration(&self) -> String {
        session_narration(self.deck.len(), self.study_language, self.difficulty)
    }
}

fn session_narration(card_count: usize, language: Language, difficulty: Difficulty) -> String {
    format!(
        "Study session started with {} {} flashcards at {} level. \
         Widget shown with interactive flashcards for studying.",
        card_count, language, difficulty
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn session(args: Value) -> Result<StudySession, ToolError> {
        serde_json::from_value::<StudySessionRequest>(args)
            .unwrap()
            .validate()
    }

    #[test]
    fn test_empty_deck_narration() {
        let response = StudySessionResponse::from(
            session(json!({"studyLanguage": "german", "difficulty": "intermediate", "deck": []}))
                .unwrap(),
        );
        assert_eq!(
            response.narration(),
            "Study session started with 0 german flashcards at intermediate level. Widget shown with interactive flashcards for studying."
        );
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"studyLanguage": "german", "difficulty": "intermediate", "deck": []})
        );
    }

    #[test]
    fn test_session_has_no_defaults() {
        let err = session(json!({"difficulty": "beginner", "deck": []})).unwrap_err();
        assert_eq!(err, ToolError::validation("studyLanguage", "is required"));

        let err = session(json!({"studyLanguage": "french", "deck": []})).unwrap_err();
        assert_eq!(err, ToolError::validation("difficulty", "is required"));

        let err = session(json!({"studyLanguage": "french", "difficulty": "beginner"})).unwrap_err();
        assert_eq!(err, ToolError::validation("deck", "is required"));
    }

    fn deck_ref(args: Value) -> Result<String, ToolError> {
        serde_json::from_value::<StudySessionFromDeckRequest>(args)
            .unwrap()
            .validate()
    }

    #[test]
    fn test_from_deck_request_requires_string_id() {
        assert_eq!(
            deck_ref(json!({})).unwrap_err(),
            ToolError::validation("deckId", "is required")
        );
        assert_eq!(
            deck_ref(json!({"deckId": 42})).unwrap_err(),
            ToolError::validation("deckId", "must be a string")
        );
    }

    #[test]
    fn test_from_deck_request_keeps_opaque_id() {
        assert_eq!(deck_ref(json!({"deckId": "deck-42"})).unwrap(), "deck-42");
    }
}
