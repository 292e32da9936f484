//! DTOs for deck tools: configureDeck, selectDeck, saveDeck.
//!
//! Request DTOs hold raw JSON values; `ValidateInto` produces the typed,
//! defaulted input. Response DTOs are the `structuredContent` payloads and
//! carry the narration builders.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use study_buddy_core::types::{DeckId, DeckSummary, Difficulty, Language, NewDeck};

use super::error::ToolError;
use super::validate::{
    parse_bounded_int, parse_cards, parse_enum, parse_string, require, ValidateInto,
};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Language used by configureDeck when none is given.
pub const DEFAULT_LANGUAGE: Language = Language::Spanish;

/// Deck length used by configureDeck when none is given.
pub const DEFAULT_DECK_LENGTH: u32 = 10;

/// Difficulty used by configureDeck when none is given.
pub const DEFAULT_DIFFICULTY: Difficulty = Difficulty::Beginner;

/// Smallest accepted deckLength.
pub const MIN_DECK_LENGTH: u32 = 1;

/// Largest accepted deckLength.
pub const MAX_DECK_LENGTH: u32 = 200;

// ============================================================================
// REQUEST DTOs
// ============================================================================

/// Request parameters for configureDeck.
///
/// # Example JSON
/// ```json
/// {"studyLanguage": "french", "deckLength": 25, "difficulty": "advanced"}
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigureDeckRequest {
    #[serde(default, alias = "language")]
    pub study_language: Option<Value>,
    #[serde(default)]
    pub deck_length: Option<Value>,
    #[serde(default)]
    pub difficulty: Option<Value>,
}

/// Effective deck settings after defaulting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckConfiguration {
    pub language: Language,
    pub deck_length: u32,
    pub difficulty: Difficulty,
}

impl Default for DeckConfiguration {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE,
            deck_length: DEFAULT_DECK_LENGTH,
            difficulty: DEFAULT_DIFFICULTY,
        }
    }
}

impl ValidateInto for ConfigureDeckRequest {
    type Output = DeckConfiguration;

    fn validate(&self) -> Result<DeckConfiguration, ToolError> {
        let defaults = DeckConfiguration::default();

        // Present fields are validated before any default is applied.
        let language: Option<Language> = self
            .study_language
            .as_ref()
            .map(|v| parse_enum("studyLanguage", v))
            .transpose()?;
        let deck_length: Option<u32> = self
            .deck_length
            .as_ref()
            .map(|v| parse_bounded_int("deckLength", v, MIN_DECK_LENGTH, MAX_DECK_LENGTH))
            .transpose()?;
        let difficulty: Option<Difficulty> = self
            .difficulty
            .as_ref()
            .map(|v| parse_enum("difficulty", v))
            .transpose()?;

        Ok(DeckConfiguration {
            language: language.unwrap_or(defaults.language),
            deck_length: deck_length.unwrap_or(defaults.deck_length),
            difficulty: difficulty.unwrap_or(defaults.difficulty),
        })
    }
}

/// Request parameters for selectDeck.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectDeckRequest {
    #[serde(default)]
    pub user_id: Option<Value>,
}

impl ValidateInto for SelectDeckRequest {
    type Output = Option<String>;

    fn validate(&self) -> Result<Option<String>, ToolError> {
        self.user_id
            .as_ref()
            .map(|v| parse_string("userId", v))
            .transpose()
    }
}

/// Request parameters for saveDeck.
///
/// # Example JSON
/// ```json
/// {"name": "Food", "language": "italian", "difficulty": "beginner",
///  "cards": [{"word": "pane", "translation": "bread"}]}
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveDeckRequest {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default, alias = "studyLanguage")]
    pub language: Option<Value>,
    #[serde(default)]
    pub difficulty: Option<Value>,
    #[serde(default)]
    pub cards: Option<Value>,
    #[serde(default)]
    pub user_id: Option<Value>,
}

impl ValidateInto for SaveDeckRequest {
    type Output = NewDeck;

    fn validate(&self) -> Result<NewDeck, ToolError> {
        let name = parse_string("name", require("name", self.name.as_ref())?)?;
        let language: Language =
            parse_enum("language", require("language", self.language.as_ref())?)?;
        let difficulty: Difficulty =
            parse_enum("difficulty", require("difficulty", self.difficulty.as_ref())?)?;
        let cards = parse_cards("cards", require("cards", self.cards.as_ref())?)?;
        let owner = self
            .user_id
            .as_ref()
            .map(|v| parse_string("userId", v))
            .transpose()?;

        let deck = NewDeck::new(name, language, difficulty, cards);
        Ok(match owner {
            Some(owner) => deck.with_owner(owner),
            None => deck,
        })
    }
}

// ============================================================================
// RESPONSE DTOs
// ============================================================================

/// Response for configureDeck: the effective settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigureDeckResponse {
    pub study_language: Language,
    pub deck_length: u32,
    pub difficulty: Difficulty,
}

impl From<DeckConfiguration> for ConfigureDeckResponse {
    fn from(config: DeckConfiguration) -> Self {
        Self {
            study_language: config.language,
            deck_length: config.deck_length,
            difficulty: config.difficulty,
        }
    }
}

impl ConfigureDeckResponse {
    pub fn narration(&self) -> String {
        format!(
            "Deck configuration received: {} {} flashcards at {} level. \
             Now generate a flashcard deck with appropriate vocabulary and call \
             startStudySession with the generated deck.",
            self.deck_length, self.study_language, self.difficulty
        )
    }
}

/// Response for selectDeck.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectDeckResponse {
    pub decks: Vec<DeckSummary>,
}

impl SelectDeckResponse {
    pub fn narration(&self) -> String {
        if self.decks.is_empty() {
            return "No saved decks found. Call configureDeck to create a new flashcard deck."
                .to_string();
        }

        let entries: Vec<String> = self
            .decks
            .iter()
            .enumerate()
            .map(|(i, d)| {
                format!(
                    "{}. \"{}\" ({}, {}, {} cards, id {})",
                    i + 1,
                    d.name,
                    d.language,
                    d.difficulty,
                    d.card_count,
                    d.id
                )
            })
            .collect();

        format!(
            "Found {} saved deck(s): {}. Call startStudySessionFromDeck with a deckId \
             to study one, or call configureDeck to create a new deck.",
            self.decks.len(),
            entries.join("; ")
        )
    }
}

/// Response for saveDeck.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveDeckResponse {
    pub deck_id: DeckId,
}

impl SaveDeckResponse {
    /// Narration for the saved deck; `deck` is what was sent to the store.
    pub fn narration(&self, deck: &NewDeck) -> String {
        format!(
            "Deck \"{}\" saved with id {}: {} {} flashcards at {} level. \
             Call startStudySessionFromDeck with this deckId to study it.",
            deck.name,
            self.deck_id,
            deck.card_count(),
            deck.language,
            deck.difficulty
        )
    }
}
