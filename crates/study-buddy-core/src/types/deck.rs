//! Decks before and after persistence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Difficulty, Flashcard, Language};

/// Identifier assigned to a deck by the store on save.
pub type DeckId = Uuid;

/// A deck that has not been saved yet and therefore has no id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDeck {
    pub name: String,
    pub language: Language,
    pub difficulty: Difficulty,
    /// Study order. Never re-sorted or deduplicated.
    pub cards: Vec<Flashcard>,
    /// User the deck belongs to, if the caller supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

impl NewDeck {
    pub fn new(
        name: impl Into<String>,
        language: Language,
        difficulty: Difficulty,
        cards: Vec<Flashcard>,
    ) -> Self {
        Self {
            name: name.into(),
            language,
            difficulty,
            cards,
            owner: None,
        }
    }

    /// Attach an owning user id.
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Materialize a stored deck with the given id and creation time.
    ///
    /// Only stores call this; the core never invents ids.
    pub fn into_deck(self, id: DeckId, created_at: DateTime<Utc>) -> Deck {
        Deck {
            id,
            name: self.name,
            language: self.language,
            difficulty: self.difficulty,
            cards: self.cards,
            owner: self.owner,
            created_at,
        }
    }
}

/// A persisted deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub id: DeckId,
    pub name: String,
    pub language: Language,
    pub difficulty: Difficulty,
    pub cards: Vec<Flashcard>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Deck {
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Whether this deck is visible to `user_id` when listing.
    ///
    /// `None` sees every deck; `Some(u)` sees only decks owned by `u`.
    pub fn is_visible_to(&self, user_id: Option<&str>) -> bool {
        match user_id {
            None => true,
            Some(user) => self.owner.as_deref() == Some(user),
        }
    }

    pub fn summary(&self) -> DeckSummary {
        DeckSummary {
            id: self.id,
            name: self.name.clone(),
            language: self.language,
            difficulty: self.difficulty,
            card_count: self.card_count(),
        }
    }
}

/// Listing entry for a saved deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckSummary {
    pub id: DeckId,
    pub name: String,
    pub language: Language,
    pub difficulty: Difficulty,
    pub card_count: usize,
}
