//! In-memory implementation of DeckStore.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::traits::{ordered_summaries, DeckStore, StorageBackend};
use crate::types::{Deck, DeckId, DeckSummary, NewDeck};

/// In-memory deck store.
///
/// Uses a `HashMap` behind an `RwLock` for concurrent access. Cloning
/// shares the underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDeckStore {
    decks: Arc<RwLock<HashMap<DeckId, Deck>>>,
}

impl InMemoryDeckStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DeckStore for InMemoryDeckStore {
    async fn save(&self, deck: NewDeck) -> CoreResult<DeckId> {
        let id = Uuid::new_v4();
        let deck = deck.into_deck(id, Utc::now());
        debug!(deck_id = %id, cards = deck.card_count(), "InMemoryDeckStore: save");
        self.decks.write().await.insert(id, deck);
        Ok(id)
    }

    async fn load(&self, id: DeckId) -> CoreResult<Deck> {
        self.decks
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(CoreError::DeckNotFound { id })
    }

    async fn list(&self, user_id: Option<&str>) -> CoreResult<Vec<DeckSummary>> {
        let decks = self.decks.read().await;
        Ok(ordered_summaries(
            decks.values().filter(|d| d.is_visible_to(user_id)),
        ))
    }

    async fn count(&self) -> CoreResult<usize> {
        Ok(self.decks.read().await.len())
    }

    fn backend(&self) -> StorageBackend {
        StorageBackend::InMemory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Difficulty, Flashcard, Language};

    fn deck(name: &str) -> NewDeck {
        NewDeck::new(
            name,
            Language::German,
            Difficulty::Advanced,
            vec![
                Flashcard::new("Zug", "train"),
                Flashcard::new("Bahnhof", "station"),
            ],
        )
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let store = InMemoryDeckStore::new();
        let original = deck("Travel");
        let id = store.save(original.clone()).await.unwrap();

        let loaded = store.load(id).await.unwrap();
        assert_eq!(loaded.id, id);
        assert_eq!(loaded.name, "Travel");
        assert_eq!(loaded.language, Language::German);
        assert_eq!(loaded.difficulty, Difficulty::Advanced);
        assert_eq!(loaded.cards, original.cards);
    }

    #[tokio::test]
    async fn test_load_missing_is_not_found() {
        let store = InMemoryDeckStore::new();
        let id = Uuid::new_v4();
        match store.load(id).await {
            Err(CoreError::DeckNotFound { id: missing }) => assert_eq!(missing, id),
            other => panic!("expected DeckNotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_list_empty_store() {
        let store = InMemoryDeckStore::new();
        assert!(store.list(None).await.unwrap().is_empty());
        assert!(store.list(Some("nobody")).await.unwrap().is_empty());
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_list_filters_by_owner_and_keeps_save_order() {
        let store = InMemoryDeckStore::new();
        let first = store.save(deck("First").with_owner("ana")).await.unwrap();
        let second = store.save(deck("Second")).await.unwrap();
        let third = store.save(deck("Third").with_owner("ana")).await.unwrap();

        let all: Vec<_> = store.list(None).await.unwrap().into_iter().map(|s| s.id).collect();
        assert_eq!(all.len(), 3);
        assert!(all.contains(&second));

        let ana: Vec<_> = store
            .list(Some("ana"))
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ana.len(), 2);
        assert!(ana.contains(&first) && ana.contains(&third));

        assert_eq!(store.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_clone_shares_state() {
        let store = InMemoryDeckStore::new();
        let clone = store.clone();
        let id = store.save(deck("Shared")).await.unwrap();
        assert!(clone.load(id).await.is_ok());
    }

    #[test]
    fn test_backend_kind() {
        assert_eq!(InMemoryDeckStore::new().backend(), StorageBackend::InMemory);
    }
}
