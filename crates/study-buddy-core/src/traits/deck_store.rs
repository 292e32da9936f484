//! Deck store trait for persistent storage.

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{Deck, DeckId, DeckSummary, NewDeck};

/// Storage backend type indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// In-memory storage. Data is lost when the process exits.
    InMemory,
    /// One JSON document per deck in a directory.
    File,
}

impl StorageBackend {
    pub const fn as_str(self) -> &'static str {
        match self {
            StorageBackend::InMemory => "memory",
            StorageBackend::File => "file",
        }
    }
}

/// Persistence contract for flashcard decks.
///
/// Every call is a single round trip with no retries; callers surface
/// failures as-is. Implementations must keep card order intact.
///
/// # Object Safety
///
/// This trait is object-safe and is shared as `Arc<dyn DeckStore>`.
#[async_trait]
pub trait DeckStore: Send + Sync {
    /// Persist a new deck and return the id assigned to it.
    ///
    /// # Errors
    /// - `CoreError::StorageError` if the write fails
    async fn save(&self, deck: NewDeck) -> CoreResult<DeckId>;

    /// Load a saved deck by id.
    ///
    /// # Errors
    /// - `CoreError::DeckNotFound` if no deck has this id
    /// - `CoreError::StorageError` if the read fails
    async fn load(&self, id: DeckId) -> CoreResult<Deck>;

    /// List summaries of saved decks, oldest first.
    ///
    /// With `user_id = None` every deck is listed; otherwise only decks
    /// owned by that user. An empty store returns an empty vector.
    async fn list(&self, user_id: Option<&str>) -> CoreResult<Vec<DeckSummary>>;

    /// Number of stored decks.
    async fn count(&self) -> CoreResult<usize>;

    /// Which backend this store is.
    fn backend(&self) -> StorageBackend;
}

/// Sort decks oldest first, breaking ties by id, and summarize them.
///
/// Backends use this so listing order is identical everywhere.
pub fn ordered_summaries<'a>(decks: impl Iterator<Item = &'a Deck>) -> Vec<DeckSummary> {
    let mut visible: Vec<&Deck> = decks.collect();
    visible.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
    visible.into_iter().map(Deck::summary).collect()
}
