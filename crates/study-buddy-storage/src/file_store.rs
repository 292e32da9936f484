//! Directory-backed `DeckStore`.
//!
//! Layout: `<root>/<deck-id>.json`, one document per deck. Writes land in
//! `<deck-id>.json.tmp` first and are renamed into place, so a reader never
//! observes a half-written deck.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, warn};
use uuid::Uuid;

use study_buddy_core::error::{CoreError, CoreResult};
use study_buddy_core::traits::{ordered_summaries, DeckStore, StorageBackend};
use study_buddy_core::types::{Deck, DeckId, DeckSummary, NewDeck};

use crate::serialization::{deserialize_deck, serialize_deck};

const DOCUMENT_EXTENSION: &str = "json";

/// Deck store that keeps one JSON file per deck under a root directory.
#[derive(Debug, Clone)]
pub struct FileDeckStore {
    root: PathBuf,
}

impl FileDeckStore {
    /// Open (and create if needed) a deck directory.
    ///
    /// # Errors
    /// `CoreError::StorageError` if the directory cannot be created.
    pub async fn open(root: impl AsRef<Path>) -> CoreResult<Self> {
        let root = root.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&root).await.map_err(|e| {
            CoreError::StorageError(format!(
                "cannot create deck directory {}: {}",
                root.display(),
                e
            ))
        })?;
        debug!(root = %root.display(), "Opened file deck store");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn document_path(&self, id: DeckId) -> PathBuf {
        self.root.join(format!("{id}.{DOCUMENT_EXTENSION}"))
    }

    async fn read_document(&self, path: &Path) -> CoreResult<Deck> {
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            CoreError::StorageError(format!("cannot read {}: {}", path.display(), e))
        })?;
        deserialize_deck(&bytes).map_err(|e| {
            CoreError::StorageError(format!("corrupt deck document {}: {}", path.display(), e))
        })
    }

    /// Every readable deck, in directory order.
    ///
    /// Documents that cannot be read or decoded are logged and skipped, so
    /// one stray file never hides the rest of the directory. `load` still
    /// reports them as `StorageError`.
    async fn read_all(&self) -> CoreResult<Vec<Deck>> {
        let mut entries = tokio::fs::read_dir(&self.root).await.map_err(|e| {
            CoreError::StorageError(format!("cannot list {}: {}", self.root.display(), e))
        })?;

        let mut decks = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| CoreError::StorageError(format!("cannot list deck directory: {e}")))?
        {
            let path = entry.path();
            // Skips leftover `.json.tmp` files from interrupted writes.
            if path.extension().and_then(|ext| ext.to_str()) != Some(DOCUMENT_EXTENSION) {
                continue;
            }
            match self.read_document(&path).await {
                Ok(deck) => decks.push(deck),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping unreadable deck document");
                }
            }
        }
        Ok(decks)
    }
}

#[async_trait]
impl DeckStore for FileDeckStore {
    async fn save(&self, deck: NewDeck) -> CoreResult<DeckId> {
        let id = Uuid::new_v4();
        let deck = deck.into_deck(id, Utc::now());
        let bytes = serialize_deck(&deck)?;

        let final_path = self.document_path(id);
        let tmp_path = final_path.with_extension(format!("{DOCUMENT_EXTENSION}.tmp"));

        tokio::fs::write(&tmp_path, &bytes).await.map_err(|e| {
            CoreError::StorageError(format!("cannot write {}: {}", tmp_path.display(), e))
        })?;

        if let Err(e) = tokio::fs::rename(&tmp_path, &final_path).await {
            if let Err(cleanup) = tokio::fs::remove_file(&tmp_path).await {
                warn!(path = %tmp_path.display(), error = %cleanup, "Failed to remove temp deck file");
            }
            return Err(CoreError::StorageError(format!(
                "cannot move deck into place at {}: {}",
                final_path.display(),
                e
            )));
        }

        debug!(deck_id = %id, cards = deck.card_count(), "Saved deck to disk");
        Ok(id)
    }

    async fn load(&self, id: DeckId) -> CoreResult<Deck> {
        let path = self.document_path(id);
        match tokio::fs::metadata(&path).await {
            Ok(_) => self.read_document(&path).await,
            Err(e) if e.kind() == ErrorKind::NotFound => Err(CoreError::DeckNotFound { id }),
            Err(e) => Err(CoreError::StorageError(format!(
                "cannot stat {}: {}",
                path.display(),
                e
            ))),
        }
    }

    async fn list(&self, user_id: Option<&str>) -> CoreResult<Vec<DeckSummary>> {
        let decks = self.read_all().await?;
        Ok(ordered_summaries(
            decks.iter().filter(|deck| deck.is_visible_to(user_id)),
        ))
    }

    async fn count(&self) -> CoreResult<usize> {
        Ok(self.read_all().await?.len())
    }

    fn backend(&self) -> StorageBackend {
        StorageBackend::File
    }
}
