//! Study Buddy Storage Layer
//!
//! Durable deck storage for the Study Buddy server.
//!
//! # Architecture
//! - `file_store`: `DeckStore` backed by one JSON document per deck
//! - `serialization`: JSON encoding of stored decks
//!
//! The in-memory backend lives in `study_buddy_core::stubs`.

pub mod file_store;
pub mod serialization;

pub use file_store::FileDeckStore;
pub use serialization::{deserialize_deck, serialize_deck, SerializationError};

// Re-export core types for storage consumers
pub use study_buddy_core::traits::{DeckStore, StorageBackend};
pub use study_buddy_core::types::{Deck, DeckId, DeckSummary, NewDeck};
