//! Core traits for the Study Buddy system.
//!
//! - [`DeckStore`]: persistence of decks (save / load / list)

mod deck_store;

pub use self::deck_store::{ordered_summaries, DeckStore, StorageBackend};
