//! In-process implementations for development and testing.
//!
//! - [`InMemoryDeckStore`]: `HashMap`-backed [`DeckStore`](crate::traits::DeckStore).
//!   No persistence; data is lost on drop. This is the default backend
//!   (`storage.backend = "memory"`).

mod deck_store_stub;

pub use self::deck_store_stub::InMemoryDeckStore;
