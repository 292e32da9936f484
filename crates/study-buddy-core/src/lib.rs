//! Study Buddy Core Library
//!
//! Provides the domain types, storage trait, and configuration shared by the
//! Study Buddy flashcard server.
//!
//! # Architecture
//!
//! This crate defines:
//! - Domain types (`Language`, `Difficulty`, `Flashcard`, `Deck`, etc.)
//! - The [`DeckStore`](traits::DeckStore) persistence trait
//! - Error types and result aliases
//! - Configuration structures
//! - An in-memory `DeckStore` backend
//!
//! # Example
//!
//! ```
//! use study_buddy_core::types::{Difficulty, Flashcard, Language, NewDeck};
//!
//! let deck = NewDeck::new(
//!     "Greetings",
//!     Language::French,
//!     Difficulty::Beginner,
//!     vec![Flashcard::new("bonjour", "hello")],
//! );
//! assert_eq!(deck.card_count(), 1);
//! ```

pub mod config;
pub mod error;
pub mod stubs;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use config::Config;
pub use error::{CoreError, CoreResult};
