//! Domain types for flashcard decks and study sessions.
//!
//! Values here carry no behaviour beyond construction, accessors, and the
//! closed-set parsing for [`Language`] and [`Difficulty`].

mod deck;
mod flashcard;
mod level;

pub use self::deck::{Deck, DeckId, DeckSummary, NewDeck};
pub use self::flashcard::Flashcard;
pub use self::level::{Difficulty, Language, ParseEnumError};
