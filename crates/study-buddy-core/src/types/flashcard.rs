//! A single word/translation pair.

use serde::{Deserialize, Serialize};

/// One flashcard: a word in the study language and its translation.
///
/// Cards have no identity of their own; they live inside a deck's ordered
/// card list. Empty strings are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Flashcard {
    pub word: String,
    pub translation: String,
}

impl Flashcard {
    pub fn new(word: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            translation: translation.into(),
        }
    }
}
