//! Deck document serialization.
//!
//! Stored decks are pretty-printed JSON so a deck directory can be
//! inspected and edited by hand.

use thiserror::Error;

use study_buddy_core::types::Deck;
use study_buddy_core::CoreError;

/// Errors that can occur while encoding or decoding a deck document.
///
/// # Example
/// ```rust
/// use study_buddy_storage::serialization::SerializationError;
///
/// let error = SerializationError::DeserializeFailed("EOF".into());
/// assert!(error.to_string().contains("EOF"));
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SerializationError {
    #[error("Serialization failed: {0}")]
    SerializeFailed(String),

    #[error("Deserialization failed: {0}")]
    DeserializeFailed(String),
}

impl From<SerializationError> for CoreError {
    fn from(err: SerializationError) -> Self {
        // A document we cannot read back is a storage fault, not caller input.
        CoreError::StorageError(err.to_string())
    }
}

/// Serialize a deck to JSON bytes.
pub fn serialize_deck(deck: &Deck) -> Result<Vec<u8>, SerializationError> {
    serde_json::to_vec_pretty(deck).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserialize JSON bytes to a deck.
///
/// # Errors
/// `SerializationError::DeserializeFailed` for truncated, malformed, or
/// schema-mismatched documents (e.g. an unknown language literal).
pub fn deserialize_deck(bytes: &[u8]) -> Result<Deck, SerializationError> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}
