//! Error types for study-buddy-core.
//!
//! This module defines the central error type [`CoreError`] used throughout
//! the workspace, along with the [`CoreResult<T>`] type alias.
//!
//! # Examples
//!
//! ```rust
//! use study_buddy_core::CoreError;
//! use uuid::Uuid;
//!
//! fn lookup_deck(id: Uuid) -> Result<(), CoreError> {
//!     Err(CoreError::DeckNotFound { id })
//! }
//!
//! assert!(lookup_deck(Uuid::nil()).is_err());
//! ```

use thiserror::Error;
use uuid::Uuid;

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A requested deck was not found in the store.
    ///
    /// # When This Occurs
    ///
    /// - Loading a deck by an id that was never saved
    /// - Loading a deck from a different store instance
    #[error("Deck not found: {id}")]
    DeckNotFound {
        /// The id that was looked up
        id: Uuid,
    },

    /// The deck store could not complete a read or write.
    ///
    /// # When This Occurs
    ///
    /// - Filesystem write or rename failure
    /// - Unreadable or corrupted deck document
    /// - Backend connectivity loss
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error during serialization or deserialization.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::SerializationError(err.to_string())
    }
}

impl From<config::ConfigError> for CoreError {
    fn from(err: config::ConfigError) -> Self {
        CoreError::ConfigError(err.to_string())
    }
}

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_not_found_display() {
        let err = CoreError::DeckNotFound { id: Uuid::nil() };
        assert_eq!(
            err.to_string(),
            "Deck not found: 00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::SerializationError(_)));
    }

    #[test]
    fn test_from_config_error() {
        let err: CoreError = config::ConfigError::Message("bad transport".into()).into();
        assert_eq!(err.to_string(), "Configuration error: bad transport");
    }
}
