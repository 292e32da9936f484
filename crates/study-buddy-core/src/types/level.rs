//! Closed value sets: study language and difficulty level.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A string did not match any literal of a closed value set.
///
/// Matching is case-sensitive: `"Spanish"` is not a [`Language`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected one of {expected}, got '{got}'")]
pub struct ParseEnumError {
    /// Comma-separated list of accepted literals
    pub expected: String,
    /// The rejected input
    pub got: String,
}

impl ParseEnumError {
    fn new(expected: &[&str], got: &str) -> Self {
        Self {
            expected: expected.join(", "),
            got: got.to_string(),
        }
    }
}

/// Language a deck is studied in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Spanish,
    French,
    German,
    Italian,
    Portuguese,
}

impl Language {
    /// Every accepted language, in advertisement order.
    pub const ALL: [Language; 5] = [
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Italian,
        Language::Portuguese,
    ];

    /// Wire literal for this language.
    pub const fn as_str(self) -> &'static str {
        match self {
            Language::Spanish => "spanish",
            Language::French => "french",
            Language::German => "german",
            Language::Italian => "italian",
            Language::Portuguese => "portuguese",
        }
    }

    /// Wire literals of [`Language::ALL`].
    pub fn literals() -> Vec<&'static str> {
        Self::ALL.iter().map(|l| l.as_str()).collect()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| ParseEnumError::new(&Self::literals(), s))
    }
}

/// Difficulty level of a deck's vocabulary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Every accepted difficulty, from easiest to hardest.
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    /// Wire literal for this difficulty.
    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    /// Wire literals of [`Difficulty::ALL`].
    pub fn literals() -> Vec<&'static str> {
        Self::ALL.iter().map(|d| d.as_str()).collect()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| ParseEnumError::new(&Self::literals(), s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_parse_all_literals() {
        for lang in Language::ALL {
            assert_eq!(lang.as_str().parse::<Language>().unwrap(), lang);
        }
    }

    #[test]
    fn test_language_parse_is_case_sensitive() {
        let err = "Spanish".parse::<Language>().unwrap_err();
        assert_eq!(err.got, "Spanish");
        assert_eq!(
            err.to_string(),
            "expected one of spanish, french, german, italian, portuguese, got 'Spanish'"
        );
    }

    #[test]
    fn test_language_rejects_unknown() {
        assert!("klingon".parse::<Language>().is_err());
        assert!("".parse::<Language>().is_err());
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!(
            "intermediate".parse::<Difficulty>().unwrap(),
            Difficulty::Intermediate
        );
        assert!("expert".parse::<Difficulty>().is_err());
        assert!("BEGINNER".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Language::default(), Language::Spanish);
        assert_eq!(Difficulty::default(), Difficulty::Beginner);
    }

    #[test]
    fn test_serde_uses_lowercase_literals() {
        let json = serde_json::to_string(&Language::Portuguese).unwrap();
        assert_eq!(json, "\"portuguese\"");
        let parsed: Difficulty = serde_json::from_str("\"advanced\"").unwrap();
        assert_eq!(parsed, Difficulty::Advanced);
    }
}
