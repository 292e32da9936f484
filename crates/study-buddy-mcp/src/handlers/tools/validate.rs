//! Validation for MCP tool request DTOs.
//!
//! Request DTOs deserialize loosely (every field an optional JSON value,
//! `null` treated as absent) and [`ValidateInto`] turns them into typed
//! input. The field helpers below name the offending wire key in every
//! error, using an indexed path such as `deck[2].translation` for cards.

use std::str::FromStr;

use serde_json::Value;

use study_buddy_core::types::{Flashcard, ParseEnumError};

use super::error::ToolError;

/// Trait for DTOs whose `validate()` parses and returns a typed output.
///
/// DTOs implementing this trait are used with `Handlers::parse_request_validated`.
pub(crate) trait ValidateInto {
    type Output;
    fn validate(&self) -> Result<Self::Output, ToolError>;
}

/// Require a field to be present (and non-null).
pub(crate) fn require<'a>(field: &str, value: Option<&'a Value>) -> Result<&'a Value, ToolError> {
    value.ok_or_else(|| ToolError::validation(field, "is required"))
}

pub(crate) fn parse_string(field: &str, value: &Value) -> Result<String, ToolError> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| ToolError::validation(field, "must be a string"))
}

/// Parse a closed-set literal such as a `Language` or `Difficulty`.
pub(crate) fn parse_enum<T>(field: &str, value: &Value) -> Result<T, ToolError>
where
    T: FromStr<Err = ParseEnumError>,
{
    let literal = value
        .as_str()
        .ok_or_else(|| ToolError::validation(field, "must be a string"))?;
    literal
        .parse()
        .map_err(|e: ParseEnumError| ToolError::validation(field, e.to_string()))
}

/// Parse an integer in `[min, max]`. Integral floats such as `10.0` are
/// accepted; fractions, strings and out-of-range numbers are not.
pub(crate) fn parse_bounded_int(
    field: &str,
    value: &Value,
    min: u32,
    max: u32,
) -> Result<u32, ToolError> {
    let out_of_range = || {
        ToolError::validation(field, format!("must be an integer between {min} and {max}"))
    };

    let number = match value {
        Value::Number(n) => n,
        _ => return Err(out_of_range()),
    };
    let parsed = if let Some(n) = number.as_u64() {
        Some(n)
    } else if number.is_i64() {
        None
    } else {
        number
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u64::MAX as f64)
            .map(|f| f as u64)
    };

    match parsed {
        Some(n) if n >= u64::from(min) && n <= u64::from(max) => Ok(n as u32),
        _ => Err(out_of_range()),
    }
}

/// Parse an ordered card list. One malformed card fails the whole list.
pub(crate) fn parse_cards(field: &str, value: &Value) -> Result<Vec<Flashcard>, ToolError> {
    let items = value
        .as_array()
        .ok_or_else(|| ToolError::validation(field, "must be an array of flashcards"))?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| parse_card(&format!("{field}[{i}]"), item))
        .collect()
}

fn parse_card(path: &str, value: &Value) -> Result<Flashcard, ToolError> {
    let card = value
        .as_object()
        .ok_or_else(|| ToolError::validation(path, "must be an object with word and translation"))?;

    let text_field = |key: &str| -> Result<String, ToolError> {
        let field = format!("{path}.{key}");
        match card.get(key) {
            None | Some(Value::Null) => Err(ToolError::validation(field, "is required")),
            Some(v) => parse_string(&field, v),
        }
    };

    Ok(Flashcard::new(text_field("word")?, text_field("translation")?))
}
