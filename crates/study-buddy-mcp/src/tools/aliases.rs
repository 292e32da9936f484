//! Legacy tool name aliases.
//!
//! Aliases are accepted by `tools/call` but never advertised by
//! `tools/list`.

use super::names;

/// (alias, canonical name)
pub const TOOL_ALIASES: &[(&str, &str)] = &[(names::CREATE_FLASHCARD_DECK, names::CONFIGURE_DECK)];

/// Map an alias to its canonical tool name. Other names pass through.
pub fn resolve_alias(name: &str) -> &str {
    TOOL_ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(name)
}
