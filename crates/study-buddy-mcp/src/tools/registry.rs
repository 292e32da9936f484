//! Tool registry: the immutable name -> operation table.
//!
//! Built once at startup and shared as `Arc<ToolRegistry>`. Lookups
//! resolve aliases first, so `createFlashcardDeck` finds `configureDeck`.

use std::collections::HashMap;

use super::aliases::resolve_alias;
use super::definitions::get_tool_definitions;
use super::names;
use super::types::ToolDefinition;

/// The operation a tool name dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ConfigureDeck,
    StartStudySession,
    StartStudySessionFromScratch,
    SelectDeck,
    SaveDeck,
    StartStudySessionFromDeck,
}

impl Operation {
    /// Operation served by a canonical tool name.
    pub fn for_tool(name: &str) -> Option<Self> {
        match name {
            names::CONFIGURE_DECK => Some(Operation::ConfigureDeck),
            names::START_STUDY_SESSION => Some(Operation::StartStudySession),
            names::START_STUDY_SESSION_FROM_SCRATCH => {
                Some(Operation::StartStudySessionFromScratch)
            }
            names::SELECT_DECK => Some(Operation::SelectDeck),
            names::SAVE_DECK => Some(Operation::SaveDeck),
            names::START_STUDY_SESSION_FROM_DECK => Some(Operation::StartStudySessionFromDeck),
            _ => None,
        }
    }
}

/// A registered tool: what is advertised and what runs.
#[derive(Debug, Clone)]
pub struct RegisteredTool {
    pub definition: ToolDefinition,
    pub operation: Operation,
}

impl RegisteredTool {
    pub fn name(&self) -> &str {
        &self.definition.name
    }
}

/// Registry holding all MCP tools.
///
/// Provides:
/// - O(1) lookup by tool name or alias
/// - Definitions in registration order for `tools/list`
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: Vec<RegisteredTool>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Create empty registry.
    pub fn new() -> Self {
        Self {
            tools: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Registry with every Study Buddy tool.
    pub fn with_default_tools() -> Self {
        let mut registry = Self::new();
        for definition in get_tool_definitions() {
            match Operation::for_tool(&definition.name) {
                Some(operation) => registry.register(definition, operation),
                None => tracing::warn!(tool = %definition.name, "Tool definition has no operation, skipping"),
            }
        }
        registry
    }

    /// Register a tool.
    ///
    /// # Panics
    ///
    /// Panics if a tool with the same name is already registered. The
    /// tool table is static, so this only fires on a programming error.
    pub fn register(&mut self, definition: ToolDefinition, operation: Operation) {
        let name = definition.name.clone();
        if self.index.contains_key(&name) {
            panic!("Duplicate tool registration: '{}'", name);
        }
        self.index.insert(name, self.tools.len());
        self.tools.push(RegisteredTool {
            definition,
            operation,
        });
    }

    /// Look up a tool by name, accepting aliases.
    pub fn resolve(&self, name: &str) -> Option<&RegisteredTool> {
        self.index
            .get(resolve_alias(name))
            .and_then(|&i| self.tools.get(i))
    }

    /// Definitions in registration order.
    pub fn definitions(&self) -> Vec<&ToolDefinition> {
        self.tools.iter().map(|t| &t.definition).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::with_default_tools()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_registry_has_all_tools() {
        let registry = ToolRegistry::with_default_tools();
        assert_eq!(registry.len(), 6);
        assert!(!registry.is_empty());
        assert!(registry.contains("saveDeck"));
        assert!(!registry.contains("deleteDeck"));
    }

    #[test]
    fn test_resolve_alias() {
        let registry = ToolRegistry::default();
        let tool = registry.resolve("createFlashcardDeck").unwrap();
        assert_eq!(tool.name(), "configureDeck");
        assert_eq!(tool.operation, Operation::ConfigureDeck);
    }

    #[test]
    fn test_definitions_keep_registration_order() {
        let registry = ToolRegistry::default();
        let names: Vec<&str> = registry
            .definitions()
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        let expected: Vec<String> = get_tool_definitions().into_iter().map(|d| d.name).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_every_definition_maps_to_an_operation() {
        for definition in get_tool_definitions() {
            assert!(
                Operation::for_tool(&definition.name).is_some(),
                "{} has no operation",
                definition.name
            );
        }
    }

    #[test]
    #[should_panic(expected = "Duplicate tool registration")]
    fn test_duplicate_registration_panics() {
        let mut registry = ToolRegistry::new();
        let def = ToolDefinition::new("saveDeck", "save", json!({"type": "object"}));
        registry.register(def.clone(), Operation::SaveDeck);
        registry.register(def, Operation::SaveDeck);
    }
}
