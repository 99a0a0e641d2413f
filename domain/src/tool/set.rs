//! Flat tool namespace
//!
//! [`ToolSet`] is the single flat `canonical name -> tool` map the registry
//! produces. Insertion is collision-checked: two tools canonicalizing to the
//! same external name is a configuration error surfaced with both declaring
//! plugins, never resolved by last-write-wins.

use std::collections::BTreeMap;

use thiserror::Error;

use super::handler::Tool;

/// Collision raised while building the flat namespace.
#[derive(Debug, Error)]
#[error("duplicate tool name '{name}': declared by both '{first_plugin}' and '{second_plugin}'")]
pub struct ToolCollision {
    /// Canonical (external) name both tools map to
    pub name: String,
    /// Plugin that registered the name first
    pub first_plugin: String,
    /// Plugin whose registration collided
    pub second_plugin: String,
}

/// A tool together with the plugin that contributed it.
#[derive(Debug, Clone)]
pub struct RegisteredTool {
    pub tool: Tool,
    pub plugin: String,
}

/// Flat, ordered namespace of registered tools, keyed by canonical name.
///
/// Ordering is deterministic (sorted by name), which makes aggregation
/// idempotent: the same plugins and wallets always yield the same set.
#[derive(Debug, Default)]
pub struct ToolSet {
    entries: BTreeMap<String, RegisteredTool>,
}

impl ToolSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tool under its canonical name, failing on collision.
    pub fn insert(&mut self, plugin: &str, tool: Tool) -> Result<(), ToolCollision> {
        let name = tool.canonical_name();
        if let Some(existing) = self.entries.get(&name) {
            return Err(ToolCollision {
                name,
                first_plugin: existing.plugin.clone(),
                second_plugin: plugin.to_string(),
            });
        }
        self.entries.insert(
            name,
            RegisteredTool {
                tool,
                plugin: plugin.to_string(),
            },
        );
        Ok(())
    }

    pub fn get(&self, canonical_name: &str) -> Option<&RegisteredTool> {
        self.entries.get(canonical_name)
    }

    pub fn contains(&self, canonical_name: &str) -> bool {
        self.entries.contains_key(canonical_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate tools in canonical-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RegisteredTool)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Canonical names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(|k| k.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::entities::ToolDefinition;
    use crate::tool::handler::ToolHandler;
    use crate::tool::validation::ToolArgs;
    use crate::tool::value_objects::ToolError;
    use async_trait::async_trait;
    use std::sync::Arc;

    struct NoopHandler;

    #[async_trait]
    impl ToolHandler for NoopHandler {
        async fn run(&self, _args: &ToolArgs) -> Result<serde_json::Value, ToolError> {
            Ok(serde_json::Value::Null)
        }
    }

    fn tool(name: &str) -> Tool {
        Tool::new(ToolDefinition::new(name, "test tool"), Arc::new(NoopHandler))
    }

    #[test]
    fn test_insert_and_lookup_by_canonical_name() {
        let mut set = ToolSet::new();
        set.insert("aave", tool("aave_supply")).unwrap();

        assert!(set.contains("AAVE_SUPPLY"));
        assert!(!set.contains("aave_supply"));
        assert_eq!(set.get("AAVE_SUPPLY").unwrap().plugin, "aave");
    }

    #[test]
    fn test_collision_carries_both_plugins() {
        let mut set = ToolSet::new();
        set.insert("aave", tool("supply")).unwrap();

        // Different declared casing, same canonical name
        let err = set.insert("compound", tool("Supply")).unwrap_err();
        assert_eq!(err.name, "SUPPLY");
        assert_eq!(err.first_plugin, "aave");
        assert_eq!(err.second_plugin, "compound");
        assert!(err.to_string().contains("aave"));
        assert!(err.to_string().contains("compound"));
    }

    #[test]
    fn test_names_are_sorted() {
        let mut set = ToolSet::new();
        set.insert("jupiter", tool("jupiter_swap")).unwrap();
        set.insert("aave", tool("aave_supply")).unwrap();
        set.insert("cookie", tool("cookie_get_agent_by_username")).unwrap();

        assert_eq!(
            set.names(),
            vec!["AAVE_SUPPLY", "COOKIE_GET_AGENT_BY_USERNAME", "JUPITER_SWAP"]
        );
    }
}
