//! Tool schema conversion port.
//!
//! Separates "which tools exist" (domain + registry) from "how the external
//! protocol serializes them" (infrastructure). The dispatcher hands this
//! port its definitions; the adapter produces the JSON Schema shape the
//! tool-calling protocol expects.

use relay_domain::ToolDefinition;

/// Port for converting tool definitions to the protocol's listing format.
pub trait ToolSchemaPort: Send + Sync {
    /// Convert a single definition to a protocol tool entry
    /// (canonical name, description, JSON-schema parameters).
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value;

    /// Convert a batch of definitions, preserving the given order.
    fn all_tools_schema(&self, tools: &[&ToolDefinition]) -> Vec<serde_json::Value> {
        tools.iter().map(|t| self.tool_to_schema(t)).collect()
    }
}
