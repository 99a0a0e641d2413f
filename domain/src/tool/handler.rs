//! Executable tool
//!
//! A [`Tool`] pairs a [`ToolDefinition`] with its async handler. Tools are
//! created when a plugin enumerates its operations, are immutable after
//! creation, and are rebuilt every session — nothing here is persisted.
//!
//! The execution invariant lives one level up: handlers are only ever
//! invoked with [`ToolArgs`] that already passed schema validation.

use std::sync::Arc;

use async_trait::async_trait;

use super::entities::ToolDefinition;
use super::validation::ToolArgs;
use super::value_objects::ToolError;

/// Async executor behind a tool.
///
/// Implementations hold whatever they need to do the work: a protocol
/// client, a wallet handle, a supported-chain list. Each call is
/// independent; the registry gives no ordering guarantee between
/// concurrent invocations.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Run the operation with validated arguments.
    async fn run(&self, args: &ToolArgs) -> Result<serde_json::Value, ToolError>;
}

/// A named, schema-validated, asynchronously executable operation.
#[derive(Clone)]
pub struct Tool {
    /// Schema and metadata surfaced to the calling agent
    pub definition: ToolDefinition,
    handler: Arc<dyn ToolHandler>,
}

impl Tool {
    pub fn new(definition: ToolDefinition, handler: Arc<dyn ToolHandler>) -> Self {
        Self { definition, handler }
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn canonical_name(&self) -> String {
        self.definition.canonical_name()
    }

    /// Execute the handler. Callers must validate first; see
    /// [`super::validation::validate_call`].
    pub async fn execute(&self, args: &ToolArgs) -> Result<serde_json::Value, ToolError> {
        self.handler.run(args).await
    }
}

impl std::fmt::Debug for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tool")
            .field("name", &self.definition.name)
            .field("parameters", &self.definition.parameters.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::entities::{ToolCall, ToolParameter};
    use crate::tool::validation::validate_call;

    struct EchoHandler;

    #[async_trait]
    impl ToolHandler for EchoHandler {
        async fn run(&self, args: &ToolArgs) -> Result<serde_json::Value, ToolError> {
            Ok(serde_json::json!({ "echo": args.get_str("message") }))
        }
    }

    #[tokio::test]
    async fn test_tool_execute() {
        let definition = ToolDefinition::new("echo", "Echo a message")
            .with_parameter(ToolParameter::new("message", "Message", true));
        let tool = Tool::new(definition.clone(), Arc::new(EchoHandler));

        let call = ToolCall::new("echo").with_arg("message", "hi");
        let args = validate_call(&call, &definition).unwrap();
        let out = tool.execute(&args).await.unwrap();

        assert_eq!(out["echo"], "hi");
        assert_eq!(tool.name(), "echo");
        assert_eq!(tool.canonical_name(), "ECHO");
    }
}
