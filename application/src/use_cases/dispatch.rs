//! Tool dispatch
//!
//! The dispatcher wraps the aggregated [`ToolSet`] for the external
//! tool-calling protocol: every invocation is validated against the tool's
//! schema before the handler runs, logged at entry and exit, and reported
//! as a [`CallOutcome`] — a failed call never propagates an exception to
//! the transport.
//!
//! Values pass through unchanged except for the coercions the schema
//! defines; the dispatcher performs no unit conversion of its own.
//!
//! # Cancellation
//!
//! `call` takes a [`CancellationToken`] and races the handler against it,
//! so a network stall inside a provider cannot hang a shutdown. A
//! cancelled call yields an error outcome like any other failure.

use tokio_util::sync::CancellationToken;
use tracing::debug;

use relay_domain::{
    RegisteredTool, ToolCall, ToolDefinition, ToolError, ToolSet, canonical_tool_name,
    validate_call,
};

/// Outcome of a dispatched call, ready for envelope shaping.
///
/// `text` is the serialized success value or the error message verbatim;
/// the presentation layer wraps it into the protocol's content blocks.
#[derive(Debug, Clone)]
pub struct CallOutcome {
    pub is_error: bool,
    pub text: String,
}

impl CallOutcome {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            is_error: false,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            is_error: true,
            text: text.into(),
        }
    }
}

/// Wraps the flat tool namespace with validation, logging, and error shaping.
pub struct Dispatcher {
    set: ToolSet,
}

impl Dispatcher {
    pub fn new(set: ToolSet) -> Self {
        Self { set }
    }

    /// Tool definitions in canonical-name order, for protocol listings.
    pub fn definitions(&self) -> Vec<&ToolDefinition> {
        self.set.iter().map(|(_, t)| &t.tool.definition).collect()
    }

    pub fn tool_count(&self) -> usize {
        self.set.len()
    }

    pub fn has_tool(&self, name: &str) -> bool {
        self.set.contains(&canonical_tool_name(name))
    }

    /// Invoke a tool by name with raw JSON arguments.
    ///
    /// The name is canonicalized before lookup, so both `aave_supply` and
    /// `AAVE_SUPPLY` resolve to the same tool.
    pub async fn call(
        &self,
        name: &str,
        arguments: serde_json::Value,
        cancel: &CancellationToken,
    ) -> CallOutcome {
        let canonical = canonical_tool_name(name);
        debug!(tool = %canonical, params = %arguments, "tool call");

        let Some(registered) = self.set.get(&canonical) else {
            debug!(tool = %canonical, "unknown tool");
            return CallOutcome::error(format!("unknown tool: {canonical}"));
        };

        let outcome = self.invoke(registered, &canonical, arguments, cancel).await;
        if outcome.is_error {
            debug!(tool = %canonical, error = %outcome.text, "tool call failed");
        } else {
            debug!(tool = %canonical, "tool call succeeded");
        }
        outcome
    }

    async fn invoke(
        &self,
        registered: &RegisteredTool,
        canonical: &str,
        arguments: serde_json::Value,
        cancel: &CancellationToken,
    ) -> CallOutcome {
        if !arguments.is_object() && !arguments.is_null() {
            return CallOutcome::error(format!(
                "invalid parameters for '{canonical}': expected a JSON object"
            ));
        }

        // Validation always precedes execution; a schema violation never
        // reaches the provider.
        let call = ToolCall::from_json(&registered.tool.definition.name, arguments);
        let args = match validate_call(&call, &registered.tool.definition) {
            Ok(args) => args,
            Err(e) => return CallOutcome::error(e.to_string()),
        };

        let result = tokio::select! {
            // Cancellation wins over an already-ready handler, so an
            // in-progress shutdown never executes another call.
            biased;
            _ = cancel.cancelled() => Err(ToolError::Cancelled(canonical.to_string())),
            result = registered.tool.execute(&args) => result,
        };

        match result {
            Ok(value) => CallOutcome::success(serialize_result(value)),
            Err(e) => CallOutcome::error(e.to_string()),
        }
    }
}

/// Serialize a handler's success value for a text content block.
///
/// Plain strings pass through as-is; structured values are serialized to
/// JSON text.
fn serialize_result(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}
