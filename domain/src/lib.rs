//! Domain layer for onchain-relay
//!
//! This crate contains the core contracts of the adapter: chain identity,
//! wallet capability, tool definitions and validation, and the
//! plugin/provider traits. It has no dependencies on infrastructure or
//! presentation concerns — no I/O happens here.
//!
//! # Core concepts
//!
//! ## Tools
//!
//! Every protocol operation is surfaced as a **tool**: a named,
//! schema-validated, asynchronously executable unit. Tools are enumerated
//! by plugins, aggregated into one flat namespace by the registry
//! (application layer), and executed through the dispatcher.
//!
//! ## Public vs. private
//!
//! A [`Plugin`] splits its tools by signing requirement. Private tools are
//! only reachable when the session wallet for the plugin's chain family
//! carries [`SigningCapability::FullSigning`]; with a read-only wallet they
//! are omitted entirely, not exposed as always-failing stubs.

pub mod chain;
pub mod plugin;
pub mod provider;
pub mod tool;
pub mod wallet;

// Re-export commonly used types
pub use chain::{Chain, ChainFamily, SigningCapability};
pub use plugin::{Plugin, PluginError};
pub use provider::CapabilityProvider;
pub use tool::{
    Amount, ParamType, RegisteredTool, Tool, ToolArgs, ToolCall, ToolCollision, ToolDefinition,
    ToolError, ToolHandler, ToolParameter, ToolSet, ValidationError, Violation,
    canonical_tool_name, validate_call,
};
pub use wallet::WalletHandle;
