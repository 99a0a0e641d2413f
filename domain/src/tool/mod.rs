//! Tool domain module
//!
//! Core abstractions for the adapter's **tool system** — how wallet and
//! protocol operations are exposed to a calling agent as named,
//! schema-validated, asynchronously executable tools.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ ToolSet      │───▶│ ToolCall     │───▶│ Result/Error │
//! │ (namespace)  │    │ (invocation) │    │ (outcome)    │
//! └──────┬───────┘    └──────────────┘    └──────────────┘
//!        │
//!        └─ "AAVE_SUPPLY" → Tool { definition, handler }
//! ```
//!
//! # Validation precedes execution
//!
//! A [`Tool`]'s handler is never called with unvalidated input. The
//! dispatcher runs [`validation::validate_call`] first; only a successful
//! [`validation::ToolArgs`] reaches [`Tool::execute`]. Validation failures
//! enumerate every violating field so the agent can correct a call in one
//! round trip.
//!
//! # Naming
//!
//! Tools declare snake_case names (`aave_supply`); the external protocol
//! sees the canonical upper-case form (`AAVE_SUPPLY`). Canonicalization is
//! deterministic, and a collision across plugins is a startup error
//! ([`set::ToolCollision`]), never silently resolved.
//!
//! # Key types
//!
//! - [`entities::ToolDefinition`] — schema for a single tool
//! - [`entities::ToolCall`] — a raw invocation request
//! - [`handler::Tool`] / [`handler::ToolHandler`] — the executable unit
//! - [`set::ToolSet`] — the flat collision-checked namespace
//! - [`value_objects::ToolError`] — typed provider errors
//! - [`value_objects::Amount`] — exact-or-auto amount union

pub mod entities;
pub mod handler;
pub mod set;
pub mod validation;
pub mod value_objects;

pub use entities::{ParamType, ToolCall, ToolDefinition, ToolParameter, canonical_tool_name};
pub use handler::{Tool, ToolHandler};
pub use set::{RegisteredTool, ToolCollision, ToolSet};
pub use validation::{ToolArgs, ValidationError, Violation, validate_call};
pub use value_objects::{Amount, ToolError};
