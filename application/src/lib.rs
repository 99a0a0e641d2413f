//! Application layer for onchain-relay
//!
//! This crate contains the orchestration core: the tool registry that
//! aggregates plugins into one flat namespace under the signing-capability
//! gate, and the dispatcher that wraps every tool with validation, logging,
//! and structured error reporting. It depends only on the domain layer.
//!
//! # Lifecycle
//!
//! Registry aggregation runs once per session bootstrap and is fatal on
//! inconsistency (duplicate names, plugin failures) — the session never
//! starts with a partial tool map. Dispatch runs per request and never
//! lets an error escape as an exception: every call resolves to a
//! [`CallOutcome`].

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::ToolSchemaPort;
pub use use_cases::{CallOutcome, Dispatcher, RegistryError, SessionWallets, ToolRegistry};
