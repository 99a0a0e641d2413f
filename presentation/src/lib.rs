//! Presentation layer for onchain-relay
//!
//! This crate contains the CLI definitions and the stdio binding that
//! speaks the agent tool protocol. It shapes dispatcher outcomes into
//! protocol envelopes and nothing more; all decisions live below it.

pub mod cli;
pub mod mcp;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use mcp::{CallResult, ContentBlock, StdioServer};
