//! Agent tool protocol binding

pub mod envelope;
pub mod server;

pub use envelope::{CallResult, ContentBlock};
pub use server::StdioServer;
