//! Port definitions
//!
//! Interfaces the application layer needs implemented by the
//! infrastructure layer.

pub mod tool_schema;

pub use tool_schema::ToolSchemaPort;
