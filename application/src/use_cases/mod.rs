//! Use cases
//!
//! Session bootstrap (registry aggregation) and per-request dispatch.

pub mod dispatch;
pub mod registry;

pub use dispatch::{CallOutcome, Dispatcher};
pub use registry::{RegistryError, SessionWallets, ToolRegistry};
