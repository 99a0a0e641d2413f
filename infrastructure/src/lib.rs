//! # relay-infrastructure
//!
//! Infrastructure layer: everything that touches the outside world.
//!
//! - [`config`]: layered TOML + environment configuration
//! - [`wallets`]: wallet handles built from configured credentials
//! - [`clients`]: protocol client traits and their HTTP implementations
//! - [`plugins`]: protocol plugins wiring clients and wallets into tools
//! - [`schema`]: tool-definition to JSON Schema conversion

pub mod clients;
pub mod config;
pub mod plugins;
pub mod schema;
pub mod wallets;

pub use config::{ConfigLoader, FileConfig};
pub use plugins::{AavePlugin, CookiePlugin, HederaPlugin, JupiterPlugin, MeteoraPlugin};
pub use schema::JsonSchemaToolConverter;
pub use wallets::{EvmWallet, HederaWallet, SolanaWallet, WalletError};
