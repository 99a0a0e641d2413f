//! Protocol plugins
//!
//! One module per protocol integration. Each plugin pairs a capability
//! provider (client trait + supported chains) with the tool definitions it
//! exposes, splitting them into public and private sets for the registry.

pub mod aave;
pub mod cookie;
pub mod hedera;
pub mod jupiter;
pub mod meteora;

pub use aave::AavePlugin;
pub use cookie::CookiePlugin;
pub use hedera::HederaPlugin;
pub use jupiter::JupiterPlugin;
pub use meteora::MeteoraPlugin;
