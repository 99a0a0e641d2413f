//! Configuration loading and validation
//!
//! All environment-derived settings (keys, credentials, endpoints, active
//! plugins) are collected into one validated [`FileConfig`] built once at
//! startup and passed down by reference.

pub mod file_config;
pub mod loader;

pub use file_config::{
    ConfigValidationError, FileApisConfig, FileConfig, FileEvmWalletConfig,
    FileHederaWalletConfig, FilePluginsConfig, FileServerConfig, FileSolanaWalletConfig,
    FileWalletsConfig, KNOWN_PLUGINS,
};
pub use loader::ConfigLoader;
