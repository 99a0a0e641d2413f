//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; all external configuration (keys,
//! credentials, endpoints) flows through here once at startup — no
//! component reads ambient process state on its own.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("server.name cannot be empty")]
    EmptyServerName,

    #[error("unsupported transport '{0}' (expected \"stdio\")")]
    UnsupportedTransport(String),

    #[error("wallets.{family}: either a private key or an address/public key is required")]
    WalletWithoutCredentials { family: String },

    #[error("plugins.enabled contains unknown plugin '{0}'")]
    UnknownPlugin(String),
}

/// Known plugin names, used to validate `plugins.enabled`.
pub const KNOWN_PLUGINS: &[&str] = &["cookie", "aave", "jupiter", "meteora", "hedera"];

/// Raw server configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Server name reported during protocol initialization
    pub name: String,
    /// Server version reported during protocol initialization
    pub version: String,
    /// Transport binding ("stdio")
    pub transport: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            name: "onchain-relay".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            transport: "stdio".to_string(),
        }
    }
}

/// Raw EVM wallet configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEvmWalletConfig {
    /// Hex-encoded private key; presence grants full signing
    pub private_key: Option<String>,
    /// Public address; alone it yields a read-only wallet
    pub address: Option<String>,
    /// Chain the wallet starts on
    pub default_chain: String,
}

/// Raw Solana wallet configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSolanaWalletConfig {
    /// Base58-encoded keypair; presence grants full signing
    pub private_key: Option<String>,
    /// Public key; alone it yields a read-only wallet
    pub public_key: Option<String>,
}

/// Raw Hedera wallet configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHederaWalletConfig {
    /// Operator account id (e.g. "0.0.12345")
    pub operator_id: Option<String>,
    /// Operator private key; presence grants full signing
    pub operator_key: Option<String>,
    /// Network name ("mainnet" or "testnet")
    pub network: String,
}

impl Default for FileHederaWalletConfig {
    fn default() -> Self {
        Self {
            operator_id: None,
            operator_key: None,
            network: "mainnet".to_string(),
        }
    }
}

/// Raw wallets section from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWalletsConfig {
    pub evm: Option<FileEvmWalletConfig>,
    pub solana: Option<FileSolanaWalletConfig>,
    pub hedera: Option<FileHederaWalletConfig>,
}

/// Raw API endpoints and credentials section from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApisConfig {
    /// Cookie DataSwarm API key
    pub cookie_api_key: Option<String>,
    /// Cookie API base URL
    pub cookie_base_url: String,
    /// Jupiter quote/swap API base URL
    pub jupiter_base_url: String,
    /// Aave capability endpoint base URL
    pub aave_base_url: String,
    /// Meteora capability endpoint base URL
    pub meteora_base_url: String,
    /// Hedera mirror node base URL
    pub hedera_mirror_url: String,
}

impl Default for FileApisConfig {
    fn default() -> Self {
        Self {
            cookie_api_key: None,
            cookie_base_url: "https://api.cookie.fun".to_string(),
            jupiter_base_url: "https://quote-api.jup.ag".to_string(),
            aave_base_url: "https://aave-gateway.invalid".to_string(),
            meteora_base_url: "https://meteora-gateway.invalid".to_string(),
            hedera_mirror_url: "https://mainnet.mirrornode.hedera.com".to_string(),
        }
    }
}

/// Raw plugins section from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePluginsConfig {
    /// Plugins to activate; defaults to every known plugin
    pub enabled: Vec<String>,
}

impl Default for FilePluginsConfig {
    fn default() -> Self {
        Self {
            enabled: KNOWN_PLUGINS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Complete raw configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub server: FileServerConfig,
    pub wallets: FileWalletsConfig,
    pub apis: FileApisConfig,
    pub plugins: FilePluginsConfig,
}

impl FileConfig {
    /// Validate the merged configuration once at startup.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.server.name.trim().is_empty() {
            return Err(ConfigValidationError::EmptyServerName);
        }
        if self.server.transport != "stdio" {
            return Err(ConfigValidationError::UnsupportedTransport(
                self.server.transport.clone(),
            ));
        }

        if let Some(evm) = &self.wallets.evm {
            if evm.private_key.is_none() && evm.address.is_none() {
                return Err(ConfigValidationError::WalletWithoutCredentials {
                    family: "evm".to_string(),
                });
            }
        }
        if let Some(solana) = &self.wallets.solana {
            if solana.private_key.is_none() && solana.public_key.is_none() {
                return Err(ConfigValidationError::WalletWithoutCredentials {
                    family: "solana".to_string(),
                });
            }
        }
        if let Some(hedera) = &self.wallets.hedera {
            if hedera.operator_id.is_none() {
                return Err(ConfigValidationError::WalletWithoutCredentials {
                    family: "hedera".to_string(),
                });
            }
        }

        for plugin in &self.plugins.enabled {
            if !KNOWN_PLUGINS.contains(&plugin.as_str()) {
                return Err(ConfigValidationError::UnknownPlugin(plugin.clone()));
            }
        }

        Ok(())
    }

    /// Whether a plugin is activated by configuration.
    pub fn plugin_enabled(&self, name: &str) -> bool {
        self.plugins.enabled.iter().any(|p| p == name)
    }
}
