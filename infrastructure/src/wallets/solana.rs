//! Solana wallet handle

use relay_domain::{ChainFamily, SigningCapability, WalletHandle};

use crate::config::FileSolanaWalletConfig;

use super::WalletError;

/// Wallet handle for Solana.
pub struct SolanaWallet {
    public_key: Option<String>,
    capability: SigningCapability,
}

impl SolanaWallet {
    /// Build from configuration. A keypair grants full signing; a public
    /// key alone yields a read-only wallet.
    pub fn from_config(config: &FileSolanaWalletConfig) -> Result<Self, WalletError> {
        let capability = if config.private_key.is_some() {
            SigningCapability::FullSigning
        } else if config.public_key.is_some() {
            SigningCapability::ReadOnly
        } else {
            return Err(WalletError::MissingCredentials {
                family: "solana".to_string(),
            });
        };

        Ok(Self {
            public_key: config.public_key.clone(),
            capability,
        })
    }
}

impl WalletHandle for SolanaWallet {
    fn chain_family(&self) -> ChainFamily {
        ChainFamily::Solana
    }

    fn signing_capability(&self) -> SigningCapability {
        self.capability
    }

    fn address(&self) -> Option<&str> {
        self.public_key.as_deref()
    }
}
