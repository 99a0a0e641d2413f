//! EVM wallet handle
//!
//! Serves every EVM-compatible chain. Unlike the other families, an EVM
//! wallet carries mutable state: the active chain. `switch_chain` mutates
//! shared wallet state and is NOT safe to interleave with an in-flight
//! "switch, then act" sequence from another task; callers needing that
//! sequence must hold their own lock around it. The mutex here only keeps
//! the chain value itself consistent.

use std::sync::Mutex;

use relay_domain::{Chain, ChainFamily, SigningCapability, WalletHandle};

use crate::config::FileEvmWalletConfig;

use super::WalletError;

/// Wallet handle for EVM chains.
pub struct EvmWallet {
    address: Option<String>,
    capability: SigningCapability,
    active_chain: Mutex<Chain>,
}

impl EvmWallet {
    /// Build from configuration. A private key grants full signing; an
    /// address alone yields a read-only wallet.
    pub fn from_config(config: &FileEvmWalletConfig) -> Result<Self, WalletError> {
        let capability = if config.private_key.is_some() {
            SigningCapability::FullSigning
        } else if config.address.is_some() {
            SigningCapability::ReadOnly
        } else {
            return Err(WalletError::MissingCredentials {
                family: "evm".to_string(),
            });
        };

        let default_chain = if config.default_chain.is_empty() {
            Chain::new("base")
        } else {
            Chain::new(&config.default_chain)
        };

        Ok(Self {
            address: config.address.clone(),
            capability,
            active_chain: Mutex::new(default_chain),
        })
    }

    /// Chain the wallet currently operates on.
    pub fn active_chain(&self) -> Chain {
        self.active_chain
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Switch the active chain. Rejects chains outside the EVM family.
    pub fn switch_chain(&self, chain: Chain) -> Result<(), WalletError> {
        if chain.family() != Some(ChainFamily::Evm) {
            return Err(WalletError::WrongFamily {
                chain: chain.as_str().to_string(),
                family: "evm".to_string(),
            });
        }
        let mut active = self
            .active_chain
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *active = chain;
        Ok(())
    }
}

impl WalletHandle for EvmWallet {
    fn chain_family(&self) -> ChainFamily {
        ChainFamily::Evm
    }

    fn signing_capability(&self) -> SigningCapability {
        self.capability
    }

    fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signing_config() -> FileEvmWalletConfig {
        FileEvmWalletConfig {
            private_key: Some("0xabc".to_string()),
            address: Some("0xFEED".to_string()),
            default_chain: "base".to_string(),
        }
    }

    #[test]
    fn test_private_key_grants_full_signing() {
        let wallet = EvmWallet::from_config(&signing_config()).unwrap();
        assert_eq!(wallet.signing_capability(), SigningCapability::FullSigning);
        assert_eq!(wallet.chain_family(), ChainFamily::Evm);
        assert_eq!(wallet.address(), Some("0xFEED"));
    }

    #[test]
    fn test_address_only_is_read_only() {
        let config = FileEvmWalletConfig {
            private_key: None,
            address: Some("0xFEED".to_string()),
            default_chain: String::new(),
        };
        let wallet = EvmWallet::from_config(&config).unwrap();
        assert_eq!(wallet.signing_capability(), SigningCapability::ReadOnly);
        assert_eq!(wallet.active_chain(), Chain::new("base"));
    }

    #[test]
    fn test_no_credentials_fails() {
        let config = FileEvmWalletConfig::default();
        assert!(matches!(
            EvmWallet::from_config(&config),
            Err(WalletError::MissingCredentials { .. })
        ));
    }

    #[test]
    fn test_switch_chain_within_family() {
        let wallet = EvmWallet::from_config(&signing_config()).unwrap();
        wallet.switch_chain(Chain::new("polygon")).unwrap();
        assert_eq!(wallet.active_chain(), Chain::new("polygon"));
    }

    #[test]
    fn test_switch_chain_rejects_other_family() {
        let wallet = EvmWallet::from_config(&signing_config()).unwrap();
        let err = wallet.switch_chain(Chain::new("solana")).unwrap_err();
        assert!(err.to_string().contains("solana"));
        // State unchanged after rejection
        assert_eq!(wallet.active_chain(), Chain::new("base"));
    }
}
