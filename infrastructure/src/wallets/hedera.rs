//! Hedera wallet handle

use relay_domain::{ChainFamily, SigningCapability, WalletHandle};

use crate::config::FileHederaWalletConfig;

use super::WalletError;

/// Wallet handle for Hedera, identified by an operator account id.
pub struct HederaWallet {
    operator_id: String,
    capability: SigningCapability,
    network: String,
}

impl HederaWallet {
    /// Build from configuration. The operator id is always required; the
    /// operator key decides signing capability.
    pub fn from_config(config: &FileHederaWalletConfig) -> Result<Self, WalletError> {
        let operator_id = config
            .operator_id
            .clone()
            .ok_or_else(|| WalletError::MissingCredentials {
                family: "hedera".to_string(),
            })?;

        let capability = if config.operator_key.is_some() {
            SigningCapability::FullSigning
        } else {
            SigningCapability::ReadOnly
        };

        Ok(Self {
            operator_id,
            capability,
            network: config.network.clone(),
        })
    }

    pub fn operator_id(&self) -> &str {
        &self.operator_id
    }

    pub fn network(&self) -> &str {
        &self.network
    }
}

impl WalletHandle for HederaWallet {
    fn chain_family(&self) -> ChainFamily {
        ChainFamily::Hedera
    }

    fn signing_capability(&self) -> SigningCapability {
        self.capability
    }

    fn address(&self) -> Option<&str> {
        Some(&self.operator_id)
    }
}
