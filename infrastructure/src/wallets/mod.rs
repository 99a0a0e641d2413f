//! Session wallet handles
//!
//! One wallet per chain family, constructed once from configuration. The
//! signing capability tag is resolved here, at construction, from which
//! credentials are present — never by runtime type inspection later.

pub mod evm;
pub mod hedera;
pub mod solana;

use thiserror::Error;

pub use evm::EvmWallet;
pub use hedera::HederaWallet;
pub use solana::SolanaWallet;

/// Wallet construction and chain-switching errors
#[derive(Debug, Error)]
pub enum WalletError {
    #[error("{family} wallet requires a private key or an address/public key")]
    MissingCredentials { family: String },

    #[error("chain '{chain}' does not belong to the {family} family")]
    WrongFamily { chain: String, family: String },
}
