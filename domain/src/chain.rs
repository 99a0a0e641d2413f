//! Chain identity and signing capability
//!
//! A [`Chain`] is the lowercase identifier of a concrete network
//! (`"base"`, `"solana"`, `"hedera"`), grouped into a [`ChainFamily`]
//! that decides which wallet handle can serve it. Signing capability is
//! resolved once when a wallet is constructed and carried as an explicit
//! [`SigningCapability`] tag; no component inspects concrete wallet types
//! at runtime to answer "can this sign?".

use serde::{Deserialize, Serialize};

/// Category of ledger a plugin or wallet targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainFamily {
    /// EVM-compatible chains (Ethereum, Base, Polygon, ...)
    Evm,
    /// Solana
    Solana,
    /// Hedera
    Hedera,
    /// No chain requirement (pure API integrations)
    Agnostic,
}

impl ChainFamily {
    pub fn as_str(&self) -> &str {
        match self {
            ChainFamily::Evm => "evm",
            ChainFamily::Solana => "solana",
            ChainFamily::Hedera => "hedera",
            ChainFamily::Agnostic => "agnostic",
        }
    }
}

impl std::fmt::Display for ChainFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identifier of a concrete chain (e.g. `"base"`, `"solana"`).
///
/// Identifiers are normalized to lowercase on construction so lookups
/// and comparisons are case-insensitive at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chain(String);

impl Chain {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve the chain family for a known chain identifier.
    ///
    /// Returns `None` for identifiers this build does not know about;
    /// providers reject those via their own supported-chain lists.
    pub fn family(&self) -> Option<ChainFamily> {
        match self.0.as_str() {
            "ethereum" | "base" | "polygon" | "arbitrum" | "optimism" | "mode" | "bsc"
            | "avalanche" | "sepolia" | "base-sepolia" => Some(ChainFamily::Evm),
            "solana" | "solana-devnet" => Some(ChainFamily::Solana),
            "hedera" | "hedera-testnet" => Some(ChainFamily::Hedera),
            _ => None,
        }
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Chain {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Whether a wallet can produce authorized transactions.
///
/// Resolved once at wallet construction: a configured private key yields
/// `FullSigning`, an address or public key alone yields `ReadOnly`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SigningCapability {
    /// Public-key-only wallet: balance lookups, quotes, no transactions
    ReadOnly,
    /// Private-key-bearing wallet: may sign and submit transactions
    FullSigning,
}

impl SigningCapability {
    pub fn can_sign(&self) -> bool {
        matches!(self, SigningCapability::FullSigning)
    }
}
