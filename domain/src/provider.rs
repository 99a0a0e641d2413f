//! Capability provider contract
//!
//! A capability provider owns interaction with exactly one external
//! resource — a wallet-backed protocol client or a credentialed API — and
//! performs the domain operations behind a plugin's tools. Providers are
//! constructed once per session and destroyed with it.
//!
//! The one obligation the registry relies on: a provider rejects
//! operations on chains outside its supported set with a descriptive
//! error *before* attempting any network call. [`CapabilityProvider::ensure_chain`]
//! is that check.

use crate::chain::Chain;
use crate::tool::ToolError;

/// A stateful object bound to one resource, exposing domain operations.
pub trait CapabilityProvider: Send + Sync {
    /// Chains this provider can operate on. Empty means chain-agnostic.
    fn supported_chains(&self) -> &[Chain];

    /// Reject a chain outside the supported set before any side effect.
    fn ensure_chain(&self, operation: &str, chain: &Chain) -> Result<(), ToolError> {
        let supported = self.supported_chains();
        if supported.is_empty() || supported.contains(chain) {
            Ok(())
        } else {
            Err(ToolError::unsupported_chain(
                operation,
                chain,
                supported.iter().map(Chain::as_str),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EvmProvider {
        chains: Vec<Chain>,
    }

    impl CapabilityProvider for EvmProvider {
        fn supported_chains(&self) -> &[Chain] {
            &self.chains
        }
    }

    #[test]
    fn test_ensure_chain_accepts_supported() {
        let provider = EvmProvider {
            chains: vec![Chain::new("base"), Chain::new("polygon")],
        };
        assert!(provider.ensure_chain("aave_supply", &Chain::new("base")).is_ok());
    }

    #[test]
    fn test_ensure_chain_rejects_with_context() {
        let provider = EvmProvider {
            chains: vec![Chain::new("base")],
        };
        let err = provider
            .ensure_chain("aave_supply", &Chain::new("solana"))
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("aave_supply"));
        assert!(msg.contains("'solana'"));
        assert!(msg.contains("base"));
    }

    #[test]
    fn test_empty_supported_set_is_agnostic() {
        let provider = EvmProvider { chains: vec![] };
        assert!(provider.ensure_chain("lookup", &Chain::new("anything")).is_ok());
    }
}
