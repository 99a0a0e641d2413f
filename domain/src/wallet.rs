//! Wallet handle abstraction
//!
//! A wallet handle is the resource a session binds to a chain family. The
//! domain only cares about two facts, both fixed at construction time: which
//! family the wallet serves and whether it can sign. Key material, RPC
//! plumbing, and chain switching live in the infrastructure wallets.

use crate::chain::{ChainFamily, SigningCapability};

/// Handle to a session wallet, shared read-mostly across all tools derived
/// from the plugins of its chain family.
pub trait WalletHandle: Send + Sync {
    /// Chain family this wallet serves.
    fn chain_family(&self) -> ChainFamily;

    /// Capability tag resolved once at construction.
    fn signing_capability(&self) -> SigningCapability;

    /// Public address or account id, when one is configured.
    fn address(&self) -> Option<&str> {
        None
    }

    /// Convenience over [`WalletHandle::signing_capability`].
    fn can_sign(&self) -> bool {
        self.signing_capability().can_sign()
    }
}
