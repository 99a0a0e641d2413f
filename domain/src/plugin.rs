//! Plugin abstraction
//!
//! A plugin groups the capability providers of one protocol integration
//! under one namespace and splits its operations into **public** tools
//! (safe with a read-only wallet or no wallet at all) and **private** tools
//! (require a signing-capable wallet).
//!
//! # Gating by omission
//!
//! A plugin bound to a read-only wallet returns an empty private set.
//! Absence of signing capability is represented by omission from the map,
//! never by a tool that always errors — the calling agent should not see
//! operations it cannot complete.
//!
//! # Disjointness
//!
//! `tools()` is the disjoint union of the public and private sets. A name
//! declared in both is a defect and fails enumeration.

use thiserror::Error;

use crate::chain::{Chain, ChainFamily};
use crate::tool::{Tool, ToolSet};

/// Error raised while a plugin enumerates its tools.
#[derive(Debug, Error)]
pub enum PluginError {
    /// A capability provider could not be constructed or queried.
    #[error("provider error: {0}")]
    Provider(String),

    /// The same name appears in both the public and private set.
    #[error("tool '{0}' declared in both public and private sets")]
    OverlappingSets(String),
}

/// A named grouping of capability providers exposing public/private tools.
pub trait Plugin: Send + Sync {
    /// Plugin name, used as the namespace prefix convention and in
    /// registry error attribution.
    fn name(&self) -> &str;

    /// Chain family this plugin targets.
    fn chain_family(&self) -> ChainFamily;

    /// Pure predicate: can this plugin serve the given chain?
    ///
    /// Derived entirely from the chain family; must have no side effects.
    /// Activation itself is configuration-driven — a plugin stays
    /// registered even when no wallet of its family is bound, exposing
    /// only its public tools.
    fn supports_chain(&self, chain: &Chain) -> bool {
        match self.chain_family() {
            ChainFamily::Agnostic => true,
            family => chain.family() == Some(family),
        }
    }

    /// Tools safe to execute without signing capability.
    fn public_tools(&self) -> Result<Vec<Tool>, PluginError>;

    /// Tools requiring a signing-capable wallet.
    ///
    /// Must return an empty vec when the bound wallet cannot sign.
    fn private_tools(&self) -> Result<Vec<Tool>, PluginError>;

    /// Disjoint union of public and private tools.
    fn tools(&self) -> Result<Vec<Tool>, PluginError> {
        let mut seen = ToolSet::new();
        let mut all = Vec::new();
        for tool in self.public_tools()?.into_iter().chain(self.private_tools()?) {
            seen.insert(self.name(), tool.clone())
                .map_err(|c| PluginError::OverlappingSets(c.name))?;
            all.push(tool);
        }
        Ok(all)
    }
}
