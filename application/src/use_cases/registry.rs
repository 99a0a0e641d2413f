//! Tool registry aggregation
//!
//! The registry takes the session's active plugins and wallets and produces
//! one flat [`ToolSet`]. This runs once per session bootstrap, not per
//! request, and is deterministic: the same configuration always yields the
//! same tool name set.
//!
//! # Algorithm
//!
//! For every registered plugin:
//!
//! 1. merge its public tools unconditionally;
//! 2. resolve signing capability for the plugin's chain family from the
//!    session wallets;
//! 3. merge its private tools only when the wallet can sign.
//!
//! A name collision across plugins aborts aggregation with both plugin
//! identities; a plugin failure aborts with the failing plugin's name.
//! The session must not start with a partial or inconsistent tool map.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use relay_domain::{
    ChainFamily, Plugin, PluginError, SigningCapability, ToolCollision, ToolSet, WalletHandle,
};

/// Fatal aggregation failure; the session must not start.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A plugin failed while enumerating its tools.
    #[error("plugin '{plugin}' failed during tool enumeration: {source}")]
    Plugin {
        plugin: String,
        #[source]
        source: PluginError,
    },

    /// Two plugins declared tools canonicalizing to the same name.
    #[error(transparent)]
    Collision(#[from] ToolCollision),
}

/// The session's resolved wallets, keyed by chain family.
///
/// A family without a wallet contributes no signing capability, so plugins
/// of that family expose only their public tools.
#[derive(Default, Clone)]
pub struct SessionWallets {
    wallets: HashMap<ChainFamily, Arc<dyn WalletHandle>>,
}

impl SessionWallets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a wallet under its own chain family (builder pattern).
    pub fn with_wallet(mut self, wallet: Arc<dyn WalletHandle>) -> Self {
        self.wallets.insert(wallet.chain_family(), wallet);
        self
    }

    pub fn wallet(&self, family: ChainFamily) -> Option<&Arc<dyn WalletHandle>> {
        self.wallets.get(&family)
    }

    /// Signing capability available for a chain family.
    ///
    /// Agnostic plugins have no wallet to sign with; their private set is
    /// never merged.
    pub fn signing_capability(&self, family: ChainFamily) -> SigningCapability {
        self.wallets
            .get(&family)
            .map(|w| w.signing_capability())
            .unwrap_or(SigningCapability::ReadOnly)
    }

    pub fn can_sign(&self, family: ChainFamily) -> bool {
        self.signing_capability(family).can_sign()
    }
}

/// Aggregates plugins into the session's flat tool namespace.
pub struct ToolRegistry {
    plugins: Vec<Arc<dyn Plugin>>,
    wallets: SessionWallets,
}

impl ToolRegistry {
    pub fn new(wallets: SessionWallets) -> Self {
        Self {
            plugins: Vec::new(),
            wallets,
        }
    }

    /// Register a plugin (builder pattern).
    pub fn register<P: Plugin + 'static>(self, plugin: P) -> Self {
        self.register_arc(Arc::new(plugin))
    }

    /// Register a plugin (Arc version).
    pub fn register_arc(mut self, plugin: Arc<dyn Plugin>) -> Self {
        self.plugins.push(plugin);
        self
    }

    pub fn plugin_names(&self) -> Vec<&str> {
        self.plugins.iter().map(|p| p.name()).collect()
    }

    /// Build the flat tool namespace, failing fast on any inconsistency.
    pub fn aggregate(&self) -> Result<ToolSet, RegistryError> {
        let mut set = ToolSet::new();

        for plugin in &self.plugins {
            let name = plugin.name().to_string();
            let wrap = |source: PluginError| RegistryError::Plugin {
                plugin: name.clone(),
                source,
            };

            for tool in plugin.public_tools().map_err(wrap)? {
                debug!(plugin = %name, tool = %tool.name(), "registered public tool");
                set.insert(&name, tool)?;
            }

            let family = plugin.chain_family();
            if self.wallets.can_sign(family) {
                for tool in plugin.private_tools().map_err(wrap)? {
                    debug!(plugin = %name, tool = %tool.name(), "registered private tool");
                    set.insert(&name, tool)?;
                }
            } else {
                debug!(
                    plugin = %name,
                    family = %family,
                    "no signing capability, private tools omitted"
                );
            }
        }

        Ok(set)
    }
}
