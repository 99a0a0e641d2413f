//! Hedera plugin
//!
//! Public balance lookups through the mirror node and, with a signing
//! operator key, private HBAR transfers. The transfer's sender is the
//! session's operator account, never a caller-supplied parameter.

use std::sync::Arc;

use async_trait::async_trait;

use relay_domain::{
    CapabilityProvider, Chain, ChainFamily, ParamType, Plugin, PluginError, Tool, ToolArgs,
    ToolDefinition, ToolError, ToolHandler, ToolParameter, WalletHandle,
};

use crate::clients::HederaClient;

struct HederaProvider {
    client: Arc<dyn HederaClient>,
    chains: Vec<Chain>,
}

impl CapabilityProvider for HederaProvider {
    fn supported_chains(&self) -> &[Chain] {
        &self.chains
    }
}

/// Plugin exposing Hedera account tools over the session's operator wallet.
pub struct HederaPlugin {
    provider: Arc<HederaProvider>,
    wallet: Option<Arc<dyn WalletHandle>>,
}

impl HederaPlugin {
    pub fn new(client: Arc<dyn HederaClient>, wallet: Option<Arc<dyn WalletHandle>>) -> Self {
        Self {
            provider: Arc::new(HederaProvider {
                client,
                chains: vec![Chain::new("hedera"), Chain::new("hedera-testnet")],
            }),
            wallet,
        }
    }

    fn operator_id(&self) -> Option<String> {
        self.wallet
            .as_ref()
            .and_then(|w| w.address())
            .map(str::to_string)
    }
}

impl Plugin for HederaPlugin {
    fn name(&self) -> &str {
        "hedera"
    }

    fn chain_family(&self) -> ChainFamily {
        ChainFamily::Hedera
    }

    fn public_tools(&self) -> Result<Vec<Tool>, PluginError> {
        Ok(vec![Tool::new(
            ToolDefinition::new(
                "hedera_get_balance",
                "Get the HBAR balance of a Hedera account",
            )
            .with_parameter(ToolParameter::new(
                "account_id",
                "Account id, e.g. 0.0.12345; defaults to the session operator",
                false,
            )),
            Arc::new(Balance {
                provider: Arc::clone(&self.provider),
                operator_id: self.operator_id(),
            }),
        )])
    }

    fn private_tools(&self) -> Result<Vec<Tool>, PluginError> {
        if !self.wallet.as_ref().is_some_and(|w| w.can_sign()) {
            return Ok(Vec::new());
        }
        let from = self.operator_id().ok_or_else(|| {
            PluginError::Provider("hedera wallet has no operator id".to_string())
        })?;
        Ok(vec![Tool::new(
            ToolDefinition::new("hedera_transfer", "Transfer HBAR to another account")
                .with_parameter(ToolParameter::new("to", "Recipient account id", true))
                .with_parameter(
                    ToolParameter::new("amount", "Amount in HBAR", true)
                        .with_type(ParamType::Number),
                ),
            Arc::new(Transfer {
                provider: Arc::clone(&self.provider),
                from,
            }),
        )])
    }
}

fn internal(message: String) -> ToolError {
    ToolError::upstream("hedera", message)
}

struct Balance {
    provider: Arc<HederaProvider>,
    operator_id: Option<String>,
}

#[async_trait]
impl ToolHandler for Balance {
    async fn run(&self, args: &ToolArgs) -> Result<serde_json::Value, ToolError> {
        let account_id = match args.get_str("account_id") {
            Some(id) => id,
            None => self.operator_id.as_deref().ok_or_else(|| {
                internal("no account_id given and no operator configured".to_string())
            })?,
        };
        self.provider.client.account_balance(account_id).await
    }
}

struct Transfer {
    provider: Arc<HederaProvider>,
    from: String,
}

#[async_trait]
impl ToolHandler for Transfer {
    async fn run(&self, args: &ToolArgs) -> Result<serde_json::Value, ToolError> {
        let to = args.require_str("to").map_err(internal)?;
        let amount = args.require_f64("amount").map_err(internal)?;
        let tx = self
            .provider
            .client
            .transfer_hbar(&self.from, to, amount)
            .await?;
        Ok(serde_json::json!({
            "message": format!("Successfully transferred {amount} HBAR from {} to {to}", self.from),
            "transactionId": tx,
        }))
    }
}
