//! Aave lending plugin
//!
//! One public reserve-data tool and, when the session's EVM wallet can
//! sign, private supply/withdraw tools. Every handler checks the target
//! chain against the provider's supported set before touching the network.

use std::sync::Arc;

use async_trait::async_trait;

use relay_domain::{
    CapabilityProvider, Chain, ChainFamily, ParamType, Plugin, PluginError, Tool, ToolArgs,
    ToolDefinition, ToolError, ToolHandler, ToolParameter, WalletHandle,
};

use crate::clients::AaveClient;

/// Chains with deployed Aave v3 pools this adapter serves.
fn aave_chains() -> Vec<Chain> {
    ["ethereum", "base", "polygon", "arbitrum", "optimism", "avalanche"]
        .into_iter()
        .map(Chain::new)
        .collect()
}

struct AaveProvider {
    client: Arc<dyn AaveClient>,
    chains: Vec<Chain>,
}

impl CapabilityProvider for AaveProvider {
    fn supported_chains(&self) -> &[Chain] {
        &self.chains
    }
}

/// Plugin exposing Aave pool operations over the session's EVM wallet.
pub struct AavePlugin {
    provider: Arc<AaveProvider>,
    wallet: Option<Arc<dyn WalletHandle>>,
}

impl AavePlugin {
    pub fn new(client: Arc<dyn AaveClient>, wallet: Option<Arc<dyn WalletHandle>>) -> Self {
        Self {
            provider: Arc::new(AaveProvider {
                client,
                chains: aave_chains(),
            }),
            wallet,
        }
    }

    fn can_sign(&self) -> bool {
        self.wallet.as_ref().is_some_and(|w| w.can_sign())
    }
}

impl Plugin for AavePlugin {
    fn name(&self) -> &str {
        "aave"
    }

    fn chain_family(&self) -> ChainFamily {
        ChainFamily::Evm
    }

    fn public_tools(&self) -> Result<Vec<Tool>, PluginError> {
        Ok(vec![Tool::new(
            ToolDefinition::new(
                "aave_get_reserve_data",
                "Get Aave reserve data (rates, liquidity) for an asset",
            )
            .with_parameter(chain_parameter())
            .with_parameter(ToolParameter::new("asset", "Asset symbol, e.g. USDC", true)),
            Arc::new(ReserveData {
                provider: Arc::clone(&self.provider),
            }),
        )])
    }

    fn private_tools(&self) -> Result<Vec<Tool>, PluginError> {
        if !self.can_sign() {
            return Ok(Vec::new());
        }
        Ok(vec![
            Tool::new(
                ToolDefinition::new("aave_supply", "Supply an asset to the Aave pool")
                    .with_parameter(chain_parameter())
                    .with_parameter(ToolParameter::new("asset", "Asset symbol, e.g. USDC", true))
                    .with_parameter(amount_parameter("Amount to supply")),
                Arc::new(Supply {
                    provider: Arc::clone(&self.provider),
                }),
            ),
            Tool::new(
                ToolDefinition::new("aave_withdraw", "Withdraw an asset from the Aave pool")
                    .with_parameter(chain_parameter())
                    .with_parameter(ToolParameter::new("asset", "Asset symbol, e.g. USDC", true))
                    .with_parameter(amount_parameter("Amount to withdraw")),
                Arc::new(Withdraw {
                    provider: Arc::clone(&self.provider),
                }),
            ),
        ])
    }
}

fn chain_parameter() -> ToolParameter {
    ToolParameter::new("chain", "Target chain, e.g. base or polygon", true)
}

fn amount_parameter(description: &str) -> ToolParameter {
    ToolParameter::new("amount", description, true).with_type(ParamType::Number)
}

fn internal(message: String) -> ToolError {
    ToolError::upstream("aave", message)
}

struct ReserveData {
    provider: Arc<AaveProvider>,
}

#[async_trait]
impl ToolHandler for ReserveData {
    async fn run(&self, args: &ToolArgs) -> Result<serde_json::Value, ToolError> {
        let chain = Chain::new(args.require_str("chain").map_err(internal)?);
        let asset = args.require_str("asset").map_err(internal)?;
        self.provider.ensure_chain("aave_get_reserve_data", &chain)?;
        self.provider.client.reserve_data(&chain, asset).await
    }
}

struct Supply {
    provider: Arc<AaveProvider>,
}

#[async_trait]
impl ToolHandler for Supply {
    async fn run(&self, args: &ToolArgs) -> Result<serde_json::Value, ToolError> {
        let chain = Chain::new(args.require_str("chain").map_err(internal)?);
        let asset = args.require_str("asset").map_err(internal)?;
        let amount = args.require_f64("amount").map_err(internal)?;
        self.provider.ensure_chain("aave_supply", &chain)?;
        let tx = self.provider.client.supply(&chain, asset, amount).await?;
        Ok(serde_json::json!({
            "message": format!("Successfully supplied {amount} {asset} to Aave on {chain}"),
            "transaction": tx,
        }))
    }
}

struct Withdraw {
    provider: Arc<AaveProvider>,
}

#[async_trait]
impl ToolHandler for Withdraw {
    async fn run(&self, args: &ToolArgs) -> Result<serde_json::Value, ToolError> {
        let chain = Chain::new(args.require_str("chain").map_err(internal)?);
        let asset = args.require_str("asset").map_err(internal)?;
        let amount = args.require_f64("amount").map_err(internal)?;
        self.provider.ensure_chain("aave_withdraw", &chain)?;
        let tx = self.provider.client.withdraw(&chain, asset, amount).await?;
        Ok(serde_json::json!({
            "message": format!("Successfully withdrew {amount} {asset} from Aave on {chain}"),
            "transaction": tx,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relay_domain::{SigningCapability, ToolCall, validate_call};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubAaveClient {
        calls: AtomicUsize,
    }

    impl StubAaveClient {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl AaveClient for StubAaveClient {
        async fn reserve_data(
            &self,
            chain: &Chain,
            asset: &str,
        ) -> Result<serde_json::Value, ToolError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(serde_json::json!({ "chain": chain, "asset": asset, "supplyApy": "3.1%" }))
        }

        async fn supply(&self, _: &Chain, _: &str, _: f64) -> Result<String, ToolError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok("0xsupply".to_string())
        }

        async fn withdraw(&self, _: &Chain, _: &str, _: f64) -> Result<String, ToolError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok("0xwithdraw".to_string())
        }
    }

    struct TestWallet(SigningCapability);

    impl WalletHandle for TestWallet {
        fn chain_family(&self) -> ChainFamily {
            ChainFamily::Evm
        }

        fn signing_capability(&self) -> SigningCapability {
            self.0
        }
    }

    fn signing_wallet() -> Arc<dyn WalletHandle> {
        Arc::new(TestWallet(SigningCapability::FullSigning))
    }

    fn read_only_wallet() -> Arc<dyn WalletHandle> {
        Arc::new(TestWallet(SigningCapability::ReadOnly))
    }

    fn find(tools: &[Tool], name: &str) -> Tool {
        tools.iter().find(|t| t.name() == name).unwrap().clone()
    }

    #[test]
    fn test_read_only_wallet_hides_private_tools() {
        let plugin = AavePlugin::new(StubAaveClient::new(), Some(read_only_wallet()));
        assert_eq!(plugin.public_tools().unwrap().len(), 1);
        assert!(plugin.private_tools().unwrap().is_empty());
    }

    #[test]
    fn test_no_wallet_hides_private_tools() {
        let plugin = AavePlugin::new(StubAaveClient::new(), None);
        assert!(plugin.private_tools().unwrap().is_empty());
    }

    #[test]
    fn test_signing_wallet_exposes_supply_and_withdraw() {
        let plugin = AavePlugin::new(StubAaveClient::new(), Some(signing_wallet()));
        let names: Vec<String> = plugin
            .private_tools()
            .unwrap()
            .iter()
            .map(|t| t.name().to_string())
            .collect();
        assert_eq!(names, vec!["aave_supply", "aave_withdraw"]);
    }

    #[tokio::test]
    async fn test_supply_reports_transaction() {
        let plugin = AavePlugin::new(StubAaveClient::new(), Some(signing_wallet()));
        let tool = find(&plugin.private_tools().unwrap(), "aave_supply");

        let call = ToolCall::new("aave_supply")
            .with_arg("chain", "base")
            .with_arg("asset", "USDC")
            .with_arg("amount", 10);
        let args = validate_call(&call, &tool.definition).unwrap();
        let result = tool.execute(&args).await.unwrap();

        assert_eq!(
            result["message"],
            "Successfully supplied 10 USDC to Aave on base"
        );
        assert_eq!(result["transaction"], "0xsupply");
    }

    #[tokio::test]
    async fn test_unsupported_chain_rejected_before_network_call() {
        let client = StubAaveClient::new();
        let plugin = AavePlugin::new(Arc::clone(&client) as Arc<dyn AaveClient>, Some(signing_wallet()));
        let tool = find(&plugin.private_tools().unwrap(), "aave_supply");

        let call = ToolCall::new("aave_supply")
            .with_arg("chain", "solana")
            .with_arg("asset", "USDC")
            .with_arg("amount", 10);
        let args = validate_call(&call, &tool.definition).unwrap();
        let err = tool.execute(&args).await.unwrap_err();

        assert!(err.to_string().contains("'solana'"));
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_reserve_data_is_public() {
        let plugin = AavePlugin::new(StubAaveClient::new(), None);
        let tool = find(&plugin.public_tools().unwrap(), "aave_get_reserve_data");

        let call = ToolCall::new("aave_get_reserve_data")
            .with_arg("chain", "polygon")
            .with_arg("asset", "DAI");
        let args = validate_call(&call, &tool.definition).unwrap();
        let result = tool.execute(&args).await.unwrap();
        assert_eq!(result["supplyApy"], "3.1%");
    }
}
