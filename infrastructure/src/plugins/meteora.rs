//! Meteora liquidity plugin
//!
//! Private-only: both liquidity operations move funds, so without a
//! signing Solana wallet this plugin contributes nothing to the registry.
//! Amounts accept the literal `"auto"`, letting the pool derive one side
//! from the other.

use std::sync::Arc;

use async_trait::async_trait;

use relay_domain::{
    Amount, CapabilityProvider, Chain, ChainFamily, ParamType, Plugin, PluginError, Tool,
    ToolArgs, ToolDefinition, ToolError, ToolHandler, ToolParameter, WalletHandle,
};

use crate::clients::MeteoraClient;

struct MeteoraProvider {
    client: Arc<dyn MeteoraClient>,
    chains: Vec<Chain>,
}

impl CapabilityProvider for MeteoraProvider {
    fn supported_chains(&self) -> &[Chain] {
        &self.chains
    }
}

/// Plugin exposing Meteora dynamic-pool liquidity tools.
pub struct MeteoraPlugin {
    provider: Arc<MeteoraProvider>,
    wallet: Option<Arc<dyn WalletHandle>>,
}

impl MeteoraPlugin {
    pub fn new(client: Arc<dyn MeteoraClient>, wallet: Option<Arc<dyn WalletHandle>>) -> Self {
        Self {
            provider: Arc::new(MeteoraProvider {
                client,
                chains: vec![Chain::new("solana")],
            }),
            wallet,
        }
    }
}

impl Plugin for MeteoraPlugin {
    fn name(&self) -> &str {
        "meteora"
    }

    fn chain_family(&self) -> ChainFamily {
        ChainFamily::Solana
    }

    fn public_tools(&self) -> Result<Vec<Tool>, PluginError> {
        Ok(Vec::new())
    }

    fn private_tools(&self) -> Result<Vec<Tool>, PluginError> {
        if !self.wallet.as_ref().is_some_and(|w| w.can_sign()) {
            return Ok(Vec::new());
        }
        Ok(vec![
            Tool::new(
                ToolDefinition::new("meteora_add_liquidity", "Add liquidity to a Meteora pool")
                    .with_parameter(pool_parameter())
                    .with_parameter(
                        ToolParameter::new("amount_a", "Token A amount, or 'auto'", true)
                            .with_type(ParamType::Amount),
                    )
                    .with_parameter(
                        ToolParameter::new("amount_b", "Token B amount, or 'auto'", true)
                            .with_type(ParamType::Amount),
                    ),
                Arc::new(AddLiquidity {
                    provider: Arc::clone(&self.provider),
                }),
            ),
            Tool::new(
                ToolDefinition::new(
                    "meteora_remove_liquidity",
                    "Remove a liquidity position from a Meteora pool",
                )
                .with_parameter(pool_parameter())
                .with_parameter(ToolParameter::new("position", "Position address", true)),
                Arc::new(RemoveLiquidity {
                    provider: Arc::clone(&self.provider),
                }),
            ),
        ])
    }
}

fn pool_parameter() -> ToolParameter {
    ToolParameter::new("pool", "Pool address", true)
}

fn internal(message: String) -> ToolError {
    ToolError::upstream("meteora", message)
}

struct AddLiquidity {
    provider: Arc<MeteoraProvider>,
}

#[async_trait]
impl ToolHandler for AddLiquidity {
    async fn run(&self, args: &ToolArgs) -> Result<serde_json::Value, ToolError> {
        let pool = args.require_str("pool").map_err(internal)?;
        let amount_a = args
            .get_amount("amount_a")
            .ok_or_else(|| internal("missing required argument: amount_a".to_string()))?;
        let amount_b = args
            .get_amount("amount_b")
            .ok_or_else(|| internal("missing required argument: amount_b".to_string()))?;
        let signature = self
            .provider
            .client
            .add_liquidity(pool, amount_a, amount_b)
            .await?;
        Ok(serde_json::json!({
            "message": format!("Successfully added liquidity to pool {pool}"),
            "signature": signature,
        }))
    }
}

struct RemoveLiquidity {
    provider: Arc<MeteoraProvider>,
}

#[async_trait]
impl ToolHandler for RemoveLiquidity {
    async fn run(&self, args: &ToolArgs) -> Result<serde_json::Value, ToolError> {
        let pool = args.require_str("pool").map_err(internal)?;
        let position = args.require_str("position").map_err(internal)?;
        let signature = self.provider.client.remove_liquidity(pool, position).await?;
        Ok(serde_json::json!({
            "message": format!("Successfully removed position {position} from pool {pool}"),
            "signature": signature,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relay_domain::{SigningCapability, ToolCall, validate_call};
    use std::sync::Mutex;

    #[derive(Default)]
    struct StubMeteoraClient {
        last_amounts: Mutex<Option<(Amount, Amount)>>,
    }

    #[async_trait]
    impl MeteoraClient for StubMeteoraClient {
        async fn add_liquidity(
            &self,
            _pool: &str,
            amount_a: Amount,
            amount_b: Amount,
        ) -> Result<String, ToolError> {
            *self.last_amounts.lock().unwrap() = Some((amount_a, amount_b));
            Ok("5sigAdd".to_string())
        }

        async fn remove_liquidity(&self, _: &str, _: &str) -> Result<String, ToolError> {
            Ok("5sigRemove".to_string())
        }
    }

    struct SolWallet(SigningCapability);

    impl WalletHandle for SolWallet {
        fn chain_family(&self) -> ChainFamily {
            ChainFamily::Solana
        }

        fn signing_capability(&self) -> SigningCapability {
            self.0
        }
    }

    fn signing_plugin(client: Arc<StubMeteoraClient>) -> MeteoraPlugin {
        MeteoraPlugin::new(
            client,
            Some(Arc::new(SolWallet(SigningCapability::FullSigning))),
        )
    }

    #[test]
    fn test_private_only_plugin() {
        let plugin = signing_plugin(Arc::new(StubMeteoraClient::default()));
        assert!(plugin.public_tools().unwrap().is_empty());
        assert_eq!(plugin.private_tools().unwrap().len(), 2);
    }

    #[test]
    fn test_read_only_session_gets_nothing() {
        let plugin = MeteoraPlugin::new(
            Arc::new(StubMeteoraClient::default()),
            Some(Arc::new(SolWallet(SigningCapability::ReadOnly))),
        );
        assert!(plugin.tools().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_auto_amount_forwarded() {
        let client = Arc::new(StubMeteoraClient::default());
        let plugin = signing_plugin(Arc::clone(&client));
        let tools = plugin.private_tools().unwrap();
        let tool = tools
            .iter()
            .find(|t| t.name() == "meteora_add_liquidity")
            .unwrap();

        let call = ToolCall::new("meteora_add_liquidity")
            .with_arg("pool", "poolAddr111")
            .with_arg("amount_a", 100)
            .with_arg("amount_b", "auto");
        let args = validate_call(&call, &tool.definition).unwrap();
        let result = tool.execute(&args).await.unwrap();

        assert_eq!(result["signature"], "5sigAdd");
        assert_eq!(
            *client.last_amounts.lock().unwrap(),
            Some((Amount::Exact(100.0), Amount::Auto))
        );
    }

    #[tokio::test]
    async fn test_remove_liquidity() {
        let plugin = signing_plugin(Arc::new(StubMeteoraClient::default()));
        let tools = plugin.private_tools().unwrap();
        let tool = tools
            .iter()
            .find(|t| t.name() == "meteora_remove_liquidity")
            .unwrap();

        let call = ToolCall::new("meteora_remove_liquidity")
            .with_arg("pool", "poolAddr111")
            .with_arg("position", "posAddr222");
        let args = validate_call(&call, &tool.definition).unwrap();
        let result = tool.execute(&args).await.unwrap();
        assert_eq!(result["signature"], "5sigRemove");
    }
}
