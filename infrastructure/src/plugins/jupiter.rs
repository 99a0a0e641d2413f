//! Jupiter swap plugin
//!
//! Public quoting, private swap execution. Jupiter only exists on Solana
//! mainnet, so the provider's supported set is a single chain.

use std::sync::Arc;

use async_trait::async_trait;

use relay_domain::{
    CapabilityProvider, Chain, ChainFamily, ParamType, Plugin, PluginError, Tool, ToolArgs,
    ToolDefinition, ToolError, ToolHandler, ToolParameter, WalletHandle,
};

use crate::clients::JupiterClient;

struct JupiterProvider {
    client: Arc<dyn JupiterClient>,
    chains: Vec<Chain>,
}

impl CapabilityProvider for JupiterProvider {
    fn supported_chains(&self) -> &[Chain] {
        &self.chains
    }
}

/// Plugin exposing Jupiter quote and swap tools.
pub struct JupiterPlugin {
    provider: Arc<JupiterProvider>,
    wallet: Option<Arc<dyn WalletHandle>>,
}

impl JupiterPlugin {
    pub fn new(client: Arc<dyn JupiterClient>, wallet: Option<Arc<dyn WalletHandle>>) -> Self {
        Self {
            provider: Arc::new(JupiterProvider {
                client,
                chains: vec![Chain::new("solana")],
            }),
            wallet,
        }
    }
}

impl Plugin for JupiterPlugin {
    fn name(&self) -> &str {
        "jupiter"
    }

    fn chain_family(&self) -> ChainFamily {
        ChainFamily::Solana
    }

    fn public_tools(&self) -> Result<Vec<Tool>, PluginError> {
        Ok(vec![Tool::new(
            ToolDefinition::new("jupiter_get_quote", "Get a swap quote from Jupiter")
                .with_parameter(input_mint_parameter())
                .with_parameter(output_mint_parameter())
                .with_parameter(amount_parameter())
                .with_parameter(slippage_parameter()),
            Arc::new(Quote {
                provider: Arc::clone(&self.provider),
            }),
        )])
    }

    fn private_tools(&self) -> Result<Vec<Tool>, PluginError> {
        if !self.wallet.as_ref().is_some_and(|w| w.can_sign()) {
            return Ok(Vec::new());
        }
        Ok(vec![Tool::new(
            ToolDefinition::new("jupiter_swap", "Execute a token swap through Jupiter")
                .with_parameter(input_mint_parameter())
                .with_parameter(output_mint_parameter())
                .with_parameter(amount_parameter())
                .with_parameter(slippage_parameter()),
            Arc::new(Swap {
                provider: Arc::clone(&self.provider),
            }),
        )])
    }
}

fn input_mint_parameter() -> ToolParameter {
    ToolParameter::new("input_mint", "Input token mint address or symbol", true)
}

fn output_mint_parameter() -> ToolParameter {
    ToolParameter::new("output_mint", "Output token mint address or symbol", true)
}

fn amount_parameter() -> ToolParameter {
    ToolParameter::new("amount", "Input amount in token units", true).with_type(ParamType::Number)
}

fn slippage_parameter() -> ToolParameter {
    ToolParameter::new("slippage_bps", "Max slippage in basis points", false)
        .with_type(ParamType::Integer)
}

fn internal(message: String) -> ToolError {
    ToolError::upstream("jupiter", message)
}

struct Quote {
    provider: Arc<JupiterProvider>,
}

#[async_trait]
impl ToolHandler for Quote {
    async fn run(&self, args: &ToolArgs) -> Result<serde_json::Value, ToolError> {
        let input = args.require_str("input_mint").map_err(internal)?;
        let output = args.require_str("output_mint").map_err(internal)?;
        let amount = args.require_f64("amount").map_err(internal)?;
        let slippage = args.get_i64("slippage_bps");
        self.provider.client.quote(input, output, amount, slippage).await
    }
}

struct Swap {
    provider: Arc<JupiterProvider>,
}

#[async_trait]
impl ToolHandler for Swap {
    async fn run(&self, args: &ToolArgs) -> Result<serde_json::Value, ToolError> {
        let input = args.require_str("input_mint").map_err(internal)?;
        let output = args.require_str("output_mint").map_err(internal)?;
        let amount = args.require_f64("amount").map_err(internal)?;
        let slippage = args.get_i64("slippage_bps");
        let signature = self
            .provider
            .client
            .swap(input, output, amount, slippage)
            .await?;
        Ok(serde_json::json!({
            "message": format!("Successfully swapped {amount} {input} for {output}"),
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
    struct StubJupiterClient {
        last_slippage: Mutex<Option<Option<i64>>>,
    }

    #[async_trait]
    impl JupiterClient for StubJupiterClient {
        async fn quote(
            &self,
            input_mint: &str,
            output_mint: &str,
            amount: f64,
            slippage_bps: Option<i64>,
        ) -> Result<serde_json::Value, ToolError> {
            *self.last_slippage.lock().unwrap() = Some(slippage_bps);
            Ok(serde_json::json!({
                "inputMint": input_mint,
                "outputMint": output_mint,
                "inAmount": amount,
                "outAmount": amount * 158.4,
            }))
        }

        async fn swap(
            &self,
            _: &str,
            _: &str,
            _: f64,
            _: Option<i64>,
        ) -> Result<String, ToolError> {
            Ok("5sigSwap".to_string())
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

    #[test]
    fn test_quote_is_public_swap_is_private() {
        let plugin = JupiterPlugin::new(
            Arc::new(StubJupiterClient::default()),
            Some(Arc::new(SolWallet(SigningCapability::FullSigning))),
        );
        assert_eq!(plugin.public_tools().unwrap()[0].name(), "jupiter_get_quote");
        assert_eq!(plugin.private_tools().unwrap()[0].name(), "jupiter_swap");
    }

    #[test]
    fn test_read_only_wallet_gets_no_swap() {
        let plugin = JupiterPlugin::new(
            Arc::new(StubJupiterClient::default()),
            Some(Arc::new(SolWallet(SigningCapability::ReadOnly))),
        );
        assert!(plugin.private_tools().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_quote_passes_optional_slippage() {
        let client = Arc::new(StubJupiterClient::default());
        let plugin = JupiterPlugin::new(Arc::clone(&client) as Arc<dyn JupiterClient>, None);
        let tools = plugin.public_tools().unwrap();
        let tool = &tools[0];

        let call = ToolCall::new("jupiter_get_quote")
            .with_arg("input_mint", "SOL")
            .with_arg("output_mint", "USDC")
            .with_arg("amount", 2)
            .with_arg("slippage_bps", 50);
        let args = validate_call(&call, &tool.definition).unwrap();
        let result = tool.execute(&args).await.unwrap();

        assert_eq!(result["inputMint"], "SOL");
        assert_eq!(*client.last_slippage.lock().unwrap(), Some(Some(50)));

        let call = ToolCall::new("jupiter_get_quote")
            .with_arg("input_mint", "SOL")
            .with_arg("output_mint", "USDC")
            .with_arg("amount", 2);
        let args = validate_call(&call, &tool.definition).unwrap();
        tool.execute(&args).await.unwrap();
        assert_eq!(*client.last_slippage.lock().unwrap(), Some(None));
    }

    #[tokio::test]
    async fn test_swap_reports_signature() {
        let plugin = JupiterPlugin::new(
            Arc::new(StubJupiterClient::default()),
            Some(Arc::new(SolWallet(SigningCapability::FullSigning))),
        );
        let tools = plugin.private_tools().unwrap();
        let tool = &tools[0];

        let call = ToolCall::new("jupiter_swap")
            .with_arg("input_mint", "SOL")
            .with_arg("output_mint", "USDC")
            .with_arg("amount", 1.5);
        let args = validate_call(&call, &tool.definition).unwrap();
        let result = tool.execute(&args).await.unwrap();

        assert_eq!(result["signature"], "5sigSwap");
        assert_eq!(result["message"], "Successfully swapped 1.5 SOL for USDC");
    }
}
