//! Cookie DataSwarm plugin
//!
//! Chain-agnostic, public-only: agent analytics lookups behind an API key.
//! Having no private tools, this plugin contributes the same set whatever
//! wallet (or none) the session carries.

use std::sync::Arc;

use async_trait::async_trait;

use relay_domain::{
    ChainFamily, ParamType, Plugin, PluginError, Tool, ToolArgs, ToolDefinition, ToolError,
    ToolHandler, ToolParameter,
};

use crate::clients::CookieApi;

/// Plugin exposing Cookie agent-analytics tools.
pub struct CookiePlugin {
    api: Arc<dyn CookieApi>,
}

impl CookiePlugin {
    pub fn new(api: Arc<dyn CookieApi>) -> Self {
        Self { api }
    }
}

impl Plugin for CookiePlugin {
    fn name(&self) -> &str {
        "cookie"
    }

    fn chain_family(&self) -> ChainFamily {
        ChainFamily::Agnostic
    }

    fn public_tools(&self) -> Result<Vec<Tool>, PluginError> {
        Ok(vec![
            Tool::new(
                ToolDefinition::new(
                    "cookie_get_agent_by_username",
                    "Get agent analytics by X/Twitter username",
                )
                .with_parameter(ToolParameter::new("username", "X/Twitter username", true))
                .with_parameter(interval_parameter()),
                Arc::new(AgentByUsername {
                    api: Arc::clone(&self.api),
                }),
            ),
            Tool::new(
                ToolDefinition::new(
                    "cookie_get_agent_by_contract",
                    "Get agent analytics by token contract address",
                )
                .with_parameter(ToolParameter::new("address", "Token contract address", true))
                .with_parameter(interval_parameter()),
                Arc::new(AgentByContract {
                    api: Arc::clone(&self.api),
                }),
            ),
        ])
    }

    fn private_tools(&self) -> Result<Vec<Tool>, PluginError> {
        Ok(Vec::new())
    }
}

fn interval_parameter() -> ToolParameter {
    ToolParameter::new("interval", "Metrics interval (_3Days or _7Days)", false)
        .with_type(ParamType::String)
}

const DEFAULT_INTERVAL: &str = "_7Days";

struct AgentByUsername {
    api: Arc<dyn CookieApi>,
}

#[async_trait]
impl ToolHandler for AgentByUsername {
    async fn run(&self, args: &ToolArgs) -> Result<serde_json::Value, ToolError> {
        let username = args.require_str("username").map_err(internal)?;
        let interval = args.get_str("interval").unwrap_or(DEFAULT_INTERVAL);
        self.api.agent_by_username(username, interval).await
    }
}

struct AgentByContract {
    api: Arc<dyn CookieApi>,
}

#[async_trait]
impl ToolHandler for AgentByContract {
    async fn run(&self, args: &ToolArgs) -> Result<serde_json::Value, ToolError> {
        let address = args.require_str("address").map_err(internal)?;
        let interval = args.get_str("interval").unwrap_or(DEFAULT_INTERVAL);
        self.api.agent_by_contract(address, interval).await
    }
}

/// Validation guarantees required args are present; reaching this is a bug
/// in wiring, reported as an upstream failure rather than a panic.
fn internal(message: String) -> ToolError {
    ToolError::upstream("cookie", message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use relay_domain::{ToolCall, validate_call};

    struct StubCookieApi;

    #[async_trait]
    impl CookieApi for StubCookieApi {
        async fn agent_by_username(
            &self,
            username: &str,
            interval: &str,
        ) -> Result<serde_json::Value, ToolError> {
            Ok(serde_json::json!({
                "agentName": username,
                "interval": interval,
                "mindshare": 1.62,
            }))
        }

        async fn agent_by_contract(
            &self,
            address: &str,
            _interval: &str,
        ) -> Result<serde_json::Value, ToolError> {
            Ok(serde_json::json!({ "agentName": "by-contract", "contract": address }))
        }
    }

    fn plugin() -> CookiePlugin {
        CookiePlugin::new(Arc::new(StubCookieApi))
    }

    #[test]
    fn test_public_only_plugin() {
        let plugin = plugin();
        assert_eq!(plugin.public_tools().unwrap().len(), 2);
        assert!(plugin.private_tools().unwrap().is_empty());
        assert_eq!(plugin.chain_family(), ChainFamily::Agnostic);
    }

    #[test]
    fn test_supports_any_chain() {
        use relay_domain::Chain;
        let plugin = plugin();
        assert!(plugin.supports_chain(&Chain::new("base")));
        assert!(plugin.supports_chain(&Chain::new("solana")));
    }

    #[tokio::test]
    async fn test_get_agent_by_username() {
        let plugin = plugin();
        let tools = plugin.public_tools().unwrap();
        let tool = tools
            .iter()
            .find(|t| t.name() == "cookie_get_agent_by_username")
            .unwrap();

        let call = ToolCall::new("cookie_get_agent_by_username")
            .with_arg("username", "cookiedotfun")
            .with_arg("interval", "_3Days");
        let args = validate_call(&call, &tool.definition).unwrap();
        let result = tool.execute(&args).await.unwrap();

        assert_eq!(result["agentName"], "cookiedotfun");
        assert_eq!(result["interval"], "_3Days");
    }

    #[tokio::test]
    async fn test_interval_defaults_when_absent() {
        let plugin = plugin();
        let tools = plugin.public_tools().unwrap();
        let tool = tools
            .iter()
            .find(|t| t.name() == "cookie_get_agent_by_username")
            .unwrap();

        let call = ToolCall::new("cookie_get_agent_by_username").with_arg("username", "someone");
        let args = validate_call(&call, &tool.definition).unwrap();
        let result = tool.execute(&args).await.unwrap();
        assert_eq!(result["interval"], DEFAULT_INTERVAL);
    }
}
