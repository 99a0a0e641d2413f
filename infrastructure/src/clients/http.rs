//! HTTP-backed protocol clients
//!
//! Thin reqwest adapters for the client traits. Every failure is reported
//! as [`ToolError::Upstream`] with the operation name and the upstream
//! message preserved, so the dispatcher can relay the cause verbatim.

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

use relay_domain::{Amount, Chain, ToolError};

use super::{AaveClient, CookieApi, HederaClient, JupiterClient, MeteoraClient};

/// Read a JSON body, mapping transport and status failures to `Upstream`.
async fn read_json(
    operation: &str,
    response: Result<reqwest::Response, reqwest::Error>,
) -> Result<serde_json::Value, ToolError> {
    let response = response.map_err(|e| ToolError::upstream(operation, e.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        debug!(operation, %status, "upstream returned error status");
        return Err(upstream_status(operation, status, &body));
    }
    response
        .json()
        .await
        .map_err(|e| ToolError::upstream(operation, format!("invalid JSON body: {e}")))
}

fn upstream_status(operation: &str, status: StatusCode, body: &str) -> ToolError {
    let detail = if body.is_empty() {
        status.to_string()
    } else {
        format!("{status}: {body}")
    };
    ToolError::upstream(operation, detail)
}

/// Extract a transaction id field from a JSON response.
fn tx_id(operation: &str, value: &serde_json::Value, field: &str) -> Result<String, ToolError> {
    value[field]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| {
            ToolError::upstream(operation, format!("response missing '{field}' field"))
        })
}

/// Cookie DataSwarm API over HTTPS with an API-key header.
pub struct HttpCookieApi {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpCookieApi {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl CookieApi for HttpCookieApi {
    async fn agent_by_username(
        &self,
        username: &str,
        interval: &str,
    ) -> Result<serde_json::Value, ToolError> {
        let url = format!(
            "{}/v2/agents/twitterUsername/{username}?interval={interval}",
            self.base_url
        );
        let response = self
            .http
            .get(&url)
            .header("x-api-key", &self.api_key)
            .send()
            .await;
        read_json("cookie_get_agent_by_username", response).await
    }

    async fn agent_by_contract(
        &self,
        address: &str,
        interval: &str,
    ) -> Result<serde_json::Value, ToolError> {
        let url = format!(
            "{}/v2/agents/contractAddress/{address}?interval={interval}",
            self.base_url
        );
        let response = self
            .http
            .get(&url)
            .header("x-api-key", &self.api_key)
            .send()
            .await;
        read_json("cookie_get_agent_by_contract", response).await
    }
}

/// Aave operations delegated to a capability endpoint (the endpoint owns
/// contract encoding and submission; this client only ships parameters).
pub struct HttpAaveClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpAaveClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn pool_call(
        &self,
        operation: &str,
        path: &str,
        body: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let url = format!("{}{path}", self.base_url);
        let response = self.http.post(&url).json(&body).send().await;
        read_json(operation, response).await
    }
}

#[async_trait]
impl AaveClient for HttpAaveClient {
    async fn reserve_data(&self, chain: &Chain, asset: &str) -> Result<serde_json::Value, ToolError> {
        let url = format!(
            "{}/reserves/{}/{asset}",
            self.base_url,
            chain.as_str()
        );
        let response = self.http.get(&url).send().await;
        read_json("aave_get_reserve_data", response).await
    }

    async fn supply(&self, chain: &Chain, asset: &str, amount: f64) -> Result<String, ToolError> {
        let body = serde_json::json!({ "chain": chain, "asset": asset, "amount": amount });
        let value = self.pool_call("aave_supply", "/supply", body).await?;
        tx_id("aave_supply", &value, "txHash")
    }

    async fn withdraw(&self, chain: &Chain, asset: &str, amount: f64) -> Result<String, ToolError> {
        let body = serde_json::json!({ "chain": chain, "asset": asset, "amount": amount });
        let value = self.pool_call("aave_withdraw", "/withdraw", body).await?;
        tx_id("aave_withdraw", &value, "txHash")
    }
}

/// Jupiter quote/swap API.
pub struct HttpJupiterClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpJupiterClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl JupiterClient for HttpJupiterClient {
    async fn quote(
        &self,
        input_mint: &str,
        output_mint: &str,
        amount: f64,
        slippage_bps: Option<i64>,
    ) -> Result<serde_json::Value, ToolError> {
        let mut url = format!(
            "{}/v6/quote?inputMint={input_mint}&outputMint={output_mint}&amount={amount}",
            self.base_url
        );
        if let Some(bps) = slippage_bps {
            url.push_str(&format!("&slippageBps={bps}"));
        }
        let response = self.http.get(&url).send().await;
        read_json("jupiter_get_quote", response).await
    }

    async fn swap(
        &self,
        input_mint: &str,
        output_mint: &str,
        amount: f64,
        slippage_bps: Option<i64>,
    ) -> Result<String, ToolError> {
        let body = serde_json::json!({
            "inputMint": input_mint,
            "outputMint": output_mint,
            "amount": amount,
            "slippageBps": slippage_bps,
        });
        let url = format!("{}/v6/swap", self.base_url);
        let response = self.http.post(&url).json(&body).send().await;
        let value = read_json("jupiter_swap", response).await?;
        tx_id("jupiter_swap", &value, "signature")
    }
}

/// Meteora liquidity operations delegated to a capability endpoint.
pub struct HttpMeteoraClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpMeteoraClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl MeteoraClient for HttpMeteoraClient {
    async fn add_liquidity(
        &self,
        pool: &str,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<String, ToolError> {
        let body = serde_json::json!({
            "pool": pool,
            "amountA": amount_a,
            "amountB": amount_b,
        });
        let url = format!("{}/liquidity/add", self.base_url);
        let response = self.http.post(&url).json(&body).send().await;
        let value = read_json("meteora_add_liquidity", response).await?;
        tx_id("meteora_add_liquidity", &value, "signature")
    }

    async fn remove_liquidity(&self, pool: &str, position: &str) -> Result<String, ToolError> {
        let body = serde_json::json!({ "pool": pool, "position": position });
        let url = format!("{}/liquidity/remove", self.base_url);
        let response = self.http.post(&url).json(&body).send().await;
        let value = read_json("meteora_remove_liquidity", response).await?;
        tx_id("meteora_remove_liquidity", &value, "signature")
    }
}

/// Hedera client: balance reads go to the mirror node, transfers to a
/// capability endpoint.
pub struct HttpHederaClient {
    http: reqwest::Client,
    mirror_url: String,
}

impl HttpHederaClient {
    pub fn new(mirror_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            mirror_url: mirror_url.into(),
        }
    }
}

#[async_trait]
impl HederaClient for HttpHederaClient {
    async fn account_balance(&self, account_id: &str) -> Result<serde_json::Value, ToolError> {
        let url = format!("{}/api/v1/accounts/{account_id}", self.mirror_url);
        let response = self.http.get(&url).send().await;
        read_json("hedera_get_balance", response).await
    }

    async fn transfer_hbar(
        &self,
        from: &str,
        to: &str,
        amount: f64,
    ) -> Result<String, ToolError> {
        let body = serde_json::json!({ "from": from, "to": to, "amount": amount });
        let url = format!("{}/api/v1/transactions", self.mirror_url);
        let response = self.http.post(&url).json(&body).send().await;
        let value = read_json("hedera_transfer", response).await?;
        tx_id("hedera_transfer", &value, "transactionId")
    }
}
