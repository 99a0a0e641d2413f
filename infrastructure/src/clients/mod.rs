//! Protocol clients
//!
//! Each protocol integration talks to its external system through a small
//! client trait. The traits are what plugins hold; the HTTP-backed
//! implementations in [`http`] are thin glue, and tests substitute stubs.
//! Per-protocol business logic (fee math, contract ABIs, chain addresses)
//! lives behind these seams and is not modeled here.

pub mod http;

use async_trait::async_trait;

use relay_domain::{Amount, Chain, ToolError};

pub use http::{
    HttpAaveClient, HttpCookieApi, HttpHederaClient, HttpJupiterClient, HttpMeteoraClient,
};

/// Cookie DataSwarm agent-analytics API.
#[async_trait]
pub trait CookieApi: Send + Sync {
    /// Look up an agent by X/Twitter username.
    async fn agent_by_username(
        &self,
        username: &str,
        interval: &str,
    ) -> Result<serde_json::Value, ToolError>;

    /// Look up an agent by token contract address.
    async fn agent_by_contract(
        &self,
        address: &str,
        interval: &str,
    ) -> Result<serde_json::Value, ToolError>;
}

/// Aave lending pool operations.
#[async_trait]
pub trait AaveClient: Send + Sync {
    /// Read reserve data for an asset.
    async fn reserve_data(&self, chain: &Chain, asset: &str) -> Result<serde_json::Value, ToolError>;

    /// Supply an asset to the pool; returns the transaction id.
    async fn supply(&self, chain: &Chain, asset: &str, amount: f64) -> Result<String, ToolError>;

    /// Withdraw an asset from the pool; returns the transaction id.
    async fn withdraw(&self, chain: &Chain, asset: &str, amount: f64) -> Result<String, ToolError>;
}

/// Jupiter swap aggregator.
#[async_trait]
pub trait JupiterClient: Send + Sync {
    /// Fetch a swap quote.
    async fn quote(
        &self,
        input_mint: &str,
        output_mint: &str,
        amount: f64,
        slippage_bps: Option<i64>,
    ) -> Result<serde_json::Value, ToolError>;

    /// Execute a swap; returns the transaction signature.
    async fn swap(
        &self,
        input_mint: &str,
        output_mint: &str,
        amount: f64,
        slippage_bps: Option<i64>,
    ) -> Result<String, ToolError>;
}

/// Meteora dynamic liquidity pools.
#[async_trait]
pub trait MeteoraClient: Send + Sync {
    /// Add liquidity to a pool; either amount may be `Auto`, meaning the
    /// pool infers it from the other side.
    async fn add_liquidity(
        &self,
        pool: &str,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<String, ToolError>;

    /// Remove a liquidity position; returns the transaction signature.
    async fn remove_liquidity(&self, pool: &str, position: &str) -> Result<String, ToolError>;
}

/// Hedera network access: mirror-node lookups and transfers.
#[async_trait]
pub trait HederaClient: Send + Sync {
    /// Account balance from the mirror node.
    async fn account_balance(&self, account_id: &str) -> Result<serde_json::Value, ToolError>;

    /// Transfer HBAR between accounts; returns the transaction id.
    async fn transfer_hbar(
        &self,
        from: &str,
        to: &str,
        amount: f64,
    ) -> Result<String, ToolError>;
}
