//! CLI entrypoint for Onchain Relay
//!
//! This is the main binary that wires together all layers using
//! dependency injection: configuration decides which wallets exist,
//! wallets decide which tools the plugins expose, and the stdio server
//! serves whatever the registry aggregated.

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use relay_application::{Dispatcher, SessionWallets, ToolRegistry, ToolSchemaPort};
use relay_domain::WalletHandle;
use relay_infrastructure::clients::{
    HttpAaveClient, HttpCookieApi, HttpHederaClient, HttpJupiterClient, HttpMeteoraClient,
};
use relay_infrastructure::{
    AavePlugin, ConfigLoader, CookiePlugin, EvmWallet, FileConfig, HederaPlugin, HederaWallet,
    JsonSchemaToolConverter, JupiterPlugin, MeteoraPlugin, SolanaWallet,
};
use relay_presentation::{Cli, StdioServer};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries protocol frames only; logs go to stderr or a file
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let _guard = match &cli.log_file {
        Some(path) => {
            let dir = path.parent().unwrap_or_else(|| std::path::Path::new("."));
            let file = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "onchain-relay.log".to_string());
            let (writer, guard) = tracing_appender::non_blocking(
                tracing_appender::rolling::never(dir, file),
            );
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
            None
        }
    };

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("failed to load configuration")?
    };
    config.validate().context("invalid configuration")?;

    let (wallets, evm, solana, hedera) = build_wallets(&config)?;
    let registry = build_registry(&config, wallets, evm, solana, hedera);

    info!(plugins = ?registry.plugin_names(), "aggregating tool registry");
    let set = registry
        .aggregate()
        .context("failed to build tool registry")?;

    let dispatcher = Arc::new(Dispatcher::new(set));
    let schema = Arc::new(JsonSchemaToolConverter);
    info!(tools = dispatcher.tool_count(), "tool registry ready");

    if cli.list_tools {
        let schemas = schema.all_tools_schema(&dispatcher.definitions());
        println!("{}", serde_json::to_string_pretty(&schemas)?);
        return Ok(());
    }

    let cancel = CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_cancel.cancel();
        }
    });

    let server = StdioServer::new(
        dispatcher,
        schema,
        config.server.name.clone(),
        config.server.version.clone(),
    );
    server.run(cancel).await.context("stdio server failed")?;

    Ok(())
}

type BuiltWallets = (
    SessionWallets,
    Option<Arc<dyn WalletHandle>>,
    Option<Arc<dyn WalletHandle>>,
    Option<Arc<dyn WalletHandle>>,
);

/// Construct wallet handles from configuration. Signing capability is
/// resolved here, once, from which credentials are present.
fn build_wallets(config: &FileConfig) -> Result<BuiltWallets> {
    let mut wallets = SessionWallets::new();

    let evm: Option<Arc<dyn WalletHandle>> = match &config.wallets.evm {
        Some(cfg) => {
            let wallet: Arc<dyn WalletHandle> =
                Arc::new(EvmWallet::from_config(cfg).context("invalid EVM wallet")?);
            info!(signs = wallet.can_sign(), "EVM wallet configured");
            wallets = wallets.with_wallet(Arc::clone(&wallet));
            Some(wallet)
        }
        None => None,
    };

    let solana: Option<Arc<dyn WalletHandle>> = match &config.wallets.solana {
        Some(cfg) => {
            let wallet: Arc<dyn WalletHandle> =
                Arc::new(SolanaWallet::from_config(cfg).context("invalid Solana wallet")?);
            info!(signs = wallet.can_sign(), "Solana wallet configured");
            wallets = wallets.with_wallet(Arc::clone(&wallet));
            Some(wallet)
        }
        None => None,
    };

    let hedera: Option<Arc<dyn WalletHandle>> = match &config.wallets.hedera {
        Some(cfg) => {
            let wallet: Arc<dyn WalletHandle> =
                Arc::new(HederaWallet::from_config(cfg).context("invalid Hedera wallet")?);
            info!(signs = wallet.can_sign(), "Hedera wallet configured");
            wallets = wallets.with_wallet(Arc::clone(&wallet));
            Some(wallet)
        }
        None => None,
    };

    Ok((wallets, evm, solana, hedera))
}

/// Register every enabled plugin whose requirements are met.
fn build_registry(
    config: &FileConfig,
    wallets: SessionWallets,
    evm: Option<Arc<dyn WalletHandle>>,
    solana: Option<Arc<dyn WalletHandle>>,
    hedera: Option<Arc<dyn WalletHandle>>,
) -> ToolRegistry {
    let mut registry = ToolRegistry::new(wallets);
    let apis = &config.apis;

    if config.plugin_enabled("cookie") {
        match &apis.cookie_api_key {
            Some(key) => {
                let api = Arc::new(HttpCookieApi::new(&apis.cookie_base_url, key));
                registry = registry.register(CookiePlugin::new(api));
            }
            None => warn!("cookie plugin enabled but no API key configured, skipping"),
        }
    }

    if config.plugin_enabled("aave") {
        let client = Arc::new(HttpAaveClient::new(&apis.aave_base_url));
        registry = registry.register(AavePlugin::new(client, evm));
    }

    if config.plugin_enabled("jupiter") {
        let client = Arc::new(HttpJupiterClient::new(&apis.jupiter_base_url));
        registry = registry.register(JupiterPlugin::new(client, solana.clone()));
    }

    if config.plugin_enabled("meteora") {
        let client = Arc::new(HttpMeteoraClient::new(&apis.meteora_base_url));
        registry = registry.register(MeteoraPlugin::new(client, solana));
    }

    if config.plugin_enabled("hedera") {
        let client = Arc::new(HttpHederaClient::new(&apis.hedera_mirror_url));
        registry = registry.register(HederaPlugin::new(client, hedera));
    }

    registry
}
