//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for onchain-relay
#[derive(Parser, Debug)]
#[command(name = "onchain-relay")]
#[command(author, version, about = "Expose wallet and DeFi operations as agent tools")]
#[command(long_about = r#"
Onchain Relay speaks the agent tool protocol over stdio: the calling agent
lists the available tools, then invokes them with JSON arguments. Which
tools appear depends on the wallets configured for the session - read-only
credentials expose lookups only, signing credentials add transaction tools.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./relay.toml        Project-level config
3. ~/.config/onchain-relay/config.toml   Global config

Environment variables prefixed RELAY_ override file values, e.g.
RELAY_WALLETS__EVM__PRIVATE_KEY.

Example:
  onchain-relay                  Serve over stdio
  onchain-relay --list-tools     Print the tool set and exit
"#)]
pub struct Cli {
    /// Print the aggregated tool set as JSON and exit
    #[arg(long)]
    pub list_tools: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
