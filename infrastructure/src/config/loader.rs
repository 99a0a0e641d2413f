//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (`RELAY_*`, `__`-nested)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./relay.toml` or `./.relay.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/onchain-relay/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        // Add global config (XDG or fallback)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        // Add project-level config files (check both names)
        for filename in &["relay.toml", ".relay.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
                break;
            }
        }

        // Add explicit config path
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Environment wins: RELAY_WALLETS__EVM__PRIVATE_KEY etc.
        figment = figment.merge(Env::prefixed("RELAY_").split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("onchain-relay").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.server.name, "onchain-relay");
        assert!(config.wallets.evm.is_none());
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("onchain-relay"));
    }

    #[test]
    fn test_explicit_path_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[server]\nname = \"explicit-relay\"\n\n[wallets.solana]\npublic_key = \"pubkey111\""
        )
        .unwrap();

        let path = file.path().to_path_buf();
        let config = ConfigLoader::load(Some(&path)).unwrap();
        assert_eq!(config.server.name, "explicit-relay");
        assert_eq!(
            config.wallets.solana.as_ref().unwrap().public_key.as_deref(),
            Some("pubkey111")
        );
        // Untouched sections keep defaults
        assert_eq!(config.server.transport, "stdio");
    }
}
