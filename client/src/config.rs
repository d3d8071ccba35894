//! Client configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use solana_sdk::{pubkey, pubkey::Pubkey};
use std::path::Path;

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "FEED_RELAY_CONFIG";

/// Config file used when `FEED_RELAY_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "feed-relay.toml";

/// Feed relay deployment on devnet
const DEVNET_PROGRAM_ID: Pubkey = pubkey!("6yrqAiRjkyqsAeqNwc2qzE1TbDwP6jza6iYyRL6qEg8");

/// Chainlink SOL/USD aggregator on devnet
const DEVNET_SOL_USD_FEED: Pubkey = pubkey!("99B2bTijsU6f1GCT73HmdR7HCFFjGMBcPZY6jZ96ynrR");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// RPC URL for Solana cluster
    pub rpc_url: String,

    /// Feed relay program ID
    #[serde(with = "pubkey_string")]
    pub program_id: Pubkey,

    /// Chainlink aggregator account to relay
    #[serde(with = "pubkey_string")]
    pub feed: Pubkey,

    /// Payer wallet keypair path
    pub keypair_path: String,

    /// Seed deriving the price feed account from the payer
    pub account_seed: String,
}

impl Config {
    /// Path of the config file, `FEED_RELAY_CONFIG` or the default
    pub fn path() -> String {
        std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
    }

    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_str = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&config_str).context("Failed to parse config TOML")?;

        Ok(config)
    }

    /// Create default configuration
    pub fn default_devnet() -> Self {
        Self {
            rpc_url: "https://api.devnet.solana.com".to_string(),
            program_id: DEVNET_PROGRAM_ID,
            feed: DEVNET_SOL_USD_FEED,
            keypair_path: "~/.config/solana/id.json".to_string(),
            account_seed: "price-feed".to_string(),
        }
    }

    /// Write default config to file
    pub fn write_default(path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let config = Self::default_devnet();
        let toml_str = toml::to_string_pretty(&config).context("Failed to serialize config")?;

        std::fs::write(path, toml_str)
            .context(format!("Failed to write config to {}", path.display()))?;

        log::info!("Created default config at {}", path.display());
        Ok(())
    }
}

/// Pubkeys are written to TOML as base58 strings
mod pubkey_string {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};
    use solana_sdk::pubkey::Pubkey;
    use std::str::FromStr;

    pub fn serialize<S: Serializer>(pubkey: &Pubkey, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(pubkey)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Pubkey, D::Error> {
        let s = String::deserialize(deserializer)?;
        Pubkey::from_str(&s).map_err(D::Error::custom)
    }
}
