use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::catalog::CurrencyCatalog;
use crate::models::CurrencyRecord;
use crate::wallet::ChainPriorityTable;

/// Default settlement delay (1 second).
fn default_settlement_ms() -> u64 {
    1000
}

/// Top-level TOML config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Simulated settlement delay in milliseconds.
    #[serde(default = "default_settlement_ms")]
    pub settlement_ms: u64,

    /// Catalog records, in display order.
    #[serde(default, rename = "currency")]
    pub currencies: Vec<CurrencyRecord>,

    /// Chain tier overrides, merged over the built-in priority table.
    #[serde(default)]
    pub chain_tiers: HashMap<String, i32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settlement_ms: default_settlement_ms(),
            currencies: Vec::new(),
            chain_tiers: HashMap::new(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load config from a file, or return default config if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn settlement_delay(&self) -> Duration {
        Duration::from_millis(self.settlement_ms)
    }

    /// Build the currency catalog, failing fast on non-positive prices.
    pub fn catalog(&self) -> Result<CurrencyCatalog> {
        CurrencyCatalog::new(self.currencies.clone()).context("Invalid currency catalog")
    }

    /// The built-in chain priority table with this config's overrides applied.
    pub fn priority_table(&self) -> ChainPriorityTable {
        self.chain_tiers
            .iter()
            .fold(ChainPriorityTable::default(), |table, (chain, tier)| {
                table.with_chain(chain.clone(), *tier)
            })
    }
}
