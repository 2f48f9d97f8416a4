use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::WalletBalance;

/// Tier assigned to chains the table does not know. Anything at this rank
/// is dropped by [`prioritize`].
const UNRANKED_TIER: i32 = -99;

/// Display priority per blockchain, keyed by chain name.
///
/// The table is data, not code: overrides from config can rank new chains
/// without touching the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainPriorityTable {
    tiers: HashMap<String, i32>,
}

impl Default for ChainPriorityTable {
    fn default() -> Self {
        let tiers = [
            ("Osmosis", 100),
            ("Ethereum", 50),
            ("Arbitrum", 30),
            ("Zilliqa", 20),
            ("Neo", 20),
        ]
        .into_iter()
        .map(|(chain, tier)| (chain.to_string(), tier))
        .collect();
        Self { tiers }
    }
}

impl ChainPriorityTable {
    pub fn new(tiers: HashMap<String, i32>) -> Self {
        Self { tiers }
    }

    pub fn with_chain(mut self, chain: impl Into<String>, tier: i32) -> Self {
        self.tiers.insert(chain.into(), tier);
        self
    }

    pub fn classify(&self, blockchain: &str) -> i32 {
        self.tiers.get(blockchain).copied().unwrap_or(UNRANKED_TIER)
    }
}

/// Filter and order balances for display.
///
/// Unranked chains and non-positive amounts are dropped; the rest sort by
/// descending tier. The sort is stable, so equal-tier entries keep the
/// order the provider supplied them in.
pub fn prioritize(balances: &[WalletBalance], table: &ChainPriorityTable) -> Vec<WalletBalance> {
    let mut kept: Vec<WalletBalance> = balances
        .iter()
        .filter(|balance| {
            table.classify(&balance.blockchain) > UNRANKED_TIER
                && balance.amount > Decimal::ZERO
        })
        .cloned()
        .collect();
    kept.sort_by_key(|balance| std::cmp::Reverse(table.classify(&balance.blockchain)));
    kept
}
