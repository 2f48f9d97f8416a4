use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single wallet holding as supplied by an external account provider.
///
/// Amounts are signed; the same currency may appear more than once across
/// chains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletBalance {
    pub currency: String,
    pub amount: Decimal,
    pub blockchain: String,
}

impl WalletBalance {
    pub fn new(
        currency: impl Into<String>,
        amount: Decimal,
        blockchain: impl Into<String>,
    ) -> Self {
        Self {
            currency: currency.into(),
            amount,
            blockchain: blockchain.into(),
        }
    }
}

/// One display row produced by the wallet pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedBalanceRow {
    pub currency: String,
    pub blockchain: String,
    pub amount: Decimal,
    pub formatted_amount: String,
    pub usd_value: Decimal,
}

/// Unit USD price per currency code, supplied by an external price provider.
pub type Prices = HashMap<String, Decimal>;
