use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One catalog entry: a currency and the USD price of one unit of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRecord {
    pub code: String,
    pub as_of_date: NaiveDate,
    /// Must be positive; the catalog rejects records that aren't.
    pub unit_price_usd: Decimal,
}

impl CurrencyRecord {
    pub fn new(code: impl Into<String>, as_of_date: NaiveDate, unit_price_usd: Decimal) -> Self {
        Self {
            code: code.into(),
            as_of_date,
            unit_price_usd,
        }
    }
}

/// The active send/receive currency pair. Both sides always reference a
/// catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionPair {
    pub send: CurrencyRecord,
    pub receive: CurrencyRecord,
}

impl SelectionPair {
    pub fn new(send: CurrencyRecord, receive: CurrencyRecord) -> Self {
        Self { send, receive }
    }
}

/// The two amount fields driven by the exchange flow.
///
/// `send` is raw user text; `receive` is derived and only ever written by a
/// settled conversion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExchangeAmounts {
    pub send: String,
    pub receive: String,
}
