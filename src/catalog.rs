use rust_decimal::Decimal;

use crate::models::{CurrencyRecord, SelectionPair};

#[derive(Debug, Clone, thiserror::Error, PartialEq)]
#[error("currency {code:?} has non-positive unit price {price}")]
pub struct CatalogError {
    pub code: String,
    pub price: Decimal,
}

/// Static reference table of currency records.
///
/// Loaded once at startup and immutable afterwards. Order is preserved so
/// the presentation layer can show entries the way the loader supplied them.
#[derive(Debug, Clone)]
pub struct CurrencyCatalog {
    records: Vec<CurrencyRecord>,
}

impl CurrencyCatalog {
    /// Build a catalog, rejecting any record with a non-positive unit price
    /// so a bad entry fails at load rather than mid-conversion.
    pub fn new(records: Vec<CurrencyRecord>) -> Result<Self, CatalogError> {
        for record in &records {
            if record.unit_price_usd <= Decimal::ZERO {
                return Err(CatalogError {
                    code: record.code.clone(),
                    price: record.unit_price_usd,
                });
            }
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[CurrencyRecord] {
        &self.records
    }

    pub fn get(&self, code: &str) -> Option<&CurrencyRecord> {
        self.records.iter().find(|record| record.code == code)
    }

    /// The default pair for a fresh session: the first two catalog entries,
    /// or the sole entry on both sides if there is only one.
    pub fn initial_pair(&self) -> Option<SelectionPair> {
        let send = self.records.first()?;
        let receive = self.records.get(1).unwrap_or(send);
        Some(SelectionPair::new(send.clone(), receive.clone()))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
