use std::str::FromStr;

use rust_decimal::Decimal;

use crate::models::CurrencyRecord;

#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ExchangeError {
    #[error("amount is required")]
    EmptyAmount,
    #[error("amount {text:?} is not a number")]
    NotNumeric { text: String },
    #[error("currency {code:?} has non-positive unit price {price}")]
    NonPositivePrice { code: String, price: Decimal },
}

/// Convert user-entered amount text between two catalog currencies.
///
/// Identical codes return the parsed amount unchanged so a no-op swap never
/// picks up rounding drift. Otherwise the amount is routed through USD unit
/// prices: `amount * send_price / receive_price`.
pub fn compute(
    amount_text: &str,
    send: &CurrencyRecord,
    receive: &CurrencyRecord,
) -> Result<Decimal, ExchangeError> {
    let amount = parse_amount(amount_text)?;

    if send.code == receive.code {
        return Ok(amount);
    }

    for record in [send, receive] {
        if record.unit_price_usd <= Decimal::ZERO {
            return Err(ExchangeError::NonPositivePrice {
                code: record.code.clone(),
                price: record.unit_price_usd,
            });
        }
    }

    Ok(amount * send.unit_price_usd / receive.unit_price_usd)
}

/// Validate and parse amount text the way [`compute`] does, without
/// converting anything.
pub fn parse_amount(amount_text: &str) -> Result<Decimal, ExchangeError> {
    let text = amount_text.trim();
    if text.is_empty() {
        return Err(ExchangeError::EmptyAmount);
    }
    Decimal::from_str(text).map_err(|_| ExchangeError::NotNumeric {
        text: text.to_string(),
    })
}

/// Render a settled amount for display.
pub fn render_amount(value: Decimal) -> String {
    value.normalize().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(code: &str, price: &str) -> CurrencyRecord {
        CurrencyRecord::new(
            code,
            NaiveDate::from_ymd_opt(2023, 8, 29).unwrap(),
            price.parse().unwrap(),
        )
    }

    #[test]
    fn identity_pair_returns_amount_unchanged() {
        let usd = record("USD", "1");
        assert_eq!(compute("123.45", &usd, &usd).unwrap(), "123.45".parse().unwrap());
    }

    #[test]
    fn converts_through_usd_unit_prices() {
        let eur = record("EUR", "0.9");
        let usd = record("USD", "1");
        assert_eq!(compute("100", &eur, &usd).unwrap(), "90".parse().unwrap());
    }

    #[test]
    fn inverse_conversion_is_consistent() {
        let a = record("ETH", "1645.93");
        let b = record("BTC", "26002.82");
        let there = compute("3", &a, &b).unwrap();
        let back = compute(&render_amount(there), &b, &a).unwrap();
        let drift = (back - Decimal::from(3)).abs();
        assert!(drift < "0.0000001".parse().unwrap(), "drift was {drift}");
    }

    #[test]
    fn rejects_empty_and_non_numeric_amounts() {
        let usd = record("USD", "1");
        let eur = record("EUR", "0.9");
        assert_eq!(compute("", &usd, &eur).unwrap_err(), ExchangeError::EmptyAmount);
        assert_eq!(compute("   ", &usd, &eur).unwrap_err(), ExchangeError::EmptyAmount);
        assert_eq!(
            compute("12x", &usd, &eur).unwrap_err(),
            ExchangeError::NotNumeric {
                text: "12x".to_string()
            }
        );
    }

    #[test]
    fn rejects_non_positive_prices() {
        let usd = record("USD", "1");
        let bad = record("BAD", "0");
        assert!(matches!(
            compute("10", &usd, &bad).unwrap_err(),
            ExchangeError::NonPositivePrice { .. }
        ));
        assert!(matches!(
            compute("10", &bad, &usd).unwrap_err(),
            ExchangeError::NonPositivePrice { .. }
        ));
    }
}
