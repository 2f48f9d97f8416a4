use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::models::{FormattedBalanceRow, Prices, WalletBalance};

use super::priority::{prioritize, ChainPriorityTable};

#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum WalletError {
    #[error("no USD price for currency {currency:?}")]
    UnknownCurrency { currency: String },
}

/// Whole-unit display rendering, rounding half away from zero.
///
/// Amounts that round to zero render as `"0"`, never `"-0"`.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        "0".to_string()
    } else {
        rounded.normalize().to_string()
    }
}

/// USD valuation of a single balance. A missing price is an error, never a
/// silent zero.
pub fn usd_value(balance: &WalletBalance, prices: &Prices) -> Result<Decimal, WalletError> {
    let price = prices
        .get(&balance.currency)
        .ok_or_else(|| WalletError::UnknownCurrency {
            currency: balance.currency.clone(),
        })?;
    Ok(balance.amount * price)
}

/// The full display pipeline: filter and order by chain tier, then render
/// each kept balance with its USD valuation.
pub fn build_rows(
    balances: &[WalletBalance],
    prices: &Prices,
    table: &ChainPriorityTable,
) -> Result<Vec<FormattedBalanceRow>, WalletError> {
    let mut rows = Vec::new();
    for balance in prioritize(balances, table) {
        let value = usd_value(&balance, prices)?;
        rows.push(FormattedBalanceRow {
            formatted_amount: format_amount(balance.amount),
            usd_value: value,
            currency: balance.currency,
            blockchain: balance.blockchain,
            amount: balance.amount,
        });
    }
    debug!(rows = rows.len(), "wallet rows built");
    Ok(rows)
}
