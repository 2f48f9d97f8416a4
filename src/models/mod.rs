mod balance;
mod currency;

pub use balance::{FormattedBalanceRow, Prices, WalletBalance};
pub use currency::{CurrencyRecord, ExchangeAmounts, SelectionPair};
