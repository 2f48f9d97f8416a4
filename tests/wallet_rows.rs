use anyhow::Result;
use rust_decimal::Decimal;
use swapbook::models::{Prices, WalletBalance};
use swapbook::wallet::{build_rows, ChainPriorityTable, WalletError};

fn dec(text: &str) -> Decimal {
    text.parse().unwrap()
}

fn balance(currency: &str, amount: &str, blockchain: &str) -> WalletBalance {
    WalletBalance::new(currency, dec(amount), blockchain)
}

#[test]
fn pipeline_orders_formats_and_values_rows() -> Result<()> {
    let balances = vec![
        balance("ABC", "123.6", "Osmosis"),
        balance("TYU", "456", "Ethereum"),
    ];
    let prices: Prices = [
        ("ABC".to_string(), dec("888")),
        ("TYU".to_string(), dec("999")),
    ]
    .into_iter()
    .collect();

    let rows = build_rows(&balances, &prices, &ChainPriorityTable::default())?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].currency, "ABC");
    assert_eq!(rows[0].formatted_amount, "124");
    assert_eq!(rows[0].usd_value, dec("109756.8"));
    assert_eq!(rows[1].currency, "TYU");
    assert_eq!(rows[1].usd_value, dec("455544"));
    Ok(())
}

#[test]
fn tiers_sort_descending_with_stable_ties() -> Result<()> {
    // Tiers [20, 100, 50, 20] must come out [100, 50, 20, 20] with the two
    // tier-20 entries keeping their input order.
    let balances = vec![
        balance("ZIL", "1", "Zilliqa"),
        balance("OSMO", "2", "Osmosis"),
        balance("ETH", "3", "Ethereum"),
        balance("NEO", "4", "Neo"),
    ];
    let prices: Prices = ["ZIL", "OSMO", "ETH", "NEO"]
        .into_iter()
        .map(|code| (code.to_string(), dec("1")))
        .collect();

    let rows = build_rows(&balances, &prices, &ChainPriorityTable::default())?;
    let order: Vec<&str> = rows.iter().map(|row| row.currency.as_str()).collect();
    assert_eq!(order, vec!["OSMO", "ETH", "ZIL", "NEO"]);
    Ok(())
}

#[test]
fn unranked_chains_and_non_positive_amounts_are_dropped() -> Result<()> {
    let balances = vec![
        balance("ABC", "10", "Osmosis"),
        balance("DBT", "-3", "Ethereum"),
        balance("NIL", "0", "Arbitrum"),
        balance("UNK", "5", "Dogechain"),
    ];
    let prices: Prices = [("ABC".to_string(), dec("2"))].into_iter().collect();

    let rows = build_rows(&balances, &prices, &ChainPriorityTable::default())?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].currency, "ABC");
    assert_eq!(rows[0].usd_value, dec("20"));
    Ok(())
}

#[test]
fn missing_price_propagates_instead_of_producing_garbage() {
    let balances = vec![balance("ABC", "10", "Osmosis")];
    let prices = Prices::new();

    let err = build_rows(&balances, &prices, &ChainPriorityTable::default()).unwrap_err();
    assert_eq!(
        err,
        WalletError::UnknownCurrency {
            currency: "ABC".to_string()
        }
    );
}

#[test]
fn config_overrides_admit_new_chains() -> Result<()> {
    let table = ChainPriorityTable::default().with_chain("Base", 60);
    let balances = vec![
        balance("ETH", "1", "Ethereum"),
        balance("USDC", "1", "Base"),
    ];
    let prices: Prices = [
        ("ETH".to_string(), dec("1645.93")),
        ("USDC".to_string(), dec("1")),
    ]
    .into_iter()
    .collect();

    let rows = build_rows(&balances, &prices, &table)?;
    let order: Vec<&str> = rows.iter().map(|row| row.blockchain.as_str()).collect();
    assert_eq!(order, vec!["Base", "Ethereum"]);
    Ok(())
}
