mod priority;
mod rows;

pub use priority::{prioritize, ChainPriorityTable};
pub use rows::{build_rows, format_amount, usd_value, WalletError};
