pub mod cex;
pub mod dex;
pub mod freshness;
pub mod registry;

pub use cex::{label_cex_recipients, label_exchange_wallets};
pub use dex::label_dex_traders;
pub use freshness::{earliest_activity, label_fresh_wallets, select_fresh_wallets};
pub use registry::ExchangeRegistry;
