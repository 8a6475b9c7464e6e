use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SQL aggregate rows
// ---------------------------------------------------------------------------

/// Row of the inbound-sum query: total token value received per address.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InflowRow {
    pub address: String,
    #[serde(default)]
    pub tokens_in: Decimal,
}

/// Row of the outbound-sum query: total token value sent per address.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutflowRow {
    pub address: String,
    #[serde(default)]
    pub tokens_out: Decimal,
}

// ---------------------------------------------------------------------------
// Filter API records
// ---------------------------------------------------------------------------

/// Raw ERC-20 transfer event (`filter-api/erc20`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransferRecord {
    pub from_address: String,
    pub to_address: String,
    #[serde(default)]
    pub token_address: Option<String>,
    #[serde(default)]
    pub value_token: Option<Decimal>,
    #[serde(default)]
    pub timestamp: Option<i64>,
}

/// Raw DEX trade event (`filter-api/dex-trades`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DexTradeRecord {
    pub trader_address: String,
    #[serde(default)]
    pub token_address: Option<String>,
    #[serde(default)]
    pub timestamp: Option<i64>,
}

/// Raw transaction record (`filter-api/transactions`). Timestamps are unix
/// seconds; rows without one are ignored by the freshness pass.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransactionRecord {
    #[serde(default)]
    pub from_address: Option<String>,
    #[serde(default)]
    pub timestamp: Option<i64>,
}
