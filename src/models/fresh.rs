use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// Earliest observed outbound transaction time for one address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EarliestActivity {
    pub from_address: String,
    pub min_date: DateTime<Utc>,
}

/// Fresh-wallet table row: an accumulating address whose first on-chain
/// activity falls inside the lookback window. Carries the accumulation
/// amount from the main table; the in/out columns are dropped.
#[derive(Debug, Clone, Serialize)]
pub struct FreshWallet {
    pub from_address: String,
    pub min_date: DateTime<Utc>,
    pub accumulated: Decimal,
}
