use rust_decimal::Decimal;

/// Per-address token flow over the lookback window, merged from the inbound
/// and outbound aggregate queries. A side with no row for an address is zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowRecord {
    /// Lowercased wallet address (the merge key).
    pub address: String,
    pub tokens_in: Decimal,
    pub tokens_out: Decimal,
}

impl FlowRecord {
    pub fn net(&self) -> Decimal {
        self.tokens_in - self.tokens_out
    }
}
