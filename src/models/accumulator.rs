use rust_decimal::Decimal;
use serde::Serialize;

use super::{FreshnessLabel, Label};

/// One row of the accumulator table: an address whose net token inflow over
/// the window is positive, plus the provenance labels the classifier passes
/// attach to it.
#[derive(Debug, Clone, Serialize)]
pub struct AccumulatorRecord {
    pub from_address: String,
    pub tokens_in: Decimal,
    pub tokens_out: Decimal,
    /// tokens_in - tokens_out. Invariant: > 0 for every retained row.
    pub accumulated: Decimal,
    pub fresh_wallet: FreshnessLabel,
    pub received_from_cex: Label,
    pub is_a_cex: Label,
    pub received_from_dex: Label,
}

impl AccumulatorRecord {
    /// Base row before any classifier pass has run.
    pub fn new(from_address: String, tokens_in: Decimal, tokens_out: Decimal) -> Self {
        Self {
            from_address,
            tokens_in,
            tokens_out,
            accumulated: tokens_in - tokens_out,
            fresh_wallet: FreshnessLabel::Unknown,
            received_from_cex: Label::Unknown,
            is_a_cex: Label::Unknown,
            received_from_dex: Label::Unknown,
        }
    }
}
