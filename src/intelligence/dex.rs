use std::collections::HashSet;

use crate::models::{normalize_address, AccumulatorRecord, Label};
use crate::syve::DexTradeRecord;

/// Marks accumulators that traded the token on a decentralized exchange
/// within the window.
///
/// An accumulator matches when it appears as the trader on any trade in the
/// feed. The feed is already time-bounded by the query, so no timestamp
/// filtering happens here.
pub fn label_dex_traders(accumulators: &mut [AccumulatorRecord], trades: &[DexTradeRecord]) {
    let traders: HashSet<String> = trades
        .iter()
        .map(|trade| normalize_address(&trade.trader_address))
        .collect();

    for accumulator in accumulators.iter_mut() {
        if traders.contains(&accumulator.from_address) {
            accumulator.received_from_dex = Label::Yes;
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn make_accumulator(address: &str) -> AccumulatorRecord {
        AccumulatorRecord::new(address.to_string(), Decimal::from(100), Decimal::ZERO)
    }

    fn make_trade(trader: &str) -> DexTradeRecord {
        DexTradeRecord {
            trader_address: trader.to_string(),
            token_address: None,
            timestamp: None,
        }
    }

    #[test]
    fn test_trader_in_feed_is_labeled() {
        let mut accumulators = vec![make_accumulator("0xalice"), make_accumulator("0xbob")];
        let trades = vec![make_trade("0xalice"), make_trade("0xcarol")];

        label_dex_traders(&mut accumulators, &trades);

        assert!(accumulators[0].received_from_dex.is_yes());
        assert!(!accumulators[1].received_from_dex.is_yes());
    }

    #[test]
    fn test_trader_match_ignores_feed_casing() {
        let mut accumulators = vec![make_accumulator("0xalice")];
        let trades = vec![make_trade("0xALICE")];

        label_dex_traders(&mut accumulators, &trades);

        assert!(accumulators[0].received_from_dex.is_yes());
    }

    #[test]
    fn test_empty_trade_feed_leaves_labels_untouched() {
        let mut accumulators = vec![make_accumulator("0xalice")];

        label_dex_traders(&mut accumulators, &[]);

        assert!(!accumulators[0].received_from_dex.is_yes());
    }
}
