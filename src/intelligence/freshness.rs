use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::models::{
    normalize_address, AccumulatorRecord, EarliestActivity, FreshWallet, FreshnessLabel,
};
use crate::syve::TransactionRecord;

/// Earliest observed activity for one address, taken as the minimum
/// timestamp across its originated transactions.
///
/// Returns `None` when the history is empty or carries no usable
/// timestamps; such wallets can never qualify as fresh.
pub fn earliest_activity(
    address: &str,
    transactions: &[TransactionRecord],
) -> Option<EarliestActivity> {
    let min_unix = transactions.iter().filter_map(|tx| tx.timestamp).min()?;
    let min_date = DateTime::from_timestamp(min_unix, 0)?;

    Some(EarliestActivity {
        from_address: normalize_address(address),
        min_date,
    })
}

/// Wallets whose first observed activity falls strictly after `cutoff`,
/// joined with their accumulated amount.
///
/// Activities without a matching accumulator are dropped, so the result is
/// always a subset of the accumulator table. Input order is preserved.
pub fn select_fresh_wallets(
    activities: &[EarliestActivity],
    accumulators: &[AccumulatorRecord],
    cutoff: DateTime<Utc>,
) -> Vec<FreshWallet> {
    let accumulated_by_address: HashMap<&str, Decimal> = accumulators
        .iter()
        .map(|a| (a.from_address.as_str(), a.accumulated))
        .collect();

    activities
        .iter()
        .filter(|activity| activity.min_date > cutoff)
        .filter_map(|activity| {
            accumulated_by_address
                .get(activity.from_address.as_str())
                .map(|&accumulated| FreshWallet {
                    from_address: activity.from_address.clone(),
                    min_date: activity.min_date,
                    accumulated,
                })
        })
        .collect()
}

/// Applies the fresh-wallet label back onto the accumulator table.
pub fn label_fresh_wallets(accumulators: &mut [AccumulatorRecord], fresh: &[FreshWallet]) {
    let fresh_addresses: HashSet<&str> = fresh.iter().map(|w| w.from_address.as_str()).collect();

    for accumulator in accumulators.iter_mut() {
        if fresh_addresses.contains(accumulator.from_address.as_str()) {
            accumulator.fresh_wallet = FreshnessLabel::Fresh;
        }
    }
}
