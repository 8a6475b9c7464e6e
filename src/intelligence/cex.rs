use std::collections::HashSet;

use crate::models::{normalize_address, AccumulatorRecord, Label};
use crate::syve::TransferRecord;

use super::registry::ExchangeRegistry;

/// Marks accumulators that received the token directly from a known
/// exchange wallet.
///
/// The transfer feed is reduced to the set of recipients whose counterparty
/// is in the registry, then matched against the accumulator addresses
/// (normalized by construction of the table). A label is only ever raised
/// to `Yes`; addresses that never match keep whatever label they already
/// carry.
pub fn label_cex_recipients(
    accumulators: &mut [AccumulatorRecord],
    transfers: &[TransferRecord],
    registry: &ExchangeRegistry,
) {
    let recipients: HashSet<String> = transfers
        .iter()
        .filter(|transfer| registry.contains(&transfer.from_address))
        .map(|transfer| normalize_address(&transfer.to_address))
        .collect();

    for accumulator in accumulators.iter_mut() {
        if recipients.contains(&accumulator.from_address) {
            accumulator.received_from_cex = Label::Yes;
        }
    }
}

/// Marks accumulators that are themselves known exchange wallets.
pub fn label_exchange_wallets(accumulators: &mut [AccumulatorRecord], registry: &ExchangeRegistry) {
    for accumulator in accumulators.iter_mut() {
        if registry.contains(&accumulator.from_address) {
            accumulator.is_a_cex = Label::Yes;
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

    fn make_transfer(from: &str, to: &str) -> TransferRecord {
        TransferRecord {
            from_address: from.to_string(),
            to_address: to.to_string(),
            token_address: None,
            value_token: None,
            timestamp: None,
        }
    }

    #[test]
    fn test_recipient_of_exchange_transfer_is_labeled() {
        let registry = ExchangeRegistry::from_addresses(["0xcex1"]);
        let mut accumulators = vec![make_accumulator("0xalice"), make_accumulator("0xbob")];
        let transfers = vec![
            make_transfer("0xcex1", "0xalice"),
            make_transfer("0xcarol", "0xbob"),
        ];

        label_cex_recipients(&mut accumulators, &transfers, &registry);

        assert!(accumulators[0].received_from_cex.is_yes());
        assert!(!accumulators[1].received_from_cex.is_yes());
    }

    #[test]
    fn test_recipient_match_ignores_feed_casing() {
        let registry = ExchangeRegistry::from_addresses(["0xcex1"]);
        let mut accumulators = vec![make_accumulator("0xalice")];
        let transfers = vec![make_transfer("0xCEX1", "0xAlice")];

        label_cex_recipients(&mut accumulators, &transfers, &registry);

        assert!(accumulators[0].received_from_cex.is_yes());
    }

    #[test]
    fn test_transfer_between_plain_wallets_does_not_label() {
        let registry = ExchangeRegistry::from_addresses(["0xcex1"]);
        let mut accumulators = vec![make_accumulator("0xalice")];
        let transfers = vec![make_transfer("0xbob", "0xalice")];

        label_cex_recipients(&mut accumulators, &transfers, &registry);

        assert!(!accumulators[0].received_from_cex.is_yes());
    }

    #[test]
    fn test_exchange_wallet_is_labeled_as_cex() {
        let registry = ExchangeRegistry::from_addresses(["0xcex1", "0xcex2"]);
        let mut accumulators = vec![make_accumulator("0xcex2"), make_accumulator("0xalice")];

        label_exchange_wallets(&mut accumulators, &registry);

        assert!(accumulators[0].is_a_cex.is_yes());
        assert!(!accumulators[1].is_a_cex.is_yes());
    }

    #[test]
    fn test_empty_transfer_feed_leaves_labels_untouched() {
        let registry = ExchangeRegistry::from_addresses(["0xcex1"]);
        let mut accumulators = vec![make_accumulator("0xalice")];

        label_cex_recipients(&mut accumulators, &[], &registry);

        assert!(!accumulators[0].received_from_cex.is_yes());
    }
}
