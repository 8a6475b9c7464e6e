use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::{normalize_address, AccumulatorRecord, FlowRecord};
use crate::syve::{InflowRow, OutflowRow};

// ---------------------------------------------------------------------------
// Flow merge
// ---------------------------------------------------------------------------

/// Joins the inbound and outbound aggregate rows into one record per address.
///
/// The join is a full outer join keyed on the normalized address: an address
/// seen on only one side gets zero for the other. Inbound rows keep their
/// query order (largest sums first) and outbound-only addresses are appended
/// after them. Duplicate addresses within one side have their sums folded
/// together, so an address never appears twice in the output.
pub fn merge_flows(inflows: &[InflowRow], outflows: &[OutflowRow]) -> Vec<FlowRecord> {
    let mut records: Vec<FlowRecord> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for row in inflows {
        upsert_flow(
            &mut records,
            &mut index,
            normalize_address(&row.address),
            row.tokens_in,
            Decimal::ZERO,
        );
    }

    for row in outflows {
        upsert_flow(
            &mut records,
            &mut index,
            normalize_address(&row.address),
            Decimal::ZERO,
            row.tokens_out,
        );
    }

    records
}

fn upsert_flow(
    records: &mut Vec<FlowRecord>,
    index: &mut HashMap<String, usize>,
    address: String,
    tokens_in: Decimal,
    tokens_out: Decimal,
) {
    match index.get(&address).copied() {
        Some(i) => {
            records[i].tokens_in += tokens_in;
            records[i].tokens_out += tokens_out;
        }
        None => {
            index.insert(address.clone(), records.len());
            records.push(FlowRecord {
                address,
                tokens_in,
                tokens_out,
            });
        }
    }
}

// ---------------------------------------------------------------------------
// Accumulator selection
// ---------------------------------------------------------------------------

/// Keeps the addresses whose net flow is strictly positive and orders them
/// by accumulated amount, largest first.
///
/// The sort is stable: addresses with equal accumulation keep their merge
/// order. An address that only shed tokens, or that broke exactly even,
/// never appears in the result.
pub fn build_accumulators(flows: &[FlowRecord]) -> Vec<AccumulatorRecord> {
    let mut accumulators: Vec<AccumulatorRecord> = flows
        .iter()
        .filter(|flow| flow.net() > Decimal::ZERO)
        .map(|flow| AccumulatorRecord::new(flow.address.clone(), flow.tokens_in, flow.tokens_out))
        .collect();

    accumulators.sort_by(|a, b| b.accumulated.cmp(&a.accumulated));
    accumulators
}
