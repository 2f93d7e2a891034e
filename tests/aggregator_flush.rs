//! Aggregator (C5) coalescing logic — boundary scenario 5, no live NATS or
//! Postgres required since the batch-filtering step is pure.

use concert_tickets::aggregator::nonzero_deltas;
use std::collections::HashMap;

/// Boundary scenario 5: `{cat:1, -1}` x10 and `{cat:2, +0}` x3 coalesce to a
/// single non-empty entry; the zero-net category is skipped, not sent as a
/// no-op update.
#[test]
fn zero_net_category_is_skipped_from_the_batch() {
    let mut deltas = HashMap::new();
    deltas.insert(1, -10i64);
    deltas.insert(2, 0i64);

    let mut items = nonzero_deltas(deltas);
    items.sort();

    assert_eq!(items, vec![(1, -10)]);
}

/// If every coalesced category nets to zero, the batch must come back empty
/// so the caller takes the same "nothing to flush" path as an empty map.
#[test]
fn all_zero_batch_flushes_nothing() {
    let mut deltas = HashMap::new();
    deltas.insert(2, 0i64);
    deltas.insert(3, 0i64);

    assert!(nonzero_deltas(deltas).is_empty());
}

#[test]
fn empty_map_flushes_nothing() {
    assert!(nonzero_deltas(HashMap::new()).is_empty());
}
