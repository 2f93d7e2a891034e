//! Category snapshot (C8) — verifies the lock-free swap is torn-read-free
//! without needing a live store/cache to drive `refresh`.

use concert_tickets::domain::Category;
use concert_tickets::snapshot::CategorySnapshot;
use rust_decimal::Decimal;
use std::sync::Arc;
use std::thread;

fn category(id: i64, quantity: i64) -> Category {
    Category {
        id,
        name: format!("cat-{id}"),
        price: Decimal::new(100_000, 0),
        max_row: 10,
        max_col: 10,
        quantity,
        current_row: 10,
        current_col: 10,
    }
}

#[test]
fn empty_snapshot_starts_as_an_empty_list() {
    let snapshot = CategorySnapshot::empty();
    assert!(snapshot.get().is_empty());
}

#[test]
fn set_is_visible_to_a_subsequent_get() {
    let snapshot = CategorySnapshot::empty();
    snapshot.set(vec![category(1, 5), category(2, 3)]);
    let seen = snapshot.get();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].quantity, 5);
}

/// Invariant-style check: a reader racing a writer always observes a
/// complete list of one generation or the other, never a partial one.
#[test]
fn concurrent_readers_never_observe_a_torn_list() {
    let snapshot = Arc::new(CategorySnapshot::empty());
    snapshot.set(vec![category(1, 0); 50]);

    let writer_snapshot = snapshot.clone();
    let writer = thread::spawn(move || {
        for generation in 1..200i64 {
            writer_snapshot.set(vec![category(1, generation); 50]);
        }
    });

    let reader_snapshot = snapshot.clone();
    let reader = thread::spawn(move || {
        for _ in 0..200 {
            let seen = reader_snapshot.get();
            assert!(seen.iter().all(|c| c.quantity == seen[0].quantity), "torn read across generations");
        }
    });

    writer.join().unwrap();
    reader.join().unwrap();
}
