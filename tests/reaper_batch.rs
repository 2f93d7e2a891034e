//! Expiry reaper (C7) batch grouping — boundary scenario 4, pure logic so
//! no live Postgres/Redis/NATS is required.

use chrono::Utc;
use concert_tickets::domain::{Order, OrderStatus};
use concert_tickets::reaper::group_by_category;

fn expired_order(category_id: i64) -> Order {
    Order {
        id: 1,
        category_id,
        external_id: "01HZY000".into(),
        name: "Jane".into(),
        email: "jane@example.com".into(),
        payment_code: "PAY-1".into(),
        status: OrderStatus::Expired,
        expired_at: Utc::now(),
        ticket_row: None,
        ticket_col: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// Boundary scenario 4: 5 expired orders split {1:3, 2:2} tally into exactly
/// one per-category count each, which is what drives the single bulk
/// cache-increment and the single bulk queue message.
#[test]
fn five_orders_across_two_categories_tally_correctly() {
    let cancelled = vec![
        expired_order(1),
        expired_order(1),
        expired_order(1),
        expired_order(2),
        expired_order(2),
    ];

    let grouped = group_by_category(&cancelled);

    assert_eq!(grouped.len(), 2);
    assert_eq!(grouped.get(&1), Some(&3));
    assert_eq!(grouped.get(&2), Some(&2));
}

#[test]
fn no_cancellations_yields_empty_tally() {
    assert!(group_by_category(&[]).is_empty());
}
