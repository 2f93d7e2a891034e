//! Expiry reaper (C7): bulk-cancels pending orders past their expiry,
//! compensates the cache counters, and tells downstream about both the
//! inventory correction and the cancellation emails.
//!
//! The cancel operation itself runs inline behind `POST /api/orders/cancel`
//! (mirroring the original's HTTP-triggered `cancel` handler); a separate
//! periodic client (`src/bin/reaper_client.rs`) is what actually calls that
//! endpoint on a schedule.

use std::collections::HashMap;

use crate::cache::Cache;
use crate::email;
use crate::error::AppError;
use crate::queue::{
    Queue,
    messages::{
        BulkIncrementCategoryQuantity, IncrementCategoryQuantity, SUBJECT_CATEGORY_BULK_INCREMENT,
        SUBJECT_EMAIL_SEND,
    },
};
use crate::domain::Order;
use crate::store::Store;

/// Tallies how many cancelled orders fall into each category, so the reaper
/// issues one cache increment and one bulk queue message per category
/// instead of one per order.
pub fn group_by_category(cancelled: &[Order]) -> HashMap<i64, i64> {
    let mut per_category: HashMap<i64, i64> = HashMap::new();
    for order in cancelled {
        *per_category.entry(order.category_id).or_insert(0) += 1;
    }
    per_category
}

/// Cancels up to `batch_size` expired pending orders, re-credits their
/// categories in the cache, and publishes one bulk inventory-correction
/// message plus one cancellation email per order. If the process dies
/// after the DB commit but before the queue publishes land, the next sweep
/// re-cancels nothing (orders are already `expired`) but may re-send
/// cancellation emails — an accepted trade-off, not a bug.
pub async fn run_bulk_cancel(
    store: &Store,
    cache: &Cache,
    queue: &Queue,
    batch_size: i64,
) -> Result<usize, AppError> {
    let cancelled = store.bulk_cancel_expired(batch_size).await?;
    if cancelled.is_empty() {
        return Ok(0);
    }

    let per_category = group_by_category(&cancelled);

    for (category_id, count) in &per_category {
        cache.increment_quantity_by(*category_id, *count).await?;
    }

    let items = per_category
        .into_iter()
        .map(|(category_id, quantity)| IncrementCategoryQuantity {
            category_id,
            quantity,
        })
        .collect();
    queue
        .publish(
            SUBJECT_CATEGORY_BULK_INCREMENT,
            &BulkIncrementCategoryQuantity { items },
        )
        .await
        .map_err(|e| AppError::TransientIo(e.to_string()))?;

    for order in &cancelled {
        let message = email::order_cancelled(&order.name, &order.email);
        queue
            .publish(SUBJECT_EMAIL_SEND, &message)
            .await
            .map_err(|e| AppError::TransientIo(e.to_string()))?;
    }

    Ok(cancelled.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OrderStatus;
    use chrono::Utc;

    fn order(category_id: i64) -> Order {
        Order {
            id: 1,
            category_id,
            external_id: "01HZY".into(),
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

    #[test]
    fn tallies_cancellations_per_category() {
        let cancelled = vec![order(1), order(1), order(1), order(2), order(2)];
        let grouped = group_by_category(&cancelled);
        assert_eq!(grouped.get(&1), Some(&3));
        assert_eq!(grouped.get(&2), Some(&2));
    }
}
