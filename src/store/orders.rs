use super::Store;
use crate::domain::Order;
use chrono::{DateTime, Utc};
use sqlx::{Postgres, Transaction};

pub struct NewOrder<'a> {
    pub category_id: i64,
    pub external_id: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub payment_code: &'a str,
    pub expired_at: DateTime<Utc>,
}

impl Store {
    pub async fn find_pending_order_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Order>, sqlx::Error> {
        sqlx::query_as::<_, Order>(
            "SELECT id, category_id, external_id, name, email, payment_code, status, \
             expired_at, ticket_row, ticket_col, created_at, updated_at \
             FROM orders WHERE email = $1 AND status = 'pending'",
        )
        .bind(email)
        .fetch_optional(self.pool())
        .await
    }

    pub async fn find_pending_order_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Option<Order>, sqlx::Error> {
        sqlx::query_as::<_, Order>(
            "SELECT id, category_id, external_id, name, email, payment_code, status, \
             expired_at, ticket_row, ticket_col, created_at, updated_at \
             FROM orders WHERE external_id = $1 AND status = 'pending'",
        )
        .bind(external_id)
        .fetch_optional(self.pool())
        .await
    }

    pub async fn insert_order(&self, new: NewOrder<'_>) -> Result<Order, sqlx::Error> {
        sqlx::query_as::<_, Order>(
            "INSERT INTO orders (category_id, external_id, name, email, payment_code, status, expired_at) \
             VALUES ($1, $2, $3, $4, $5, 'pending', $6) \
             RETURNING id, category_id, external_id, name, email, payment_code, status, \
             expired_at, ticket_row, ticket_col, created_at, updated_at",
        )
        .bind(new.category_id)
        .bind(new.external_id)
        .bind(new.name)
        .bind(new.email)
        .bind(new.payment_code)
        .bind(new.expired_at)
        .fetch_one(self.pool())
        .await
    }

    /// Marks a pending order completed. Returns `false` if no pending order
    /// matched `external_id` (already completed/cancelled — treat as a
    /// no-op, not an error, for at-least-once delivery idempotence).
    pub async fn complete_order(&self, external_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE orders SET status = 'completed', updated_at = now() \
             WHERE external_id = $1 AND status = 'pending'",
        )
        .bind(external_id)
        .execute(self.pool())
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Bulk-cancels up to `limit` pending orders whose `expired_at` has
    /// passed, returning the cancelled rows for downstream compensation
    /// (cache re-increment, per-order cancellation email).
    pub async fn bulk_cancel_expired(&self, limit: i64) -> Result<Vec<Order>, sqlx::Error> {
        sqlx::query_as::<_, Order>(
            "UPDATE orders SET status = 'expired', updated_at = now() \
             WHERE id IN ( \
                 SELECT id FROM orders \
                 WHERE status = 'pending' AND expired_at < now() \
                 ORDER BY expired_at \
                 LIMIT $1 \
                 FOR UPDATE SKIP LOCKED \
             ) \
             RETURNING id, category_id, external_id, name, email, payment_code, status, \
             expired_at, ticket_row, ticket_col, created_at, updated_at",
        )
        .bind(limit)
        .fetch_all(self.pool())
        .await
    }
}

/// Assigns the seat and flips the order to completed-with-seat in one
/// transaction (paired with `categories::decrement_seat_cursor`). Returns
/// `false` if the order was no longer pending (already assigned by a
/// redelivered message).
pub async fn assign_ticket_seat(
    tx: &mut Transaction<'_, Postgres>,
    order_id: i64,
    row: i32,
    col: i32,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE orders SET ticket_row = $1, ticket_col = $2, updated_at = now() \
         WHERE id = $3 AND status = 'completed' AND ticket_row IS NULL",
    )
    .bind(row)
    .bind(col)
    .bind(order_id)
    .execute(&mut **tx)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn find_order_by_id(
    pool: &sqlx::PgPool,
    order_id: i64,
) -> Result<Option<Order>, sqlx::Error> {
    sqlx::query_as::<_, Order>(
        "SELECT id, category_id, external_id, name, email, payment_code, status, \
         expired_at, ticket_row, ticket_col, created_at, updated_at \
         FROM orders WHERE id = $1",
    )
    .bind(order_id)
    .fetch_optional(pool)
    .await
}
