use super::Store;
use crate::domain::Category;
use crate::error::AppError;
use sqlx::{Postgres, Transaction};

impl Store {
    pub async fn list_categories(&self) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>(
            "SELECT id, name, price, max_row, max_col, quantity, current_row, current_col \
             FROM categories ORDER BY id",
        )
        .fetch_all(self.pool())
        .await
    }

    pub async fn find_category(&self, id: i64) -> Result<Option<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>(
            "SELECT id, name, price, max_row, max_col, quantity, current_row, current_col \
             FROM categories WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await
    }

    /// Applies a batch of per-category quantity deltas in one statement
    /// (used by the inventory aggregator's flush).
    pub async fn bulk_increment_quantity(
        &self,
        deltas: &[(i64, i64)],
    ) -> Result<(), sqlx::Error> {
        if deltas.is_empty() {
            return Ok(());
        }
        let mut tx = self.pool().begin().await?;
        for (category_id, delta) in deltas {
            sqlx::query("UPDATE categories SET quantity = quantity + $1 WHERE id = $2")
                .bind(delta)
                .bind(category_id)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await
    }
}

/// Row-locks the category and hands out the next seat by decrementing the
/// (row, col) cursor, column-first: `col > 1` moves to `(row, col-1)`,
/// otherwise the cursor drops to `(row-1, max_col)`. Must run inside the
/// same transaction that updates the owning order, so the seat grant and
/// the order update commit atomically. The decremented cursor position
/// itself is the seat assigned to the order; if it lands on `row == 0` or
/// `col < 1` the category is out of seats and this is a terminal,
/// non-retryable failure.
pub async fn decrement_seat_cursor(
    tx: &mut Transaction<'_, Postgres>,
    category_id: i64,
) -> Result<(i32, i32), AppError> {
    let (current_row, current_col, max_col): (i32, i32, i32) = sqlx::query_as(
        "SELECT current_row, current_col, max_col FROM categories WHERE id = $1 FOR UPDATE",
    )
    .bind(category_id)
    .fetch_one(&mut **tx)
    .await?;

    let (next_row, next_col) = if current_col > 1 {
        (current_row, current_col - 1)
    } else {
        (current_row - 1, max_col)
    };

    sqlx::query("UPDATE categories SET current_row = $1, current_col = $2 WHERE id = $3")
        .bind(next_row)
        .bind(next_col)
        .bind(category_id)
        .execute(&mut **tx)
        .await?;

    if next_row == 0 || next_col < 1 {
        return Err(AppError::LogicViolation(format!(
            "category {category_id} has no seats left to assign"
        )));
    }

    Ok((next_row, next_col))
}
