//! Ticket category: fixed seating block with a row/col admission cursor.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub max_row: i32,
    pub max_col: i32,
    /// Admission-cache-authoritative remaining count; may transiently go
    /// negative under races before the compensating increment lands.
    pub quantity: i64,
    /// Seat allocation cursor, consumed row-major from the back.
    pub current_row: i32,
    pub current_col: i32,
}

/// Result of decrementing the seat cursor by one seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seat {
    pub row: i32,
    pub col: i32,
}

impl Category {
    /// Computes the next seat to hand out and the cursor's new resting
    /// position, without mutating `self`. Column is consumed first; once a
    /// row is exhausted the cursor drops to the previous row at `max_col`.
    /// The decremented cursor position itself is the seat assigned; once
    /// that lands on `row == 0` or `col < 1` the category has no seats left
    /// and this returns `None`. Mirrors `store::categories::decrement_seat_cursor`.
    pub fn next_seat(&self) -> Option<(Seat, Category)> {
        let mut next = self.clone();
        if self.current_col > 1 {
            next.current_col -= 1;
        } else {
            next.current_row -= 1;
            next.current_col = self.max_col;
        }
        if next.current_row == 0 || next.current_col < 1 {
            return None;
        }
        let seat = Seat {
            row: next.current_row,
            col: next.current_col,
        };
        Some((seat, next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(current_row: i32, current_col: i32, max_col: i32) -> Category {
        Category {
            id: 1,
            name: "VIP".into(),
            price: Decimal::new(100_000, 0),
            max_row: 10,
            max_col,
            quantity: 5,
            current_row,
            current_col,
        }
    }

    #[test]
    fn decrements_column_first() {
        let (seat, next) = cat(3, 5, 8).next_seat().unwrap();
        assert_eq!(seat, Seat { row: 3, col: 4 });
        assert_eq!((next.current_row, next.current_col), (3, 4));
    }

    #[test]
    fn wraps_to_previous_row_at_max_col() {
        let (seat, next) = cat(3, 1, 8).next_seat().unwrap();
        assert_eq!(seat, Seat { row: 2, col: 8 });
        assert_eq!((next.current_row, next.current_col), (2, 8));
    }

    #[test]
    fn exhausted_cursor_yields_no_seat() {
        assert!(cat(1, 1, 8).next_seat().is_none());
    }
}
