//! Seat allocator (C6) boundary and invariant coverage that does not need a
//! live Postgres instance — `Category::next_seat` mirrors exactly what
//! `store::categories::decrement_seat_cursor` does inside a transaction.

use concert_tickets::domain::Category;
use rust_decimal::Decimal;
use std::collections::HashSet;

fn category(current_row: i32, current_col: i32, max_col: i32) -> Category {
    Category {
        id: 1,
        name: "VIP".into(),
        price: Decimal::new(100_000, 0),
        max_row: current_row,
        max_col,
        quantity: (current_row * max_col) as i64,
        current_row,
        current_col,
    }
}

/// The allocator decrements the cursor first and treats the decremented
/// position as the seat (grounded in the original `decrementedTicket.Row
/// == 0` check), so a cursor already at `(1, 1)` has nowhere left to
/// decrement to and is exhausted rather than handing out `(1, 1)` itself.
#[test]
fn cursor_at_one_one_is_already_exhausted() {
    assert!(category(1, 1, 8).next_seat().is_none());
}

/// The last seat a category can actually hand out under this decrement-
/// first rule comes from a cursor one step before `(1, 1)`.
#[test]
fn last_handed_out_seat_is_one_one() {
    let (seat, next) = category(1, 2, 8).next_seat().expect("one seat remaining");
    assert_eq!((seat.row, seat.col), (1, 1));
    assert!(next.next_seat().is_none(), "(1, 1) must be terminal, not retried");
}

/// Invariant 1: draining a category seat-by-seat never yields the same
/// `(row, col)` twice.
#[test]
fn draining_a_category_never_repeats_a_seat() {
    let mut cat = category(3, 4, 4);
    let mut seen = HashSet::new();
    let mut handed_out = 0;
    while let Some((seat, next)) = cat.next_seat() {
        assert!(seen.insert((seat.row, seat.col)), "seat {:?} assigned twice", seat);
        cat = next;
        handed_out += 1;
    }
    assert_eq!(handed_out, 3 * 4 - 1, "one seat is lost to the (0, max_col) terminal state");
}
