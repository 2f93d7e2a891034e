//! Order: one admitted ticket request, tracked through the lifecycle from
//! pending admission to completed, assigned, cancelled or expired.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "order_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
    Expired,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Order {
    pub id: i64,
    pub category_id: i64,
    pub external_id: String,
    pub name: String,
    pub email: String,
    pub payment_code: String,
    pub status: OrderStatus,
    pub expired_at: DateTime<Utc>,
    pub ticket_row: Option<i32>,
    pub ticket_col: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Deterministic stand-in payment code; the real gateway is out of scope.
pub fn generate_dummy_payment_code(external_id: &str, price: Decimal) -> String {
    let trimmed = external_id.chars().rev().take(6).collect::<String>();
    format!("PAY-{}-{}", trimmed, price.round())
}

/// Formats an IDR amount with thousands separators, e.g. `Rp150.000`.
pub fn format_idr(price: Decimal) -> String {
    let whole = price.round().to_string();
    let digits: Vec<char> = whole.chars().collect();
    let mut grouped = String::new();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            grouped.push('.');
        }
        grouped.push(*c);
    }
    format!("Rp{grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_idr_thousands_separators() {
        assert_eq!(format_idr(Decimal::new(150_000, 0)), "Rp150.000");
        assert_eq!(format_idr(Decimal::new(1_250_000, 0)), "Rp1.250.000");
        assert_eq!(format_idr(Decimal::new(500, 0)), "Rp500");
    }

    #[test]
    fn payment_code_is_deterministic() {
        let a = generate_dummy_payment_code("01HZY", Decimal::new(100_000, 0));
        let b = generate_dummy_payment_code("01HZY", Decimal::new(100_000, 0));
        assert_eq!(a, b);
    }
}
