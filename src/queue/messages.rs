//! Wire payloads for the six subjects under the `events.` stream.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const SUBJECT_ORDER_CREATE: &str = "events.order.create";
pub const SUBJECT_ORDER_COMPLETE: &str = "events.order.complete";
pub const SUBJECT_ORDER_ASSIGN_TICKET: &str = "events.order.assign_ticket_row_col";
pub const SUBJECT_CATEGORY_INCREMENT: &str = "events.category.increment_quantity";
pub const SUBJECT_CATEGORY_BULK_INCREMENT: &str = "events.category.bulk_increment_quantity";
pub const SUBJECT_EMAIL_SEND: &str = "events.email.send";

pub const ORDER_WILDCARD: &str = "events.order.>";
pub const CATEGORY_WILDCARD: &str = "events.category.>";
pub const EMAIL_WILDCARD: &str = "events.email.>";
pub const ALL_WILDCARD: &str = "events.>";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreated {
    pub order_id: i64,
    pub external_id: String,
    pub category_id: i64,
    pub name: String,
    pub email: String,
    pub payment_code: String,
    pub price: Decimal,
    pub expired_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCompleted {
    pub external_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignTicketRowCol {
    pub order_id: i64,
    pub category_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncrementCategoryQuantity {
    pub category_id: i64,
    pub quantity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkIncrementCategoryQuantity {
    pub items: Vec<IncrementCategoryQuantity>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}
