use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOrderRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub category_id: i64,
}

#[derive(Debug, Serialize)]
pub struct CreateOrderResponse {
    pub id: i64,
    pub external_id: String,
    pub payment_code: String,
}

#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
    pub price: rust_decimal::Decimal,
    pub quantity: i64,
}

impl From<&crate::domain::Category> for CategoryResponse {
    fn from(c: &crate::domain::Category) -> Self {
        Self {
            id: c.id,
            name: c.name.clone(),
            price: c.price,
            quantity: c.quantity,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PaymentCallbackRequest {
    pub external_id: String,
}

#[derive(Debug, Serialize)]
pub struct CancelResult {
    pub cancelled: usize,
}
