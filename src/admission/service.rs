//! Admission business logic (C4), separated from the HTTP layer the same
//! way the teacher splits `OrderService` out of its handlers.

use ulid::Ulid;

use crate::cache::Cache;
use crate::domain::order::generate_dummy_payment_code;
use crate::error::AppError;
use crate::queue::{
    Queue,
    messages::{IncrementCategoryQuantity, OrderCreated, SUBJECT_CATEGORY_INCREMENT, SUBJECT_ORDER_CREATE},
};
use crate::settings::OrderSettings;
use crate::store::{Store, orders::NewOrder};

use super::types::{CreateOrderRequest, CreateOrderResponse};

/// Admits one order. Sequencing mirrors the original exactly:
/// 1. claim the per-email lock (rejects a second in-flight request for the
///    same email before the first one's pending row even exists),
/// 2. reject if this email already has a pending order,
/// 3. optimistically decrement the category's cache counter; if that goes
///    negative the category is sold out, so compensate immediately and
///    reject,
/// 4. publish the inventory delta for the aggregator to reconcile into the
///    durable store asynchronously — with a deferred compensating publish
///    if anything below fails,
/// 5. insert the pending order,
/// 6. publish the order-created event (a separate consumer turns this into
///    the confirmation email).
pub async fn create_order(
    store: &Store,
    cache: &Cache,
    queue: &Queue,
    settings: &OrderSettings,
    email_lock_ttl_secs: u64,
    req: CreateOrderRequest,
) -> Result<CreateOrderResponse, AppError> {
    let locked = cache.try_lock_email(&req.email, email_lock_ttl_secs).await?;
    if !locked {
        return Err(AppError::conflict("an order for this email is already in flight"));
    }

    let existing = store.find_pending_order_by_email(&req.email).await?;
    if existing.is_some() {
        cache.release_email_lock(&req.email).await?;
        return Err(AppError::conflict("a pending order already exists for this email"));
    }

    let category = match store.find_category(req.category_id).await? {
        Some(category) => category,
        None => {
            cache.release_email_lock(&req.email).await?;
            return Err(AppError::validation_fields(
                "request failed validation",
                serde_json::json!({"category_id": "not found"}),
            ));
        }
    };

    let remaining = cache.decrement_quantity(category.id).await?;
    if remaining < 0 {
        cache.increment_quantity(category.id).await?;
        cache.release_email_lock(&req.email).await?;
        return Err(AppError::conflict("category is sold out"));
    }

    // Publish the async reconciliation delta; on any failure past this
    // point, compensate by publishing the matching +1 back.
    let publish_decrement = queue
        .publish(
            SUBJECT_CATEGORY_INCREMENT,
            &IncrementCategoryQuantity {
                category_id: category.id,
                quantity: -1,
            },
        )
        .await;
    if let Err(err) = publish_decrement {
        cache.increment_quantity(category.id).await?;
        cache.release_email_lock(&req.email).await?;
        return Err(AppError::TransientIo(err.to_string()));
    }

    let external_id = Ulid::new().to_string();
    let payment_code = generate_dummy_payment_code(&external_id, category.price);
    let expired_at = chrono::Utc::now() + settings.expired_after();

    let insert_result = store
        .insert_order(NewOrder {
            category_id: category.id,
            external_id: &external_id,
            name: &req.name,
            email: &req.email,
            payment_code: &payment_code,
            expired_at,
        })
        .await;

    let order = match insert_result {
        Ok(order) => order,
        Err(err) => {
            let _ = queue
                .publish(
                    SUBJECT_CATEGORY_INCREMENT,
                    &IncrementCategoryQuantity {
                        category_id: category.id,
                        quantity: 1,
                    },
                )
                .await;
            cache.increment_quantity(category.id).await?;
            cache.release_email_lock(&req.email).await?;
            return Err(AppError::from(err));
        }
    };

    queue
        .publish(
            SUBJECT_ORDER_CREATE,
            &OrderCreated {
                order_id: order.id,
                external_id: order.external_id.clone(),
                category_id: order.category_id,
                name: order.name.clone(),
                email: order.email.clone(),
                payment_code: order.payment_code.clone(),
                price: category.price,
                expired_at: order.expired_at,
            },
        )
        .await
        .map_err(|e| AppError::TransientIo(e.to_string()))?;

    Ok(CreateOrderResponse {
        id: order.id,
        external_id: order.external_id,
        payment_code: order.payment_code,
    })
}
