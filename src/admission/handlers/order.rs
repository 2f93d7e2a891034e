use axum::{Json, extract::State};
use std::sync::Arc;
use validator::Validate;

use crate::admission::service;
use crate::admission::state::AppState;
use crate::admission::types::{CancelResult, CreateOrderRequest, CreateOrderResponse};
use crate::error::AppError;
use crate::reaper;

/// `POST /api/orders`
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<Json<CreateOrderResponse>, AppError> {
    req.validate().map_err(|e| {
        let fields = serde_json::to_value(e.field_errors().into_iter().collect::<std::collections::HashMap<_, _>>())
            .unwrap_or(serde_json::Value::Null);
        AppError::validation_fields("request failed validation", fields)
    })?;

    tracing::info!(email = %req.email, category_id = req.category_id, "admission request received");

    let response = service::create_order(
        &state.store,
        &state.cache,
        &state.queue,
        &state.settings.order,
        state.settings.cache.email_lock_ttl_secs,
        req,
    )
    .await?;

    tracing::info!(order_id = response.id, "order admitted");
    Ok(Json(response))
}

/// `POST /api/orders/cancel` — the reaper sweep, triggered externally.
pub async fn cancel_expired(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CancelResult>, AppError> {
    let cancelled = reaper::run_bulk_cancel(
        &state.store,
        &state.cache,
        &state.queue,
        state.settings.order.bulk_cancel_size,
    )
    .await?;
    tracing::info!(cancelled, "expiry sweep complete");
    Ok(Json(CancelResult { cancelled }))
}
