use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

use crate::admission::state::AppState;
use crate::admission::types::PaymentCallbackRequest;
use crate::error::AppError;
use crate::queue::messages::{OrderCompleted, SUBJECT_ORDER_COMPLETE};

/// `POST /api/payments/callback` — publishes the completion event; the
/// actual status flip happens in the `events.order.complete` consumer so
/// this endpoint stays fast and idempotent under payment-gateway retries.
pub async fn payment_callback(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PaymentCallbackRequest>,
) -> Result<StatusCode, AppError> {
    state
        .queue
        .publish(
            SUBJECT_ORDER_COMPLETE,
            &OrderCompleted {
                external_id: req.external_id,
            },
        )
        .await
        .map_err(|e| AppError::TransientIo(e.to_string()))?;
    Ok(StatusCode::ACCEPTED)
}
