use axum::{extract::State, http::StatusCode};
use std::sync::Arc;

use crate::admission::state::AppState;

pub async fn health_check(State(state): State<Arc<AppState>>) -> StatusCode {
    match state.store.health_check().await {
        Ok(()) => StatusCode::OK,
        Err(err) => {
            tracing::error!(error = %err, "health check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
