use axum::{Json, extract::State};
use std::sync::Arc;

use crate::admission::state::AppState;
use crate::admission::types::CategoryResponse;

/// `GET /api/categories` — reads the lock-free snapshot (C8), never the
/// cache or store directly.
pub async fn list_categories(State(state): State<Arc<AppState>>) -> Json<Vec<CategoryResponse>> {
    let categories = state.snapshot.get();
    Json(categories.iter().map(CategoryResponse::from).collect())
}
