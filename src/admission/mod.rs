pub mod handlers;
pub mod service;
pub mod state;
pub mod types;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;

use state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/api/orders", post(handlers::order::create_order))
        .route("/api/orders/cancel", post(handlers::order::cancel_expired))
        .route("/api/payments/callback", post(handlers::payment::payment_callback))
        .route("/api/categories", get(handlers::category::list_categories))
        .with_state(state)
}

/// Starts the admission HTTP server (C4). One process, per §5's
/// "independent process or independent pool" requirement.
pub async fn run_server(host: &str, port: u16, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = router(state);
    let addr = format!("{host}:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "admission service listening");
    axum::serve(listener, app).await?;
    Ok(())
}
