use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use super::handlers::{health, run_topsis};
use super::AppState;

/// Build the router with body limit, timeout and request tracing applied.
pub fn router(state: Arc<AppState>, max_upload_bytes: usize, timeout: Duration) -> Router {
    Router::new()
        .route("/topsis", post(run_topsis))
        .route("/health", get(health))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
