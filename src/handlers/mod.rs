pub mod redirect;
pub mod shorten;
pub mod stats;

use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Assemble the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check — returns 200 OK with no body
        .route("/health", get(|| async { axum::http::StatusCode::OK }))
        // Core API
        .route("/shorten", post(shorten::shorten))
        .route("/r/:short", get(redirect::redirect))
        .route("/metrics", get(stats::metrics))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
