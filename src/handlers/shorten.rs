use crate::{
    error::AppError,
    models::{ShortenRequest, ShortenResponse},
    AppState,
};
use axum::{extract::State, Json};
use std::sync::Arc;

/// POST /shorten
///
/// Derive (or re-use) the short code for the submitted URL. The same URL
/// always maps to the same code, so repeated submissions are harmless.
/// An empty `original_url` is rejected with 400 before the store is touched.
pub async fn shorten(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    let short = state
        .service
        .shorten(&req.original_url)
        .ok_or(AppError::EmptyUrl)?;

    tracing::debug!("shortened '{}' -> '{}'", req.original_url, short);

    Ok(Json(ShortenResponse { short_url: short }))
}
