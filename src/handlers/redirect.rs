use crate::{error::AppError, AppState};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

/// GET /r/:short
///
/// Look up the short code and answer with a permanent redirect to the
/// original URL, or 404 when the code was never issued. Surrounding
/// whitespace in the path segment is trimmed before the lookup.
pub async fn redirect(
    State(state): State<Arc<AppState>>,
    Path(short): Path<String>,
) -> Result<Response, AppError> {
    let short = short.trim();

    let original = state.service.resolve(short).ok_or(AppError::NotFound)?;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, original)]).into_response())
}
