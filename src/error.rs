use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// HTTP-level translation of the core's sentinel results.
///
/// The service layer itself never produces transport errors — it signals
/// "rejected" and "not found" through its return values, and the handlers
/// map those onto status codes here.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("original_url must not be empty")]
    EmptyUrl,

    #[error("short URL not found")]
    NotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::EmptyUrl => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
        };
        (status, self.to_string()).into_response()
    }
}
