use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use movies_core::error::StoreError;
use movies_core::validation::{describe, FieldViolation};

use crate::response::MovieResponse;

/// Application-level error type for HTTP handlers.
///
/// Every variant renders as the standard movie envelope with
/// `message: "error"` and the error text in `data.data`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Any failure reported by the movie store, including timeouts.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The request body could not be parsed.
    #[error("{0}")]
    BadRequest(String),

    /// The request body parsed but failed field validation.
    #[error("{}", describe(.0))]
    Validation(Vec<FieldViolation>),

    /// The addressed movie does not exist.
    #[error("{0}")]
    NotFound(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let text = self.to_string();
        let (status, errors) = match self {
            AppError::Store(err) => {
                tracing::error!(error = %err, "Movie store operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Vec::new())
            }
            AppError::BadRequest(_) => {
                tracing::debug!(error = %text, "Rejected malformed request body");
                (StatusCode::BAD_REQUEST, Vec::new())
            }
            AppError::Validation(violations) => {
                tracing::debug!(error = %text, "Rejected invalid movie");
                (StatusCode::BAD_REQUEST, violations)
            }
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, Vec::new()),
        };

        MovieResponse::error(status, text, errors).into_response()
    }
}
