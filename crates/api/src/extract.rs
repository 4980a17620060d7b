//! Request extractors whose rejections use the movie envelope.

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON request body. Malformed bodies become [`AppError::BadRequest`]
/// instead of axum's plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
