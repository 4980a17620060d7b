//! Shared response envelope for the movie endpoints.
//!
//! Every movie response, success or failure, has the shape
//! `{ "status": <http status>, "message": "success"|"error", "data": { "data": ... } }`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use movies_core::validation::FieldViolation;
use serde::Serialize;

pub const SUCCESS: &str = "success";
pub const ERROR: &str = "error";

/// Inner `{ "data": T }` object of the envelope.
///
/// `errors` is only present on validation failures.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldViolation>,
}

/// The `{ status, message, data }` envelope.
#[derive(Debug, Serialize)]
pub struct MovieResponse<T: Serialize> {
    pub status: u16,
    pub message: &'static str,
    pub data: DataResponse<T>,
}

impl<T: Serialize> MovieResponse<T> {
    pub fn success(status: StatusCode, data: T) -> Self {
        Self {
            status: status.as_u16(),
            message: SUCCESS,
            data: DataResponse {
                data,
                errors: Vec::new(),
            },
        }
    }
}

impl MovieResponse<String> {
    pub fn error(status: StatusCode, text: String, errors: Vec<FieldViolation>) -> Self {
        Self {
            status: status.as_u16(),
            message: ERROR,
            data: DataResponse { data: text, errors },
        }
    }
}

impl<T: Serialize> IntoResponse for MovieResponse<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn success_envelope_shape() {
        let body = serde_json::to_value(MovieResponse::success(StatusCode::OK, vec![1, 2])).unwrap();
        assert_eq!(
            body,
            json!({"status": 200, "message": "success", "data": {"data": [1, 2]}})
        );
    }

    #[test]
    fn error_envelope_omits_empty_violation_list() {
        let body = serde_json::to_value(MovieResponse::error(
            StatusCode::NOT_FOUND,
            "gone".into(),
            Vec::new(),
        ))
        .unwrap();
        assert_eq!(
            body,
            json!({"status": 404, "message": "error", "data": {"data": "gone"}})
        );
    }
}
