//! Error types and HTTP error response handling.
//!
//! Every error leaves the service as a JSON object with a `message` field.
//! Validation failures additionally carry an `errors` map keyed by field name.

use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// Each variant maps to one HTTP status code:
///
/// - `InvalidRequest` → 400 Bad Request
/// - `Rejected` → the status chosen by the rejecting extractor (400, 415, ...)
/// - `Validation` → 400 Bad Request
/// - `NotFound` → 404 Not Found
/// - `Database` → 500 Internal Server Error (details are logged, not returned)
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (connection error, query error, ...).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// No row with the requested id. Holds the entity name, e.g. `"Exhibition"`.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// The request body could not be read as a JSON object.
    #[error("{0}")]
    InvalidRequest(String),

    /// An axum extractor (JSON body, path id) refused the request.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    /// The body was JSON but one or more fields failed the payload schema.
    #[error("Input payload validation failed")]
    Validation(BTreeMap<String, String>),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::NotFound(_) => {
                tracing::warn!("{}", self);
                (StatusCode::NOT_FOUND, json!({ "message": self.to_string() }))
            }
            AppError::InvalidRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, json!({ "message": msg }))
            }
            AppError::Rejected { status, ref message } => (status, json!({ "message": message })),
            AppError::Validation(ref errors) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "message": self.to_string(),
                    "errors": errors,
                }),
            ),
            AppError::Database(ref err) => {
                tracing::error!(error = %err, "database operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": "Internal Server Error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response = AppError::NotFound("Exhibition").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn not_found_message_names_the_entity() {
        assert_eq!(AppError::NotFound("Component").to_string(), "Component not found");
    }

    #[test]
    fn validation_and_bad_json_map_to_400() {
        let mut errors = BTreeMap::new();
        errors.insert("name".to_string(), "'name' is a required property".to_string());

        assert_eq!(
            AppError::Validation(errors).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::InvalidRequest("bad json".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn rejected_keeps_the_extractor_status() {
        let response = AppError::Rejected {
            status: StatusCode::UNSUPPORTED_MEDIA_TYPE,
            message: "Expected request with `Content-Type: application/json`".into(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[test]
    fn database_errors_are_hidden_behind_500() {
        let response = AppError::Database(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
