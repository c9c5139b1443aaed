use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use taxpay_core::error::CoreError;

/// Error type returned by every payment handler and extractor.
///
/// Rendered as `{ "error": <message>, "code": <CODE> }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing record or invalid input detected by `taxpay_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Storage failure. Always a 500; the detail is logged, not returned.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Request the handler could not interpret (bad body, bad date segment).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A path segment that cannot name any resource, such as a non-integer id.
    #[error("No such resource: {0}")]
    UnknownResource(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Core(CoreError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} with id {id} not found"),
            ),
            AppError::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg)
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            AppError::UnknownResource(detail) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("Resource not found: {detail}"),
            ),
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, axum::Json(json!({ "error": message, "code": code }))).into_response()
    }
}
