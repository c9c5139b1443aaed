//! Request extractors that report rejections through [`AppError`].
//!
//! Axum's stock extractors answer malformed input with 415/422 and a plain
//! text body. These wrappers report rejections with the standard JSON error
//! envelope: 400 for bodies, 404 for path segments.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor whose rejection is `AppError::BadRequest`.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(json_rejection(rejection)),
        }
    }
}

/// Path parameter extractor.
///
/// A segment that does not deserialize (`/payments/abc`, an id that
/// overflows `i64`) names no resource, so it is rejected as
/// `AppError::UnknownResource` (404).
pub struct PathParam<T>(pub T);

impl<S, T> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match axum::extract::Path::<T>::from_request_parts(parts, state).await {
            Ok(axum::extract::Path(value)) => Ok(PathParam(value)),
            Err(rejection) => Err(path_rejection(rejection)),
        }
    }
}

fn json_rejection(rejection: JsonRejection) -> AppError {
    tracing::debug!(error = %rejection.body_text(), "Rejected JSON body");
    AppError::BadRequest(format!("Invalid input: {}", rejection.body_text()))
}

fn path_rejection(rejection: PathRejection) -> AppError {
    tracing::debug!(error = %rejection.body_text(), "Rejected path parameter");
    AppError::UnknownResource(rejection.body_text())
}
