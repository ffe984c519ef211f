//! Server error type and [`axum::response::IntoResponse`] implementation.
//!
//! The taxonomy: NotFound → 404, validation → 400 with field details,
//! store connectivity → 503, auth → 401, anything else store-shaped →
//! 500. Internal error detail is logged, never sent to the client.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use homescout_core::lead::FieldError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("not found")]
  NotFound,

  #[error("unauthorized")]
  Unauthorized,

  #[error("validation failed")]
  Validation(Vec<FieldError>),

  /// The store could not be reached (or timed out) on a path where the
  /// client should retry.
  #[error("store unavailable")]
  StoreUnavailable,

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub fn store<E: std::error::Error + Send + Sync + 'static>(e: E) -> Self {
    Error::Store(Box::new(e))
  }
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    match self {
      Error::NotFound => (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "not found" })),
      )
        .into_response(),
      Error::Unauthorized => (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": "unauthorized" })),
      )
        .into_response(),
      Error::Validation(details) => (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": "Validation failed", "details": details })),
      )
        .into_response(),
      Error::StoreUnavailable => (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(json!({
          "error": "Unable to reach the database. Please try again."
        })),
      )
        .into_response(),
      Error::Store(e) => {
        tracing::error!(error = %e, "store failure");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          Json(json!({ "error": "internal server error" })),
        )
          .into_response()
      }
    }
  }
}
