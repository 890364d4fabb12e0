//! Error types and axum `IntoResponse` implementation.

use axum::{
  Json,
  extract::rejection::QueryRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::validation::ValidationFailure;

/// Which end of a `/data` time range failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeBound {
  Start,
  End,
}

impl std::fmt::Display for TimeBound {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(match self {
      TimeBound::Start => "start",
      TimeBound::End => "end",
    })
  }
}

#[derive(Debug, Error)]
pub enum Error {
  /// Wrong password. Deliberately carries no detail.
  #[error("unauthorized")]
  Unauthorized,
  #[error("invalid query parameters: {0}")]
  BadParameters(String),
  #[error("{} field(s) failed validation", .0.len())]
  Validation(Vec<ValidationFailure>),
  #[error("Bad {0} time")]
  BadTime(TimeBound),
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<QueryRejection> for Error {
  fn from(rejection: QueryRejection) -> Self {
    Error::BadParameters(rejection.body_text())
  }
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    match self {
      Error::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
      Error::BadParameters(message) => {
        (StatusCode::BAD_REQUEST, Json(json!({ "message": message })))
          .into_response()
      }
      Error::Validation(failures) => {
        (StatusCode::BAD_REQUEST, Json(failures)).into_response()
      }
      e @ Error::BadTime(_) => {
        (StatusCode::BAD_REQUEST, e.to_string()).into_response()
      }
      Error::Store(e) => {
        tracing::error!(error = %e, "store operation failed");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
      }
    }
  }
}
