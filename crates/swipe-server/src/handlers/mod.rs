pub mod data;
pub mod info;
pub mod send;

use axum::extract::{Query, rejection::QueryRejection};

use crate::error::Error;

/// Unwrap a `Query` extraction, turning a binding failure into a 400.
pub(super) fn bound<T>(params: Result<Query<T>, QueryRejection>) -> Result<T, Error> {
  let Query(params) = params?;
  Ok(params)
}
