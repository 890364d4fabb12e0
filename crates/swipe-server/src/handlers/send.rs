//! `GET /send?card=<card>&pw=<password>` — record one swipe.
//!
//! | Outcome | Status |
//! |---------|--------|
//! | recorded | 200, empty body |
//! | unparsable query string | 400, `{"message": ...}` |
//! | missing, blank or overlong field | 400, validation failure list |
//! | wrong password | 401, empty body |
//! | insert failed | 500, empty body |

use axum::{
  extract::{Query, State, rejection::QueryRejection},
  http::StatusCode,
};
use garde::Validate;
use serde::Deserialize;
use swipe_core::store::SwipeStore;

use crate::{
  AppState,
  error::Error,
  handlers::bound,
  validation::{card_number, required, validate},
};

#[derive(Debug, Deserialize, Validate)]
pub struct SendParams {
  #[serde(default)]
  #[garde(custom(card_number))]
  pub card: String,
  #[serde(default)]
  #[garde(custom(required))]
  pub pw:   String,
}

pub async fn handler<S>(
  State(state): State<AppState<S>>,
  params: Result<Query<SendParams>, QueryRejection>,
) -> Result<StatusCode, Error>
where
  S: SwipeStore + Clone + Send + Sync + 'static,
{
  let params = bound(params)?;
  validate(&params)?;
  state.secret.verify(&params.pw)?;

  state
    .store
    .record_swipe(params.card)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;

  Ok(StatusCode::OK)
}
