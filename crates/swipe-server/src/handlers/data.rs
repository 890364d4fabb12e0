//! `GET /data?start=<rfc3339>&end=<rfc3339>&pw=<password>` — swipes in a
//! time range, with card numbers replaced by per-response pseudonyms.
//!
//! Checks run in this order: query binding, field presence, password,
//! `start` parse, `end` parse. A wrong password therefore yields 401 even
//! when the times are malformed.

use axum::{
  Json,
  extract::{Query, State, rejection::QueryRejection},
};
use chrono::{DateTime, Utc};
use garde::Validate;
use serde::Deserialize;
use swipe_core::{
  pseudonym::Pseudonymizer,
  range::TimeRange,
  store::SwipeStore,
  swipe::AnonymizedSwipe,
};

use crate::{
  AppState,
  error::{Error, TimeBound},
  handlers::bound,
  validation::{required, validate},
};

#[derive(Debug, Deserialize, Validate)]
pub struct DataParams {
  #[serde(default)]
  #[garde(custom(required))]
  pub start: String,
  #[serde(default)]
  #[garde(custom(required))]
  pub end:   String,
  #[serde(default)]
  #[garde(custom(required))]
  pub pw:    String,
}

/// Parse an RFC 3339 timestamp (any offset) into UTC.
pub fn parse_bound(raw: &str, which: TimeBound) -> Result<DateTime<Utc>, Error> {
  DateTime::parse_from_rfc3339(raw)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|_| Error::BadTime(which))
}

pub async fn handler<S>(
  State(state): State<AppState<S>>,
  params: Result<Query<DataParams>, QueryRejection>,
) -> Result<Json<Vec<AnonymizedSwipe>>, Error>
where
  S: SwipeStore + Clone + Send + Sync + 'static,
{
  let params = bound(params)?;
  validate(&params)?;
  state.secret.verify(&params.pw)?;

  let start = parse_bound(&params.start, TimeBound::Start)?;
  let end   = parse_bound(&params.end, TimeBound::End)?;

  let records = state
    .store
    .swipes_between(TimeRange::new(start, end))
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;

  let mut pseudonymizer = Pseudonymizer::new();
  let swipes = pseudonymizer.anonymize_all(records);
  tracing::debug!(
    swipes = swipes.len(),
    cards = pseudonymizer.distinct_cards(),
    "served swipe range"
  );

  Ok(Json(swipes))
}
