//! Swipe records and their anonymized, response-only counterpart.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

/// Width of the `card_number` column (`VARCHAR(45)`).
pub const CARD_NUMBER_MAX_LEN: usize = 45;

/// Check a caller-supplied card number against the column constraints.
///
/// The format of the number itself is not inspected; only blankness and
/// length (in characters) matter.
pub fn validate_card_number(card_number: &str) -> Result<()> {
  if card_number.trim().is_empty() {
    return Err(Error::BlankCardNumber);
  }
  let len = card_number.chars().count();
  if len > CARD_NUMBER_MAX_LEN {
    return Err(Error::CardNumberTooLong { len, max: CARD_NUMBER_MAX_LEN });
  }
  Ok(())
}

/// One recorded card presentation. The timestamp is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwipeRecord {
  pub card_number: String,
  pub timestamp:   DateTime<Utc>,
}

/// A swipe with its card number replaced by a per-response pseudonym.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnonymizedSwipe {
  #[serde(rename = "uuid")]
  pub pseudonym: Uuid,
  pub timestamp: DateTime<Utc>,
}
