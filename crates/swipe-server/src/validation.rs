//! Field-level validation of query parameters.
//!
//! Rules are declared with `garde` on the parameter structs. Each rule
//! reports its failure as `tag` or `tag=param`, which becomes one
//! [`ValidationFailure`] in the 400 response body:
//!
//! ```json
//! [{"FailedField": "card", "Tag": "max", "Value": "45"}]
//! ```

use garde::{Report, Validate};
use serde::Serialize;
use swipe_core::swipe::{CARD_NUMBER_MAX_LEN, validate_card_number};

use crate::error::Error;

/// One failed rule on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ValidationFailure {
  /// Query parameter name.
  pub failed_field: String,
  /// Rule that failed: `required`, `notblank` or `max`.
  pub tag:          String,
  /// The rule's parameter, empty when it has none.
  pub value:        String,
}

/// Validate `params`, collecting every failure.
pub fn validate<T>(params: &T) -> Result<(), Error>
where
  T: Validate,
  T::Context: Default,
{
  params
    .validate()
    .map_err(|report| Error::Validation(failures(&report)))
}

fn failures(report: &Report) -> Vec<ValidationFailure> {
  report
    .iter()
    .map(|(path, error)| {
      let (tag, value) = error
        .message()
        .split_once('=')
        .unwrap_or((error.message(), ""));
      ValidationFailure {
        failed_field: path.to_string(),
        tag:          tag.to_owned(),
        value:        value.to_owned(),
      }
    })
    .collect()
}

// ─── Rules ───────────────────────────────────────────────────────────────────

/// Present, non-empty and not only whitespace.
pub fn required(value: &str, _: &()) -> garde::Result {
  if value.is_empty() {
    Err(garde::Error::new("required"))
  } else if value.trim().is_empty() {
    Err(garde::Error::new("notblank"))
  } else {
    Ok(())
  }
}

/// [`required`], and short enough for the `card_number` column.
pub fn card_number(value: &str, ctx: &()) -> garde::Result {
  required(value, ctx)?;
  match validate_card_number(value) {
    Ok(()) => Ok(()),
    Err(swipe_core::Error::BlankCardNumber) => Err(garde::Error::new("notblank")),
    Err(swipe_core::Error::CardNumberTooLong { .. }) => {
      Err(garde::Error::new(format!("max={CARD_NUMBER_MAX_LEN}")))
    }
  }
}
