//! Conversions between domain values and their SQLite column text.
//!
//! Timestamps are stored as fixed-width RFC 3339 UTC strings with
//! microsecond precision, e.g. `2024-01-01T08:30:00.000000Z`. Every stored
//! value has the same shape, so `BETWEEN` on the text column orders
//! chronologically.

use chrono::{DateTime, SecondsFormat, SubsecRound as _, TimeDelta, Utc};
use swipe_core::swipe::SwipeRecord;

use crate::{Error, Result};

/// Drop precision the column cannot hold.
pub fn truncate_dt(dt: DateTime<Utc>) -> DateTime<Utc> { dt.trunc_subsecs(6) }

/// Smallest storable instant not before `dt`. Used for lower bounds, so a
/// sub-microsecond start never admits a row that precedes it.
pub fn ceil_dt(dt: DateTime<Utc>) -> DateTime<Utc> {
  let truncated = truncate_dt(dt);
  if truncated < dt { truncated + TimeDelta::microseconds(1) } else { truncated }
}

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// `0000-01-01T00:00:00Z`, in microseconds since the epoch.
const MIN_STORABLE_MICROS: i64 = -62_167_219_200_000_000;
/// `9999-12-31T23:59:59.999999Z`, in microseconds since the epoch.
const MAX_STORABLE_MICROS: i64 = 253_402_300_799_999_999;

/// Encode a query bound, clamped to four-digit years.
///
/// Outside that span chrono writes a signed year (`+10000-…`, `-0001-…`)
/// whose text sorts before every stored value.
pub fn encode_bound(dt: DateTime<Utc>) -> String {
  let min = DateTime::from_timestamp_micros(MIN_STORABLE_MICROS).unwrap_or(DateTime::<Utc>::MIN_UTC);
  let max = DateTime::from_timestamp_micros(MAX_STORABLE_MICROS).unwrap_or(DateTime::<Utc>::MAX_UTC);
  encode_dt(dt.clamp(min, max))
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

/// A `card_swipes` row as read from SQLite, before timestamp decoding.
pub struct RawSwipe {
  pub card_number: String,
  pub timestamp:   String,
}

impl RawSwipe {
  pub fn into_record(self) -> Result<SwipeRecord> {
    Ok(SwipeRecord {
      timestamp:   decode_dt(&self.timestamp)?,
      card_number: self.card_number,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn encoding_is_fixed_width() {
    let whole: DateTime<Utc> = "2024-01-01T08:30:00Z".parse().unwrap();
    let fractional: DateTime<Utc> = "2024-01-01T08:30:00.5Z".parse().unwrap();
    assert_eq!(encode_dt(whole), "2024-01-01T08:30:00.000000Z");
    assert_eq!(encode_dt(fractional), "2024-01-01T08:30:00.500000Z");
  }

  #[test]
  fn text_order_matches_time_order() {
    let earlier: DateTime<Utc> = "2024-01-01T08:30:00.999999Z".parse().unwrap();
    let later: DateTime<Utc> = "2024-01-01T08:30:01Z".parse().unwrap();
    assert!(encode_dt(earlier) < encode_dt(later));
  }

  #[test]
  fn decode_accepts_offsets_and_normalises_to_utc() {
    let dt = decode_dt("2024-01-01T10:30:00+02:00").unwrap();
    assert_eq!(encode_dt(dt), "2024-01-01T08:30:00.000000Z");
  }

  #[test]
  fn decode_rejects_garbage() {
    assert!(matches!(decode_dt("yesterday"), Err(Error::DateParse(_))));
  }

  #[test]
  fn truncation_keeps_microseconds() {
    let dt: DateTime<Utc> = "2024-01-01T08:30:00.123456789Z".parse().unwrap();
    assert_eq!(encode_dt(truncate_dt(dt)), "2024-01-01T08:30:00.123456Z");
    assert_eq!(decode_dt(&encode_dt(truncate_dt(dt))).unwrap(), truncate_dt(dt));
  }

  #[test]
  fn bounds_are_clamped_to_four_digit_years() {
    let far_future = DateTime::from_timestamp_micros(MAX_STORABLE_MICROS).unwrap() + TimeDelta::days(2);
    let far_past = DateTime::from_timestamp_micros(MIN_STORABLE_MICROS).unwrap() - TimeDelta::days(2);
    assert_eq!(encode_bound(far_future), "9999-12-31T23:59:59.999999Z");
    assert_eq!(encode_bound(far_past), "0000-01-01T00:00:00.000000Z");
    assert!(encode_bound(far_past) < encode_bound(far_future));
  }

  #[test]
  fn ceiling_rounds_sub_microsecond_bounds_up() {
    let exact: DateTime<Utc> = "2024-01-01T08:30:00.123456Z".parse().unwrap();
    let fine: DateTime<Utc> = "2024-01-01T08:30:00.123456001Z".parse().unwrap();
    assert_eq!(ceil_dt(exact), exact);
    assert_eq!(encode_dt(ceil_dt(fine)), "2024-01-01T08:30:00.123457Z");
  }
}
