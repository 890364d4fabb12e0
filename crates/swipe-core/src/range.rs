//! Inclusive time ranges used to select swipes.

use chrono::{DateTime, Utc};

/// The closed interval `[start, end]`.
///
/// A range whose start lies after its end is allowed and contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
  pub start: DateTime<Utc>,
  pub end:   DateTime<Utc>,
}

impl TimeRange {
  pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
    Self { start, end }
  }

  pub fn contains(&self, at: DateTime<Utc>) -> bool {
    self.start <= at && at <= self.end
  }

  pub fn is_empty(&self) -> bool { self.start > self.end }
}
