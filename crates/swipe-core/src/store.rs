//! The `SwipeStore` trait.
//!
//! Implemented by storage backends (e.g. `swipe-store-sqlite`). The HTTP
//! layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{range::TimeRange, swipe::SwipeRecord};

/// Abstraction over the swipe table.
///
/// Records are append-only: nothing is ever updated or deleted.
pub trait SwipeStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a swipe for `card_number`, stamped with the store's current
  /// time, and return the stored record.
  fn record_swipe(
    &self,
    card_number: String,
  ) -> impl Future<Output = Result<SwipeRecord, Self::Error>> + Send + '_;

  /// All swipes whose timestamp lies in `range` (inclusive), ordered by
  /// timestamp and then by insertion.
  fn swipes_between(
    &self,
    range: TimeRange,
  ) -> impl Future<Output = Result<Vec<SwipeRecord>, Self::Error>> + Send + '_;
}
