//! [`SqliteStore`] — the SQLite implementation of [`SwipeStore`].

use std::path::Path;

use chrono::{DateTime, Utc};
use swipe_core::{
  range::TimeRange,
  store::SwipeStore,
  swipe::{SwipeRecord, validate_card_number},
};

use crate::{
  Result,
  encode::{RawSwipe, ceil_dt, encode_bound, encode_dt, truncate_dt},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A swipe store backed by a single SQLite database.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and bootstrap the schema.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  pub(crate) async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Persist a swipe with an explicit timestamp.
  ///
  /// The timestamp is truncated to microseconds, the precision of the
  /// column; the returned record carries the value actually stored.
  pub async fn record_swipe_at(
    &self,
    card_number: String,
    at: DateTime<Utc>,
  ) -> Result<SwipeRecord> {
    validate_card_number(&card_number)?;

    let record = SwipeRecord { card_number, timestamp: truncate_dt(at) };
    let card   = record.card_number.clone();
    let at_str = encode_dt(record.timestamp);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO card_swipes (card_number, timestamp) VALUES (?1, ?2)",
          rusqlite::params![card, at_str],
        )?;
        Ok(())
      })
      .await?;

    tracing::debug!(timestamp = %record.timestamp, "recorded swipe");
    Ok(record)
  }

  /// Run raw SQL against the connection, bypassing the domain checks.
  #[cfg(test)]
  pub(crate) async fn execute_raw(&self, sql: &'static str) -> Result<()> {
    self
      .conn
      .call(move |conn| {
        conn.execute_batch(sql)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── SwipeStore impl ─────────────────────────────────────────────────────────

impl SwipeStore for SqliteStore {
  type Error = crate::Error;

  async fn record_swipe(&self, card_number: String) -> Result<SwipeRecord> {
    self.record_swipe_at(card_number, Utc::now()).await
  }

  async fn swipes_between(&self, range: TimeRange) -> Result<Vec<SwipeRecord>> {
    let start = ceil_dt(range.start);
    if range.is_empty() || start > range.end {
      return Ok(Vec::new());
    }

    let start_str = encode_bound(start);
    let end_str   = encode_bound(range.end);

    let raws: Vec<RawSwipe> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT card_number, timestamp FROM card_swipes
           WHERE timestamp BETWEEN ?1 AND ?2
           ORDER BY timestamp, rowid",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![start_str, end_str], |row| {
            Ok(RawSwipe {
              card_number: row.get(0)?,
              timestamp:   row.get(1)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    let mut records = raws
      .into_iter()
      .map(RawSwipe::into_record)
      .collect::<Result<Vec<_>>>()?;
    records.retain(|r| range.contains(r.timestamp));
    Ok(records)
  }
}
