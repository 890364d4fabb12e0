//! Error type for `swipe-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] swipe_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  #[error("database url is empty")]
  EmptyDatabaseUrl,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
