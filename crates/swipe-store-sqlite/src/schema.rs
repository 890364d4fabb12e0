//! SQL schema for the swipe store.
//!
//! Executed once when a connection is opened. There is no versioning: the
//! table is created if absent and otherwise left alone.

/// Full schema DDL; idempotent thanks to `IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Append-only. No primary key: the same card may swipe many times.
CREATE TABLE IF NOT EXISTS card_swipes (
    card_number VARCHAR(45) NOT NULL,
    timestamp   TIMESTAMP             -- RFC 3339 UTC, microseconds, fixed width
);

CREATE INDEX IF NOT EXISTS card_swipes_timestamp_idx ON card_swipes(timestamp);
";
