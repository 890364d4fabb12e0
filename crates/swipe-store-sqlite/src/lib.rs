//! SQLite backend for the card swipe store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime.

mod encode;
mod schema;
mod store;

pub mod error;
pub mod location;

pub use error::{Error, Result};
pub use location::DatabaseLocation;
pub use store::SqliteStore;
