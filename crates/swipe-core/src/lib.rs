//! Core types and trait definitions for the card swipe service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! The store and server crates depend on it; it depends on nothing of theirs.

#![allow(async_fn_in_trait)]

pub mod error;
pub mod pseudonym;
pub mod range;
pub mod store;
pub mod swipe;

pub use error::{Error, Result};
