//! Error types for `swipe-core`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  #[error("card number is blank")]
  BlankCardNumber,

  #[error("card number is {len} characters long, the limit is {max}")]
  CardNumberTooLong { len: usize, max: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
