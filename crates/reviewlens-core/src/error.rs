//! Validation errors for `reviewlens-core`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
  #[error("required field is empty: {0}")]
  EmptyField(&'static str),

  #[error("rating {0} is outside 1..=5")]
  RatingOutOfRange(f64),

  #[error("review date is not a calendar date: {0:?}")]
  InvalidDate(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
