//! Error types for the reviewlens CSV codec.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),

  #[error("CSV error: {0}")]
  Csv(#[from] csv::Error),

  /// The header row lacks one or more required columns.
  #[error(
    "missing required fields: {} (required headers: review_text, reviewer_name, product_name, date, rating)",
    .0.join(", ")
  )]
  MissingFields(Vec<String>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
