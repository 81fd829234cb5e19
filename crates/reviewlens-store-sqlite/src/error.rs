//! Error type for `reviewlens-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The review failed validation; nothing was written.
  #[error("invalid review: {0}")]
  Validation(#[from] reviewlens_core::Error),

  #[error("database error: {0}")]
  Database(#[from] rusqlite::Error),

  /// A stored column could not be decoded into its domain type.
  #[error("decode error in column {column}: {value:?}")]
  Decode { column: &'static str, value: String },

  /// The insert was suppressed by the unique constraint, yet the row never
  /// became visible to the lookup.
  #[error("{table} row {name:?} missing after insert-or-ignore")]
  DimensionMissing { table: &'static str, name: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
