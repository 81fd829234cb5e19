//! CSV codec for reviewlens.
//!
//! Reads review batches from CSV and writes both the raw input shape (for
//! generated batches) and the enriched analysis shape. Pure synchronous; no
//! database or scoring dependencies.
//!
//! # Quick start
//!
//! ```no_run
//! use reviewlens_csv::read_reviews;
//!
//! let reviews = read_reviews("input/daily_reviews.csv").unwrap();
//! println!("{} reviews", reviews.len());
//! ```

pub mod error;
mod read;
mod write;

use std::{fs::File, path::Path};

pub use error::{Error, Result};
pub use read::INPUT_HEADERS;
use reviewlens_core::{input::RawReview, review::ScoredReview};
pub use write::ANALYSIS_HEADERS;

// ─── Reading ─────────────────────────────────────────────────────────────────

/// Read a review batch from the CSV file at `path`.
///
/// The header row must name every column in [`INPUT_HEADERS`]; extra columns
/// are ignored. Text fields are trimmed, dates and ratings pass through the
/// lenient validators, rows with empty review text are dropped and malformed
/// rows are logged and skipped.
pub fn read_reviews(path: impl AsRef<Path>) -> Result<Vec<RawReview>> {
  let file = File::open(path)?;
  read::read(file)
}

// ─── Writing ─────────────────────────────────────────────────────────────────

/// Write reviews in the input shape, so the file can be read back with
/// [`read_reviews`].
pub fn write_reviews(path: impl AsRef<Path>, reviews: &[RawReview]) -> Result<()> {
  write::write_reviews(File::create(path)?, reviews)
}

/// Write scored reviews with one row per review and a header row of
/// [`ANALYSIS_HEADERS`].
pub fn write_analysis(path: impl AsRef<Path>, reviews: &[ScoredReview]) -> Result<()> {
  write::write_analysis(File::create(path)?, reviews)
}
