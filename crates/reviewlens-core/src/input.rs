//! The ingested review record and the lenient validators applied to it.
//!
//! Ingestion never rejects a row for a bad date or rating: dates that cannot
//! be read pass through unchanged, and ratings are clamped (or zeroed when
//! unparsable). The store's validation catches what remains.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::review::{MAX_RATING, MIN_RATING};

/// Date formats accepted on input, tried in order.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// One review as consumed from an ingestion source (CSV file, generator).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawReview {
  pub review_text:   String,
  pub reviewer_name: String,
  pub product_name:  String,
  /// Canonical `YYYY-MM-DD` when it could be read, otherwise the original
  /// text.
  pub date:          String,
  pub rating:        f64,
}

/// Canonicalise a date to `YYYY-MM-DD`. Unreadable input is returned as-is
/// so the caller can see what went wrong.
pub fn validate_date(raw: &str) -> String {
  let trimmed = raw.trim();
  DATE_FORMATS
    .iter()
    .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
    .map(|d| d.format("%Y-%m-%d").to_string())
    .unwrap_or_else(|| raw.to_owned())
}

/// Parse a rating and clamp it to the 1..=5 scale; `0.0` when unparsable.
pub fn validate_rating(raw: &str) -> f64 {
  match raw.trim().parse::<f64>() {
    Ok(r) if r.is_finite() => r.clamp(MIN_RATING, MAX_RATING),
    _ => 0.0,
  }
}
