//! The `ReviewStore` trait and its aggregate read models.
//!
//! The trait is implemented by storage backends (e.g.
//! `reviewlens-store-sqlite`). The batch pipeline and the query reports
//! depend on this abstraction, not on any concrete backend.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::review::{NewReview, ProductId, Review, ReviewId, ReviewerId, Sentiment};

// ─── Aggregates ──────────────────────────────────────────────────────────────

/// Summary statistics for one product, computed on demand.
///
/// Averages are `None` when `total == 0`; counts are zero. Callers check
/// `total` before deriving ratios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
  pub product_name:   String,
  pub total:          u64,
  pub avg_rating:     Option<f64>,
  pub avg_confidence: Option<f64>,
  pub positive:       u64,
  pub negative:       u64,
  pub neutral:        u64,
  /// Mean primary compound score.
  pub avg_compound:   Option<f64>,
}

impl ProductSummary {
  /// An empty summary for a product with no facts (or no row at all).
  pub fn empty(product_name: impl Into<String>) -> Self {
    Self {
      product_name:   product_name.into(),
      total:          0,
      avg_rating:     None,
      avg_confidence: None,
      positive:       0,
      negative:       0,
      neutral:        0,
      avg_compound:   None,
    }
  }

  pub fn count(&self, sentiment: Sentiment) -> u64 {
    match sentiment {
      Sentiment::Positive => self.positive,
      Sentiment::Negative => self.negative,
      Sentiment::Neutral => self.neutral,
    }
  }

  /// Percentage of reviews carrying `sentiment`; `None` when there are none.
  pub fn percentage(&self, sentiment: Sentiment) -> Option<f64> {
    (self.total > 0)
      .then(|| self.count(sentiment) as f64 / self.total as f64 * 100.0)
  }
}

/// One calendar day of review activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTrend {
  pub date:                NaiveDate,
  pub total:               u64,
  /// Share of `Positive` labels, 0..=100, one decimal.
  pub positive_percentage: f64,
  /// Two decimals.
  pub avg_rating:          f64,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a review store backend.
///
/// Dimensions (products, reviewers) are get-or-create by exact name. Facts
/// (reviews) are append-only: nothing here updates or deletes a review.
/// Lookups of unknown names are not errors; they yield empty results.
pub trait ReviewStore {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Dimensions ────────────────────────────────────────────────────────

  /// Return the id of the product named `name`, creating it if absent.
  /// Concurrent callers racing on the same name observe the same id.
  fn upsert_product(&self, name: &str) -> Result<ProductId, Self::Error>;

  /// Return the id of the reviewer named `name`, creating it if absent.
  fn upsert_reviewer(&self, name: &str) -> Result<ReviewerId, Self::Error>;

  // ── Facts: append-only writes ────────────────────────────────────────

  /// Validate `review`, resolve its dimensions, and append it.
  ///
  /// The two upserts and the insert form one transaction; a failure leaves
  /// nothing behind.
  fn insert_review(&mut self, review: &NewReview) -> Result<ReviewId, Self::Error>;

  // ── Reads ─────────────────────────────────────────────────────────────

  /// All reviews of a product, most recent review date first.
  fn query_by_product(&self, name: &str) -> Result<Vec<Review>, Self::Error>;

  /// All reviews by a reviewer, most recent review date first.
  fn query_by_reviewer(&self, name: &str) -> Result<Vec<Review>, Self::Error>;

  /// Aggregate statistics for a product.
  fn summary_by_product(&self, name: &str) -> Result<ProductSummary, Self::Error>;

  /// All reviews dated on or after `since`, most recent first.
  fn query_recent(&self, since: NaiveDate) -> Result<Vec<Review>, Self::Error>;

  /// One row per calendar date on or after `since` that has reviews, most
  /// recent first.
  fn trend_by_day(&self, since: NaiveDate) -> Result<Vec<DailyTrend>, Self::Error>;
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_summary_has_no_averages_or_percentages() {
    let s = ProductSummary::empty("Gaming Headset");
    assert_eq!(s.total, 0);
    assert_eq!(s.avg_rating, None);
    assert_eq!(s.percentage(Sentiment::Positive), None);
  }

  #[test]
  fn percentages_follow_counts() {
    let s = ProductSummary {
      total: 4,
      positive: 3,
      neutral: 1,
      ..ProductSummary::empty("Smart Speaker")
    };
    assert_eq!(s.percentage(Sentiment::Positive), Some(75.0));
    assert_eq!(s.percentage(Sentiment::Negative), Some(0.0));
    assert_eq!(s.count(Sentiment::Neutral), 1);
  }
}
