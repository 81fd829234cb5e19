//! Review types: the fact at the centre of the store.
//!
//! A review is scored once, reconciled against its star rating, and then
//! persisted as an immutable fact. Products and reviewers are dimensions that
//! the fact references by surrogate id.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::{Error, Result, input::RawReview};

/// Inclusive bounds of the star-rating scale.
pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 5.0;

/// Weight of the primary (rule-based) analyzer in the fused score.
pub const PRIMARY_WEIGHT: f64 = 0.7;
/// Weight of the secondary (pattern) analyzer in the fused score.
pub const SECONDARY_WEIGHT: f64 = 0.3;

/// The fused signal the sentiment label is derived from.
pub fn fuse(primary: f64, secondary: f64) -> f64 {
  PRIMARY_WEIGHT * primary + SECONDARY_WEIGHT * secondary
}

// ─── Identifiers ─────────────────────────────────────────────────────────────

/// Surrogate key of a row in the `products` dimension.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProductId(pub i64);

/// Surrogate key of a row in the `reviewers` dimension.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ReviewerId(pub i64);

/// Surrogate key of a row in the `reviews` fact table.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ReviewId(pub i64);

// ─── Labels ──────────────────────────────────────────────────────────────────

/// The sentiment label assigned to a review. The `Display`/`FromStr` forms
/// are the values stored in the `sentiment` column.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  AsRefStr,
)]
pub enum Sentiment {
  Positive,
  Negative,
  Neutral,
}

/// Whether the text sentiment and the star rating point the same way.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  AsRefStr,
)]
pub enum Agreement {
  Yes,
  No,
}

// ─── Scorer output ───────────────────────────────────────────────────────────

/// The outcome of scoring one review text.
///
/// The three detail scores are rounded to three decimals and `confidence` to
/// two; `weighted` is the unrounded fused signal the label was derived from.
/// `weighted` is not persisted: reviews read back from a store carry it
/// recomputed from the rounded detail scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentAnalysis {
  pub sentiment:    Sentiment,
  /// 0..=100.
  pub confidence:   f64,
  /// Primary (rule-based) compound score, -1..=1.
  pub compound:     f64,
  /// Secondary (pattern) polarity, -1..=1.
  pub polarity:     f64,
  /// Secondary (pattern) subjectivity, 0..=1.
  pub subjectivity: f64,
  #[serde(skip)]
  pub weighted:     f64,
}

// ─── ScoredReview ────────────────────────────────────────────────────────────

/// An ingested review together with its analysis and agreement verdict.
/// This is the enriched record handed to persistence and to CSV output.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredReview {
  pub input:     RawReview,
  pub analysis:  SentimentAnalysis,
  pub agreement: Agreement,
}

impl ScoredReview {
  /// Build the store input, resolving the pass-through date string into a
  /// calendar date.
  pub fn to_new_review(&self) -> Result<NewReview> {
    let review_date = NaiveDate::parse_from_str(&self.input.date, "%Y-%m-%d")
      .map_err(|_| Error::InvalidDate(self.input.date.clone()))?;

    Ok(NewReview {
      review_text: self.input.review_text.clone(),
      reviewer_name: self.input.reviewer_name.clone(),
      product_name: self.input.product_name.clone(),
      rating: self.input.rating,
      review_date,
      analysis: self.analysis,
      agreement: self.agreement,
    })
  }
}

// ─── NewReview ───────────────────────────────────────────────────────────────

/// Input to [`crate::store::ReviewStore::insert_review`].
/// `id` and `created_at` are always assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
  pub review_text:   String,
  pub reviewer_name: String,
  pub product_name:  String,
  pub rating:        f64,
  pub review_date:   NaiveDate,
  pub analysis:      SentimentAnalysis,
  pub agreement:     Agreement,
}

impl NewReview {
  /// Checked by stores before anything is written. Ratings are
  /// clamped during ingestion, so a failure here means an upstream bug or an
  /// unparsable rating.
  pub fn validate(&self) -> Result<()> {
    if self.review_text.trim().is_empty() {
      return Err(Error::EmptyField("review_text"));
    }
    if self.reviewer_name.trim().is_empty() {
      return Err(Error::EmptyField("reviewer_name"));
    }
    if self.product_name.trim().is_empty() {
      return Err(Error::EmptyField("product_name"));
    }
    if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
      return Err(Error::RatingOutOfRange(self.rating));
    }
    Ok(())
  }
}

// ─── Review ──────────────────────────────────────────────────────────────────

/// A persisted review fact, joined with its dimension names. Never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
  pub id:            ReviewId,
  pub review_text:   String,
  pub reviewer_name: String,
  pub product_name:  String,
  pub rating:        f64,
  pub review_date:   NaiveDate,
  pub analysis:      SentimentAnalysis,
  pub agreement:     Agreement,
  /// Store-assigned timestamp; never changes after creation.
  pub created_at:    DateTime<Utc>,
}

impl Review {
  /// The first `max_chars` characters of the text followed by `...`.
  pub fn preview(&self, max_chars: usize) -> String {
    let head: String = self.review_text.chars().take(max_chars).collect();
    format!("{head}...")
  }
}
