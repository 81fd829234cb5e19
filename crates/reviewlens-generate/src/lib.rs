//! Synthetic review batches for demos and the daily pipeline.
//!
//! Reviews are assembled from fixed template and detail pools. The generator
//! takes its randomness from the caller, so a seeded RNG yields a
//! reproducible batch.
//!
//! ```
//! use chrono::NaiveDate;
//! use rand::{SeedableRng, rngs::StdRng};
//! use reviewlens_generate::ReviewGenerator;
//!
//! let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
//! let mut rng = StdRng::seed_from_u64(7);
//! let batch = ReviewGenerator::new().generate_dataset(10, start, end, &mut rng);
//! assert_eq!(batch.len(), 10);
//! ```

mod pools;

use chrono::{Days, NaiveDate};
use rand::Rng;
use reviewlens_core::{input::RawReview, review::Sentiment};

use pools::*;

/// Percent of unbiased reviews drawn positive; the next
/// [`NEGATIVE_SHARE`] percent are negative and the rest neutral.
pub const POSITIVE_SHARE: u32 = 60;
pub const NEGATIVE_SHARE: u32 = 30;

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, pool: &[&'a str]) -> &'a str {
  pool[rng.random_range(0..pool.len())]
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewGenerator;

impl ReviewGenerator {
  pub fn new() -> Self { Self }

  /// Draw a sentiment with the default 60/30/10 split.
  pub fn draw_sentiment<R: Rng + ?Sized>(&self, rng: &mut R) -> Sentiment {
    let roll = rng.random_range(0..100);
    if roll < POSITIVE_SHARE {
      Sentiment::Positive
    } else if roll < POSITIVE_SHARE + NEGATIVE_SHARE {
      Sentiment::Negative
    } else {
      Sentiment::Neutral
    }
  }

  /// Generate one review dated `date`. With `bias` set, the review carries
  /// that sentiment; otherwise one is drawn.
  ///
  /// Positive reviews are rated 4 or 5, negative 1 or 2, neutral 3.
  pub fn generate_review<R: Rng + ?Sized>(
    &self,
    rng: &mut R,
    bias: Option<Sentiment>,
    date: NaiveDate,
  ) -> RawReview {
    let product = pick(rng, PRODUCTS);
    let reviewer_name = format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES));

    let sentiment = bias.unwrap_or_else(|| self.draw_sentiment(rng));
    let (templates, details, rating) = match sentiment {
      Sentiment::Positive => (POSITIVE_TEMPLATES, POSITIVE_DETAILS, rng.random_range(4..=5)),
      Sentiment::Negative => (NEGATIVE_TEMPLATES, NEGATIVE_DETAILS, rng.random_range(1..=2)),
      Sentiment::Neutral => (NEUTRAL_TEMPLATES, NEUTRAL_DETAILS, 3),
    };
    let opener = pick(rng, templates).replace("{product}", product);
    let detail = pick(rng, details);

    RawReview {
      review_text: format!("{opener} {detail}"),
      reviewer_name,
      product_name: product.to_owned(),
      date: date.format("%Y-%m-%d").to_string(),
      rating: f64::from(rating),
    }
  }

  /// Generate `count` reviews dated uniformly within `[start, end]`, sorted
  /// by date. A reversed range is treated as a single day at `start`.
  pub fn generate_dataset<R: Rng + ?Sized>(
    &self,
    count: usize,
    start: NaiveDate,
    end: NaiveDate,
    rng: &mut R,
  ) -> Vec<RawReview> {
    let span = u64::try_from((end - start).num_days()).unwrap_or(0);

    let mut reviews: Vec<RawReview> = (0..count)
      .map(|_| {
        let offset = rng.random_range(0..=span);
        let date = start.checked_add_days(Days::new(offset)).unwrap_or(start);
        self.generate_review(rng, None, date)
      })
      .collect();

    // Canonical dates sort chronologically as strings.
    reviews.sort_by(|a, b| a.date.cmp(&b.date));
    reviews
  }
}

#[cfg(test)]
mod tests {
  use rand::{SeedableRng, rngs::StdRng};

  use super::*;

  fn date(y: i32, m: u32, d: u32) -> NaiveDate { NaiveDate::from_ymd_opt(y, m, d).unwrap() }

  #[test]
  fn biased_reviews_follow_rating_bands() {
    let g = ReviewGenerator::new();
    let mut rng = StdRng::seed_from_u64(1);
    let day = date(2025, 3, 1);
    for _ in 0..50 {
      let r = g.generate_review(&mut rng, Some(Sentiment::Positive), day);
      assert!(r.rating == 4.0 || r.rating == 5.0);
      let r = g.generate_review(&mut rng, Some(Sentiment::Negative), day);
      assert!(r.rating == 1.0 || r.rating == 2.0);
      let r = g.generate_review(&mut rng, Some(Sentiment::Neutral), day);
      assert_eq!(r.rating, 3.0);
    }
  }

  #[test]
  fn reviews_are_fully_populated() {
    let g = ReviewGenerator::new();
    let mut rng = StdRng::seed_from_u64(2);
    let r = g.generate_review(&mut rng, None, date(2025, 3, 1));
    assert!(PRODUCTS.contains(&r.product_name.as_str()));
    assert_eq!(r.reviewer_name.split(' ').count(), 2);
    assert!(!r.review_text.contains("{product}"));
    assert_eq!(r.date, "2025-03-01");
  }

  #[test]
  fn dataset_is_sorted_and_within_range() {
    let (start, end) = (date(2025, 1, 1), date(2025, 1, 31));
    let mut rng = StdRng::seed_from_u64(3);
    let batch = ReviewGenerator::new().generate_dataset(200, start, end, &mut rng);

    assert_eq!(batch.len(), 200);
    assert!(batch.windows(2).all(|w| w[0].date <= w[1].date));
    assert!(batch.iter().all(|r| {
      let d = NaiveDate::parse_from_str(&r.date, "%Y-%m-%d").unwrap();
      (start..=end).contains(&d)
    }));
  }

  #[test]
  fn seeded_generation_is_reproducible() {
    let (start, end) = (date(2025, 1, 1), date(2025, 1, 7));
    let g = ReviewGenerator::new();
    let a = g.generate_dataset(20, start, end, &mut StdRng::seed_from_u64(42));
    let b = g.generate_dataset(20, start, end, &mut StdRng::seed_from_u64(42));
    assert_eq!(a, b);
  }

  #[test]
  fn unbiased_split_favours_positive() {
    let g = ReviewGenerator::new();
    let mut rng = StdRng::seed_from_u64(4);
    let draws: Vec<_> = (0..2000).map(|_| g.draw_sentiment(&mut rng)).collect();
    let share = |s: Sentiment| draws.iter().filter(|d| **d == s).count() as f64 / 2000.0;
    assert!((share(Sentiment::Positive) - 0.6).abs() < 0.05);
    assert!((share(Sentiment::Negative) - 0.3).abs() < 0.05);
    assert!((share(Sentiment::Neutral) - 0.1).abs() < 0.05);
  }

  #[test]
  fn reversed_range_collapses_to_start() {
    let mut rng = StdRng::seed_from_u64(5);
    let batch =
      ReviewGenerator::new().generate_dataset(5, date(2025, 2, 1), date(2025, 1, 1), &mut rng);
    assert!(batch.iter().all(|r| r.date == "2025-02-01"));
  }
}
