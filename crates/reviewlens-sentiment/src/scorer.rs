//! Dual-analyzer fusion: one label and one confidence per review.

pub use reviewlens_core::review::{PRIMARY_WEIGHT, SECONDARY_WEIGHT, fuse};
use reviewlens_core::review::{Sentiment, SentimentAnalysis};

use crate::{
  analyzer::PolarityAnalyzer,
  normalize::normalize,
  pattern::PatternAnalyzer,
  rule_based::RuleBasedAnalyzer,
};

/// Fused scores with a smaller magnitude are `Neutral`.
pub const NEUTRAL_THRESHOLD: f64 = 0.1;
/// Neutral confidence is `|weighted| * NEUTRAL_CONFIDENCE_SCALE`, so it never
/// exceeds 0.5.
pub const NEUTRAL_CONFIDENCE_SCALE: f64 = 5.0;

/// Label and unrounded confidence for a fused score.
pub fn classify(weighted: f64) -> (Sentiment, f64) {
  let magnitude = weighted.abs();
  if magnitude < NEUTRAL_THRESHOLD {
    return (Sentiment::Neutral, magnitude * NEUTRAL_CONFIDENCE_SCALE);
  }
  let sentiment = if weighted > 0.0 { Sentiment::Positive } else { Sentiment::Negative };
  (sentiment, (magnitude * 100.0).min(100.0))
}

fn round_to(value: f64, places: i32) -> f64 {
  let factor = 10f64.powi(places);
  (value * factor).round() / factor
}

/// Runs the primary analyzer on the original text and the secondary analyzer
/// on the normalized text, then fuses and classifies.
pub struct SentimentScorer<P = RuleBasedAnalyzer, S = PatternAnalyzer> {
  primary:   P,
  secondary: S,
}

impl Default for SentimentScorer {
  fn default() -> Self { Self::new(RuleBasedAnalyzer::new(), PatternAnalyzer::new()) }
}

impl<P: PolarityAnalyzer, S: PolarityAnalyzer> SentimentScorer<P, S> {
  pub fn new(primary: P, secondary: S) -> Self { Self { primary, secondary } }

  /// Score one review text. Callers ensure the text is non-empty; empty text
  /// still yields a (neutral) result.
  pub fn score(&self, text: &str) -> SentimentAnalysis {
    let compound = self.primary.score(text).polarity;
    let secondary = self.secondary.score(&normalize(text));
    let weighted = fuse(compound, secondary.polarity);
    let (sentiment, confidence) = classify(weighted);

    tracing::debug!(%sentiment, weighted, compound, polarity = secondary.polarity, "scored review");

    SentimentAnalysis {
      sentiment,
      confidence: round_to(confidence, 2),
      compound: round_to(compound, 3),
      polarity: round_to(secondary.polarity, 3),
      subjectivity: round_to(secondary.subjectivity.unwrap_or(0.0), 3),
      weighted,
    }
  }
}

#[cfg(test)]
mod tests {
  use std::cell::RefCell;

  use proptest::prelude::*;

  use super::*;
  use crate::analyzer::PolarityScore;

  /// Returns a fixed score and remembers the text it was given.
  struct Fixed {
    score: PolarityScore,
    seen:  RefCell<Vec<String>>,
  }

  impl Fixed {
    fn new(polarity: f64, subjectivity: Option<f64>) -> Self {
      Self { score: PolarityScore { polarity, subjectivity }, seen: RefCell::default() }
    }
  }

  impl PolarityAnalyzer for Fixed {
    fn score(&self, text: &str) -> PolarityScore {
      self.seen.borrow_mut().push(text.to_owned());
      self.score
    }
  }

  fn stub_scorer(primary: f64, secondary: f64) -> SentimentScorer<Fixed, Fixed> {
    SentimentScorer::new(Fixed::new(primary, None), Fixed::new(secondary, Some(0.4)))
  }

  // ── Fusion against stubs ──────────────────────────────────────────────

  #[test]
  fn analyzers_see_original_and_normalized_text() {
    let scorer = stub_scorer(0.5, 0.5);
    scorer.score("Great!!  Really :)");
    assert_eq!(scorer.primary.seen.borrow().as_slice(), ["Great!!  Really :)"]);
    assert_eq!(scorer.secondary.seen.borrow().as_slice(), ["Great Really"]);
  }

  #[test]
  fn weighted_score_favours_primary() {
    let a = stub_scorer(1.0, -1.0).score("x");
    assert!((a.weighted - 0.4).abs() < 1e-12);
    assert_eq!(a.sentiment, Sentiment::Positive);
    assert_eq!(a.confidence, 40.0);
  }

  #[test]
  fn negative_signal_is_negative() {
    let a = stub_scorer(-0.6, -0.2).score("x");
    assert_eq!(a.sentiment, Sentiment::Negative);
    assert_eq!(a.confidence, 48.0);
  }

  #[test]
  fn borderline_signal_is_low_confidence_neutral() {
    let a = stub_scorer(0.12, 0.0).score("x");
    // 0.7 * 0.12 = 0.084
    assert_eq!(a.sentiment, Sentiment::Neutral);
    assert_eq!(a.confidence, 0.42);
  }

  #[test]
  fn detail_scores_are_rounded_but_label_is_not() {
    // weighted = 0.7 * 0.14285 = 0.099995 -> Neutral even though it
    // displays as 0.1 after rounding.
    let a = stub_scorer(0.14285, 0.0).score("x");
    assert_eq!(a.sentiment, Sentiment::Neutral);
    assert_eq!(a.compound, 0.143);
    assert_eq!(a.subjectivity, 0.4);
  }

  #[test]
  fn missing_subjectivity_reports_zero() {
    let scorer = SentimentScorer::new(Fixed::new(0.3, None), Fixed::new(0.3, None));
    assert_eq!(scorer.score("x").subjectivity, 0.0);
  }

  #[test]
  fn threshold_is_exclusive() {
    assert_eq!(classify(0.1).0, Sentiment::Positive);
    assert_eq!(classify(-0.1).0, Sentiment::Negative);
    assert_eq!(classify(0.0999).0, Sentiment::Neutral);
    assert_eq!(classify(0.0), (Sentiment::Neutral, 0.0));
  }

  #[test]
  fn confidence_saturates_at_one_hundred() {
    assert_eq!(classify(1.0).1, 100.0);
    assert_eq!(classify(-1.0), (Sentiment::Negative, 100.0));
  }

  // ── Built-in analyzers end to end ─────────────────────────────────────

  #[test]
  fn enthusiastic_review_is_confidently_positive() {
    let a = SentimentScorer::default().score("Excellent product! Great battery life.");
    assert_eq!(a.sentiment, Sentiment::Positive);
    assert!(a.confidence > 50.0, "confidence {}", a.confidence);
    assert!(a.compound > 0.0);
  }

  #[test]
  fn complaint_is_negative() {
    let a = SentimentScorer::default()
      .score("Disappointed with this item. Stopped working after a few days.");
    assert_eq!(a.sentiment, Sentiment::Negative);
    assert!(a.compound < 0.0);
  }

  #[test]
  fn lukewarm_review_is_neutral() {
    let a = SentimentScorer::default().score("It is okay, works fine.");
    assert_eq!(a.sentiment, Sentiment::Neutral);
    assert!(a.confidence < 5.0);
  }

  #[test]
  fn negated_praise_is_negative() {
    let a = SentimentScorer::default().score("Not good at all. Would not recommend.");
    assert_eq!(a.sentiment, Sentiment::Negative);
  }

  // ── Properties ────────────────────────────────────────────────────────

  proptest! {
    #[test]
    fn neutral_iff_below_threshold(w in -1.0f64..=1.0) {
      prop_assert_eq!(classify(w).0 == Sentiment::Neutral, w.abs() < NEUTRAL_THRESHOLD);
    }

    #[test]
    fn confidence_is_monotonic_on_each_side(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
      let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
      let same_side = (lo < NEUTRAL_THRESHOLD) == (hi < NEUTRAL_THRESHOLD);
      prop_assume!(same_side);
      prop_assert!(classify(lo).1 <= classify(hi).1);
      prop_assert!(classify(-lo).1 <= classify(-hi).1);
    }

    #[test]
    fn confidence_stays_in_range(w in -1.0f64..=1.0) {
      let (_, c) = classify(w);
      prop_assert!((0.0..=100.0).contains(&c));
    }

    #[test]
    fn any_text_scores_within_bounds(text in "\\PC{1,80}") {
      let a = SentimentScorer::default().score(&text);
      prop_assert!((-1.0..=1.0).contains(&a.compound));
      prop_assert!((-1.0..=1.0).contains(&a.polarity));
      prop_assert!((0.0..=1.0).contains(&a.subjectivity));
      prop_assert!((0.0..=100.0).contains(&a.confidence));
    }
  }
}
