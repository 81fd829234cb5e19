//! Reconciles a text sentiment score with the reviewer's star rating.

use crate::review::{Agreement, MAX_RATING, MIN_RATING};

/// Map a 1..=5 rating onto -1..=1. A rating of 3 maps to exactly 0.
pub fn rating_sentiment(rating: f64) -> f64 {
  let normalized = (rating - MIN_RATING) / (MAX_RATING - MIN_RATING);
  normalized * 2.0 - 1.0
}

/// `Yes` when the score and the rating-implied sentiment share a sign.
///
/// Zero counts as non-negative on both sides, so a midpoint rating agrees
/// with every non-negative score. Magnitudes are not compared.
pub fn evaluate(compound: f64, rating: f64) -> Agreement {
  let implied = rating_sentiment(rating);
  if (compound >= 0.0) == (implied >= 0.0) {
    Agreement::Yes
  } else {
    Agreement::No
  }
}

#[cfg(test)]
mod tests {
  use proptest::prelude::*;

  use super::*;

  #[test]
  fn matching_signs_agree() {
    assert_eq!(evaluate(0.5, 5.0), Agreement::Yes);
    assert_eq!(evaluate(-0.5, 1.0), Agreement::Yes);
  }

  #[test]
  fn opposite_signs_disagree() {
    assert_eq!(evaluate(0.5, 1.0), Agreement::No);
    assert_eq!(evaluate(-0.5, 5.0), Agreement::No);
  }

  #[test]
  fn midpoint_rating_agrees_with_non_negative_scores() {
    assert_eq!(rating_sentiment(3.0), 0.0);
    assert_eq!(evaluate(0.0, 3.0), Agreement::Yes);
    assert_eq!(evaluate(0.9, 3.0), Agreement::Yes);
    assert_eq!(evaluate(-0.01, 3.0), Agreement::No);
  }

  #[test]
  fn zero_score_counts_as_non_negative() {
    assert_eq!(evaluate(0.0, 4.0), Agreement::Yes);
    assert_eq!(evaluate(0.0, 2.0), Agreement::No);
    assert_eq!(evaluate(-0.0, 4.0), Agreement::Yes);
  }

  #[test]
  fn rating_scale_endpoints() {
    assert_eq!(rating_sentiment(1.0), -1.0);
    assert_eq!(rating_sentiment(5.0), 1.0);
  }

  proptest! {
    #[test]
    fn implied_sign_is_non_negative_iff_rating_at_least_three(r in 1.0f64..=5.0) {
      prop_assert_eq!(rating_sentiment(r) >= 0.0, r >= 3.0);
    }

    #[test]
    fn verdict_depends_only_on_sign(
      a in 0.0f64..=1.0,
      b in 0.0f64..=1.0,
      r in 1.0f64..=5.0,
    ) {
      prop_assert_eq!(evaluate(a, r), evaluate(b, r));
      prop_assert_eq!(evaluate(-a - 1e-9, r), evaluate(-b - 1e-9, r));
    }
  }
}
