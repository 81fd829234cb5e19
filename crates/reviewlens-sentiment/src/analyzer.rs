//! The capability every polarity analyzer provides.

/// What an analyzer says about a piece of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarityScore {
  /// Compound or polarity score in -1..=1.
  pub polarity:     f64,
  /// 0..=1 for analyzers that measure subjectivity.
  pub subjectivity: Option<f64>,
}

/// A lexical or statistical polarity analyzer.
///
/// Implementations are pure: the same text always yields the same score.
pub trait PolarityAnalyzer {
  fn score(&self, text: &str) -> PolarityScore;
}

impl<A: PolarityAnalyzer + ?Sized> PolarityAnalyzer for &A {
  fn score(&self, text: &str) -> PolarityScore { (**self).score(text) }
}

impl<A: PolarityAnalyzer + ?Sized> PolarityAnalyzer for Box<A> {
  fn score(&self, text: &str) -> PolarityScore { (**self).score(text) }
}
