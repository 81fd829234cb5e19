//! Pattern-lexicon analyzer: averages the polarity and subjectivity of the
//! assessed words in a text. Expects normalized input (letters and single
//! spaces only).

use std::collections::{HashMap, HashSet};

use crate::{
  analyzer::{PolarityAnalyzer, PolarityScore},
  lexicon::{ASSESSMENTS, INTENSIFIERS, PATTERN_NEGATIONS},
};

/// Polarity multiplier for a negated word.
const NEGATION_SCALAR: f64 = -0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Assessment {
  polarity:     f64,
  subjectivity: f64,
}

pub struct PatternAnalyzer {
  assessments:  HashMap<String, Assessment>,
  intensifiers: HashMap<String, f64>,
  negations:    HashSet<String>,
}

impl Default for PatternAnalyzer {
  fn default() -> Self {
    Self {
      assessments:  ASSESSMENTS
        .iter()
        .map(|(w, polarity, subjectivity)| {
          ((*w).to_owned(), Assessment { polarity: *polarity, subjectivity: *subjectivity })
        })
        .collect(),
      intensifiers: INTENSIFIERS.iter().map(|(w, k)| ((*w).to_owned(), *k)).collect(),
      negations:    PATTERN_NEGATIONS.iter().map(|w| (*w).to_owned()).collect(),
    }
  }
}

impl PatternAnalyzer {
  pub fn new() -> Self { Self::default() }

  /// Add or override an assessed word.
  pub fn insert(&mut self, word: &str, polarity: f64, subjectivity: f64) {
    self
      .assessments
      .insert(word.to_lowercase(), Assessment { polarity, subjectivity });
  }

  fn assess(&self, words: &[String], i: usize) -> Option<Assessment> {
    let mut a = *self.assessments.get(&words[i])?;

    let prev = i.checked_sub(1).map(|j| words[j].as_str());
    let intensity = prev.and_then(|p| self.intensifiers.get(p)).copied();
    if let Some(k) = intensity {
      a.polarity *= k;
      a.subjectivity *= k;
    }

    // "not good", or "not very good" with the intensifier in between.
    let negation_at = if intensity.is_some() { i.checked_sub(2) } else { i.checked_sub(1) };
    if negation_at.is_some_and(|j| self.negations.contains(&words[j])) {
      a.polarity *= NEGATION_SCALAR;
    }

    Some(a)
  }
}

impl PolarityAnalyzer for PatternAnalyzer {
  fn score(&self, text: &str) -> PolarityScore {
    let words: Vec<String> = text.split_whitespace().map(str::to_lowercase).collect();
    let assessed: Vec<Assessment> =
      (0..words.len()).filter_map(|i| self.assess(&words, i)).collect();

    if assessed.is_empty() {
      return PolarityScore { polarity: 0.0, subjectivity: Some(0.0) };
    }

    let n = assessed.len() as f64;
    let polarity = assessed.iter().map(|a| a.polarity).sum::<f64>() / n;
    let subjectivity = assessed.iter().map(|a| a.subjectivity).sum::<f64>() / n;

    PolarityScore {
      polarity:     polarity.clamp(-1.0, 1.0),
      subjectivity: Some(subjectivity.clamp(0.0, 1.0)),
    }
  }
}
