//! Rule-based compound analyzer.
//!
//! Sums per-word valences from a lexicon, adjusted by the words around them
//! (boosters, dampeners, negations, a contrastive "but"), by ALL-CAPS
//! emphasis and by exclamation/question marks, then squashes the sum into
//! -1..=1. It must see the original text: casing and punctuation are signal.

use std::collections::{HashMap, HashSet};

use crate::{
  analyzer::{PolarityAnalyzer, PolarityScore},
  lexicon::{BOOSTERS, NEGATORS, VALENCES},
};

/// Added to a shouted lexicon word (or booster) when the text mixes case.
const CAPS_INCR: f64 = 0.733;
/// Applied to a valence once per negation in the three preceding tokens.
const NEGATION_SCALAR: f64 = -0.74;
/// Booster influence by distance (1, 2, 3 tokens back).
const BOOSTER_DECAY: [f64; 3] = [1.0, 0.95, 0.9];
const BUT_BEFORE: f64 = 0.5;
const BUT_AFTER: f64 = 1.5;
const EXCLAMATION_INCR: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const QUESTION_INCR: f64 = 0.18;
const QUESTION_CAP: f64 = 0.96;
/// Normalization constant approximating the maximum expected sum.
const ALPHA: f64 = 15.0;

struct Token<'a> {
  raw:   &'a str,
  lower: String,
}

impl Token<'_> {
  /// Two or more letters, all uppercase.
  fn is_shouted(&self) -> bool {
    let letters: Vec<char> = self.raw.chars().filter(|c| c.is_alphabetic()).collect();
    letters.len() > 1 && letters.iter().all(|c| c.is_uppercase())
  }
}

pub struct RuleBasedAnalyzer {
  valences: HashMap<String, f64>,
  boosters: HashMap<String, f64>,
  negators: HashSet<String>,
}

impl Default for RuleBasedAnalyzer {
  fn default() -> Self {
    Self {
      valences: VALENCES.iter().map(|(w, v)| ((*w).to_owned(), *v)).collect(),
      boosters: BOOSTERS.iter().map(|(w, v)| ((*w).to_owned(), *v)).collect(),
      negators: NEGATORS.iter().map(|w| (*w).to_owned()).collect(),
    }
  }
}

impl RuleBasedAnalyzer {
  pub fn new() -> Self { Self::default() }

  /// Add or override a lexicon entry. `valence` is on the -4..=4 scale.
  pub fn insert(&mut self, word: &str, valence: f64) {
    self.valences.insert(word.to_lowercase(), valence);
  }

  fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
    text
      .split_whitespace()
      .filter_map(|word| {
        if self.valences.contains_key(word) {
          return Some(word);
        }
        let stripped =
          word.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'');
        (!stripped.is_empty()).then_some(stripped)
      })
      .map(|raw| Token { raw, lower: raw.to_lowercase() })
      .collect()
  }

  fn valence_of(&self, token: &Token<'_>) -> Option<f64> {
    self
      .valences
      .get(token.raw)
      .or_else(|| self.valences.get(&token.lower))
      .copied()
  }

  fn is_negator(&self, token: &Token<'_>) -> bool {
    self.negators.contains(&token.lower) || token.lower.contains("n't")
  }

  /// Valence of the token at `i` after its own emphasis and the effect of
  /// the three tokens before it.
  fn contextual_valence(
    &self,
    tokens:    &[Token<'_>],
    i:         usize,
    base:      f64,
    caps_diff: bool,
  ) -> f64 {
    let mut valence = base;
    if caps_diff && tokens[i].is_shouted() {
      valence += CAPS_INCR.copysign(valence);
    }

    for (distance, decay) in BOOSTER_DECAY.iter().enumerate() {
      let Some(j) = i.checked_sub(distance + 1) else { break };
      let prev = &tokens[j];
      if let Some(&incr) = self.boosters.get(&prev.lower) {
        let mut scalar = if valence < 0.0 { -incr } else { incr };
        if caps_diff && prev.is_shouted() {
          scalar += CAPS_INCR.copysign(scalar);
        }
        valence += scalar * decay;
      }
      if self.is_negator(prev) {
        valence *= NEGATION_SCALAR;
      }
    }

    valence
  }

  fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = text.matches('?').count();
    let question_emphasis = match questions {
      0 | 1 => 0.0,
      2 | 3 => questions as f64 * QUESTION_INCR,
      _ => QUESTION_CAP,
    };
    exclamations as f64 * EXCLAMATION_INCR + question_emphasis
  }

  /// Raw valence sum before normalization.
  fn valence_sum(&self, text: &str) -> f64 {
    let tokens = self.tokenize(text);
    let shouted = tokens.iter().filter(|t| t.is_shouted()).count();
    let caps_diff = shouted > 0 && shouted < tokens.len();

    let mut valences: Vec<f64> = tokens
      .iter()
      .enumerate()
      .map(|(i, token)| {
        if self.boosters.contains_key(&token.lower) {
          return 0.0;
        }
        self
          .valence_of(token)
          .map(|base| self.contextual_valence(&tokens, i, base, caps_diff))
          .unwrap_or(0.0)
      })
      .collect();

    if let Some(but) = tokens.iter().position(|t| t.lower == "but") {
      for (i, v) in valences.iter_mut().enumerate() {
        if i < but {
          *v *= BUT_BEFORE;
        } else if i > but {
          *v *= BUT_AFTER;
        }
      }
    }

    let sum: f64 = valences.iter().sum();
    if sum == 0.0 {
      return 0.0;
    }
    sum + Self::punctuation_emphasis(text).copysign(sum)
  }
}

impl PolarityAnalyzer for RuleBasedAnalyzer {
  fn score(&self, text: &str) -> PolarityScore {
    let sum = self.valence_sum(text);
    let compound = (sum / (sum * sum + ALPHA).sqrt()).clamp(-1.0, 1.0);
    PolarityScore { polarity: compound, subjectivity: None }
  }
}
