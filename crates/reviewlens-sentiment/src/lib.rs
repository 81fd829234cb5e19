//! Sentiment scoring for review text.
//!
//! Two independent analyzers look at each review: a rule-based analyzer over
//! the original text (it reads casing, punctuation, negation and emoticons)
//! and a pattern analyzer over the normalized text. [`SentimentScorer`] fuses
//! the two into one label and confidence.
//!
//! ```
//! use reviewlens_core::review::Sentiment;
//! use reviewlens_sentiment::SentimentScorer;
//!
//! let scorer = SentimentScorer::default();
//! let analysis = scorer.score("Excellent product! Great battery life.");
//! assert_eq!(analysis.sentiment, Sentiment::Positive);
//! ```

pub mod analyzer;
mod lexicon;
pub mod normalize;
pub mod pattern;
pub mod rule_based;
pub mod scorer;

pub use analyzer::{PolarityAnalyzer, PolarityScore};
pub use normalize::normalize;
pub use pattern::PatternAnalyzer;
pub use rule_based::RuleBasedAnalyzer;
pub use scorer::SentimentScorer;
