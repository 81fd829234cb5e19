//! Built-in word tables for the two analyzers.
//!
//! Lukewarm review vocabulary ("okay", "fine", "decent", "average") is either
//! absent from the valence table or carries a small polarity in the pattern
//! table. Such reviews should land near zero.

// ─── Rule-based analyzer ─────────────────────────────────────────────────────

/// Word and emoticon valences on a -4..=4 scale. Keys are lowercase except
/// for emoticons, which are matched verbatim first.
pub(crate) const VALENCES: &[(&str, f64)] = &[
  // positive
  ("amazing", 2.8),
  ("amazed", 2.2),
  ("awesome", 3.1),
  ("beautiful", 2.9),
  ("best", 3.2),
  ("better", 1.9),
  ("brilliant", 2.8),
  ("comfortable", 1.5),
  ("convenient", 1.5),
  ("cool", 1.3),
  ("delight", 2.9),
  ("delighted", 2.9),
  ("durable", 1.3),
  ("easy", 1.9),
  ("effective", 2.1),
  ("enjoy", 2.2),
  ("enjoyed", 2.3),
  ("excellent", 3.2),
  ("exceeds", 1.6),
  ("fantastic", 2.6),
  ("favorite", 2.0),
  ("fun", 2.3),
  ("glad", 2.0),
  ("good", 1.9),
  ("great", 3.1),
  ("happy", 2.7),
  ("helpful", 1.8),
  ("impressed", 2.1),
  ("impressive", 2.3),
  ("improvement", 2.0),
  ("intuitive", 1.3),
  ("like", 1.5),
  ("love", 3.2),
  ("loved", 2.9),
  ("loves", 2.7),
  ("nice", 1.8),
  ("outstanding", 3.0),
  ("perfect", 2.7),
  ("perfectly", 3.2),
  ("pleased", 1.9),
  ("pleasant", 2.3),
  ("recommend", 1.5),
  ("recommended", 1.6),
  ("reliable", 1.9),
  ("satisfied", 1.8),
  ("smooth", 1.2),
  ("solid", 1.2),
  ("special", 1.7),
  ("superb", 3.1),
  ("thanks", 1.9),
  ("well", 1.1),
  ("win", 2.8),
  ("wonderful", 2.7),
  ("worth", 0.9),
  ("wow", 2.8),
  // negative
  ("angry", -2.3),
  ("annoying", -1.7),
  ("awful", -2.0),
  ("bad", -2.5),
  ("boring", -1.3),
  ("broke", -1.8),
  ("broken", -1.4),
  ("cheap", -0.6),
  ("complaint", -1.5),
  ("defective", -1.9),
  ("disappointed", -1.9),
  ("disappointing", -2.2),
  ("disappointment", -2.3),
  ("expensive", -0.7),
  ("fail", -2.3),
  ("failed", -2.3),
  ("fails", -1.8),
  ("faulty", -1.8),
  ("flimsy", -1.3),
  ("frustrated", -2.4),
  ("frustrating", -2.1),
  ("garbage", -2.3),
  ("hate", -2.7),
  ("horrible", -2.5),
  ("junk", -1.4),
  ("lack", -1.3),
  ("lacking", -1.3),
  ("lacks", -1.3),
  ("mediocre", -1.0),
  ("poor", -2.1),
  ("poorly", -1.9),
  ("problem", -1.7),
  ("problems", -1.7),
  ("regret", -1.9),
  ("rubbish", -1.7),
  ("sad", -2.1),
  ("slow", -1.0),
  ("terrible", -2.1),
  ("ugly", -2.3),
  ("uncomfortable", -1.6),
  ("unhappy", -1.8),
  ("unhelpful", -1.8),
  ("unreliable", -1.8),
  ("useless", -1.8),
  ("waste", -1.8),
  ("worse", -2.1),
  ("worst", -3.1),
  ("wrong", -2.1),
  // emoticons
  (":)", 2.0),
  (":-)", 2.2),
  (":D", 2.3),
  (":-D", 2.3),
  (";)", 0.9),
  ("<3", 1.9),
  (":(", -1.9),
  (":-(", -1.5),
  (":'(", -2.2),
  (":/", -1.4),
];

/// Booster (positive) and dampener (negative) increments.
pub(crate) const BOOSTER_INCR: f64 = 0.293;
pub(crate) const BOOSTER_DECR: f64 = -0.293;

pub(crate) const BOOSTERS: &[(&str, f64)] = &[
  ("absolutely", BOOSTER_INCR),
  ("amazingly", BOOSTER_INCR),
  ("completely", BOOSTER_INCR),
  ("deeply", BOOSTER_INCR),
  ("especially", BOOSTER_INCR),
  ("exceptionally", BOOSTER_INCR),
  ("extremely", BOOSTER_INCR),
  ("fully", BOOSTER_INCR),
  ("greatly", BOOSTER_INCR),
  ("highly", BOOSTER_INCR),
  ("hugely", BOOSTER_INCR),
  ("incredibly", BOOSTER_INCR),
  ("particularly", BOOSTER_INCR),
  ("quite", BOOSTER_INCR),
  ("really", BOOSTER_INCR),
  ("remarkably", BOOSTER_INCR),
  ("so", BOOSTER_INCR),
  ("super", BOOSTER_INCR),
  ("thoroughly", BOOSTER_INCR),
  ("totally", BOOSTER_INCR),
  ("truly", BOOSTER_INCR),
  ("utterly", BOOSTER_INCR),
  ("very", BOOSTER_INCR),
  ("almost", BOOSTER_DECR),
  ("barely", BOOSTER_DECR),
  ("hardly", BOOSTER_DECR),
  ("kinda", BOOSTER_DECR),
  ("marginally", BOOSTER_DECR),
  ("occasionally", BOOSTER_DECR),
  ("partly", BOOSTER_DECR),
  ("scarcely", BOOSTER_DECR),
  ("slightly", BOOSTER_DECR),
  ("somewhat", BOOSTER_DECR),
];

pub(crate) const NEGATORS: &[&str] = &[
  "aint", "arent", "cannot", "cant", "couldnt", "didnt", "doesnt", "dont",
  "hadnt", "hasnt", "havent", "isnt", "neither", "never", "no", "nobody",
  "none", "nope", "nor", "not", "nothing", "nowhere", "rarely", "seldom",
  "shouldnt", "wasnt", "werent", "without", "wont", "wouldnt",
];

// ─── Pattern analyzer ────────────────────────────────────────────────────────

/// `(word, polarity, subjectivity)`.
pub(crate) const ASSESSMENTS: &[(&str, f64, f64)] = &[
  ("advanced", 0.4, 0.6),
  ("amazing", 0.6, 0.9),
  ("annoying", -0.8, 0.9),
  ("average", -0.15, 0.4),
  ("awesome", 1.0, 1.0),
  ("awful", -1.0, 1.0),
  ("bad", -0.7, 0.67),
  ("basic", 0.0, 0.125),
  ("beautiful", 0.85, 1.0),
  ("best", 1.0, 0.3),
  ("better", 0.5, 0.5),
  ("boring", -1.0, 1.0),
  ("broken", -0.4, 0.4),
  ("cheap", 0.4, 0.7),
  ("comfortable", 0.4, 0.7),
  ("cool", 0.35, 0.65),
  ("decent", 0.1, 0.5),
  ("defective", -0.5, 0.5),
  ("disappointed", -0.75, 0.75),
  ("disappointing", -0.6, 0.7),
  ("durable", 0.3, 0.5),
  ("easy", 0.43, 0.83),
  ("excellent", 1.0, 1.0),
  ("expensive", -0.5, 0.7),
  ("fantastic", 0.4, 0.9),
  ("few", -0.2, 0.1),
  ("fine", 0.15, 0.5),
  ("flimsy", -0.4, 0.6),
  ("frustrating", -0.4, 0.7),
  ("good", 0.7, 0.6),
  ("great", 0.8, 0.75),
  ("happy", 0.8, 1.0),
  ("helpful", 0.3, 0.4),
  ("horrible", -1.0, 1.0),
  ("impressive", 1.0, 1.0),
  ("intuitive", 0.3, 0.6),
  ("lovely", 0.5, 0.75),
  ("mediocre", -0.3, 0.6),
  ("nice", 0.6, 1.0),
  ("okay", 0.1, 0.5),
  ("outstanding", 0.5, 0.7),
  ("perfect", 1.0, 1.0),
  ("perfectly", 1.0, 1.0),
  ("pleased", 0.5, 0.7),
  ("poor", -0.4, 0.6),
  ("premium", 0.2, 0.5),
  ("reliable", 0.2, 0.45),
  ("sad", -0.5, 1.0),
  ("satisfied", 0.5, 1.0),
  ("slow", -0.3, 0.4),
  ("special", 0.36, 0.57),
  ("superb", 1.0, 1.0),
  ("terrible", -1.0, 1.0),
  ("ugly", -0.7, 1.0),
  ("uncomfortable", -0.5, 0.9),
  ("unhappy", -0.6, 0.9),
  ("unhelpful", -0.5, 0.6),
  ("unreliable", -0.5, 0.6),
  ("useless", -0.5, 0.2),
  ("well", 0.3, 0.35),
  ("wonderful", 1.0, 1.0),
  ("worse", -0.4, 0.6),
  ("worst", -1.0, 1.0),
  ("wrong", -0.5, 0.9),
];

/// Multipliers applied to the word that follows.
pub(crate) const INTENSIFIERS: &[(&str, f64)] = &[
  ("absolutely", 1.5),
  ("extremely", 1.5),
  ("highly", 1.3),
  ("incredibly", 1.4),
  ("pretty", 1.1),
  ("quite", 1.1),
  ("really", 1.3),
  ("so", 1.3),
  ("somewhat", 0.8),
  ("super", 1.3),
  ("too", 1.3),
  ("totally", 1.3),
  ("very", 1.3),
];

pub(crate) const PATTERN_NEGATIONS: &[&str] = &["never", "no", "not"];
