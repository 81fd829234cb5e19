//! Batch glue: score a batch, persist it review by review, and the daily
//! generate-then-analyze run.

use std::{
  collections::BTreeSet,
  fs,
  path::{Path, PathBuf},
};

use anyhow::{Context as _, Result};
use chrono::{Days, NaiveDate};
use rand::Rng;
use reviewlens_core::{
  agreement,
  input::RawReview,
  review::ScoredReview,
  store::ReviewStore,
};
use reviewlens_generate::ReviewGenerator;
use reviewlens_sentiment::{PolarityAnalyzer, SentimentScorer};

use crate::settings::Settings;

/// File name of the batch written by [`generate`].
pub const DAILY_INPUT: &str = "daily_reviews.csv";
/// File name of the analysis written by [`run_daily`].
pub const DAILY_OUTPUT: &str = "daily_analysis.csv";

/// Outcome of one batch. Failures are counted, never propagated.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchReport {
  pub analyzed:  usize,
  pub persisted: usize,
  pub failed:    usize,
  /// Distinct products referenced by the batch, in name order.
  pub products:  BTreeSet<String>,
}

/// Score each review and reconcile it with its rating.
///
/// Agreement is judged on the rounded primary compound score, the value that
/// is persisted as `vader_score`.
pub fn score_batch<P, S>(scorer: &SentimentScorer<P, S>, reviews: Vec<RawReview>) -> Vec<ScoredReview>
where
  P: PolarityAnalyzer,
  S: PolarityAnalyzer,
{
  reviews
    .into_iter()
    .map(|input| {
      let analysis = scorer.score(&input.review_text);
      let agreement = agreement::evaluate(analysis.compound, input.rating);
      ScoredReview { input, analysis, agreement }
    })
    .collect()
}

/// Persist each scored review in its own transaction. A review that fails
/// validation or storage is logged and skipped.
pub fn persist<St: ReviewStore>(store: &mut St, scored: &[ScoredReview]) -> BatchReport {
  let mut report = BatchReport { analyzed: scored.len(), ..BatchReport::default() };

  for (index, review) in scored.iter().enumerate() {
    report.products.insert(review.input.product_name.clone());

    let outcome = review
      .to_new_review()
      .map_err(|err| err.to_string())
      .and_then(|new| store.insert_review(&new).map_err(|err| err.to_string()));

    match outcome {
      Ok(id) => {
        tracing::debug!(index, id = id.0, "persisted review");
        report.persisted += 1;
      }
      Err(err) => {
        tracing::warn!(index, product = %review.input.product_name, %err, "skipping review");
        report.failed += 1;
      }
    }
  }

  report
}

/// Read `input`, score it, optionally write the analysis CSV to `output`,
/// and persist every review.
///
/// Only whole-batch failures (unreadable input, unwritable output) are
/// errors; per-review failures land in the report.
pub fn analyze_and_persist<St, P, S>(
  store: &mut St,
  scorer: &SentimentScorer<P, S>,
  input: &Path,
  output: Option<&Path>,
) -> Result<BatchReport>
where
  St: ReviewStore,
  P: PolarityAnalyzer,
  S: PolarityAnalyzer,
{
  let reviews = reviewlens_csv::read_reviews(input)
    .with_context(|| format!("failed to read reviews from {}", input.display()))?;
  tracing::info!(count = reviews.len(), input = %input.display(), "analyzing batch");

  let scored = score_batch(scorer, reviews);

  if let Some(output) = output {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
      fs::create_dir_all(parent)
        .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    reviewlens_csv::write_analysis(output, &scored)
      .with_context(|| format!("failed to write analysis to {}", output.display()))?;
  }

  let report = persist(store, &scored);
  tracing::info!(
    analyzed = report.analyzed,
    persisted = report.persisted,
    failed = report.failed,
    "batch finished"
  );
  Ok(report)
}

/// Write a synthetic batch dated within the configured window ending
/// `today` to `<input_dir>/daily_reviews.csv`.
pub fn generate<R: Rng + ?Sized>(
  settings: &Settings,
  rng: &mut R,
  today: NaiveDate,
) -> Result<PathBuf> {
  let start = today
    .checked_sub_days(Days::new(settings.daily_window_days))
    .unwrap_or(today);
  let batch = ReviewGenerator::new().generate_dataset(settings.daily_reviews, start, today, rng);

  fs::create_dir_all(&settings.input_dir)
    .with_context(|| format!("failed to create {}", settings.input_dir.display()))?;
  let path = settings.input_dir.join(DAILY_INPUT);
  reviewlens_csv::write_reviews(&path, &batch)
    .with_context(|| format!("failed to write {}", path.display()))?;

  tracing::info!(count = batch.len(), path = %path.display(), "generated batch");
  Ok(path)
}

/// The daily run: [`generate`] then [`analyze_and_persist`]. A failure of
/// either step is returned to the caller without retry.
pub fn run_daily<St, P, S, R>(
  store: &mut St,
  scorer: &SentimentScorer<P, S>,
  settings: &Settings,
  rng: &mut R,
  today: NaiveDate,
) -> Result<BatchReport>
where
  St: ReviewStore,
  P: PolarityAnalyzer,
  S: PolarityAnalyzer,
  R: Rng + ?Sized,
{
  let input = generate(settings, rng, today).context("generate step failed")?;
  let output = settings.output_dir.join(DAILY_OUTPUT);
  analyze_and_persist(store, scorer, &input, Some(&output)).context("analyze step failed")
}
