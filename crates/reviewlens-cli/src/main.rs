//! `reviewlens`: score product reviews, store them, and report on them.
//!
//! # Usage
//!
//! ```text
//! reviewlens score "Excellent product! Great battery life."
//! reviewlens generate --num 100 --days 30
//! reviewlens analyze input/generated_reviews.csv
//! reviewlens query --product "Smart Watch X1"
//! reviewlens pipeline
//! ```
//!
//! Logs go to stderr (`RUST_LOG` overrides the `info` default); reports go
//! to stdout.

mod pipeline;
mod report;
mod settings;

use std::{
  io::{self, BufRead as _, Write as _},
  path::{Path, PathBuf},
};

use anyhow::Context as _;
use chrono::{Days, Local, NaiveDate};
use clap::{ArgGroup, Parser, Subcommand};
use rand::{SeedableRng, rngs::StdRng};
use reviewlens_core::store::ReviewStore;
use reviewlens_generate::ReviewGenerator;
use reviewlens_sentiment::SentimentScorer;
use reviewlens_store_sqlite::SqliteStore;
use settings::{Settings, expand_tilde};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Scored when `score` is given no text.
const SAMPLE_REVIEWS: [&str; 5] = [
  "This product is absolutely amazing! I couldn't be happier with my purchase.",
  "The quality is okay, but the price is a bit high for what you get.",
  "While there are some minor issues, overall I'm satisfied with the service.",
  "Unfortunately, this was a complete waste of money. Very disappointing.",
  "The product has both good and bad aspects, but it serves its purpose.",
];

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "reviewlens", version, about = "Review sentiment analysis and monitoring")]
struct Cli {
  /// Path to a TOML config file (default: ./reviewlens.toml if present).
  #[arg(short, long, global = true, value_name = "FILE")]
  config: Option<PathBuf>,

  /// SQLite database file; overrides `store_path` from config.
  #[arg(long, global = true, value_name = "FILE")]
  store: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Score review texts without storing them.
  Score {
    /// Texts to score; the built-in samples are used when none are given.
    texts: Vec<String>,

    /// Read one review per line from stdin.
    #[arg(long, conflicts_with = "texts")]
    stdin: bool,
  },

  /// Score a CSV batch, write the analysis CSV, and persist every review.
  Analyze {
    /// Input CSV with review_text, reviewer_name, product_name, date, rating.
    input: PathBuf,

    /// Analysis CSV path (default: <output_dir>/<input stem>_analysis.csv).
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
  },

  /// Write a synthetic review batch.
  Generate {
    /// Number of reviews to generate.
    #[arg(long, default_value_t = 100)]
    num: usize,

    /// Spread review dates over this many days before today.
    #[arg(long, default_value_t = 30)]
    days: u64,

    /// Output CSV (default: <input_dir>/generated_reviews.csv).
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Seed for a reproducible batch.
    #[arg(long)]
    seed: Option<u64>,
  },

  /// Report on stored reviews.
  #[command(group(
    ArgGroup::new("report")
      .required(true)
      .multiple(true)
      .args(["recent", "product", "reviewer", "trends"])
  ))]
  Query {
    /// Reviews from the last DAYS days.
    #[arg(long, value_name = "DAYS")]
    recent: Option<u64>,

    /// Summary and most recent reviews for a product.
    #[arg(long, value_name = "NAME")]
    product: Option<String>,

    /// Review history of a reviewer.
    #[arg(long, value_name = "NAME")]
    reviewer: Option<String>,

    /// Daily sentiment trend over the last DAYS days.
    #[arg(long, value_name = "DAYS")]
    trends: Option<u64>,

    /// Emit JSON instead of tables.
    #[arg(long)]
    json: bool,
  },

  /// Run the daily batch: generate, then analyze and persist.
  Pipeline {
    /// Seed for a reproducible batch.
    #[arg(long)]
    seed: Option<u64>,
  },
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_writer(io::stderr)
    .init();

  let cli = Cli::parse();

  let mut settings =
    Settings::load(cli.config.as_deref()).context("failed to load configuration")?;
  if let Some(store) = &cli.store {
    settings.store_path = expand_tilde(store);
  }

  let today = Local::now().date_naive();

  match cli.command {
    Command::Score { texts, stdin } => score(texts, stdin),
    Command::Analyze { input, output } => {
      let output = output.unwrap_or_else(|| default_analysis_path(&settings, &input));
      analyze(&settings, &input, &output)
    }
    Command::Generate { num, days, output, seed } => {
      let output = output.unwrap_or_else(|| settings.input_dir.join("generated_reviews.csv"));
      generate(num, days, &output, seed, today)
    }
    Command::Query { recent, product, reviewer, trends, json } => {
      let store = open_store(&settings)?;
      let query = Query { recent, product, reviewer, trends, json };
      query.run(&store, today)
    }
    Command::Pipeline { seed } => {
      let mut store = open_store(&settings)?;
      let mut rng = rng(seed);
      let report = pipeline::run_daily(
        &mut store,
        &SentimentScorer::default(),
        &settings,
        &mut rng,
        today,
      )?;
      println!("Processed {} reviews.", report.persisted);
      print_batch_summaries(&store, &report)
    }
  }
}

// ─── Commands ─────────────────────────────────────────────────────────────────

fn open_store(settings: &Settings) -> anyhow::Result<SqliteStore> {
  let path = &settings.store_path;
  if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("failed to create {}", parent.display()))?;
  }
  SqliteStore::open(path).with_context(|| format!("failed to open store at {}", path.display()))
}

fn rng(seed: Option<u64>) -> StdRng {
  seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn default_analysis_path(settings: &Settings, input: &Path) -> PathBuf {
  let stem = input
    .file_stem()
    .map_or_else(|| "reviews".into(), |s| s.to_string_lossy());
  settings.output_dir.join(format!("{stem}_analysis.csv"))
}

fn score(texts: Vec<String>, stdin: bool) -> anyhow::Result<()> {
  let texts: Vec<String> = if stdin {
    io::stdin()
      .lock()
      .lines()
      .collect::<io::Result<Vec<_>>>()
      .context("failed to read stdin")?
      .into_iter()
      .filter(|line| !line.trim().is_empty())
      .collect()
  } else if texts.is_empty() {
    SAMPLE_REVIEWS.iter().map(|s| (*s).to_owned()).collect()
  } else {
    texts
  };

  let scorer = SentimentScorer::default();
  let mut out = io::stdout().lock();
  for text in &texts {
    report::write_score(&mut out, text, &scorer.score(text))?;
  }
  Ok(())
}

fn analyze(settings: &Settings, input: &Path, output: &Path) -> anyhow::Result<()> {
  let mut store = open_store(settings)?;
  let report =
    pipeline::analyze_and_persist(&mut store, &SentimentScorer::default(), input, Some(output))?;

  println!(
    "Analyzed {} reviews: {} saved, {} skipped.",
    report.analyzed, report.persisted, report.failed
  );
  println!("Analysis written to: {}", output.display());
  print_batch_summaries(&store, &report)
}

fn print_batch_summaries(store: &SqliteStore, report: &pipeline::BatchReport) -> anyhow::Result<()> {
  let mut out = io::stdout().lock();
  for product in &report.products {
    let summary = store.summary_by_product(product)?;
    report::write_batch_summary(&mut out, &summary)?;
  }
  Ok(())
}

fn generate(
  num: usize,
  days: u64,
  output: &Path,
  seed: Option<u64>,
  today: NaiveDate,
) -> anyhow::Result<()> {
  let start = today.checked_sub_days(Days::new(days)).unwrap_or(today);
  let batch = ReviewGenerator::new().generate_dataset(num, start, today, &mut rng(seed));

  if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("failed to create {}", parent.display()))?;
  }
  reviewlens_csv::write_reviews(output, &batch)
    .with_context(|| format!("failed to write {}", output.display()))?;

  println!("Generated {num} reviews and saved to: {}", output.display());
  Ok(())
}

// ─── Query ────────────────────────────────────────────────────────────────────

struct Query {
  recent:   Option<u64>,
  product:  Option<String>,
  reviewer: Option<String>,
  trends:   Option<u64>,
  json:     bool,
}

impl Query {
  fn run(&self, store: &SqliteStore, today: NaiveDate) -> anyhow::Result<()> {
    let since = |days: u64| today.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN);
    let mut out = io::stdout().lock();

    if let Some(days) = self.recent {
      let reviews = store.query_recent(since(days))?;
      if self.json {
        report::write_json(&mut out, &reviews)?;
      } else {
        writeln!(out, "\nRecent reviews (last {days} days):")?;
        report::recent_table(&reviews).render(&mut out)?;
      }
    }

    if let Some(name) = &self.product {
      let summary = store.summary_by_product(name)?;
      let reviews = store.query_by_product(name)?;
      if self.json {
        report::write_json(&mut out, &report::ProductReport::new(&summary, &reviews))?;
      } else {
        report::write_product_report(&mut out, &summary, &reviews)?;
      }
    }

    if let Some(name) = &self.reviewer {
      let reviews = store.query_by_reviewer(name)?;
      if self.json {
        report::write_json(&mut out, &reviews)?;
      } else if reviews.is_empty() {
        writeln!(out, "No reviews found for reviewer: {name}")?;
      } else {
        writeln!(out, "\nReview history for: {name}")?;
        report::reviewer_table(&reviews).render(&mut out)?;
      }
    }

    if let Some(days) = self.trends {
      let trends = store.trend_by_day(since(days))?;
      if self.json {
        report::write_json(&mut out, &trends)?;
      } else {
        writeln!(out, "\nSentiment trends (last {days} days):")?;
        report::trend_table(&trends).render(&mut out)?;
      }
    }

    Ok(())
  }
}
