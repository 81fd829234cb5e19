//! Plain-text reports written to stdout.

use std::io::{self, Write};

use reviewlens_core::{
  review::{Review, Sentiment, SentimentAnalysis},
  store::{DailyTrend, ProductSummary},
};
use serde::Serialize;

/// Review text shown in tables is cut to this many characters.
pub const PREVIEW_CHARS: usize = 50;
/// Reviews listed under a product summary.
pub const PRODUCT_RECENT: usize = 5;

// ─── Tables ──────────────────────────────────────────────────────────────────

/// A `|`-separated table with columns padded to their widest cell.
pub struct Table {
  headers: Vec<&'static str>,
  rows:    Vec<Vec<String>>,
}

impl Table {
  pub fn new(headers: Vec<&'static str>, rows: Vec<Vec<String>>) -> Self { Self { headers, rows } }

  pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
    if self.rows.is_empty() {
      return writeln!(out, "No results found.");
    }

    let widths: Vec<usize> = (0..self.headers.len())
      .map(|i| {
        self
          .rows
          .iter()
          .map(|row| row[i].chars().count())
          .chain([self.headers[i].chars().count()])
          .max()
          .unwrap_or(0)
      })
      .collect();
    let separator = "-".repeat(widths.iter().sum::<usize>() + widths.len() * 3);

    let line = |cells: Vec<&str>| {
      cells
        .iter()
        .zip(&widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ")
    };

    writeln!(out, "{separator}")?;
    writeln!(out, "{}", line(self.headers.clone()))?;
    writeln!(out, "{separator}")?;
    for row in &self.rows {
      writeln!(out, "{}", line(row.iter().map(String::as_str).collect()))?;
    }
    writeln!(out, "{separator}")?;
    writeln!(out)
  }
}

fn rating(r: f64) -> String { format!("{r:.1}") }

pub fn recent_table(reviews: &[Review]) -> Table {
  Table::new(
    vec!["Date", "Reviewer", "Product", "Rating", "Sentiment", "Confidence", "Review Preview"],
    reviews
      .iter()
      .map(|r| {
        vec![
          r.review_date.to_string(),
          r.reviewer_name.clone(),
          r.product_name.clone(),
          rating(r.rating),
          r.analysis.sentiment.to_string(),
          format!("{:.2}", r.analysis.confidence),
          r.preview(PREVIEW_CHARS),
        ]
      })
      .collect(),
  )
}

pub fn product_table(reviews: &[Review]) -> Table {
  Table::new(
    vec!["Date", "Reviewer", "Rating", "Sentiment", "Review Preview"],
    reviews
      .iter()
      .take(PRODUCT_RECENT)
      .map(|r| {
        vec![
          r.review_date.to_string(),
          r.reviewer_name.clone(),
          rating(r.rating),
          r.analysis.sentiment.to_string(),
          r.preview(PREVIEW_CHARS),
        ]
      })
      .collect(),
  )
}

pub fn reviewer_table(reviews: &[Review]) -> Table {
  Table::new(
    vec!["Date", "Product", "Rating", "Sentiment", "Confidence", "Review Preview"],
    reviews
      .iter()
      .map(|r| {
        vec![
          r.review_date.to_string(),
          r.product_name.clone(),
          rating(r.rating),
          r.analysis.sentiment.to_string(),
          format!("{:.2}", r.analysis.confidence),
          r.preview(PREVIEW_CHARS),
        ]
      })
      .collect(),
  )
}

pub fn trend_table(trends: &[DailyTrend]) -> Table {
  Table::new(
    vec!["Date", "Total Reviews", "Positive %", "Avg Rating"],
    trends
      .iter()
      .map(|t| {
        vec![
          t.date.to_string(),
          t.total.to_string(),
          format!("{:.1}", t.positive_percentage),
          format!("{:.2}", t.avg_rating),
        ]
      })
      .collect(),
  )
}

// ─── Summaries ───────────────────────────────────────────────────────────────

/// The per-product block printed after a batch.
pub fn write_batch_summary(out: &mut impl Write, s: &ProductSummary) -> io::Result<()> {
  if s.total == 0 {
    return Ok(());
  }
  writeln!(out, "\nProduct Summary for {}:", s.product_name)?;
  writeln!(out, "Total Reviews: {}", s.total)?;
  writeln!(out, "Average Rating: {:.2}/5", s.avg_rating.unwrap_or_default())?;
  writeln!(out, "Sentiment Distribution:")?;
  writeln!(out, "- Positive: {}", s.positive)?;
  writeln!(out, "- Negative: {}", s.negative)?;
  writeln!(out, "- Neutral: {}", s.neutral)?;
  writeln!(out, "Average Sentiment Score: {:.3}", s.avg_compound.unwrap_or_default())?;
  writeln!(out, "Average Confidence: {:.2}%", s.avg_confidence.unwrap_or_default())
}

/// The product report: summary with distribution, then the most recent
/// reviews.
pub fn write_product_report(
  out: &mut impl Write,
  s: &ProductSummary,
  reviews: &[Review],
) -> io::Result<()> {
  if s.total == 0 {
    return writeln!(out, "No reviews found for product: {}", s.product_name);
  }

  writeln!(out, "\nProduct Analysis for: {}", s.product_name)?;
  writeln!(out, "{}", "=".repeat(50))?;
  writeln!(out, "Total Reviews: {}", s.total)?;
  writeln!(out, "Average Rating: {:.2}/5", s.avg_rating.unwrap_or_default())?;
  writeln!(out, "Average Confidence: {:.2}%", s.avg_confidence.unwrap_or_default())?;
  writeln!(out, "\nSentiment Distribution:")?;
  for sentiment in [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral] {
    let label = format!("{sentiment}:");
    writeln!(
      out,
      "{label:<9} {} ({:.1}%)",
      s.count(sentiment),
      s.percentage(sentiment).unwrap_or_default()
    )?;
  }

  writeln!(out, "\nMost Recent Reviews:")?;
  product_table(reviews).render(out)
}

/// One ad-hoc scoring result.
pub fn write_score(out: &mut impl Write, text: &str, a: &SentimentAnalysis) -> io::Result<()> {
  writeln!(out, "\nReview: {text}")?;
  writeln!(out, "Sentiment: {} (Confidence: {}%)", a.sentiment, a.confidence)?;
  writeln!(out, "Detailed Scores:")?;
  writeln!(out, "- VADER Compound Score: {}", a.compound)?;
  writeln!(out, "- TextBlob Polarity: {}", a.polarity)?;
  writeln!(out, "- Subjectivity: {}", a.subjectivity)?;
  writeln!(out, "{}", "-".repeat(50))
}

// ─── JSON ────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ProductReport<'a> {
  pub summary: &'a ProductSummary,
  pub recent:  &'a [Review],
}

impl<'a> ProductReport<'a> {
  pub fn new(summary: &'a ProductSummary, reviews: &'a [Review]) -> Self {
    Self { summary, recent: &reviews[..reviews.len().min(PRODUCT_RECENT)] }
  }
}

pub fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> anyhow::Result<()> {
  serde_json::to_writer_pretty(&mut *out, value)?;
  writeln!(out)?;
  Ok(())
}
