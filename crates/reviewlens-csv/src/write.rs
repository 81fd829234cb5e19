//! [`RawReview`] / [`ScoredReview`] → CSV encoding.

use std::io;

use reviewlens_core::{input::RawReview, review::ScoredReview};
use serde::Serialize;

use crate::{error::Result, read::INPUT_HEADERS};

/// Header row of the analysis output, in column order.
pub const ANALYSIS_HEADERS: [&str; 11] = [
  "Review Text",
  "Reviewer Name",
  "Product Name",
  "Date",
  "Rating",
  "Sentiment",
  "Confidence",
  "VADER_Score",
  "TextBlob_Polarity",
  "Subjectivity",
  "Sentiment vs Rating Agreement",
];

#[derive(Serialize)]
struct AnalysisRow<'a> {
  review_text:   &'a str,
  reviewer_name: &'a str,
  product_name:  &'a str,
  date:          &'a str,
  rating:        f64,
  sentiment:     &'a str,
  /// `NN.NN%`.
  confidence:    String,
  vader_score:   f64,
  polarity:      f64,
  subjectivity:  f64,
  agreement:     &'a str,
}

impl<'a> From<&'a ScoredReview> for AnalysisRow<'a> {
  fn from(r: &'a ScoredReview) -> Self {
    Self {
      review_text:   &r.input.review_text,
      reviewer_name: &r.input.reviewer_name,
      product_name:  &r.input.product_name,
      date:          &r.input.date,
      rating:        r.input.rating,
      sentiment:     r.analysis.sentiment.as_ref(),
      confidence:    format!("{:.2}%", r.analysis.confidence),
      vader_score:   r.analysis.compound,
      polarity:      r.analysis.polarity,
      subjectivity:  r.analysis.subjectivity,
      agreement:     r.agreement.as_ref(),
    }
  }
}

/// Headers are written explicitly so an empty batch still yields a header
/// row.
fn writer<W: io::Write>(w: W) -> csv::Writer<W> {
  csv::WriterBuilder::new().has_headers(false).from_writer(w)
}

pub(crate) fn write_reviews<W: io::Write>(w: W, reviews: &[RawReview]) -> Result<()> {
  let mut wtr = writer(w);
  wtr.write_record(INPUT_HEADERS)?;
  for review in reviews {
    wtr.serialize(review)?;
  }
  wtr.flush()?;
  Ok(())
}

pub(crate) fn write_analysis<W: io::Write>(w: W, reviews: &[ScoredReview]) -> Result<()> {
  let mut wtr = writer(w);
  wtr.write_record(ANALYSIS_HEADERS)?;
  for review in reviews {
    wtr.serialize(AnalysisRow::from(review))?;
  }
  wtr.flush()?;
  tracing::debug!(count = reviews.len(), "wrote analysis rows");
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_batches_still_get_headers() {
    let mut buf = Vec::new();
    write_analysis(&mut buf, &[]).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), format!("{}\n", ANALYSIS_HEADERS.join(",")));

    let mut buf = Vec::new();
    write_reviews(&mut buf, &[]).unwrap();
    assert_eq!(
      String::from_utf8(buf).unwrap(),
      "review_text,reviewer_name,product_name,date,rating\n"
    );
  }

  #[test]
  fn text_with_commas_and_quotes_is_quoted() {
    let mut buf = Vec::new();
    let review = RawReview {
      review_text:   "Nice design but a bit \"expensive\", sadly.".into(),
      reviewer_name: "Maria Garcia".into(),
      product_name:  "Smart Speaker".into(),
      date:          "2025-02-02".into(),
      rating:        3.0,
    };
    write_reviews(&mut buf, &[review]).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.contains("\"Nice design but a bit \"\"expensive\"\", sadly.\""), "{text}");
  }
}
