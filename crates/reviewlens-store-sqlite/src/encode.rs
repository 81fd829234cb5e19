//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Review dates are stored as `YYYY-MM-DD` so that string comparison orders
//! them chronologically. Timestamps are RFC 3339 strings. Labels are stored
//! by their `Display` form.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use reviewlens_core::review::{
  Agreement, Review, ReviewId, Sentiment, SentimentAnalysis, fuse,
};

use crate::{Error, Result};

// ─── Dates ────────────────────────────────────────────────────────────────────

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn encode_date(d: NaiveDate) -> String { d.format(DATE_FORMAT).to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, DATE_FORMAT)
    .map_err(|_| Error::Decode { column: "review_date", value: s.to_owned() })
}

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|_| Error::Decode { column: "created_at", value: s.to_owned() })
}

// ─── Labels ───────────────────────────────────────────────────────────────────

pub fn decode_sentiment(s: &str) -> Result<Sentiment> {
  Sentiment::from_str(s)
    .map_err(|_| Error::Decode { column: "sentiment", value: s.to_owned() })
}

pub fn decode_agreement(s: &str) -> Result<Agreement> {
  Agreement::from_str(s).map_err(|_| Error::Decode {
    column: "sentiment_rating_agreement",
    value:  s.to_owned(),
  })
}

// ─── Review rows ──────────────────────────────────────────────────────────────

/// Select list matching [`RawReview::from_row`]. Expects the aliases `r`
/// (reviews), `rv` (reviewers) and `p` (products).
pub const REVIEW_COLUMNS: &str = "
  r.id, r.review_text, rv.name, p.name, r.rating, r.review_date,
  r.sentiment, r.confidence, r.vader_score, r.textblob_polarity,
  r.subjectivity, r.sentiment_rating_agreement, r.created_at";

/// A review row as read from SQLite, before decoding.
pub struct RawReview {
  pub id:                i64,
  pub review_text:       String,
  pub reviewer_name:     String,
  pub product_name:      String,
  pub rating:            f64,
  pub review_date:       String,
  pub sentiment:         String,
  pub confidence:        f64,
  pub vader_score:       f64,
  pub textblob_polarity: f64,
  pub subjectivity:      f64,
  pub agreement:         String,
  pub created_at:        String,
}

impl RawReview {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:                row.get(0)?,
      review_text:       row.get(1)?,
      reviewer_name:     row.get(2)?,
      product_name:      row.get(3)?,
      rating:            row.get(4)?,
      review_date:       row.get(5)?,
      sentiment:         row.get(6)?,
      confidence:        row.get(7)?,
      vader_score:       row.get(8)?,
      textblob_polarity: row.get(9)?,
      subjectivity:      row.get(10)?,
      agreement:         row.get(11)?,
      created_at:        row.get(12)?,
    })
  }

  pub fn into_review(self) -> Result<Review> {
    let sentiment = decode_sentiment(&self.sentiment)?;
    Ok(Review {
      id:            ReviewId(self.id),
      review_text:   self.review_text,
      reviewer_name: self.reviewer_name,
      product_name:  self.product_name,
      rating:        self.rating,
      review_date:   decode_date(&self.review_date)?,
      analysis:      SentimentAnalysis {
        sentiment,
        confidence: self.confidence,
        compound: self.vader_score,
        polarity: self.textblob_polarity,
        subjectivity: self.subjectivity,
        weighted: fuse(self.vader_score, self.textblob_polarity),
      },
      agreement:     decode_agreement(&self.agreement)?,
      created_at:    decode_dt(&self.created_at)?,
    })
  }
}
