//! CSV → [`RawReview`] decoding.

use std::io;

use reviewlens_core::input::{RawReview, validate_date, validate_rating};
use serde::Deserialize;

use crate::error::{Error, Result};

/// Columns every input file must carry.
pub const INPUT_HEADERS: [&str; 5] =
  ["review_text", "reviewer_name", "product_name", "date", "rating"];

/// One row exactly as it appears in the file; validation happens afterwards.
#[derive(Deserialize)]
struct InputRow {
  review_text:   String,
  reviewer_name: String,
  product_name:  String,
  date:          String,
  rating:        String,
}

impl InputRow {
  fn into_review(self) -> RawReview {
    RawReview {
      review_text:   self.review_text.trim().to_owned(),
      reviewer_name: self.reviewer_name.trim().to_owned(),
      product_name:  self.product_name.trim().to_owned(),
      date:          validate_date(&self.date),
      rating:        validate_rating(&self.rating),
    }
  }
}

pub(crate) fn read<R: io::Read>(rdr: R) -> Result<Vec<RawReview>> {
  let mut reader = csv::ReaderBuilder::new()
    .trim(csv::Trim::Headers)
    .from_reader(rdr);

  let headers = reader.headers()?;
  let missing: Vec<String> = INPUT_HEADERS
    .iter()
    .filter(|&&required| !headers.iter().any(|h| h == required))
    .map(|&required| required.to_owned())
    .collect();
  if !missing.is_empty() {
    return Err(Error::MissingFields(missing));
  }

  let mut reviews = Vec::new();
  for (index, row) in reader.deserialize::<InputRow>().enumerate() {
    // Line 1 is the header.
    let line = index + 2;
    let review = match row {
      Ok(row) => row.into_review(),
      Err(err) => {
        tracing::warn!(line, %err, "skipping malformed row");
        continue;
      }
    };
    if review.review_text.is_empty() {
      tracing::debug!(line, "skipping row with empty review text");
      continue;
    }
    reviews.push(review);
  }

  tracing::debug!(count = reviews.len(), "read reviews");
  Ok(reviews)
}
