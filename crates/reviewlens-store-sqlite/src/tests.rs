//! Integration tests for `SqliteStore` against in-memory and on-disk databases.

use std::{sync::Barrier, thread};

use chrono::NaiveDate;
use reviewlens_core::{
  review::{Agreement, NewReview, Sentiment, SentimentAnalysis},
  store::ReviewStore,
};

use crate::{Error, SqliteStore};

fn store() -> SqliteStore { SqliteStore::open_in_memory().expect("in-memory store") }

fn date(y: i32, m: u32, d: u32) -> NaiveDate { NaiveDate::from_ymd_opt(y, m, d).unwrap() }

fn analysis(sentiment: Sentiment, confidence: f64, compound: f64) -> SentimentAnalysis {
  SentimentAnalysis {
    sentiment,
    confidence,
    compound,
    polarity: compound / 2.0,
    subjectivity: 0.5,
    weighted: 0.0,
  }
}

fn review(product: &str, reviewer: &str, rating: f64, day: NaiveDate) -> NewReview {
  let (sentiment, compound): (Sentiment, f64) = if rating >= 4.0 {
    (Sentiment::Positive, 0.8)
  } else if rating <= 2.0 {
    (Sentiment::Negative, -0.6)
  } else {
    (Sentiment::Neutral, 0.02)
  };
  NewReview {
    review_text:   format!("{reviewer} on {product}"),
    reviewer_name: reviewer.into(),
    product_name:  product.into(),
    rating,
    review_date:   day,
    analysis:      analysis(sentiment, compound.abs() * 100.0, compound),
    agreement:     Agreement::Yes,
  }
}

fn count(s: &SqliteStore, table: &str) -> i64 {
  s.conn
    .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |r| r.get(0))
    .unwrap()
}

// ─── Dimensions ──────────────────────────────────────────────────────────────

#[test]
fn upsert_is_idempotent() {
  let s = store();
  let a = s.upsert_product("Smart Watch X1").unwrap();
  let b = s.upsert_product("Smart Watch X1").unwrap();
  assert_eq!(a, b);
  assert_eq!(count(&s, "products"), 1);
}

#[test]
fn names_are_case_sensitive() {
  let s = store();
  let a = s.upsert_reviewer("john smith").unwrap();
  let b = s.upsert_reviewer("John Smith").unwrap();
  assert_ne!(a, b);
  assert_eq!(count(&s, "reviewers"), 2);
}

#[test]
fn concurrent_upserts_agree_on_one_row() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("reviews.db");
  // Create the schema before the writers race.
  drop(SqliteStore::open(&path).unwrap());

  let barrier = Barrier::new(2);
  let ids = thread::scope(|scope| {
    let handles: Vec<_> = (0..2)
      .map(|_| {
        scope.spawn(|| {
          let s = SqliteStore::open(&path).unwrap();
          barrier.wait();
          (0..20)
            .map(|_| s.upsert_product("Gaming Headset").unwrap())
            .collect::<Vec<_>>()
        })
      })
      .collect();
    handles
      .into_iter()
      .flat_map(|h| h.join().unwrap())
      .collect::<Vec<_>>()
  });

  assert!(ids.windows(2).all(|w| w[0] == w[1]));
  assert_eq!(count(&SqliteStore::open(&path).unwrap(), "products"), 1);
}

// ─── Facts ───────────────────────────────────────────────────────────────────

#[test]
fn inserted_review_reads_back_by_product() {
  let mut s = store();
  let new = review("Wireless Earbuds Pro", "Sarah Jones", 5.0, date(2025, 3, 4));
  let id = s.insert_review(&new).unwrap();

  let got = s.query_by_product("Wireless Earbuds Pro").unwrap();
  assert_eq!(got.len(), 1);
  let r = &got[0];
  assert_eq!(r.id, id);
  assert_eq!(r.review_text, new.review_text);
  assert_eq!(r.reviewer_name, "Sarah Jones");
  assert_eq!(r.rating, 5.0);
  assert_eq!(r.review_date, date(2025, 3, 4));
  assert_eq!(r.analysis.sentiment, Sentiment::Positive);
  assert_eq!(r.analysis.compound, 0.8);
  assert_eq!(r.agreement, Agreement::Yes);
}

#[test]
fn insert_reuses_dimension_rows() {
  let mut s = store();
  s.insert_review(&review("Smart Speaker", "Amy Chen", 4.0, date(2025, 1, 1)))
    .unwrap();
  s.insert_review(&review("Smart Speaker", "Amy Chen", 2.0, date(2025, 1, 2)))
    .unwrap();
  assert_eq!(count(&s, "products"), 1);
  assert_eq!(count(&s, "reviewers"), 1);
  assert_eq!(count(&s, "reviews"), 2);
}

#[test]
fn invalid_review_writes_nothing() {
  let mut s = store();
  let mut bad = review("Laptop Stand", "Bob Lee", 4.0, date(2025, 1, 1));
  bad.rating = 7.0;

  let err = s.insert_review(&bad).unwrap_err();
  assert!(matches!(err, Error::Validation(_)), "got {err:?}");
  assert_eq!(count(&s, "products"), 0);
  assert_eq!(count(&s, "reviewers"), 0);
  assert_eq!(count(&s, "reviews"), 0);
}

#[test]
fn failed_fact_insert_rolls_back_dimensions() {
  let mut s = store();
  s.conn
    .execute_batch(
      "CREATE TRIGGER reject_reviews BEFORE INSERT ON reviews
       BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
    )
    .unwrap();

  let err = s
    .insert_review(&review("Laptop Stand", "Bob Lee", 4.0, date(2025, 1, 1)))
    .unwrap_err();
  assert!(matches!(err, Error::Database(_)), "got {err:?}");
  assert_eq!(count(&s, "products"), 0);
  assert_eq!(count(&s, "reviewers"), 0);
  assert_eq!(count(&s, "reviews"), 0);
}

// ─── Reads ───────────────────────────────────────────────────────────────────

#[test]
fn product_reviews_are_newest_first() {
  let mut s = store();
  for day in [3, 1, 2] {
    s.insert_review(&review("Gaming Headset", "Mike Brown", 4.0, date(2025, 2, day)))
      .unwrap();
  }
  let dates: Vec<_> = s
    .query_by_product("Gaming Headset")
    .unwrap()
    .into_iter()
    .map(|r| r.review_date)
    .collect();
  assert_eq!(dates, [date(2025, 2, 3), date(2025, 2, 2), date(2025, 2, 1)]);
}

#[test]
fn unknown_names_yield_empty_results() {
  let s = store();
  assert!(s.query_by_product("Nope").unwrap().is_empty());
  assert!(s.query_by_reviewer("Nobody").unwrap().is_empty());
}

#[test]
fn reviewer_query_spans_products() {
  let mut s = store();
  s.insert_review(&review("Smart Watch X1", "Lisa Davis", 5.0, date(2025, 1, 1)))
    .unwrap();
  s.insert_review(&review("Smart Speaker", "Lisa Davis", 1.0, date(2025, 1, 5)))
    .unwrap();
  s.insert_review(&review("Smart Speaker", "Tom Wilson", 3.0, date(2025, 1, 6)))
    .unwrap();

  let got = s.query_by_reviewer("Lisa Davis").unwrap();
  let products: Vec<_> = got.iter().map(|r| r.product_name.as_str()).collect();
  assert_eq!(products, ["Smart Speaker", "Smart Watch X1"]);
}

#[test]
fn summary_of_unreviewed_product_is_zero() {
  let s = store();
  s.upsert_product("Laptop Stand").unwrap();
  for name in ["Laptop Stand", "Never Seen"] {
    let summary = s.summary_by_product(name).unwrap();
    assert_eq!(summary.total, 0);
    assert_eq!(summary.avg_rating, None);
    assert_eq!(summary.avg_confidence, None);
    assert_eq!(summary.avg_compound, None);
    assert_eq!((summary.positive, summary.negative, summary.neutral), (0, 0, 0));
  }
}

#[test]
fn summary_counts_and_averages() {
  let mut s = store();
  let day = date(2025, 4, 1);
  s.insert_review(&review("Smart Watch X1", "A", 5.0, day)).unwrap();
  s.insert_review(&review("Smart Watch X1", "B", 4.0, day)).unwrap();
  s.insert_review(&review("Smart Watch X1", "C", 1.0, day)).unwrap();
  s.insert_review(&review("Smart Watch X1", "D", 3.0, day)).unwrap();
  s.insert_review(&review("Smart Speaker", "A", 1.0, day)).unwrap();

  let summary = s.summary_by_product("Smart Watch X1").unwrap();
  assert_eq!(summary.total, 4);
  assert_eq!(summary.positive, 2);
  assert_eq!(summary.negative, 1);
  assert_eq!(summary.neutral, 1);
  assert_eq!(summary.avg_rating, Some(3.25));
  // Confidences are 80, 80, 60, 2.
  assert!((summary.avg_confidence.unwrap() - 55.5).abs() < 1e-9);
  // Compounds are 0.8, 0.8, -0.6, 0.02.
  assert!((summary.avg_compound.unwrap() - 0.255).abs() < 1e-9);
  assert_eq!(summary.percentage(Sentiment::Positive), Some(50.0));
}

#[test]
fn recent_reviews_respect_the_cutoff() {
  let mut s = store();
  s.insert_review(&review("Smart Speaker", "A", 4.0, date(2025, 5, 1))).unwrap();
  s.insert_review(&review("Smart Speaker", "B", 4.0, date(2025, 5, 10))).unwrap();
  s.insert_review(&review("Laptop Stand", "C", 2.0, date(2025, 5, 12))).unwrap();

  let recent = s.query_recent(date(2025, 5, 10)).unwrap();
  let dates: Vec<_> = recent.iter().map(|r| r.review_date).collect();
  assert_eq!(dates, [date(2025, 5, 12), date(2025, 5, 10)]);
}

#[test]
fn trend_groups_by_day() {
  let mut s = store();
  let d1 = date(2025, 6, 1);
  let d2 = date(2025, 6, 2);
  s.insert_review(&review("Smart Speaker", "A", 5.0, d1)).unwrap();
  s.insert_review(&review("Smart Speaker", "B", 1.0, d1)).unwrap();
  s.insert_review(&review("Smart Speaker", "C", 2.0, d1)).unwrap();
  s.insert_review(&review("Smart Speaker", "D", 4.0, d2)).unwrap();
  s.insert_review(&review("Smart Speaker", "E", 4.0, date(2025, 5, 1))).unwrap();

  let trend = s.trend_by_day(d1).unwrap();
  assert_eq!(trend.len(), 2);

  assert_eq!(trend[0].date, d2);
  assert_eq!(trend[0].total, 1);
  assert_eq!(trend[0].positive_percentage, 100.0);

  assert_eq!(trend[1].date, d1);
  assert_eq!(trend[1].total, 3);
  assert!((trend[1].positive_percentage - 33.3).abs() < 1e-9);
  assert!((trend[1].avg_rating - 2.67).abs() < 1e-9);
}

#[test]
fn data_survives_reopen() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("reviews.db");
  {
    let mut s = SqliteStore::open(&path).unwrap();
    s.insert_review(&review("Smart Watch X1", "A", 5.0, date(2025, 1, 1)))
      .unwrap();
  }
  let s = SqliteStore::open(&path).unwrap();
  assert_eq!(s.query_by_product("Smart Watch X1").unwrap().len(), 1);
}
