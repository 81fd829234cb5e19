//! [`SqliteStore`]: the SQLite implementation of [`ReviewStore`].

use std::{path::Path, thread, time::Duration};

use chrono::{NaiveDate, Utc};
use rusqlite::{Connection, OptionalExtension as _, ToSql, TransactionBehavior};

use reviewlens_core::{
  review::{NewReview, ProductId, Review, ReviewId, ReviewerId, Sentiment},
  store::{DailyTrend, ProductSummary, ReviewStore},
};

use crate::{
  Error, Result,
  encode::{REVIEW_COLUMNS, RawReview, decode_date, encode_date, encode_dt},
  schema::SCHEMA,
};

/// How long a writer waits on another connection's lock before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);
/// Lookups attempted after an insert-or-ignore before giving up.
const LOOKUP_ATTEMPTS: u32 = 3;
const LOOKUP_BACKOFF: Duration = Duration::from_millis(10);

// ─── Store ───────────────────────────────────────────────────────────────────

/// A review store backed by a single SQLite file.
///
/// The store owns its connection; open it once and pass it to whatever needs
/// persistence. The connection closes when the store is dropped.
pub struct SqliteStore {
  pub(crate) conn: Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = Connection::open(path)?;
    Self::init(conn)
  }

  /// Open an in-memory store, mostly for tests.
  pub fn open_in_memory() -> Result<Self> {
    let conn = Connection::open_in_memory()?;
    Self::init(conn)
  }

  fn init(conn: Connection) -> Result<Self> {
    conn.busy_timeout(BUSY_TIMEOUT)?;
    conn.execute_batch(SCHEMA)?;
    Ok(Self { conn })
  }

  /// Run a review query joined with both dimensions. `filter` is the WHERE
  /// clause body and binds `?1`.
  fn query_reviews(&self, filter: &str, param: &dyn ToSql) -> Result<Vec<Review>> {
    let sql = format!(
      "SELECT {REVIEW_COLUMNS}
       FROM reviews r
       JOIN reviewers rv ON r.reviewer_id = rv.id
       JOIN products  p  ON r.product_id  = p.id
       WHERE {filter}
       ORDER BY r.review_date DESC, r.id DESC"
    );

    let mut stmt = self.conn.prepare_cached(&sql)?;
    let raws = stmt
      .query_map([param], RawReview::from_row)?
      .collect::<rusqlite::Result<Vec<_>>>()?;

    raws.into_iter().map(RawReview::into_review).collect()
  }
}

/// Get-or-create a dimension row by exact name.
///
/// The UNIQUE constraint is the only guard against duplicates: the insert is
/// silently ignored when the name exists, and the id is then read back. If
/// the row is not visible yet, the lookup is retried a bounded number of
/// times.
fn upsert_named(conn: &Connection, table: &'static str, name: &str) -> Result<i64> {
  let inserted = conn
    .prepare_cached(&format!("INSERT OR IGNORE INTO {table} (name) VALUES (?1)"))?
    .execute([name])?;

  let mut lookup = conn.prepare_cached(&format!("SELECT id FROM {table} WHERE name = ?1"))?;
  for attempt in 1..=LOOKUP_ATTEMPTS {
    let id: Option<i64> = lookup.query_row([name], |row| row.get(0)).optional()?;
    if let Some(id) = id {
      if inserted > 0 {
        tracing::debug!(table, name, id, "created dimension row");
      }
      return Ok(id);
    }
    tracing::debug!(table, name, attempt, "dimension row not visible yet; retrying lookup");
    thread::sleep(LOOKUP_BACKOFF * attempt);
  }

  Err(Error::DimensionMissing { table, name: name.to_owned() })
}

// ─── ReviewStore impl ────────────────────────────────────────────────────────

impl ReviewStore for SqliteStore {
  type Error = Error;

  // ── Dimensions ────────────────────────────────────────────────────────────

  fn upsert_product(&self, name: &str) -> Result<ProductId> {
    upsert_named(&self.conn, "products", name).map(ProductId)
  }

  fn upsert_reviewer(&self, name: &str) -> Result<ReviewerId> {
    upsert_named(&self.conn, "reviewers", name).map(ReviewerId)
  }

  // ── Facts: append-only writes ────────────────────────────────────────────

  fn insert_review(&mut self, review: &NewReview) -> Result<ReviewId> {
    review.validate()?;

    let review_date = encode_date(review.review_date);
    let created_at  = encode_dt(Utc::now());
    let a           = &review.analysis;

    // IMMEDIATE takes the write lock up front so the dimension upserts and
    // the fact insert cannot interleave with another writer.
    let tx = self
      .conn
      .transaction_with_behavior(TransactionBehavior::Immediate)?;

    let product_id  = upsert_named(&tx, "products", &review.product_name)?;
    let reviewer_id = upsert_named(&tx, "reviewers", &review.reviewer_name)?;

    tx.execute(
      "INSERT INTO reviews (
         review_text, reviewer_id, product_id, rating, review_date,
         sentiment, confidence, vader_score, textblob_polarity,
         subjectivity, sentiment_rating_agreement, created_at
       ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
      rusqlite::params![
        review.review_text,
        reviewer_id,
        product_id,
        review.rating,
        review_date,
        a.sentiment.as_ref(),
        a.confidence,
        a.compound,
        a.polarity,
        a.subjectivity,
        review.agreement.as_ref(),
        created_at,
      ],
    )?;
    let id = tx.last_insert_rowid();
    tx.commit()?;

    tracing::debug!(id, product = %review.product_name, "inserted review");
    Ok(ReviewId(id))
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  fn query_by_product(&self, name: &str) -> Result<Vec<Review>> {
    self.query_reviews("p.name = ?1", &name)
  }

  fn query_by_reviewer(&self, name: &str) -> Result<Vec<Review>> {
    self.query_reviews("rv.name = ?1", &name)
  }

  fn summary_by_product(&self, name: &str) -> Result<ProductSummary> {
    let (total, avg_rating, avg_confidence, positive, negative, neutral, avg_compound) = self
      .conn
      .prepare_cached(
        "SELECT
           COUNT(r.id),
           AVG(r.rating),
           AVG(r.confidence),
           COALESCE(SUM(r.sentiment = ?2), 0),
           COALESCE(SUM(r.sentiment = ?3), 0),
           COALESCE(SUM(r.sentiment = ?4), 0),
           AVG(r.vader_score)
         FROM reviews r
         JOIN products p ON r.product_id = p.id
         WHERE p.name = ?1",
      )?
      .query_row(
        rusqlite::params![
          name,
          Sentiment::Positive.as_ref(),
          Sentiment::Negative.as_ref(),
          Sentiment::Neutral.as_ref(),
        ],
        |row| {
          Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, Option<f64>>(1)?,
            row.get::<_, Option<f64>>(2)?,
            row.get::<_, i64>(3)?,
            row.get::<_, i64>(4)?,
            row.get::<_, i64>(5)?,
            row.get::<_, Option<f64>>(6)?,
          ))
        },
      )?;

    Ok(ProductSummary {
      product_name: name.to_owned(),
      total: total as u64,
      avg_rating,
      avg_confidence,
      positive: positive as u64,
      negative: negative as u64,
      neutral: neutral as u64,
      avg_compound,
    })
  }

  fn query_recent(&self, since: NaiveDate) -> Result<Vec<Review>> {
    self.query_reviews("r.review_date >= ?1", &encode_date(since))
  }

  fn trend_by_day(&self, since: NaiveDate) -> Result<Vec<DailyTrend>> {
    let mut stmt = self.conn.prepare_cached(
      "SELECT
         r.review_date,
         COUNT(*),
         ROUND(AVG(r.sentiment = ?2) * 100, 1),
         ROUND(AVG(r.rating), 2)
       FROM reviews r
       WHERE r.review_date >= ?1
       GROUP BY r.review_date
       ORDER BY r.review_date DESC",
    )?;

    let rows = stmt
      .query_map(
        rusqlite::params![encode_date(since), Sentiment::Positive.as_ref()],
        |row| {
          Ok((
            row.get::<_, String>(0)?,
            row.get::<_, i64>(1)?,
            row.get::<_, f64>(2)?,
            row.get::<_, f64>(3)?,
          ))
        },
      )?
      .collect::<rusqlite::Result<Vec<_>>>()?;

    rows
      .into_iter()
      .map(|(date, total, positive_percentage, avg_rating)| {
        Ok(DailyTrend {
          date: decode_date(&date)?,
          total: total as u64,
          positive_percentage,
          avg_rating,
        })
      })
      .collect()
  }
}
