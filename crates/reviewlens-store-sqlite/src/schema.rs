//! SQL schema for the reviewlens SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- Dimensions. Names are case-sensitive natural keys; rows are never updated
-- or deleted.
CREATE TABLE IF NOT EXISTS products (
    id    INTEGER PRIMARY KEY AUTOINCREMENT,
    name  TEXT UNIQUE NOT NULL
);

CREATE TABLE IF NOT EXISTS reviewers (
    id    INTEGER PRIMARY KEY AUTOINCREMENT,
    name  TEXT UNIQUE NOT NULL
);

-- Facts are strictly append-only.
-- No UPDATE or DELETE is ever issued against this table.
CREATE TABLE IF NOT EXISTS reviews (
    id                          INTEGER PRIMARY KEY AUTOINCREMENT,
    review_text                 TEXT NOT NULL,
    reviewer_id                 INTEGER NOT NULL REFERENCES reviewers(id),
    product_id                  INTEGER NOT NULL REFERENCES products(id),
    rating                      REAL NOT NULL CHECK (rating BETWEEN 1 AND 5),
    review_date                 TEXT NOT NULL,   -- YYYY-MM-DD
    sentiment                   TEXT NOT NULL,   -- 'Positive' | 'Negative' | 'Neutral'
    confidence                  REAL NOT NULL,
    vader_score                 REAL NOT NULL,
    textblob_polarity           REAL NOT NULL,
    subjectivity                REAL NOT NULL,
    sentiment_rating_agreement  TEXT NOT NULL,   -- 'Yes' | 'No'
    created_at                  TEXT NOT NULL    -- RFC 3339 UTC; store-assigned
);

CREATE INDEX IF NOT EXISTS reviews_product_idx  ON reviews(product_id);
CREATE INDEX IF NOT EXISTS reviews_reviewer_idx ON reviews(reviewer_id);
CREATE INDEX IF NOT EXISTS reviews_date_idx     ON reviews(review_date);

PRAGMA user_version = 1;
";
