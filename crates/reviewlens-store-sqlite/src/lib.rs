//! SQLite backend for the reviewlens review store.
//!
//! One [`SqliteStore`] owns one connection. Open it once per process (or per
//! batch) and pass it explicitly; dropping it closes the database.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;

#[cfg(test)]
mod tests;
