//! Core types and trait definitions for the reviewlens review pipeline.
//!
//! This crate is deliberately free of database, CSV, and analyzer
//! dependencies. Every other crate depends on it.

pub mod agreement;
pub mod error;
pub mod input;
pub mod review;
pub mod store;

pub use error::{Error, Result};
