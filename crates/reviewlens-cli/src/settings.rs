//! Layered settings: built-in defaults, then an optional TOML file, then
//! `REVIEWLENS_*` environment variables. CLI flags are applied by the caller.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Looked up in the working directory when `--config` is not given.
const DEFAULT_FILE: &str = "reviewlens";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
  /// SQLite database file.
  pub store_path:        PathBuf,
  /// Where generated batches are written.
  pub input_dir:         PathBuf,
  /// Where analysis CSVs are written.
  pub output_dir:        PathBuf,
  /// Reviews generated per pipeline run.
  pub daily_reviews:     usize,
  /// Pipeline batches are dated within this many days before today.
  pub daily_window_days: u64,
}

impl Settings {
  /// Load settings. An explicit `file` must exist; the default file is
  /// optional.
  pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
    let builder = Config::builder()
      .set_default("store_path", "data/sentiment_analysis.db")?
      .set_default("input_dir", "input")?
      .set_default("output_dir", "output")?
      .set_default("daily_reviews", 20_i64)?
      .set_default("daily_window_days", 1_i64)?;

    let builder = match file {
      Some(path) => builder.add_source(File::from(path).required(true)),
      None => builder.add_source(File::with_name(DEFAULT_FILE).required(false)),
    };

    let mut settings: Settings = builder
      .add_source(Environment::with_prefix("REVIEWLENS").try_parsing(true))
      .build()?
      .try_deserialize()?;

    settings.store_path = expand_tilde(&settings.store_path);
    settings.input_dir = expand_tilde(&settings.input_dir);
    settings.output_dir = expand_tilde(&settings.output_dir);
    Ok(settings)
  }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
