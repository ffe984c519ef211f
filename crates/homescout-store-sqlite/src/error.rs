//! Error type for `homescout-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] homescout_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  /// Unique-index violation on `areas.slug`.
  #[error("duplicate area slug: {0}")]
  DuplicateSlug(String),

  /// Unique-index violation on `areas(city, neighborhood)`.
  #[error("duplicate area for city/neighborhood: {city}/{neighborhood}")]
  DuplicateCityNeighborhood { city: String, neighborhood: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
