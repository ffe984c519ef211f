//! Error types for `homescout-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("area not found: {0}")]
  AreaNotFound(String),

  #[error("duplicate area slug: {0}")]
  DuplicateSlug(String),

  #[error("duplicate area for city/neighborhood: {city}/{neighborhood}")]
  DuplicateCityNeighborhood { city: String, neighborhood: String },

  /// Two active intents claim the same URL keyword. Detected when the
  /// catalog is built, never resolved by list order.
  #[error("intent keyword {keyword:?} claimed by both {first:?} and {second:?}")]
  KeywordCollision {
    keyword: String,
    first:   String,
    second:  String,
  },

  #[error("invalid area: {0}")]
  InvalidArea(String),

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
