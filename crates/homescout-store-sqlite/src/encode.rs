//! Encoding and decoding helpers between Rust domain types and the
//! plain-text representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings. Domain documents are
//! stored as compact JSON; the doc is the source of truth and the
//! scalar columns are derived from it on write.

use chrono::{DateTime, Utc};
use homescout_core::{area::Area, intent::Intent, lead::Lead};
use uuid::Uuid;

use crate::Result;

// ─── Scalars ─────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from an `areas` row.
pub struct RawArea {
  pub doc_json: String,
}

impl RawArea {
  pub fn into_area(self) -> Result<Area> {
    Ok(serde_json::from_str(&self.doc_json)?)
  }
}

pub struct RawIntent {
  pub doc_json: String,
}

impl RawIntent {
  pub fn into_intent(self) -> Result<Intent> {
    Ok(serde_json::from_str(&self.doc_json)?)
  }
}

pub struct RawLead {
  pub doc_json: String,
}

impl RawLead {
  pub fn into_lead(self) -> Result<Lead> {
    Ok(serde_json::from_str(&self.doc_json)?)
  }
}
