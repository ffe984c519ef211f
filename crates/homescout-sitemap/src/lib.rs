//! Sitemap generation: deterministic URL enumeration over the
//! area × intent-keyword space, and XML serialisation.
//!
//! The enumerator is pure — it takes a snapshot of the published areas
//! and the keyword universe and produces the same URL list every time.
//! Combinatorics is the whole job: a few dozen areas times a few dozen
//! keywords is thousands of URLs.

mod enumerate;
mod xml;

pub use enumerate::{StaticPage, enumerate, degraded, STATIC_PAGES};
pub use xml::write_xml;

use chrono::NaiveDate;

// ─── Value types ─────────────────────────────────────────────────────────────

/// `<changefreq>` values from the sitemap protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
  Always,
  Hourly,
  Daily,
  Weekly,
  Monthly,
  Yearly,
  Never,
}

impl ChangeFreq {
  pub fn as_str(self) -> &'static str {
    match self {
      ChangeFreq::Always => "always",
      ChangeFreq::Hourly => "hourly",
      ChangeFreq::Daily => "daily",
      ChangeFreq::Weekly => "weekly",
      ChangeFreq::Monthly => "monthly",
      ChangeFreq::Yearly => "yearly",
      ChangeFreq::Never => "never",
    }
  }
}

/// One `<url>` entry. Ephemeral — produced during enumeration, written
/// straight into the XML output, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapUrl {
  pub loc:        String,
  pub lastmod:    Option<NaiveDate>,
  pub changefreq: Option<ChangeFreq>,
  pub priority:   Option<f32>,
}
