//! Intent — a reusable SEO keyword cluster ("find an agent", "free home
//! evaluation") with templated display content.
//!
//! Intents are matched against the last path segment of an intent landing
//! page. The [`IntentCatalog`] owns uniqueness: a keyword claimed by two
//! active intents is rejected when the catalog is built, so lookup never
//! depends on list order.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Intent ──────────────────────────────────────────────────────────────────

/// A keyword cluster. Template fields (`description`, `seo_title`,
/// `seo_description`, `seo_keywords`) may contain the token `{area}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intent {
  pub intent_id:       Uuid,
  /// URL-triggering tokens, e.g. `real-estate-agent`, `realtor`.
  pub keywords:        Vec<String>,
  pub display_name:    String,
  pub description:     String,
  pub seo_title:       String,
  pub seo_description: String,
  #[serde(default)]
  pub seo_keywords:    Vec<String>,
  pub is_active:       bool,
  pub created_at:      DateTime<Utc>,
  pub updated_at:      DateTime<Utc>,
}

// ─── Catalog ─────────────────────────────────────────────────────────────────

/// An in-memory index over a set of intents, keyed by keyword.
///
/// Only active intents are indexed; an inactive intent is unmatchable,
/// exactly like an absent one.
#[derive(Debug, Clone)]
pub struct IntentCatalog {
  intents:  Vec<Intent>,
  /// keyword → index into `intents`. Active intents only.
  by_keyword: HashMap<String, usize>,
}

impl IntentCatalog {
  /// Build a catalog, failing fast on a keyword claimed by two active
  /// intents.
  pub fn new(intents: Vec<Intent>) -> Result<Self> {
    let mut by_keyword: HashMap<String, usize> = HashMap::new();

    for (idx, intent) in intents.iter().enumerate() {
      if !intent.is_active {
        continue;
      }
      for keyword in &intent.keywords {
        if let Some(&prev) = by_keyword.get(keyword.as_str()) {
          return Err(Error::KeywordCollision {
            keyword: keyword.clone(),
            first:   intents[prev].display_name.clone(),
            second:  intent.display_name.clone(),
          });
        }
        by_keyword.insert(keyword.clone(), idx);
      }
    }

    Ok(Self { intents, by_keyword })
  }

  /// Match a URL keyword against the active intents.
  pub fn find_by_keyword(&self, keyword: &str) -> Option<&Intent> {
    self.by_keyword.get(keyword).map(|&idx| &self.intents[idx])
  }

  /// The flattened keyword universe: every active intent's keywords, in
  /// catalog order. Disjointness is guaranteed by construction, so this
  /// is duplicate-free.
  pub fn keyword_universe(&self) -> Vec<String> {
    self
      .intents
      .iter()
      .filter(|i| i.is_active)
      .flat_map(|i| i.keywords.iter().cloned())
      .collect()
  }

  pub fn intents(&self) -> &[Intent] { &self.intents }

  pub fn is_empty(&self) -> bool { self.by_keyword.is_empty() }
}
