//! Area — one sellable neighborhood page and its SEO metadata.
//!
//! Identity is the `slug`, derived as `{city}-{neighborhood}` from the
//! URL structure. Both the slug and the (city, neighborhood) pair are
//! unique among areas; the store backend enforces this with unique
//! indexes.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ─── URL structure ───────────────────────────────────────────────────────────

/// The two lower-cased path segments an area lives under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlStructure {
  pub city:         String,
  pub neighborhood: String,
}

// ─── SEO content ─────────────────────────────────────────────────────────────

/// Intent-specific SEO override carried inside an area document.
/// Template fields may contain the literal token `{area}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentSeo {
  pub title:       String,
  pub description: String,
  #[serde(default)]
  pub keywords:    Vec<String>,
}

/// The area's default SEO block plus per-intent overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaSeo {
  pub title:       String,
  pub description: String,
  #[serde(default)]
  pub keywords:    Vec<String>,
  /// Intent key → override payload. Keys are intent keywords.
  #[serde(default)]
  pub intents:     BTreeMap<String, IntentSeo>,
  /// Intent key → custom URL segment for that intent.
  #[serde(default)]
  pub url_patterns: BTreeMap<String, String>,
}

// ─── Editorial content ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
  pub label:       String,
  pub value:       String,
  pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
  pub title:       String,
  pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
  pub question: String,
  pub answer:   String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
  pub lat: f64,
  pub lng: f64,
}

// ─── Area ────────────────────────────────────────────────────────────────────

/// A neighborhood content unit. Unpublished areas are invisible to every
/// external resolver and contribute nothing to the sitemap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Area {
  pub slug:           String,
  pub name:           String,
  pub description:    String,
  pub image_url:      String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub coordinates:    Option<Coordinates>,
  pub url_structure:  UrlStructure,
  pub seo:            AreaSeo,
  #[serde(default)]
  pub highlights:     Vec<Highlight>,
  #[serde(default)]
  pub features:       Vec<Feature>,
  #[serde(default)]
  pub amenities:      Vec<String>,
  #[serde(default)]
  pub property_types: Vec<String>,
  #[serde(default)]
  pub faqs:           Vec<Faq>,
  pub is_published:   bool,
  pub created_at:     DateTime<Utc>,
  pub updated_at:     DateTime<Utc>,
}

impl Area {
  /// Canonical slug for a (city, neighborhood) pair.
  pub fn slug_for(city: &str, neighborhood: &str) -> String {
    format!("{}-{}", slugify(city), slugify(neighborhood))
  }
}

/// Lower-case and URL-clean a display name: strip anything that is not
/// alphanumeric, space, or hyphen, then collapse whitespace to hyphens.
pub fn slugify(name: &str) -> String {
  let cleaned: String = name
    .to_lowercase()
    .chars()
    .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || *c == '-')
    .collect();
  cleaned.split_whitespace().collect::<Vec<_>>().join("-")
}

/// Check the fields an area must carry before it can be stored.
/// All problems are collected into one error message.
pub fn validate_area(area: &Area) -> Result<()> {
  let mut errors: Vec<&str> = Vec::new();

  if area.name.trim().is_empty() {
    errors.push("name is required");
  }
  if area.slug.trim().is_empty() {
    errors.push("slug is required");
  }
  if area.description.trim().is_empty() {
    errors.push("description is required");
  }
  if area.image_url.trim().is_empty() {
    errors.push("image URL is required");
  }
  if area.url_structure.city.trim().is_empty() {
    errors.push("city is required in URL structure");
  }
  if area.url_structure.neighborhood.trim().is_empty() {
    errors.push("neighborhood is required in URL structure");
  }
  if area.seo.title.trim().is_empty() {
    errors.push("SEO title is required");
  }
  if area.seo.description.trim().is_empty() {
    errors.push("SEO description is required");
  }

  if errors.is_empty() {
    Ok(())
  } else {
    Err(Error::InvalidArea(errors.join(", ")))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn slugify_cleans_display_names() {
    assert_eq!(slugify("St. Lawrence"), "st-lawrence");
    assert_eq!(slugify("Church-Wellesley Village"), "church-wellesley-village");
    assert_eq!(slugify("Halton Hills"), "halton-hills");
  }

  #[test]
  fn slug_for_joins_city_and_neighborhood() {
    assert_eq!(Area::slug_for("Toronto", "Yorkville"), "toronto-yorkville");
  }

  #[test]
  fn validate_area_collects_missing_fields() {
    let mut area = crate::catalog::seed_areas()[0].clone();
    area.name = String::new();
    area.seo.title = "  ".into();
    let err = validate_area(&area).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("name is required"), "{msg}");
    assert!(msg.contains("SEO title is required"), "{msg}");
  }

  #[test]
  fn seed_areas_all_validate() {
    for area in crate::catalog::seed_areas() {
      validate_area(&area).unwrap();
    }
  }
}
