//! Content resolution: pick the SEO payload for an area page.
//!
//! An intent keyword selects an override out of the area's
//! `seo.intents` map (or, for catalog-driven pages, out of the matched
//! [`Intent`]'s own templates). Absent or unknown keywords degrade to
//! the area's default block — never an error.
//!
//! Template substitution is a plain single-pass global string replace of
//! the literal token `{area}` with the area name. No escaping, no
//! templating language.

use serde::Serialize;

use crate::{
  area::{Area, AreaSeo, IntentSeo},
  intent::Intent,
};

pub const AREA_TOKEN: &str = "{area}";

/// The resolved SEO payload for a page. Handlers match exhaustively so
/// a new variant cannot slip through the render boundary unhandled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SeoPayload {
  /// The area's own SEO block, verbatim.
  Default(AreaSeo),
  /// An intent override with `{area}` already substituted.
  Overridden(IntentSeo),
}

impl SeoPayload {
  pub fn title(&self) -> &str {
    match self {
      SeoPayload::Default(seo) => &seo.title,
      SeoPayload::Overridden(seo) => &seo.title,
    }
  }

  pub fn description(&self) -> &str {
    match self {
      SeoPayload::Default(seo) => &seo.description,
      SeoPayload::Overridden(seo) => &seo.description,
    }
  }
}

/// Substitute `{area}` into every template field of an intent SEO block.
fn substitute(seo: &IntentSeo, area_name: &str) -> IntentSeo {
  IntentSeo {
    title:       seo.title.replace(AREA_TOKEN, area_name),
    description: seo.description.replace(AREA_TOKEN, area_name),
    keywords:    seo
      .keywords
      .iter()
      .map(|k| k.replace(AREA_TOKEN, area_name))
      .collect(),
  }
}

/// Resolve the payload for an area page with an optional intent keyword.
///
/// The keyword is looked up in the area's own `seo.intents` map; a miss
/// returns the area default unchanged.
pub fn resolve_content(area: &Area, intent_keyword: Option<&str>) -> SeoPayload {
  match intent_keyword.and_then(|k| area.seo.intents.get(k)) {
    Some(override_seo) => {
      SeoPayload::Overridden(substitute(override_seo, &area.name))
    }
    None => SeoPayload::Default(area.seo.clone()),
  }
}

/// Build the payload for a catalog-driven intent page from the matched
/// intent's templates.
pub fn resolve_intent_content(area: &Area, intent: &Intent) -> IntentSeo {
  substitute(
    &IntentSeo {
      title:       intent.seo_title.clone(),
      description: intent.seo_description.clone(),
      keywords:    intent.seo_keywords.clone(),
    },
    &area.name,
  )
}

/// Page heading for an intent landing, e.g. "Find an Agent in Yorkville".
pub fn intent_heading(area: &Area, intent: &Intent) -> String {
  if intent.display_name.is_empty() {
    format!("Find Real Estate Services in {}", area.name)
  } else {
    format!("{} in {}", intent.display_name, area.name)
  }
}
