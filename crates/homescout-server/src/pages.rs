//! Landing-page payload handlers.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/{city}` | City landing: published areas in the city |
//! | `GET`  | `/{city}/{neighborhood}` | Area landing: default SEO block |
//! | `GET`  | `/{city}/{neighborhood}/{keyword}` | Intent landing |
//! | `GET`  | `/api/areas/{slug}` | Raw area document |
//!
//! Rendering is out of scope; every payload is JSON. A store failure on
//! a page read is logged distinctly but renders as NotFound, which is
//! all an anonymous visitor should see.

use axum::{
  Json,
  extract::{Path, State},
};
use homescout_core::{
  area::Area,
  catalog,
  content::{self, SeoPayload},
  store::SiteStore,
};
use serde::Serialize;

use crate::{AppState, error::Error};

// ─── Payload types ───────────────────────────────────────────────────────────

/// The slice of an area a listing card needs.
#[derive(Debug, Serialize)]
pub struct AreaSummary {
  pub slug:         String,
  pub name:         String,
  pub description:  String,
  pub image_url:    String,
  pub city:         String,
  pub neighborhood: String,
}

impl From<&Area> for AreaSummary {
  fn from(area: &Area) -> Self {
    Self {
      slug:         area.slug.clone(),
      name:         area.name.clone(),
      description:  area.description.clone(),
      image_url:    area.image_url.clone(),
      city:         area.url_structure.city.clone(),
      neighborhood: area.url_structure.neighborhood.clone(),
    }
  }
}

#[derive(Debug, Serialize)]
pub struct CityPage {
  pub city:  String,
  pub name:  String,
  pub areas: Vec<AreaSummary>,
}

#[derive(Debug, Serialize)]
pub struct AreaPage {
  pub area: Area,
  pub seo:  SeoPayload,
}

#[derive(Debug, Serialize)]
pub struct IntentPage {
  pub area:    AreaSummary,
  pub keyword: String,
  pub heading: String,
  pub seo:     SeoPayload,
}

/// Map a store failure on a read-only page path: log it, render 404.
fn page_store_err<E: std::error::Error>(e: E) -> Error {
  tracing::error!(error = %e, "store lookup failed while rendering page");
  Error::NotFound
}

// ─── Handlers ────────────────────────────────────────────────────────────────

/// `GET /{city}`
pub async fn city<S>(
  State(state): State<AppState<S>>,
  Path(city): Path<String>,
) -> Result<Json<CityPage>, Error>
where
  S: SiteStore + Clone + Send + Sync + 'static,
{
  let city = city.to_lowercase();
  let areas = state
    .store
    .areas_by_city(&city)
    .await
    .map_err(page_store_err)?;

  if areas.is_empty() {
    return Err(Error::NotFound);
  }

  let name = catalog::CITIES
    .iter()
    .find(|c| c.slug == city)
    .map(|c| c.name.to_string())
    .unwrap_or_else(|| city.clone());

  Ok(Json(CityPage {
    city,
    name,
    areas: areas.iter().map(AreaSummary::from).collect(),
  }))
}

/// `GET /{city}/{neighborhood}`
pub async fn area<S>(
  State(state): State<AppState<S>>,
  Path((city, neighborhood)): Path<(String, String)>,
) -> Result<Json<AreaPage>, Error>
where
  S: SiteStore + Clone + Send + Sync + 'static,
{
  let area = state
    .store
    .area_by_city_neighborhood(&city, &neighborhood)
    .await
    .map_err(page_store_err)?
    .ok_or(Error::NotFound)?;

  let seo = content::resolve_content(&area, None);
  Ok(Json(AreaPage { area, seo }))
}

/// `GET /{city}/{neighborhood}/{keyword}`
///
/// The keyword must be known — either as an area-level SEO override or
/// in the intent catalog. Area overrides win; the enumerated catalog
/// keyword universe is far larger, so most requests land there.
pub async fn intent<S>(
  State(state): State<AppState<S>>,
  Path((city, neighborhood, keyword)): Path<(String, String, String)>,
) -> Result<Json<IntentPage>, Error>
where
  S: SiteStore + Clone + Send + Sync + 'static,
{
  let area = state
    .store
    .area_by_city_neighborhood(&city, &neighborhood)
    .await
    .map_err(page_store_err)?
    .ok_or(Error::NotFound)?;

  let (heading, seo) = if area.seo.intents.contains_key(&keyword) {
    let seo = content::resolve_content(&area, Some(&keyword));
    (seo.title().to_string(), seo)
  } else if let Some(intent) = state.catalog.find_by_keyword(&keyword) {
    let payload = content::resolve_intent_content(&area, intent);
    (
      content::intent_heading(&area, intent),
      SeoPayload::Overridden(payload),
    )
  } else {
    return Err(Error::NotFound);
  };

  Ok(Json(IntentPage {
    area: AreaSummary::from(&area),
    keyword,
    heading,
    seo,
  }))
}

/// `GET /api/areas/{slug}`
pub async fn area_by_slug<S>(
  State(state): State<AppState<S>>,
  Path(slug): Path<String>,
) -> Result<Json<Area>, Error>
where
  S: SiteStore + Clone + Send + Sync + 'static,
{
  let area = state
    .store
    .area_by_slug(&slug)
    .await
    .map_err(page_store_err)?
    .ok_or(Error::NotFound)?;
  Ok(Json(area))
}
