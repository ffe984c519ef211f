//! Sitemap HTTP surface.
//!
//! `GET /sitemap.xml` is public and degrades to static + catalog-city
//! URLs when the store read fails or times out. The cron endpoint is
//! gated by the `x-cron-secret` header and fails hard instead, so a
//! scheduler notices a broken store.

use std::time::Duration;

use axum::{
  extract::State,
  http::{HeaderMap, StatusCode, header},
  response::{IntoResponse, Response},
};
use chrono::Utc;
use homescout_core::store::{AreaQuery, SiteStore};
use homescout_sitemap::{SitemapUrl, enumerate, degraded, write_xml};
use tokio::time::timeout;

use crate::{AppState, auth, error::Error};

/// Bound on the bulk area read so a slow store cannot hang enumeration.
const STORE_READ_TIMEOUT: Duration = Duration::from_secs(10);

fn xml_response(body: Vec<u8>) -> Response {
  (
    StatusCode::OK,
    [
      (header::CONTENT_TYPE, "application/xml"),
      (header::CACHE_CONTROL, "public, max-age=3600"),
    ],
    body,
  )
    .into_response()
}

/// Enumerate the full URL set from the store's current snapshot.
async fn full_urls<S>(state: &AppState<S>) -> Result<Vec<SitemapUrl>, Error>
where
  S: SiteStore + Clone + Send + Sync + 'static,
{
  let query = AreaQuery::published();
  let areas = timeout(STORE_READ_TIMEOUT, state.store.list_areas(&query))
    .await
    .map_err(|_| Error::StoreUnavailable)?
    .map_err(Error::store)?;

  let keywords = state.catalog.keyword_universe();
  let today = Utc::now().date_naive();
  let urls = enumerate(&state.config.base_url, &areas, &keywords, today);

  tracing::info!(
    urls = urls.len(),
    areas = areas.len(),
    keywords = keywords.len(),
    "sitemap enumerated"
  );
  Ok(urls)
}

/// `GET /sitemap.xml`
pub async fn serve<S>(State(state): State<AppState<S>>) -> Response
where
  S: SiteStore + Clone + Send + Sync + 'static,
{
  let urls = match full_urls(&state).await {
    Ok(urls) => urls,
    Err(e) => {
      tracing::warn!(error = %e, "serving degraded sitemap");
      degraded(&state.config.base_url, Utc::now().date_naive())
    }
  };
  xml_response(write_xml(&urls))
}

/// `GET /api/cron/generate-sitemap` — secret-gated, no degradation.
pub async fn cron<S>(
  State(state): State<AppState<S>>,
  headers: HeaderMap,
) -> Result<Response, Error>
where
  S: SiteStore + Clone + Send + Sync + 'static,
{
  auth::verify_cron(&headers, &state.config.cron_secret)?;
  let urls = full_urls(&state).await?;
  Ok(xml_response(write_xml(&urls)))
}
