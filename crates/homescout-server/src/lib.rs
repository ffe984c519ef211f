//! HTTP layer for the homescout site backend.
//!
//! Exposes an axum [`Router`] backed by any
//! [`homescout_core::store::SiteStore`]: landing-page payloads, lead
//! intake, the admin listing, and the sitemap endpoints. TLS and
//! reverse-proxy concerns are the caller's responsibility.

pub mod auth;
pub mod error;
pub mod leads;
pub mod pages;
pub mod sitemap;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, post},
};
use homescout_core::{intent::IntentCatalog, store::SiteStore};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use auth::AdminAuth;

// ─── Configuration ───────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` (with
/// `HOMESCOUT_`-prefixed environment overrides).
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:                String,
  pub port:                u16,
  /// Absolute site origin used for sitemap `<loc>` entries.
  pub base_url:            String,
  pub db_path:             PathBuf,
  /// Backfill for lead submissions that omit `area`.
  pub default_area:        String,
  pub admin_username:      String,
  pub admin_password_hash: String,
  pub cron_secret:         String,
}

// ─── Application state ───────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers. The store handle is
/// explicit and application-scoped — no global singletons.
#[derive(Clone)]
pub struct AppState<S: SiteStore> {
  pub store:   Arc<S>,
  pub config:  Arc<ServerConfig>,
  /// Intent catalog loaded (and collision-checked) at startup.
  pub catalog: Arc<IntentCatalog>,
  pub auth:    Arc<AdminAuth>,
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build the full application router.
///
/// Static segments (`/sitemap.xml`, `/api/…`) take precedence over the
/// `{city}` captures, so the page routes can live at the root.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: SiteStore + Clone + Send + Sync + 'static,
{
  Router::new()
    .route("/sitemap.xml", get(sitemap::serve::<S>))
    .route("/api/cron/generate-sitemap", get(sitemap::cron::<S>))
    .route("/api/leads", post(leads::create::<S>))
    .route("/api/admin/leads", get(leads::admin_list::<S>))
    .route("/api/areas/{slug}", get(pages::area_by_slug::<S>))
    .route("/{city}", get(pages::city::<S>))
    .route("/{city}/{neighborhood}", get(pages::area::<S>))
    .route("/{city}/{neighborhood}/{keyword}", get(pages::intent::<S>))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use argon2::{Argon2, PasswordHasher, password_hash::SaltString};
  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use base64::Engine as _;
  use base64::engine::general_purpose::STANDARD as B64;
  use homescout_core::{catalog, store::SiteStore as _};
  use homescout_store_sqlite::SqliteStore;
  use rand_core::OsRng;
  use tower::ServiceExt as _;

  const CRON_SECRET: &str = "cron-s3cret";

  async fn make_state(password: &str) -> AppState<SqliteStore> {
    let store = SqliteStore::open_in_memory().await.unwrap();
    for area in catalog::seed_areas() {
      store.insert_area(area).await.unwrap();
    }
    for intent in catalog::seed_intents() {
      store.upsert_intent(intent).await.unwrap();
    }
    let intents = store.list_intents().await.unwrap();
    let catalog = IntentCatalog::new(intents).unwrap();

    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
      .hash_password(password.as_bytes(), &salt)
      .unwrap()
      .to_string();

    AppState {
      store:  Arc::new(store),
      config: Arc::new(ServerConfig {
        host:                "127.0.0.1".to_string(),
        port:                8080,
        base_url:            "https://example.com".to_string(),
        db_path:             PathBuf::from(":memory:"),
        default_area:        "Toronto".to_string(),
        admin_username:      "admin".to_string(),
        admin_password_hash: hash.clone(),
        cron_secret:         CRON_SECRET.to_string(),
      }),
      catalog: Arc::new(catalog),
      auth:    Arc::new(AdminAuth {
        username:      "admin".to_string(),
        password_hash: hash,
      }),
    }
  }

  async fn get(state: AppState<SqliteStore>, uri: &str) -> axum::response::Response {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    router(state).oneshot(req).await.unwrap()
  }

  async fn get_with_headers(
    state:   AppState<SqliteStore>,
    uri:     &str,
    headers: Vec<(&str, String)>,
  ) -> axum::response::Response {
    let mut builder = Request::builder().uri(uri);
    for (k, v) in headers {
      builder = builder.header(k, v);
    }
    let req = builder.body(Body::empty()).unwrap();
    router(state).oneshot(req).await.unwrap()
  }

  async fn post_json(
    state: AppState<SqliteStore>,
    uri:   &str,
    body:  serde_json::Value,
  ) -> axum::response::Response {
    let req = Request::builder()
      .method("POST")
      .uri(uri)
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(body.to_string()))
      .unwrap();
    router(state).oneshot(req).await.unwrap()
  }

  async fn body_string(resp: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
  }

  fn basic_auth(user: &str, pass: &str) -> String {
    format!("Basic {}", B64.encode(format!("{user}:{pass}")))
  }

  // ── Pages ───────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn city_page_lists_published_areas() {
    let state = make_state("secret").await;
    let resp = get(state, "/toronto").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("\"name\":\"Toronto\""), "{body}");
    assert!(body.contains("toronto-yorkville"), "{body}");
  }

  #[tokio::test]
  async fn city_page_is_case_insensitive() {
    let state = make_state("secret").await;
    let resp = get(state, "/Toronto").await;
    assert_eq!(resp.status(), StatusCode::OK);
  }

  #[tokio::test]
  async fn unknown_city_is_404() {
    let state = make_state("secret").await;
    let resp = get(state, "/atlantis").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn area_page_returns_default_seo() {
    let state = make_state("secret").await;
    let resp = get(state, "/toronto/yorkville").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("\"kind\":\"default\""), "{body}");
    assert!(body.contains("Yorkville Real Estate"), "{body}");
  }

  #[tokio::test]
  async fn intent_page_substitutes_area_into_catalog_templates() {
    let state = make_state("secret").await;
    let resp = get(state, "/toronto/yorkville/realtor").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("\"kind\":\"overridden\""), "{body}");
    assert!(body.contains("Top Real Estate Agents in Yorkville"), "{body}");
    assert!(body.contains("Find an Agent in Yorkville"), "{body}");
  }

  #[tokio::test]
  async fn area_level_intent_override_wins() {
    let state = make_state("secret").await;
    // "sell" is an area-level seo.intents key, not a catalog keyword.
    let resp = get(state, "/toronto/yorkville/sell").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("Sell Your Yorkville Home"), "{body}");
  }

  #[tokio::test]
  async fn unknown_intent_keyword_is_404() {
    let state = make_state("secret").await;
    let resp = get(state, "/toronto/yorkville/timeshare-deals").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn area_api_returns_document_by_slug() {
    let state = make_state("secret").await;
    let resp = get(state, "/api/areas/toronto-yorkville").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("\"slug\":\"toronto-yorkville\""), "{body}");
  }

  #[tokio::test]
  async fn unpublished_area_is_indistinguishable_from_absent() {
    let state = make_state("secret").await;
    // Seed an unpublished area in a city of its own.
    let mut hidden = catalog::seed_areas()[0].clone();
    hidden.slug = "hamilton-durand".into();
    hidden.url_structure.city = "hamilton".into();
    hidden.url_structure.neighborhood = "durand".into();
    hidden.is_published = false;
    state.store.insert_area(hidden).await.unwrap();

    let resp = get(state.clone(), "/hamilton/durand").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let resp = get(state, "/api/areas/hamilton-durand").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  // ── Sitemap ─────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn sitemap_is_xml_and_covers_the_url_space() {
    let state = make_state("secret").await;
    let resp = get(state, "/sitemap.xml").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let ct = resp
      .headers()
      .get(header::CONTENT_TYPE)
      .unwrap()
      .to_str()
      .unwrap();
    assert_eq!(ct, "application/xml");

    let xml = body_string(resp).await;
    assert!(xml.contains("<loc>https://example.com/find-realtor</loc>"), "{xml}");
    assert!(xml.contains("<loc>https://example.com/toronto</loc>"));
    assert!(xml.contains("<loc>https://example.com/toronto/yorkville</loc>"));
    assert!(xml.contains("<loc>https://example.com/toronto/yorkville/realtor</loc>"));
    assert!(xml.contains("<loc>https://example.com/toronto/yorkville/buy/condo</loc>"));
  }

  #[tokio::test]
  async fn cron_endpoint_requires_the_secret() {
    let state = make_state("secret").await;
    let resp = get(state.clone(), "/api/cron/generate-sitemap").await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = get_with_headers(
      state,
      "/api/cron/generate-sitemap",
      vec![(auth::CRON_SECRET_HEADER, CRON_SECRET.to_string())],
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let xml = body_string(resp).await;
    assert!(xml.contains("<urlset"), "{xml}");
  }

  // ── Leads ───────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn valid_lead_is_persisted_as_new() {
    let state = make_state("secret").await;
    let resp = post_json(
      state.clone(),
      "/api/leads",
      serde_json::json!({
        "name": "Al Kay",
        "email": "a@b.co",
        "area": "Toronto",
        "type": "buyer"
      }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_string(resp).await;
    assert!(body.contains("\"success\":true"), "{body}");

    let leads = state.store.recent_leads(10).await.unwrap();
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].email, "a@b.co");
    assert_eq!(leads[0].status, homescout_core::lead::LeadStatus::New);
  }

  #[tokio::test]
  async fn invalid_lead_reports_every_field_error() {
    let state = make_state("secret").await;
    let resp = post_json(
      state,
      "/api/leads",
      serde_json::json!({
        "name": "A",
        "email": "bad",
        "area": "Toronto",
        "type": "buyer"
      }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_string(resp).await;
    assert!(body.contains("\"field\":\"name\""), "{body}");
    assert!(body.contains("\"field\":\"email\""), "{body}");
  }

  #[tokio::test]
  async fn lead_without_area_or_type_uses_defaults() {
    let state = make_state("secret").await;
    let resp = post_json(
      state.clone(),
      "/api/leads",
      serde_json::json!({ "name": "Al Kay", "email": "a@b.co" }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let leads = state.store.recent_leads(1).await.unwrap();
    assert_eq!(leads[0].area, "Toronto");
    assert_eq!(leads[0].lead_type.as_str(), "agent-search");
  }

  // ── Admin ───────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn admin_leads_requires_basic_auth() {
    let state = make_state("secret").await;
    let resp = get(state.clone(), "/api/admin/leads").await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = get_with_headers(
      state,
      "/api/admin/leads",
      vec![("authorization", basic_auth("admin", "wrong"))],
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
  }

  #[tokio::test]
  async fn admin_leads_lists_newest_first() {
    let state = make_state("secret").await;
    for (i, email) in ["first@example.com", "second@example.com"].iter().enumerate() {
      let lead = homescout_core::lead::Lead::from_submission(
        &homescout_core::lead::LeadSubmission {
          name:  Some("Al Kay".into()),
          email: Some(email.to_string()),
          area:  Some("Toronto".into()),
          ..Default::default()
        },
        "Toronto",
        chrono::Utc::now() + chrono::Duration::seconds(i as i64),
      )
      .unwrap();
      state.store.insert_lead(lead).await.unwrap();
    }

    let resp = get_with_headers(
      state,
      "/api/admin/leads?limit=1",
      vec![("authorization", basic_auth("admin", "secret"))],
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("second@example.com"), "{body}");
    assert!(!body.contains("first@example.com"), "{body}");
  }
}
