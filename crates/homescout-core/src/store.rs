//! The `SiteStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g.
//! `homescout-store-sqlite`). Higher layers (`homescout-server`,
//! `homescout-sitemap`) depend on this abstraction, not on any concrete
//! backend.

use std::future::Future;

use uuid::Uuid;

use crate::{area::Area, intent::Intent, lead::Lead};

// ─── Query type ──────────────────────────────────────────────────────────────

/// Parameters for [`SiteStore::list_areas`].
#[derive(Debug, Clone, Default)]
pub struct AreaQuery {
  /// Restrict to a publication state; `None` returns everything.
  pub published: Option<bool>,
  /// Restrict to a city (lower-cased slug).
  pub city:      Option<String>,
  pub limit:     Option<usize>,
  pub offset:    Option<usize>,
}

impl AreaQuery {
  /// The query every external resolver uses: published areas only.
  pub fn published() -> Self {
    Self { published: Some(true), ..Self::default() }
  }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over the site's document store.
///
/// Area reads that serve external pages return only published areas: an
/// unpublished area is indistinguishable from an absent one. This is a
/// content-gating policy, not a security boundary.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait SiteStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Areas ─────────────────────────────────────────────────────────────

  /// Insert a new area. Fails on a duplicate slug or a duplicate
  /// (city, neighborhood) pair.
  fn insert_area(
    &self,
    area: Area,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Resolve a published area by slug. Unpublished → `None`.
  fn area_by_slug(
    &self,
    slug: &str,
  ) -> impl Future<Output = Result<Option<Area>, Self::Error>> + Send + '_;

  /// Resolve a published area by its URL segments. Inputs are
  /// lower-cased before lookup.
  fn area_by_city_neighborhood(
    &self,
    city: &str,
    neighborhood: &str,
  ) -> impl Future<Output = Result<Option<Area>, Self::Error>> + Send + '_;

  /// All published areas in a city, ordered by slug.
  fn areas_by_city(
    &self,
    city: &str,
  ) -> impl Future<Output = Result<Vec<Area>, Self::Error>> + Send + '_;

  /// List areas matching `query`, ordered by slug.
  fn list_areas<'a>(
    &'a self,
    query: &'a AreaQuery,
  ) -> impl Future<Output = Result<Vec<Area>, Self::Error>> + Send + 'a;

  // ── Intents ───────────────────────────────────────────────────────────

  /// Insert or replace an intent record.
  fn upsert_intent(
    &self,
    intent: Intent,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// All intents, active and inactive, in insertion order. Catalog
  /// construction applies the active filter and the collision check.
  fn list_intents(
    &self,
  ) -> impl Future<Output = Result<Vec<Intent>, Self::Error>> + Send + '_;

  // ── Leads ─────────────────────────────────────────────────────────────

  /// Persist a validated lead.
  fn insert_lead(
    &self,
    lead: Lead,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Retrieve a lead by id.
  fn lead_by_id(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Lead>, Self::Error>> + Send + '_;

  /// The most recent `limit` leads, newest first.
  fn recent_leads(
    &self,
    limit: usize,
  ) -> impl Future<Output = Result<Vec<Lead>, Self::Error>> + Send + '_;
}
