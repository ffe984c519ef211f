//! [`SqliteStore`] — the SQLite implementation of [`SiteStore`].

use std::{future::Future, path::Path};

use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use homescout_core::{
  area::{Area, validate_area},
  intent::Intent,
  lead::Lead,
  store::{AreaQuery, SiteStore},
};

use crate::{
  Error, Result,
  encode::{RawArea, RawIntent, RawLead, encode_dt, encode_uuid},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A homescout site store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn query_areas(
    &self,
    sql:    String,
    params: Vec<Box<dyn rusqlite::ToSql + Send>>,
  ) -> Result<Vec<Area>> {
    let raws: Vec<RawArea> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let param_refs: Vec<&dyn rusqlite::ToSql> =
          params.iter().map(|p| p.as_ref() as &dyn rusqlite::ToSql).collect();
        let rows = stmt
          .query_map(param_refs.as_slice(), |row| {
            Ok(RawArea { doc_json: row.get(0)? })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawArea::into_area).collect()
  }
}

/// Translate a unique-index violation on the `areas` table into the
/// matching typed error; everything else passes through.
fn map_area_insert_err(err: tokio_rusqlite::Error, area: &Area) -> Error {
  if let tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(
    _,
    Some(ref msg),
  )) = err
  {
    if msg.contains("areas.slug") {
      return Error::DuplicateSlug(area.slug.clone());
    }
    if msg.contains("areas.city") {
      return Error::DuplicateCityNeighborhood {
        city:         area.url_structure.city.clone(),
        neighborhood: area.url_structure.neighborhood.clone(),
      };
    }
  }
  Error::Database(err)
}

// ─── SiteStore impl ──────────────────────────────────────────────────────────

impl SiteStore for SqliteStore {
  type Error = Error;

  // ── Areas ─────────────────────────────────────────────────────────────────

  async fn insert_area(&self, area: Area) -> Result<()> {
    validate_area(&area).map_err(Error::Core)?;

    let slug         = area.slug.to_lowercase();
    let city         = area.url_structure.city.to_lowercase();
    let neighborhood = area.url_structure.neighborhood.to_lowercase();
    let is_published = area.is_published;
    let doc_json     = serde_json::to_string(&area)?;
    let created_at   = encode_dt(area.created_at);
    let updated_at   = encode_dt(area.updated_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO areas (
             slug, city, neighborhood, is_published, doc_json,
             created_at, updated_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
          rusqlite::params![
            slug,
            city,
            neighborhood,
            is_published,
            doc_json,
            created_at,
            updated_at,
          ],
        )?;
        Ok(())
      })
      .await
      .map_err(|e| map_area_insert_err(e, &area))?;

    Ok(())
  }

  fn area_by_slug(
    &self,
    slug: &str,
  ) -> impl Future<Output = Result<Option<Area>>> + Send + '_ {
    let slug = slug.to_lowercase();
    async move {
      let raw: Option<RawArea> = self
      .conn
        .call(move |conn| {
          Ok(conn
            .query_row(
              "SELECT doc_json FROM areas WHERE slug = ?1 AND is_published = 1",
              rusqlite::params![slug],
              |row| Ok(RawArea { doc_json: row.get(0)? }),
            )
            .optional()?)
        })
        .await?;

      raw.map(RawArea::into_area).transpose()
    }
  }

  fn area_by_city_neighborhood(
    &self,
    city: &str,
    neighborhood: &str,
  ) -> impl Future<Output = Result<Option<Area>>> + Send + '_ {
    let city         = city.to_lowercase();
    let neighborhood = neighborhood.to_lowercase();
    async move {
      let raw: Option<RawArea> = self
        .conn
        .call(move |conn| {
          Ok(conn
            .query_row(
              "SELECT doc_json FROM areas
               WHERE city = ?1 AND neighborhood = ?2 AND is_published = 1",
              rusqlite::params![city, neighborhood],
              |row| Ok(RawArea { doc_json: row.get(0)? }),
            )
            .optional()?)
        })
        .await?;

      raw.map(RawArea::into_area).transpose()
    }
  }

  fn areas_by_city(
    &self,
    city: &str,
  ) -> impl Future<Output = Result<Vec<Area>>> + Send + '_ {
    let city = city.to_lowercase();
    async move {
      self
        .query_areas(
          "SELECT doc_json FROM areas
           WHERE city = ?1 AND is_published = 1
           ORDER BY slug"
            .to_string(),
          vec![Box::new(city)],
        )
        .await
    }
  }

  async fn list_areas(&self, query: &AreaQuery) -> Result<Vec<Area>> {
    // Build WHERE clause dynamically, same param slots regardless.
    let mut conds: Vec<&'static str> = vec![];
    if query.published.is_some() {
      conds.push("is_published = ?1");
    }
    if query.city.is_some() {
      conds.push("city = ?2");
    }
    let where_clause = if conds.is_empty() {
      String::new()
    } else {
      format!("WHERE {}", conds.join(" AND "))
    };

    let sql = format!(
      "SELECT doc_json FROM areas
       {where_clause}
       ORDER BY slug
       LIMIT ?3 OFFSET ?4"
    );

    let published  = query.published;
    let city       = query.city.as_ref().map(|c| c.to_lowercase());
    // A negative LIMIT means "no limit" in SQLite.
    let limit_val  = query.limit.map(|l| l as i64).unwrap_or(-1);
    let offset_val = query.offset.unwrap_or(0) as i64;

    self
      .query_areas(sql, vec![
        Box::new(published),
        Box::new(city),
        Box::new(limit_val),
        Box::new(offset_val),
      ])
      .await
  }

  // ── Intents ───────────────────────────────────────────────────────────────

  async fn upsert_intent(&self, intent: Intent) -> Result<()> {
    let intent_id  = encode_uuid(intent.intent_id);
    let is_active  = intent.is_active;
    let doc_json   = serde_json::to_string(&intent)?;
    let created_at = encode_dt(intent.created_at);
    let updated_at = encode_dt(intent.updated_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO intents (intent_id, is_active, doc_json, created_at, updated_at)
           VALUES (?1, ?2, ?3, ?4, ?5)
           ON CONFLICT(intent_id) DO UPDATE SET
             is_active  = excluded.is_active,
             doc_json   = excluded.doc_json,
             updated_at = excluded.updated_at",
          rusqlite::params![intent_id, is_active, doc_json, created_at, updated_at],
        )?;
        Ok(())
      })
      .await?;

    Ok(())
  }

  async fn list_intents(&self) -> Result<Vec<Intent>> {
    let raws: Vec<RawIntent> = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare("SELECT doc_json FROM intents ORDER BY rowid")?;
        let rows = stmt
          .query_map([], |row| Ok(RawIntent { doc_json: row.get(0)? }))?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawIntent::into_intent).collect()
  }

  // ── Leads ─────────────────────────────────────────────────────────────────

  async fn insert_lead(&self, lead: Lead) -> Result<()> {
    let lead_id    = encode_uuid(lead.lead_id);
    let email      = lead.email.clone();
    let status     = serde_json::to_value(lead.status)?
      .as_str()
      .unwrap_or("new")
      .to_string();
    let doc_json   = serde_json::to_string(&lead)?;
    let created_at = encode_dt(lead.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO leads (lead_id, email, status, doc_json, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![lead_id, email, status, doc_json, created_at],
        )?;
        Ok(())
      })
      .await?;

    Ok(())
  }

  async fn lead_by_id(&self, id: Uuid) -> Result<Option<Lead>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawLead> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT doc_json FROM leads WHERE lead_id = ?1",
            rusqlite::params![id_str],
            |row| Ok(RawLead { doc_json: row.get(0)? }),
          )
          .optional()?)
      })
      .await?;

    raw.map(RawLead::into_lead).transpose()
  }

  async fn recent_leads(&self, limit: usize) -> Result<Vec<Lead>> {
    let limit_val = limit as i64;

    let raws: Vec<RawLead> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT doc_json FROM leads
           ORDER BY created_at DESC, rowid DESC
           LIMIT ?1",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![limit_val], |row| {
            Ok(RawLead { doc_json: row.get(0)? })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawLead::into_lead).collect()
  }
}
