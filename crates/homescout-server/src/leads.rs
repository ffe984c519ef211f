//! Lead intake and the admin listing.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/api/leads` | Validates and persists a submission |
//! | `GET`  | `/api/admin/leads` | Basic-auth gated, `?limit=N` |

use axum::{
  Json,
  extract::{Query, State},
  http::{HeaderMap, StatusCode},
  response::IntoResponse,
};
use chrono::Utc;
use homescout_core::{
  lead::{Lead, LeadSubmission},
  store::SiteStore,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::{AppState, auth, error::Error};

const DEFAULT_ADMIN_LIMIT: usize = 100;

#[derive(Debug, Serialize)]
pub struct LeadCreated {
  pub success: bool,
  pub lead_id: Uuid,
}

/// `POST /api/leads`
///
/// Validation failures come back as 400 with every violated rule; a
/// store failure is a 503 with no internal detail.
pub async fn create<S>(
  State(state): State<AppState<S>>,
  Json(submission): Json<LeadSubmission>,
) -> Result<impl IntoResponse, Error>
where
  S: SiteStore + Clone + Send + Sync + 'static,
{
  let lead =
    Lead::from_submission(&submission, &state.config.default_area, Utc::now())
      .map_err(Error::Validation)?;

  let lead_id = lead.lead_id;
  state.store.insert_lead(lead).await.map_err(|e| {
    tracing::error!(error = %e, "failed to persist lead");
    Error::StoreUnavailable
  })?;

  tracing::info!(%lead_id, "lead captured");
  Ok((
    StatusCode::CREATED,
    Json(LeadCreated { success: true, lead_id }),
  ))
}

#[derive(Debug, Deserialize)]
pub struct AdminListParams {
  pub limit: Option<usize>,
}

/// `GET /api/admin/leads[?limit=N]` — newest first.
pub async fn admin_list<S>(
  State(state): State<AppState<S>>,
  headers: HeaderMap,
  Query(params): Query<AdminListParams>,
) -> Result<impl IntoResponse, Error>
where
  S: SiteStore + Clone + Send + Sync + 'static,
{
  auth::verify_admin(&headers, &state.auth)?;

  let limit = params.limit.unwrap_or(DEFAULT_ADMIN_LIMIT);
  let leads = state
    .store
    .recent_leads(limit)
    .await
    .map_err(Error::store)?;

  Ok(Json(json!({ "leads": leads })))
}
