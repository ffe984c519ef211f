//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::Utc;
use homescout_core::{
  area::{Area, AreaSeo, UrlStructure},
  catalog,
  lead::{Lead, LeadSubmission},
  store::{AreaQuery, SiteStore},
};

use crate::{Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn area(city: &str, neighborhood: &str, published: bool) -> Area {
  let now = Utc::now();
  let name = neighborhood
    .split('-')
    .map(|w| {
      let mut c = w.chars();
      match c.next() {
        Some(f) => f.to_uppercase().chain(c).collect::<String>(),
        None => String::new(),
      }
    })
    .collect::<Vec<_>>()
    .join(" ");
  Area {
    slug:           format!("{city}-{neighborhood}"),
    name,
    description:    format!("{neighborhood} in {city}"),
    image_url:      format!("/images/{city}-{neighborhood}.jpg"),
    coordinates:    None,
    url_structure:  UrlStructure {
      city:         city.to_string(),
      neighborhood: neighborhood.to_string(),
    },
    seo:            AreaSeo {
      title:        format!("{neighborhood} homes"),
      description:  format!("{neighborhood} description"),
      keywords:     vec![],
      intents:      Default::default(),
      url_patterns: Default::default(),
    },
    highlights:     vec![],
    features:       vec![],
    amenities:      vec![],
    property_types: vec!["condo".into()],
    faqs:           vec![],
    is_published:   published,
    created_at:     now,
    updated_at:     now,
  }
}

fn lead(email: &str) -> Lead {
  let sub = LeadSubmission {
    name:      Some("Al Kay".into()),
    email:     Some(email.into()),
    area:      Some("Toronto".into()),
    lead_type: Some("buyer".into()),
    ..LeadSubmission::default()
  };
  Lead::from_submission(&sub, "Toronto", Utc::now()).unwrap()
}

// ─── Areas ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_and_resolve_by_slug() {
  let s = store().await;
  s.insert_area(area("toronto", "yorkville", true)).await.unwrap();

  let found = s.area_by_slug("toronto-yorkville").await.unwrap();
  assert!(found.is_some());
  assert_eq!(found.unwrap().name, "Yorkville");
}

#[tokio::test]
async fn slug_lookup_is_case_insensitive() {
  let s = store().await;
  s.insert_area(area("toronto", "yorkville", true)).await.unwrap();

  let found = s.area_by_slug("Toronto-Yorkville").await.unwrap();
  assert!(found.is_some());
}

#[tokio::test]
async fn unpublished_area_is_not_resolvable() {
  let s = store().await;
  s.insert_area(area("toronto", "yorkville", false)).await.unwrap();

  assert!(s.area_by_slug("toronto-yorkville").await.unwrap().is_none());
  assert!(s
    .area_by_city_neighborhood("toronto", "yorkville")
    .await
    .unwrap()
    .is_none());
}

#[tokio::test]
async fn resolve_by_city_and_neighborhood() {
  let s = store().await;
  s.insert_area(area("toronto", "yorkville", true)).await.unwrap();

  let found = s
    .area_by_city_neighborhood("Toronto", "Yorkville")
    .await
    .unwrap();
  assert!(found.is_some());
  assert!(s
    .area_by_city_neighborhood("toronto", "leslieville")
    .await
    .unwrap()
    .is_none());
}

#[tokio::test]
async fn duplicate_slug_is_rejected() {
  let s = store().await;
  s.insert_area(area("toronto", "yorkville", true)).await.unwrap();

  let err = s
    .insert_area(area("toronto", "yorkville", true))
    .await
    .unwrap_err();
  assert!(
    matches!(err, Error::DuplicateSlug(ref slug) if slug == "toronto-yorkville"),
    "{err:?}"
  );
}

#[tokio::test]
async fn duplicate_city_neighborhood_is_rejected() {
  let s = store().await;
  s.insert_area(area("toronto", "yorkville", true)).await.unwrap();

  // Different slug, same (city, neighborhood) pair.
  let mut clash = area("toronto", "yorkville", true);
  clash.slug = "yorkville-alias".into();
  let err = s.insert_area(clash).await.unwrap_err();
  assert!(
    matches!(err, Error::DuplicateCityNeighborhood { .. }),
    "{err:?}"
  );
}

#[tokio::test]
async fn areas_by_city_filters_and_orders() {
  let s = store().await;
  s.insert_area(area("toronto", "yorkville", true)).await.unwrap();
  s.insert_area(area("toronto", "annex", true)).await.unwrap();
  s.insert_area(area("toronto", "leslieville", false)).await.unwrap();
  s.insert_area(area("vaughan", "maple", true)).await.unwrap();

  let toronto = s.areas_by_city("toronto").await.unwrap();
  let slugs: Vec<&str> = toronto.iter().map(|a| a.slug.as_str()).collect();
  assert_eq!(slugs, vec!["toronto-annex", "toronto-yorkville"]);
}

#[tokio::test]
async fn list_areas_published_filter_and_limit() {
  let s = store().await;
  s.insert_area(area("toronto", "yorkville", true)).await.unwrap();
  s.insert_area(area("toronto", "annex", true)).await.unwrap();
  s.insert_area(area("toronto", "leslieville", false)).await.unwrap();

  let published = s.list_areas(&AreaQuery::published()).await.unwrap();
  assert_eq!(published.len(), 2);

  let all = s.list_areas(&AreaQuery::default()).await.unwrap();
  assert_eq!(all.len(), 3);

  let limited = s
    .list_areas(&AreaQuery { limit: Some(1), ..AreaQuery::published() })
    .await
    .unwrap();
  assert_eq!(limited.len(), 1);
}

#[tokio::test]
async fn invalid_area_is_rejected_before_insert() {
  let s = store().await;
  let mut bad = area("toronto", "yorkville", true);
  bad.seo.title = String::new();
  let err = s.insert_area(bad).await.unwrap_err();
  assert!(matches!(err, Error::Core(_)), "{err:?}");
}

// ─── Intents ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn intents_round_trip_in_insertion_order() {
  let s = store().await;
  let seeds = catalog::seed_intents();
  for intent in seeds.clone() {
    s.upsert_intent(intent).await.unwrap();
  }

  let listed = s.list_intents().await.unwrap();
  assert_eq!(listed.len(), seeds.len());
  for (stored, seed) in listed.iter().zip(&seeds) {
    assert_eq!(stored.display_name, seed.display_name);
    assert_eq!(stored.keywords, seed.keywords);
  }
}

#[tokio::test]
async fn upsert_intent_replaces_existing() {
  let s = store().await;
  let mut intent = catalog::seed_intents().remove(0);
  s.upsert_intent(intent.clone()).await.unwrap();

  intent.is_active = false;
  s.upsert_intent(intent).await.unwrap();

  let listed = s.list_intents().await.unwrap();
  assert_eq!(listed.len(), 1);
  assert!(!listed[0].is_active);
}

// ─── Leads ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn lead_round_trip() {
  let s = store().await;
  let l = lead("a@b.co");
  s.insert_lead(l.clone()).await.unwrap();

  let fetched = s.lead_by_id(l.lead_id).await.unwrap().unwrap();
  assert_eq!(fetched.email, "a@b.co");
  assert_eq!(fetched.status, l.status);
}

#[tokio::test]
async fn recent_leads_newest_first_with_limit() {
  let s = store().await;
  for i in 0..5 {
    let mut l = lead(&format!("lead{i}@example.com"));
    l.created_at = Utc::now() + chrono::Duration::seconds(i);
    s.insert_lead(l).await.unwrap();
  }

  let recent = s.recent_leads(3).await.unwrap();
  assert_eq!(recent.len(), 3);
  assert_eq!(recent[0].email, "lead4@example.com");
  assert_eq!(recent[2].email, "lead2@example.com");
}
