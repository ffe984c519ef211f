//! Static location and intent seed data.
//!
//! The location catalog is the authoritative list of cities and
//! neighborhoods the brokerage sells in. It backs the `seed` command
//! (which materialises it into the store as published areas) and the
//! sitemap's degraded fallback when the store is unreachable.

use chrono::Utc;
use uuid::Uuid;

use crate::{
  area::{Area, AreaSeo, IntentSeo, UrlStructure},
  intent::Intent,
};

// ─── Location catalog ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct Neighborhood {
  pub name: &'static str,
  pub slug: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct City {
  pub name:          &'static str,
  pub slug:          &'static str,
  pub neighborhoods: &'static [Neighborhood],
}

const fn n(name: &'static str, slug: &'static str) -> Neighborhood {
  Neighborhood { name, slug }
}

const TORONTO: &[Neighborhood] = &[
  n("Financial District", "financial-district"),
  n("Entertainment District", "entertainment-district"),
  n("St. Lawrence", "st-lawrence"),
  n("Distillery District", "distillery-district"),
  n("Harbourfront", "harbourfront"),
  n("King West", "king-west"),
  n("Queen West", "queen-west"),
  n("Liberty Village", "liberty-village"),
  n("Cabbagetown", "cabbagetown"),
  n("Yorkville", "yorkville"),
  n("The Annex", "annex"),
  n("Kensington Market", "kensington-market"),
  n("Little Italy", "little-italy"),
  n("Trinity Bellwoods", "trinity-bellwoods"),
  n("Leslieville", "leslieville"),
  n("The Beaches", "the-beaches"),
];

const MISSISSAUGA: &[Neighborhood] = &[
  n("Port Credit", "port-credit"),
  n("Streetsville", "streetsville"),
  n("Erin Mills", "erin-mills"),
  n("Meadowvale", "meadowvale"),
  n("Cooksville", "cooksville"),
];

const VAUGHAN: &[Neighborhood] = &[
  n("Woodbridge", "woodbridge"),
  n("Maple", "maple"),
  n("Thornhill", "thornhill"),
  n("Kleinburg", "kleinburg"),
];

const MARKHAM: &[Neighborhood] = &[
  n("Unionville", "unionville"),
  n("Cornell", "cornell"),
  n("Markham Village", "markham-village"),
];

const OAKVILLE: &[Neighborhood] = &[
  n("Bronte", "bronte"),
  n("Glen Abbey", "glen-abbey"),
  n("Kerr Village", "kerr-village"),
];

pub const CITIES: &[City] = &[
  City { name: "Toronto", slug: "toronto", neighborhoods: TORONTO },
  City { name: "Mississauga", slug: "mississauga", neighborhoods: MISSISSAUGA },
  City { name: "Vaughan", slug: "vaughan", neighborhoods: VAUGHAN },
  City { name: "Markham", slug: "markham", neighborhoods: MARKHAM },
  City { name: "Oakville", slug: "oakville", neighborhoods: OAKVILLE },
];

/// City page slugs for the degraded sitemap path.
pub fn city_slugs() -> Vec<&'static str> {
  CITIES.iter().map(|c| c.slug).collect()
}

// ─── Seed areas ──────────────────────────────────────────────────────────────

/// Materialise the catalog as published areas with templated SEO blocks.
pub fn seed_areas() -> Vec<Area> {
  let now = Utc::now();
  let mut areas = Vec::new();

  for city in CITIES {
    for nh in city.neighborhoods {
      let mut seo = AreaSeo {
        title:        format!("{} Real Estate | Homes & Agents in {}", nh.name, city.name),
        description:  format!(
          "Browse homes, market insight, and top local agents in {}, {}.",
          nh.name, city.name
        ),
        keywords:     vec![
          format!("{} real estate", nh.name.to_lowercase()),
          format!("{} homes for sale", nh.name.to_lowercase()),
          format!("{} realtor", nh.name.to_lowercase()),
        ],
        intents:      Default::default(),
        url_patterns: Default::default(),
      };
      seo.intents.insert(
        "buy".into(),
        IntentSeo {
          title:       "Buy a Home in {area}".into(),
          description: "Work with a buyer's agent who knows {area} street by street.".into(),
          keywords:    vec!["buy home {area}".into(), "{area} buyers agent".into()],
        },
      );
      seo.intents.insert(
        "sell".into(),
        IntentSeo {
          title:       "Sell Your {area} Home".into(),
          description: "Get a free evaluation and a selling plan built for {area}.".into(),
          keywords:    vec!["sell home {area}".into(), "{area} listing agent".into()],
        },
      );

      areas.push(Area {
        slug: format!("{}-{}", city.slug, nh.slug),
        name: nh.name.to_string(),
        description: format!(
          "{} is one of {}'s most sought-after neighborhoods.",
          nh.name, city.name
        ),
        image_url: format!("/images/areas/{}-{}.jpg", city.slug, nh.slug),
        coordinates: None,
        url_structure: UrlStructure {
          city:         city.slug.to_string(),
          neighborhood: nh.slug.to_string(),
        },
        seo,
        highlights: vec![],
        features: vec![],
        amenities: vec![],
        property_types: vec!["condo".into(), "townhouse".into(), "detached".into()],
        faqs: vec![],
        is_published: true,
        created_at: now,
        updated_at: now,
      });
    }
  }

  areas
}

// ─── Seed intents ────────────────────────────────────────────────────────────

fn seed_intent(
  display_name: &str,
  description:  &str,
  seo_title:    &str,
  seo_desc:     &str,
  keywords:     &[&str],
) -> Intent {
  let now = Utc::now();
  Intent {
    intent_id:       Uuid::new_v4(),
    keywords:        keywords.iter().map(|k| k.to_string()).collect(),
    display_name:    display_name.to_string(),
    description:     description.to_string(),
    seo_title:       seo_title.to_string(),
    seo_description: seo_desc.to_string(),
    seo_keywords:    keywords
      .iter()
      .map(|k| format!("{} {{area}}", k.replace('-', " ")))
      .collect(),
    is_active:       true,
    created_at:      now,
    updated_at:      now,
  }
}

/// The six intent clusters and their keyword universe. Keywords are
/// disjoint across clusters; [`crate::intent::IntentCatalog::new`]
/// re-checks this at load.
pub fn seed_intents() -> Vec<Intent> {
  vec![
    seed_intent(
      "Find an Agent",
      "Connect with a top-rated local agent in {area}.",
      "Top Real Estate Agents in {area}",
      "Compare experienced, trusted realtors serving {area} and find the right fit.",
      &[
        "real-estate-agent", "realtor", "top-realtor", "best-realtor",
        "experienced-realtor", "local-realtor", "trusted-realtor",
        "recommended-realtor", "top-rated-agent", "best-real-estate-agent",
        "experienced-agent", "local-agent", "trusted-agent", "recommended-agent",
      ],
    ),
    seed_intent(
      "Buying & Selling Specialists",
      "Agents who specialise in your side of the transaction in {area}.",
      "Buying & Selling Agents in {area}",
      "Listing agents and buyer's agents with a track record in {area}.",
      &[
        "selling-agent", "listing-agent", "sellers-realtor", "home-selling-agent",
        "buying-agent", "buyers-agent", "buyers-realtor", "home-buying-agent",
        "first-time-buyer-agent", "luxury-home-realtor", "investment-property-agent",
        "condo-specialist", "house-specialist", "townhouse-specialist",
      ],
    ),
    seed_intent(
      "Multilingual Agents",
      "Agents serving {area} in your language.",
      "Multilingual Realtors in {area}",
      "Find agents in {area} who speak your language.",
      &[
        "multilingual-realtor", "chinese-speaking-realtor", "mandarin-speaking-agent",
        "cantonese-speaking-agent", "farsi-speaking-realtor", "persian-speaking-agent",
        "hindi-speaking-agent", "punjabi-speaking-agent", "urdu-speaking-agent",
      ],
    ),
    seed_intent(
      "Home Evaluation & Listing",
      "Find out what your {area} home is worth, free.",
      "Free Home Evaluation in {area}",
      "Get a free, no-obligation valuation of your {area} property.",
      &[
        "free-home-evaluation", "free-house-valuation", "property-value-estimate",
        "what-is-my-home-worth", "sell-my-house", "sell-my-home", "list-my-house",
        "list-my-property", "help-selling-house", "help-buying-house",
        "find-realtor-to-sell", "find-realtor-to-buy",
      ],
    ),
    seed_intent(
      "Market Experts",
      "Talk to a {area} market expert before you decide.",
      "Real Estate Experts in {area}",
      "Consult a local market expert about buying or selling in {area}.",
      &[
        "real-estate-consultation", "real-estate-advice", "housing-market-expert",
        "property-selling-expert", "home-buying-expert", "real-estate-specialist",
        "market-value-expert", "neighbourhood-expert", "local-market-expert",
      ],
    ),
    seed_intent(
      "Property Specialists",
      "Specialists for every property type in {area}.",
      "Property Specialists in {area}",
      "Agents in {area} who specialise in your kind of property.",
      &[
        "luxury-home-specialist", "waterfront-property-agent", "condo-expert-realtor",
        "investment-property-realtor", "commercial-real-estate-agent",
        "pre-construction-specialist", "new-build-expert", "heritage-home-specialist",
        "fixer-upper-expert",
      ],
    ),
  ]
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::intent::IntentCatalog;

  #[test]
  fn seed_intents_build_a_collision_free_catalog() {
    let catalog = IntentCatalog::new(seed_intents()).unwrap();
    // The keyword universe should sit in the observed 60-90 range.
    let universe = catalog.keyword_universe();
    assert!(universe.len() >= 60, "universe: {}", universe.len());
    assert!(catalog.find_by_keyword("realtor").is_some());
    assert!(catalog.find_by_keyword("free-home-evaluation").is_some());
  }

  #[test]
  fn seed_areas_have_unique_slugs() {
    let areas = seed_areas();
    let mut slugs: Vec<&str> = areas.iter().map(|a| a.slug.as_str()).collect();
    let total = slugs.len();
    slugs.sort_unstable();
    slugs.dedup();
    assert_eq!(slugs.len(), total);
  }

  #[test]
  fn seed_areas_belong_to_catalog_cities() {
    let city_slugs = city_slugs();
    for area in seed_areas() {
      assert!(
        city_slugs.contains(&area.url_structure.city.as_str()),
        "unknown city {}",
        area.url_structure.city
      );
    }
  }
}
