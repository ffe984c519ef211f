//! The URL enumerator.
//!
//! Order is fixed: static pages, then one page per distinct city
//! (first-seen over areas ordered by slug), then per area the base URL,
//! every intent-keyword URL, and the property-type variants under the
//! `buy` segment.

use std::collections::HashSet;

use chrono::NaiveDate;
use homescout_core::{area::{Area, slugify}, catalog};

use crate::{ChangeFreq, SitemapUrl};

/// A fixed marketing page with its crawl hints.
#[derive(Debug, Clone, Copy)]
pub struct StaticPage {
  pub path:     &'static str,
  pub priority: f32,
  pub changefreq: ChangeFreq,
}

/// The static page set: home, agent finder, and the two tool pages.
pub const STATIC_PAGES: &[StaticPage] = &[
  StaticPage { path: "", priority: 1.0, changefreq: ChangeFreq::Daily },
  StaticPage { path: "find-realtor", priority: 0.9, changefreq: ChangeFreq::Weekly },
  StaticPage {
    path:       "tools/home-value-estimator",
    priority:   0.8,
    changefreq: ChangeFreq::Weekly,
  },
  StaticPage {
    path:       "tools/land-transfer-tax-calculator",
    priority:   0.8,
    changefreq: ChangeFreq::Weekly,
  },
];

fn push_static(urls: &mut Vec<SitemapUrl>, base_url: &str, today: NaiveDate) {
  for page in STATIC_PAGES {
    let loc = if page.path.is_empty() {
      base_url.to_string()
    } else {
      format!("{base_url}/{}", page.path)
    };
    urls.push(SitemapUrl {
      loc,
      lastmod:    Some(today),
      changefreq: Some(page.changefreq),
      priority:   Some(page.priority),
    });
  }
}

/// Enumerate every canonical URL for a snapshot of published areas and a
/// keyword universe.
///
/// `areas` is expected to be ordered (the store returns slug order) and
/// to contain published areas only; an unpublished area passed in would
/// still be skipped.
pub fn enumerate(
  base_url: &str,
  areas:    &[Area],
  keywords: &[String],
  today:    NaiveDate,
) -> Vec<SitemapUrl> {
  let base_url = base_url.trim_end_matches('/');
  let mut urls = Vec::new();

  push_static(&mut urls, base_url, today);

  let published: Vec<&Area> =
    areas.iter().filter(|a| a.is_published).collect();

  // City pages, first-seen order over the slug-ordered area list.
  let mut seen_cities: HashSet<&str> = HashSet::new();
  for area in &published {
    let city = area.url_structure.city.as_str();
    if seen_cities.insert(city) {
      urls.push(SitemapUrl {
        loc:        format!("{base_url}/{}", city.to_lowercase()),
        lastmod:    Some(today),
        changefreq: Some(ChangeFreq::Daily),
        priority:   Some(0.9),
      });
    }
  }

  for area in &published {
    let city         = area.url_structure.city.to_lowercase();
    let neighborhood = area.url_structure.neighborhood.to_lowercase();
    let area_base    = format!("{base_url}/{city}/{neighborhood}");
    let area_lastmod = area.updated_at.date_naive();

    urls.push(SitemapUrl {
      loc:        area_base.clone(),
      lastmod:    Some(area_lastmod),
      changefreq: Some(ChangeFreq::Daily),
      priority:   Some(0.8),
    });

    for keyword in keywords {
      urls.push(SitemapUrl {
        loc:        format!("{area_base}/{keyword}"),
        lastmod:    Some(area_lastmod),
        changefreq: Some(ChangeFreq::Daily),
        priority:   Some(0.7),
      });
    }

    for property_type in &area.property_types {
      urls.push(SitemapUrl {
        loc:        format!("{area_base}/buy/{}", slugify(property_type)),
        lastmod:    Some(area_lastmod),
        changefreq: Some(ChangeFreq::Weekly),
        priority:   Some(0.6),
      });
    }
  }

  urls
}

/// The degraded sitemap served when the store is unreachable: static
/// pages plus the location catalog's city pages.
pub fn degraded(base_url: &str, today: NaiveDate) -> Vec<SitemapUrl> {
  let base_url = base_url.trim_end_matches('/');
  let mut urls = Vec::new();

  push_static(&mut urls, base_url, today);

  for city in catalog::city_slugs() {
    urls.push(SitemapUrl {
      loc:        format!("{base_url}/{city}"),
      lastmod:    Some(today),
      changefreq: Some(ChangeFreq::Daily),
      priority:   Some(0.9),
    });
  }

  urls
}
