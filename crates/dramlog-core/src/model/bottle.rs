//! Derived bottle types: the per-record row, the aggregate identity,
//! and the per-bottle summary.
//!
//! These serialize in camelCase because they are the wire shapes the
//! presentation layer consumes (and the shape of the static catalogue
//! file on disk).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Aggregate bottle identity.
///
/// `key` is the stable grouping id (`<base>-<N>yo` when an age is
/// known); `slug` is the user-facing URL segment and may use the
/// longer `-year-old` form. The aggregator reconciles the two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BottleKey {
    pub key: String,
    pub slug: String,
    pub name: String,
    pub category: Option<String>,
    pub age_years: Option<f64>,
    pub abv_percent: Option<f64>,
    pub brand_or_label: Option<String>,
}

impl Default for BottleKey {
    fn default() -> Self {
        Self {
            key: String::new(),
            slug: String::new(),
            name: String::new(),
            category: None,
            age_years: None,
            abv_percent: None,
            brand_or_label: None,
        }
    }
}

impl BottleKey {
    /// Minimal identity for a slug nothing else matched: key, slug and
    /// name are all the requested slug.
    #[must_use]
    pub fn placeholder(slug: &str) -> Self {
        Self {
            key: slug.to_string(),
            slug: slug.to_string(),
            name: slug.to_string(),
            category: None,
            age_years: None,
            abv_percent: None,
            brand_or_label: None,
        }
    }
}

/// A bottle pre-registered in the static catalogue, independently of
/// any tasting records. Same shape as [`BottleKey`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogueBottle {
    pub key: String,
    pub slug: String,
    pub name: String,
    pub category: Option<String>,
    pub age_years: Option<f64>,
    pub abv_percent: Option<f64>,
    pub brand_or_label: Option<String>,
}

impl Default for CatalogueBottle {
    fn default() -> Self {
        Self {
            key: String::new(),
            slug: String::new(),
            name: String::new(),
            category: None,
            age_years: None,
            abv_percent: None,
            brand_or_label: None,
        }
    }
}

impl CatalogueBottle {
    /// Catalogue rows need all three identity fields to be usable.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.key.is_empty() && !self.slug.is_empty() && !self.name.is_empty()
    }
}

/// One tasting record, flattened and enriched with its resolved bottle
/// identity. In-memory only; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BottleTasting {
    pub tasting_slug: String,
    pub file_rel_path: String,
    pub filename: String,
    pub bottle_name: String,
    pub bottle_slug: String,
    pub bottle_key: String,
    pub category: Option<String>,
    pub contributor_id: Option<String>,
    pub contributor_name: Option<String>,
    pub contributor_tier: Option<String>,
    /// 1-10 overall score, when the record carries a finite one.
    pub overall_1to10: Option<f64>,
    /// `round(clamp(overall, 1, 10) / 2)` clamped to 1..=5.
    /// `Some` exactly when `overall_1to10` is `Some`.
    pub overall_stars_1to5: Option<u8>,
}

impl Default for BottleTasting {
    fn default() -> Self {
        Self {
            tasting_slug: String::new(),
            file_rel_path: String::new(),
            filename: String::new(),
            bottle_name: String::new(),
            bottle_slug: String::new(),
            bottle_key: String::new(),
            category: None,
            contributor_id: None,
            contributor_name: None,
            contributor_tier: None,
            overall_1to10: None,
            overall_stars_1to5: None,
        }
    }
}

/// Histogram of 1-5 star ratings. Buckets stay materialized even when
/// zero so the wire shape is always `{"1": n, ..., "5": n}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<u8, u32>", into = "BTreeMap<u8, u32>")]
pub struct StarDistribution([u32; 5]);

impl StarDistribution {
    /// Count one rating at `stars`; out-of-range values are ignored.
    pub fn record(&mut self, stars: u8) {
        if (1..=5).contains(&stars) {
            self.0[usize::from(stars) - 1] += 1;
        }
    }

    #[must_use]
    pub fn count(&self, stars: u8) -> u32 {
        if (1..=5).contains(&stars) {
            self.0[usize::from(stars) - 1]
        } else {
            0
        }
    }

    /// Sum over all buckets; equals the rated count of the summary
    /// this distribution belongs to.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }
}

impl From<BTreeMap<u8, u32>> for StarDistribution {
    fn from(map: BTreeMap<u8, u32>) -> Self {
        let mut dist = Self::default();
        for (stars, count) in map {
            if (1..=5).contains(&stars) {
                dist.0[usize::from(stars) - 1] = count;
            }
        }
        dist
    }
}

impl From<StarDistribution> for BTreeMap<u8, u32> {
    fn from(dist: StarDistribution) -> Self {
        (1..=5u8).map(|s| (s, dist.count(s))).collect()
    }
}

/// Per-bottle aggregate statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BottleSummary {
    pub bottle: BottleKey,
    pub tasting_count: usize,
    pub rated_count: usize,
    pub avg_overall_1to10: Option<f64>,
    pub dist_stars_1to5: StarDistribution,
}

/// One bottle with its full, unaggregated tasting list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BottleDetail {
    pub bottle: BottleKey,
    pub tastings: Vec<BottleTasting>,
}
