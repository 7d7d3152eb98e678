//! Bottle aggregation: grouping, statistics, and the detail lookup.
//!
//! Pure functions of `(tasting rows, catalogue rows)` so the whole
//! layer is testable without a file system. The catalogue seeds groups
//! for bottles that have no tastings yet and supplies metadata the
//! rows never carry (ABV, brand).

use std::collections::{BTreeMap, HashMap};

use crate::model::{
    BottleDetail, BottleKey, BottleSummary, BottleTasting, CatalogueBottle, StarDistribution,
};

/// Group rows by bottle key. Every row lands in exactly one group;
/// `BTreeMap` keeps group iteration deterministic.
#[must_use]
pub fn group_by_key(rows: &[BottleTasting]) -> BTreeMap<String, Vec<BottleTasting>> {
    let mut groups: BTreeMap<String, Vec<BottleTasting>> = BTreeMap::new();
    for row in rows {
        groups.entry(row.bottle_key.clone()).or_default().push(row.clone());
    }
    groups
}

/// Choose the public slug for a group of rows.
///
/// Among member slugs ending in `-year-old` the shortest wins, ties
/// broken lexicographically; otherwise the first member's slug, or its
/// key, or "unknown-bottle". Deterministic for a fixed member list.
#[must_use]
pub fn preferred_slug(members: &[BottleTasting]) -> String {
    let mut year_old: Vec<&str> = members
        .iter()
        .map(|t| t.bottle_slug.as_str())
        .filter(|s| s.ends_with("-year-old"))
        .collect();

    if !year_old.is_empty() {
        year_old.sort_by(|a, b| a.len().cmp(&b.len()).then(a.cmp(b)));
        return year_old[0].to_string();
    }

    members
        .first()
        .map(|t| {
            if t.bottle_slug.is_empty() {
                t.bottle_key.clone()
            } else {
                t.bottle_slug.clone()
            }
        })
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown-bottle".to_string())
}

fn summary_for_group(
    key: &str,
    members: &[BottleTasting],
    cat: Option<&CatalogueBottle>,
) -> BottleSummary {
    let rated: Vec<&BottleTasting> =
        members.iter().filter(|t| t.overall_1to10.is_some()).collect();
    let rated_count = rated.len();

    let avg_overall_1to10 = if rated_count == 0 {
        None
    } else {
        let sum: f64 = rated.iter().filter_map(|t| t.overall_1to10).sum();
        Some(sum / rated_count as f64)
    };

    let mut dist_stars_1to5 = StarDistribution::default();
    for row in &rated {
        if let Some(stars) = row.overall_stars_1to5 {
            dist_stars_1to5.record(stars);
        }
    }

    let slug = if members.is_empty() {
        cat.map(|c| c.slug.clone())
            .unwrap_or_else(|| "unknown-bottle".to_string())
    } else {
        preferred_slug(members)
    };

    let name = members
        .first()
        .map(|t| t.bottle_name.clone())
        .filter(|n| !n.is_empty())
        .or_else(|| cat.map(|c| c.name.clone()))
        .unwrap_or_else(|| slug.clone());

    let category = members
        .first()
        .and_then(|t| t.category.clone())
        .or_else(|| cat.and_then(|c| c.category.clone()));

    BottleSummary {
        bottle: BottleKey {
            key: key.to_string(),
            slug,
            name,
            category,
            age_years: cat.and_then(|c| c.age_years),
            abv_percent: cat.and_then(|c| c.abv_percent),
            brand_or_label: cat.and_then(|c| c.brand_or_label.clone()),
        },
        tasting_count: members.len(),
        rated_count,
        avg_overall_1to10,
        dist_stars_1to5,
    }
}

/// Aggregate all rows (plus catalogue seeds) into per-bottle summaries.
///
/// Output order: rated count descending, then tasting count
/// descending, then name ascending case-insensitively — most social
/// proof first, alphabetical for stable presentation of equals.
#[must_use]
pub fn summarize(rows: &[BottleTasting], catalogue: &[CatalogueBottle]) -> Vec<BottleSummary> {
    let mut groups = group_by_key(rows);
    for cat in catalogue {
        groups.entry(cat.key.clone()).or_default();
    }

    let cat_by_key: HashMap<&str, &CatalogueBottle> =
        catalogue.iter().map(|c| (c.key.as_str(), c)).collect();

    let mut out: Vec<BottleSummary> = groups
        .iter()
        .map(|(key, members)| summary_for_group(key, members, cat_by_key.get(key.as_str()).copied()))
        .collect();

    out.sort_by(|a, b| {
        b.rated_count
            .cmp(&a.rated_count)
            .then(b.tasting_count.cmp(&a.tasting_count))
            .then_with(|| {
                a.bottle
                    .name
                    .to_lowercase()
                    .cmp(&b.bottle.name.to_lowercase())
            })
    });

    out
}

/// Find the bottle a slug refers to and return its full tasting list.
///
/// Never fails: an unknown slug resolves to a placeholder identity
/// with an empty tasting list, and callers decide how to render that.
#[must_use]
pub fn detail(slug: &str, rows: &[BottleTasting], catalogue: &[CatalogueBottle]) -> BottleDetail {
    let groups = group_by_key(rows);

    for (key, members) in &groups {
        if preferred_slug(members) != slug {
            continue;
        }

        let cat = catalogue.iter().find(|c| c.key == *key);
        let first = members.first();

        let bottle = BottleKey {
            key: key.clone(),
            slug: slug.to_string(),
            name: first
                .map(|t| t.bottle_name.clone())
                .filter(|n| !n.is_empty())
                .or_else(|| cat.map(|c| c.name.clone()))
                .unwrap_or_else(|| slug.to_string()),
            category: first
                .and_then(|t| t.category.clone())
                .or_else(|| cat.and_then(|c| c.category.clone())),
            age_years: cat.and_then(|c| c.age_years),
            abv_percent: cat.and_then(|c| c.abv_percent),
            brand_or_label: cat.and_then(|c| c.brand_or_label.clone()),
        };

        let mut tastings = members.clone();
        tastings.sort_by(|a, b| a.tasting_slug.cmp(&b.tasting_slug));

        return BottleDetail { bottle, tastings };
    }

    // No tasting-derived group owns this slug; try the catalogue.
    if let Some(cat) = catalogue.iter().find(|c| c.slug == slug) {
        return BottleDetail {
            bottle: BottleKey {
                key: cat.key.clone(),
                slug: cat.slug.clone(),
                name: cat.name.clone(),
                category: cat.category.clone(),
                age_years: cat.age_years,
                abv_percent: cat.abv_percent,
                brand_or_label: cat.brand_or_label.clone(),
            },
            tastings: Vec::new(),
        };
    }

    BottleDetail {
        bottle: BottleKey::placeholder(slug),
        tastings: Vec::new(),
    }
}
