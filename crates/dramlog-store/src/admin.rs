//! Consumer review ingestion.
//!
//! The one write path in the store: validate a submitted review,
//! resolve the missing display fields from existing data, and persist
//! a full tasting record under the reviewer's consumers directory.
//! Writes are last-write-wins and non-atomic; the sequence suffix only
//! avoids collisions between distinct submissions.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use dramlog_core::model::{
    ConsumerScoring, Contributor, Dates, PermissionStatus, ServeStyle, SourceBlock,
    SourcePermission, TastingBlock, TastingRecord, Tier, Whisky,
};
use dramlog_core::{Error, Result};

use crate::Store;

static SEQ_SUFFIX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)-(\d{3})\.json$").ok());

const FALLBACK_CATEGORY: &str = "Blended Scotch Whisky";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PayloadReviewer {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PayloadBottle {
    pub key: Option<String>,
    pub name_display: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PayloadPermission {
    pub status: Option<String>,
    pub note: Option<String>,
}

/// Submitted review, before validation. Two shapes are accepted: the
/// flat form-submission shape (marked `type: "review"`, `tier:
/// "consumer"`) and the structured shape with nested `reviewer` and
/// `bottle` objects. Everything is optional here; normalization
/// decides what is actually required.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConsumerReviewPayload {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub tier: Option<String>,
    pub reviewer: PayloadReviewer,
    pub bottle: PayloadBottle,
    pub reviewer_id: Option<String>,
    pub bottle_key: Option<String>,
    pub tasted_date: Option<String>,
    pub overall_1_10: Option<f64>,
    pub served: Option<String>,
    pub rebuy: Option<bool>,
    pub would_buy_again: Option<bool>,
    pub note: Option<String>,
    pub summary: Option<String>,
    pub permission: PayloadPermission,
}

/// A validated review, ready to persist. Display fields that the
/// payload omitted are still `None` here; the writer resolves them.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedReview {
    pub reviewer_id: String,
    pub reviewer_name: Option<String>,
    pub bottle_key: String,
    pub bottle_name: Option<String>,
    pub bottle_category: Option<String>,
    pub tasted_date: String,
    pub served: ServeStyle,
    pub overall_1_10: f64,
    pub would_buy_again: bool,
    pub summary: Option<String>,
    pub permission: SourcePermission,
}

/// Outcome of a successful write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrittenReview {
    /// Path of the new file, relative to the data root.
    pub written: String,
    /// Global tasting slug of the new record.
    pub slug: String,
}

fn clean(s: Option<&str>) -> Option<String> {
    s.map(str::trim).filter(|t| !t.is_empty()).map(str::to_string)
}

fn serve_style(s: Option<&str>) -> ServeStyle {
    match s {
        Some("With water") => ServeStyle::WithWater,
        Some("Highball") => ServeStyle::Highball,
        Some("Cocktail") => ServeStyle::Cocktail,
        Some("Other") => ServeStyle::Other,
        _ => ServeStyle::Neat,
    }
}

fn permission_status(s: Option<&str>) -> PermissionStatus {
    match s {
        Some("approved") => PermissionStatus::Approved,
        Some("pending") => PermissionStatus::Pending,
        _ => PermissionStatus::Unknown,
    }
}

/// Round to the nearest integer and clamp to the 1-10 scoring range.
fn clamp_overall(n: f64) -> f64 {
    n.round().clamp(1.0, 10.0)
}

fn missing(field: &str) -> Error {
    Error::InvalidData(format!("missing {field}"))
}

impl NormalizedReview {
    /// Validate a payload, naming the first missing field on failure.
    pub fn from_payload(p: &ConsumerReviewPayload) -> Result<Self> {
        let served = serve_style(clean(p.served.as_deref()).as_deref());
        let permission = SourcePermission {
            status: permission_status(clean(p.permission.status.as_deref()).as_deref()),
            note: clean(p.permission.note.as_deref()),
        };

        let is_form = clean(p.kind.as_deref()).as_deref() == Some("review")
            && clean(p.tier.as_deref()).as_deref() == Some("consumer");

        if is_form {
            let reviewer_id = clean(p.reviewer_id.as_deref()).ok_or_else(|| missing("reviewer_id"))?;
            let bottle_key = clean(p.bottle_key.as_deref()).ok_or_else(|| missing("bottle_key"))?;
            let tasted_date = clean(p.tasted_date.as_deref()).ok_or_else(|| missing("tasted_date"))?;
            let overall = p
                .overall_1_10
                .filter(|v| v.is_finite())
                .ok_or_else(|| missing("overall_1_10"))?;

            return Ok(Self {
                reviewer_id,
                reviewer_name: None,
                bottle_key,
                bottle_name: None,
                bottle_category: None,
                tasted_date,
                served,
                overall_1_10: clamp_overall(overall),
                would_buy_again: p.rebuy.unwrap_or(false),
                summary: clean(p.note.as_deref()),
                permission,
            });
        }

        let reviewer_id = clean(p.reviewer.id.as_deref());
        let reviewer_name = clean(p.reviewer.name.as_deref());
        let (Some(reviewer_id), Some(reviewer_name)) = (reviewer_id, reviewer_name) else {
            return Err(missing("reviewer.id or reviewer.name"));
        };

        let bottle_key = clean(p.bottle.key.as_deref());
        let bottle_name = clean(p.bottle.name_display.as_deref());
        let bottle_category = clean(p.bottle.category.as_deref());
        let (Some(bottle_key), Some(bottle_name), Some(bottle_category)) =
            (bottle_key, bottle_name, bottle_category)
        else {
            return Err(missing("bottle fields"));
        };

        let tasted_date = clean(p.tasted_date.as_deref()).ok_or_else(|| missing("tasted_date"))?;
        let overall = p
            .overall_1_10
            .filter(|v| v.is_finite())
            .ok_or_else(|| missing("overall_1_10"))?;

        Ok(Self {
            reviewer_id,
            reviewer_name: Some(reviewer_name),
            bottle_key,
            bottle_name: Some(bottle_name),
            bottle_category: Some(bottle_category),
            tasted_date,
            served,
            overall_1_10: clamp_overall(overall),
            would_buy_again: p.would_buy_again.unwrap_or(false),
            summary: clean(p.summary.as_deref()),
            permission,
        })
    }
}

/// Date keeps only digits and hyphens, truncated to `YYYY-MM-DD`
/// width; anything left empty falls back to today.
fn sanitize_date(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .take(10)
        .collect();
    if cleaned.is_empty() {
        chrono::Local::now().format("%Y-%m-%d").to_string()
    } else {
        cleaned
    }
}

/// Next free sequence number for `{prefix}NNN.json` files in `dir`.
/// An unreadable directory starts the sequence at 1.
fn next_sequence(dir: &Path, prefix: &str) -> u32 {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return 1;
    };
    let max = entries
        .filter_map(|e| e.ok())
        .filter_map(|e| e.file_name().into_string().ok())
        .filter(|name| name.starts_with(prefix))
        .filter_map(|name| {
            SEQ_SUFFIX
                .as_ref()
                .and_then(|re| re.captures(&name))
                .and_then(|c| c.get(1))
                .and_then(|m| m.as_str().parse::<u32>().ok())
        })
        .filter(|n| *n > 0)
        .max()
        .unwrap_or(0);
    max + 1
}

impl Store {
    /// Validate and persist one consumer review.
    pub fn write_consumer_review(&self, payload: &ConsumerReviewPayload) -> Result<WrittenReview> {
        let review = NormalizedReview::from_payload(payload)?;

        let reviewer_name = match review.reviewer_name.clone() {
            Some(name) => name,
            None => self
                .load_reviewer(&review.reviewer_id)
                .ok()
                .map(|r| r.display_name)
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| review.reviewer_id.clone()),
        };

        let (bottle_name, bottle_category) =
            match (review.bottle_name.clone(), review.bottle_category.clone()) {
                (Some(name), Some(category)) => (name, category),
                _ => self.resolve_bottle_meta(&review.bottle_key),
            };

        let out_dir = self.root().consumers_dir().join(&review.reviewer_id);
        std::fs::create_dir_all(&out_dir)?;

        let date = sanitize_date(&review.tasted_date);
        let prefix = format!("{}-consumer-{date}-", review.bottle_key);
        let seq = next_sequence(&out_dir, &prefix);
        let stem = format!("{prefix}{seq:03}");
        let path = out_dir.join(format!("{stem}.json"));

        let record = TastingRecord {
            id: Some(format!("{}:{stem}", review.reviewer_id)),
            kind: Some("tasting".to_string()),
            version: Some("1.0".to_string()),
            contributor: Contributor {
                id: Some(review.reviewer_id.clone()),
                name: Some(reviewer_name.clone()),
                tier: Tier::Consumer,
                source_platform: None,
            },
            dates: Dates {
                post_date: None,
                tasted_date: Some(review.tasted_date.clone()),
                note: None,
            },
            whisky: Whisky {
                name_display: Some(bottle_name),
                category: Some(bottle_category.clone()),
                style: Some(bottle_category),
                ..Default::default()
            },
            tasting: TastingBlock {
                summary: review.summary.clone(),
                ..Default::default()
            },
            consumer_scoring: Some(ConsumerScoring {
                overall_1_10: Some(review.overall_1_10),
                served: review.served,
                would_buy_again: review.would_buy_again,
            }),
            source: SourceBlock {
                permission: review.permission.clone(),
                ..Default::default()
            },
            tags: None,
        };

        let json = serde_json::to_string_pretty(&record)?;
        std::fs::write(&path, format!("{json}\n"))?;

        Ok(WrittenReview {
            written: self.root().rel_path(&path).to_string_lossy().into_owned(),
            slug: format!("consumer:{reviewer_name}:{stem}"),
        })
    }

    /// Display name and category for a bottle key, taken from its
    /// first existing tasting row.
    fn resolve_bottle_meta(&self, bottle_key: &str) -> (String, String) {
        let hit = self
            .load_all_bottle_tastings()
            .ok()
            .and_then(|rows| rows.into_iter().find(|r| r.bottle_key == bottle_key));

        match hit {
            Some(row) if !row.bottle_name.is_empty() => {
                let category = row
                    .category
                    .filter(|c| !c.is_empty())
                    .unwrap_or_else(|| FALLBACK_CATEGORY.to_string());
                (row.bottle_name, category)
            }
            _ => (bottle_key.to_string(), FALLBACK_CATEGORY.to_string()),
        }
    }
}
