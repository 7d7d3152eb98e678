//! Reviewer profiles and the expert tasting listing row.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewerLink {
    pub label: String,
    pub url: String,
}

/// A reviewer profile, one JSON file under `data/reviewers/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Reviewer {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub country: String,
    pub language: String,
    pub display_name: String,
    pub sort_name: String,
    pub bio: String,
    pub links: Vec<ReviewerLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewerIndexEntry {
    pub id: String,
    pub order: i64,
}

/// `data/reviewers/index.json`: the ordered roster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewersIndex {
    pub reviewers: Vec<ReviewerIndexEntry>,
}

/// Flat listing row for one expert tasting file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExpertTasting {
    pub file_rel_path: String,
    pub filename: String,
    pub contributor_id: Option<String>,
    pub contributor_name: Option<String>,
    pub contributor_tier: Option<String>,
    pub whisky_label: Option<String>,
}
