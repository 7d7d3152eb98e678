//! The persisted tasting record: one JSON document per tasting event.
//!
//! The corpus is hand-edited, so every nested block is optional with a
//! sensible default; an absent `whisky` block still resolves to an
//! "Unknown Bottle" identity downstream rather than failing the parse.

use serde::{Deserialize, Serialize};

/// Contributor classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Expert,
    Consumer,
    #[default]
    #[serde(other)]
    Other,
}

impl Tier {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Expert => "expert",
            Self::Consumer => "consumer",
            Self::Other => "other",
        }
    }
}

/// How a consumer review was served.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServeStyle {
    #[default]
    Neat,
    #[serde(rename = "With water")]
    WithWater,
    Highball,
    Cocktail,
    #[serde(other)]
    Other,
}

/// Publication permission for sourced material.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionStatus {
    Approved,
    Pending,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contributor {
    pub id: Option<String>,
    pub name: Option<String>,
    pub tier: Tier,
    pub source_platform: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dates {
    pub post_date: Option<String>,
    pub tasted_date: Option<String>,
    pub note: Option<String>,
}

/// The whisky block of a tasting record. Free text all the way down:
/// there is no stable bottle id, which is why the identity resolver
/// exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Whisky {
    pub name_display: Option<String>,
    pub category: Option<String>,
    pub style: Option<String>,
    pub region: Option<String>,
    pub distillery: Option<String>,
    pub brand_or_label: Option<String>,
    pub series: Option<String>,
    pub age_years: Option<f64>,
    pub abv_percent: Option<f64>,
    pub cask_type: Option<String>,
    pub cask_number: Option<String>,
    pub bottle_count: Option<u32>,
    pub bottling_notes_label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notes {
    pub nose: Vec<String>,
    pub palate: Vec<String>,
    pub finish: Vec<String>,
    pub overall: Vec<String>,
}

/// Expert score field. Older records carry a bare number, newer ones a
/// structured object; only the structured form contributes a 1-10
/// overall score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Score {
    Simple(f64),
    Detailed {
        #[serde(default)]
        overall_1_10: Option<f64>,
    },
}

impl Score {
    /// The 1-10 overall score, if this score carries one.
    #[must_use]
    pub fn overall_1_10(&self) -> Option<f64> {
        match self {
            Self::Simple(_) => None,
            Self::Detailed { overall_1_10 } => *overall_1_10,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TastingBlock {
    pub summary: Option<String>,
    pub notes: Notes,
    pub score: Option<Score>,
    pub comparisons: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsumerScoring {
    pub overall_1_10: Option<f64>,
    pub served: ServeStyle,
    pub would_buy_again: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceAsset {
    pub kind: Option<String>,
    pub path: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcePermission {
    pub status: PermissionStatus,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceBlock {
    pub platform: Option<String>,
    pub post_url: Option<String>,
    pub original_text: Option<String>,
    pub assets: Vec<SourceAsset>,
    pub permission: SourcePermission,
}

/// One tasting event, as persisted under `data/tastings/**/*.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TastingRecord {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub version: Option<String>,
    pub contributor: Contributor,
    pub dates: Dates,
    pub whisky: Whisky,
    pub tasting: TastingBlock,
    pub consumer_scoring: Option<ConsumerScoring>,
    pub source: SourceBlock,
    pub tags: Option<Vec<String>>,
}

impl TastingRecord {
    /// First finite 1-10 overall score: consumer scoring wins over the
    /// expert score block.
    #[must_use]
    pub fn overall_1_10(&self) -> Option<f64> {
        self.consumer_scoring
            .as_ref()
            .and_then(|c| c.overall_1_10)
            .or_else(|| self.tasting.score.as_ref().and_then(Score::overall_1_10))
            .filter(|v| v.is_finite())
    }
}
