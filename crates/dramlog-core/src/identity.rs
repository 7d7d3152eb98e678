//! Bottle identity resolution.
//!
//! Tasting records carry no stable bottle id, so "the same bottle" has
//! to be inferred from free-text whisky fields. The resolver derives a
//! `{key, slug, name}` triple: `key` groups records (`<base>-<N>yo`),
//! `slug` is the URL segment (`<base>-<N>-year-old`), and `name` is the
//! canonical display title. The two forms deliberately diverge; the
//! aggregator reconciles them when choosing a group's public slug.

use serde::{Deserialize, Serialize};

use crate::model::Whisky;
use crate::normalize::{format_age_title, slugify, strip_age_words, strip_generic_type_words};

/// Resolved bottle identity for one tasting record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BottleIdentity {
    pub key: String,
    pub slug: String,
    pub name: String,
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|t| !t.is_empty())
}

impl BottleIdentity {
    /// Derive the identity from a record's whisky block.
    ///
    /// The raw name falls back through `name_display`,
    /// `brand_or_label`, and `bottling_notes_label` before giving up
    /// with "Unknown Bottle". Stripping that would leave an empty
    /// string falls back to the unstripped name, so a display name is
    /// never empty.
    #[must_use]
    pub fn from_whisky(whisky: &Whisky) -> Self {
        let raw_name = non_empty(whisky.name_display.as_deref())
            .or_else(|| non_empty(whisky.brand_or_label.as_deref()))
            .or_else(|| non_empty(whisky.bottling_notes_label.as_deref()))
            .unwrap_or("Unknown Bottle");

        let age = whisky.age_years.filter(|a| a.is_finite());

        let stripped = strip_generic_type_words(&strip_age_words(raw_name, age));
        let base_name = if stripped.is_empty() { raw_name } else { &stripped };
        let base = slugify(base_name);

        match age {
            Some(age) => {
                let rounded = age.round() as i64;
                Self {
                    key: format!("{base}-{rounded}yo"),
                    slug: format!("{base}-{rounded}-year-old"),
                    name: format_age_title(base_name, age),
                }
            }
            None => Self {
                key: base.clone(),
                slug: base,
                name: base_name.to_string(),
            },
        }
    }
}
