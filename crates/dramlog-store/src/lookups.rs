//! Independent bottler lookup.
//!
//! `data/lookups/bottlers.json` maps short ids to display names. The
//! file is optional; resolution degrades to echoing the input.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use dramlog_core::normalize::slugify;

use crate::Store;

/// One id/name pair from the bottler lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bottler {
    pub id: String,
    pub name: String,
}

/// Rows may live under a `bottlers` or an `items` key; both shapes
/// exist in the wild.
fn rows_from(value: &Value) -> Vec<Bottler> {
    let arr = value
        .get("bottlers")
        .and_then(Value::as_array)
        .or_else(|| value.get("items").and_then(Value::as_array));
    let Some(arr) = arr else {
        return Vec::new();
    };
    arr.iter()
        .filter_map(|row| {
            let id = row.get("id")?.as_str()?.trim();
            let name = row.get("name")?.as_str()?.trim();
            if id.is_empty() || name.is_empty() {
                return None;
            }
            Some(Bottler {
                id: id.to_string(),
                name: name.to_string(),
            })
        })
        .collect()
}

impl Store {
    /// All usable lookup rows. Missing or malformed file means none.
    #[must_use]
    pub fn load_bottlers(&self) -> Vec<Bottler> {
        let path = self.root().bottlers_file();
        let Ok(raw) = std::fs::read_to_string(&path) else {
            return Vec::new();
        };
        match serde_json::from_str::<Value>(&raw) {
            Ok(value) => rows_from(&value),
            Err(e) => {
                log::warn!("ignoring malformed bottler lookup {}: {e}", path.display());
                Vec::new()
            }
        }
    }

    /// Canonical display name for a bottler reference.
    ///
    /// Matches by id (slugified or verbatim), then by slugified name,
    /// and falls back to the trimmed input. Blank input is `None`.
    #[must_use]
    pub fn resolve_bottler_name(&self, input: Option<&str>) -> Option<String> {
        let raw = input.map(str::trim).filter(|s| !s.is_empty())?;

        let bottlers = self.load_bottlers();
        if bottlers.is_empty() {
            return Some(raw.to_string());
        }

        let key = slugify(raw);
        if let Some(hit) = bottlers.iter().find(|b| b.id == key || b.id == raw) {
            return Some(hit.name.clone());
        }
        if let Some(hit) = bottlers.iter().find(|b| slugify(&b.name) == key) {
            return Some(hit.name.clone());
        }
        Some(raw.to_string())
    }
}
