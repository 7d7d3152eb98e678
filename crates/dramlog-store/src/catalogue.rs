//! Static bottle catalogue.
//!
//! `data/bottles/catalogue.json` pre-registers bottles so they appear
//! in listings before any tasting mentions them. The file is optional
//! and best-effort: missing or malformed means an empty catalogue, not
//! a failed page.

use serde::Deserialize;

use dramlog_core::model::CatalogueBottle;

use crate::Store;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CatalogueFile {
    bottles: Vec<CatalogueBottle>,
}

impl Store {
    /// Catalogue rows with all three identity fields present. Rows
    /// missing a key, slug or name are dropped with a warning.
    #[must_use]
    pub fn load_catalogue_bottles(&self) -> Vec<CatalogueBottle> {
        let path = self.root().catalogue_file();
        let Ok(raw) = std::fs::read_to_string(&path) else {
            return Vec::new();
        };
        let parsed: CatalogueFile = match serde_json::from_str(&raw) {
            Ok(parsed) => parsed,
            Err(e) => {
                log::warn!("ignoring malformed catalogue {}: {e}", path.display());
                return Vec::new();
            }
        };
        parsed
            .bottles
            .into_iter()
            .filter(|b| {
                let complete = b.is_complete();
                if !complete {
                    log::warn!("dropping incomplete catalogue row (key {:?})", b.key);
                }
                complete
            })
            .collect()
    }
}
