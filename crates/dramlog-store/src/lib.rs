//! Filesystem data layer for dramlog.
//!
//! Implements the tasting record loader, the static bottle catalogue,
//! reviewer profiles, the bottler lookup, and the admin write path,
//! all rooted at an explicit [`DataRoot`] rather than ambient working
//! directory reads. Aggregation itself lives in `dramlog-core`; this
//! crate feeds it rows.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod admin;
pub mod catalogue;
pub mod config;
pub mod experts;
pub mod lookups;
pub mod paths;
pub mod reviewers;
pub mod tastings;

pub use admin::{ConsumerReviewPayload, NormalizedReview, WrittenReview};
pub use config::Config;
pub use paths::DataRoot;
pub use tastings::{TastingEntry, ValidationReport};

use dramlog_core::model::{BottleDetail, BottleSummary};
use dramlog_core::{aggregate, Result};

/// Handle over one data root. Cheap to clone; every read re-walks the
/// corpus, so there is no cache to share or invalidate.
#[derive(Debug, Clone)]
pub struct Store {
    root: DataRoot,
}

impl Store {
    #[must_use]
    pub fn new(root: DataRoot) -> Self {
        Self { root }
    }

    /// Open a store rooted at the given repository directory (the one
    /// containing `data/`).
    #[must_use]
    pub fn open(root: impl Into<std::path::PathBuf>) -> Self {
        Self::new(DataRoot::new(root))
    }

    #[must_use]
    pub fn root(&self) -> &DataRoot {
        &self.root
    }

    /// All bottle summaries, sorted by rated count, tasting count and
    /// name. Catalogue-only bottles appear with zero counts.
    pub fn load_bottle_summaries(&self) -> Result<Vec<BottleSummary>> {
        let rows = self.load_all_bottle_tastings()?;
        let catalogue = self.load_catalogue_bottles();
        Ok(aggregate::summarize(&rows, &catalogue))
    }

    /// Detail view for one slug. Unknown slugs resolve to a
    /// placeholder with an empty tasting list.
    pub fn load_bottle_detail(&self, slug: &str) -> Result<BottleDetail> {
        let rows = self.load_all_bottle_tastings()?;
        let catalogue = self.load_catalogue_bottles();
        Ok(aggregate::detail(slug, &rows, &catalogue))
    }
}
