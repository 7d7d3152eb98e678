//! Reviewer roster: `data/reviewers/index.json` plus one profile file
//! per reviewer id.

use dramlog_core::model::{Reviewer, ReviewersIndex};
use dramlog_core::{Error, Result};

use crate::Store;

impl Store {
    /// The ordered roster. A missing index is an empty roster.
    pub fn load_reviewers_index(&self) -> Result<ReviewersIndex> {
        let path = self.root().reviewers_index_file();
        if !path.is_file() {
            return Ok(ReviewersIndex::default());
        }
        let raw = std::fs::read_to_string(&path)?;
        let mut index: ReviewersIndex = serde_json::from_str(&raw)?;
        index.reviewers.sort_by(|a, b| a.order.cmp(&b.order));
        Ok(index)
    }

    /// One reviewer profile by id.
    pub fn load_reviewer(&self, id: &str) -> Result<Reviewer> {
        let path = self.root().reviewers_dir().join(format!("{id}.json"));
        if !path.is_file() {
            return Err(Error::NotFound {
                entity: "reviewer",
                id: id.to_string(),
            });
        }
        let raw = std::fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Every profile the index names, in index order. Ids in the index
    /// without a readable profile are logged and skipped rather than
    /// failing the roster.
    pub fn load_all_reviewers(&self) -> Result<Vec<Reviewer>> {
        let index = self.load_reviewers_index()?;
        let mut out = Vec::with_capacity(index.reviewers.len());
        for entry in &index.reviewers {
            match self.load_reviewer(&entry.id) {
                Ok(reviewer) => out.push(reviewer),
                Err(e) => log::warn!("skipping reviewer {}: {e}", entry.id),
            }
        }
        Ok(out)
    }
}
