//! Data tree layout under one explicit root.

use std::path::{Path, PathBuf};

/// The repository directory holding `data/`. All store operations are
/// functions of this root; nothing reads the process working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataRoot {
    root: PathBuf,
}

impl DataRoot {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `data/tastings`: the full record tree.
    #[must_use]
    pub fn tastings_dir(&self) -> PathBuf {
        self.root.join("data").join("tastings")
    }

    /// `data/tastings/experts`: one subdirectory per expert contributor.
    #[must_use]
    pub fn experts_dir(&self) -> PathBuf {
        self.tastings_dir().join("experts")
    }

    /// `data/tastings/consumers`: one subdirectory per consumer reviewer.
    #[must_use]
    pub fn consumers_dir(&self) -> PathBuf {
        self.tastings_dir().join("consumers")
    }

    /// `data/tastings/consumers/templates`: form templates, never
    /// tasting data; the loader skips this subtree.
    #[must_use]
    pub fn consumer_templates_dir(&self) -> PathBuf {
        self.consumers_dir().join("templates")
    }

    /// `data/bottles/catalogue.json`: the optional static catalogue.
    #[must_use]
    pub fn catalogue_file(&self) -> PathBuf {
        self.root.join("data").join("bottles").join("catalogue.json")
    }

    /// `data/reviewers`: profile files plus `index.json`.
    #[must_use]
    pub fn reviewers_dir(&self) -> PathBuf {
        self.root.join("data").join("reviewers")
    }

    #[must_use]
    pub fn reviewers_index_file(&self) -> PathBuf {
        self.reviewers_dir().join("index.json")
    }

    /// `data/lookups/bottlers.json`: independent bottler id/name map.
    #[must_use]
    pub fn bottlers_file(&self) -> PathBuf {
        self.root.join("data").join("lookups").join("bottlers.json")
    }

    /// Path relative to the root, for display and for the
    /// `file_rel_path` row field. Falls back to the full path when the
    /// file is outside the root.
    #[must_use]
    pub fn rel_path(&self, full: &Path) -> PathBuf {
        full.strip_prefix(&self.root)
            .map_or_else(|_| full.to_path_buf(), Path::to_path_buf)
    }
}
