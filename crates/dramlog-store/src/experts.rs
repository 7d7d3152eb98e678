//! Flat listing of expert tasting files, used by the per-reviewer
//! tasting index.

use dramlog_core::model::{ExpertTasting, TastingRecord};
use dramlog_core::Result;

use crate::Store;

fn clean(s: Option<&str>) -> Option<String> {
    s.map(str::trim).filter(|t| !t.is_empty()).map(str::to_string)
}

/// Display label for the listing: the same fallback chain the identity
/// resolver uses, but without any normalization.
fn whisky_label(record: &TastingRecord) -> Option<String> {
    clean(record.whisky.name_display.as_deref())
        .or_else(|| clean(record.whisky.brand_or_label.as_deref()))
        .or_else(|| clean(record.whisky.bottling_notes_label.as_deref()))
}

impl Store {
    /// One row per parseable file under `data/tastings/experts`, in
    /// lexicographic path order.
    pub fn load_expert_tastings(&self) -> Result<Vec<ExpertTasting>> {
        let base = self.root().experts_dir();
        if !base.is_dir() {
            return Ok(Vec::new());
        }

        let mut out = Vec::new();
        for path in crate::tastings::json_files_under(&base) {
            let record: TastingRecord = match std::fs::read_to_string(&path)
                .map_err(|e| e.to_string())
                .and_then(|raw| serde_json::from_str(&raw).map_err(|e| e.to_string()))
            {
                Ok(record) => record,
                Err(e) => {
                    log::warn!("skipping malformed tasting {}: {e}", path.display());
                    continue;
                }
            };
            out.push(ExpertTasting {
                file_rel_path: self.root().rel_path(&path).to_string_lossy().into_owned(),
                filename: path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                contributor_id: clean(record.contributor.id.as_deref()),
                contributor_name: clean(record.contributor.name.as_deref()),
                contributor_tier: Some(record.contributor.tier.as_str().to_string()),
                whisky_label: whisky_label(&record),
            });
        }
        Ok(out)
    }

    /// Expert tasting rows for one contributor id.
    pub fn expert_tastings_by_contributor(&self, id: &str) -> Result<Vec<ExpertTasting>> {
        let mut rows = self.load_expert_tastings()?;
        rows.retain(|r| r.contributor_id.as_deref() == Some(id));
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_tasting(root: &std::path::Path, rel: &str, id: &str, label: &str) {
        let full = root.join(rel);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(
            full,
            format!(
                r#"{{"contributor": {{"id": "{id}", "name": "Someone", "tier": "expert"}},
                    "whisky": {{"name_display": "{label}"}}}}"#
            ),
        )
        .unwrap();
    }

    #[test]
    fn lists_rows_with_labels() {
        let tmp = TempDir::new().unwrap();
        write_tasting(
            tmp.path(),
            "data/tastings/experts/jane/a.json",
            "jane",
            "Glen Foo 12",
        );

        let rows = Store::open(tmp.path()).load_expert_tastings().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].whisky_label.as_deref(), Some("Glen Foo 12"));
        assert_eq!(rows[0].filename, "a.json");
        assert_eq!(rows[0].file_rel_path, "data/tastings/experts/jane/a.json");
    }

    #[test]
    fn filters_by_contributor_id() {
        let tmp = TempDir::new().unwrap();
        write_tasting(tmp.path(), "data/tastings/experts/jane/a.json", "jane", "A");
        write_tasting(tmp.path(), "data/tastings/experts/john/b.json", "john", "B");

        let rows = Store::open(tmp.path())
            .expert_tastings_by_contributor("jane")
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].contributor_id.as_deref(), Some("jane"));
    }

    #[test]
    fn label_falls_back_to_brand_or_label() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("data/tastings/experts/jane");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("t.json"),
            r#"{"contributor": {"id": "jane", "tier": "expert"},
                "whisky": {"brand_or_label": "House Blend"}}"#,
        )
        .unwrap();

        let rows = Store::open(tmp.path()).load_expert_tastings().unwrap();
        assert_eq!(rows[0].whisky_label.as_deref(), Some("House Blend"));
    }
}
