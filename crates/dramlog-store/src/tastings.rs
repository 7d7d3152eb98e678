//! Tasting corpus loader.
//!
//! Walks `data/tastings` in lexicographic path order and turns each
//! JSON file into one [`BottleTasting`] row. Individual parse failures
//! are logged and skipped so one hand-edited bad file never takes the
//! whole batch down; `validate` surfaces them explicitly.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use dramlog_core::identity::BottleIdentity;
use dramlog_core::model::{BottleTasting, TastingRecord};
use dramlog_core::normalize::stars_from_1to10;
use dramlog_core::Result;

use crate::Store;

/// One browsable tasting: the parsed record plus its site-wide slug
/// (`tier:name:file_slug`) and the directory it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TastingEntry {
    pub slug: String,
    pub record: TastingRecord,
    pub origin: PathBuf,
}

/// Outcome of a corpus validation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Number of JSON files examined.
    pub scanned: usize,
    /// Files that failed to parse, with the parser's message.
    pub failures: Vec<(PathBuf, String)>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

fn is_json_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case("json"))
}

/// File name without its `.json` suffix (case-insensitive).
fn file_slug(filename: &str) -> String {
    filename
        .len()
        .checked_sub(5)
        .and_then(|cut| filename.get(cut..).map(|ext| (cut, ext)))
        .filter(|(_, ext)| ext.eq_ignore_ascii_case(".json"))
        .map_or_else(|| filename.to_string(), |(cut, _)| filename[..cut].to_string())
}

/// Every `*.json` file under `dir`, sorted by full path so repeated
/// runs over unchanged input produce identical ordering.
pub(crate) fn json_files_under(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_json_file(e.path()))
        .map(|e| e.into_path())
        .collect();
    files.sort();
    files
}

fn read_record(path: &Path) -> std::result::Result<TastingRecord, String> {
    let raw = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_json::from_str(&raw).map_err(|e| e.to_string())
}

fn clean(s: Option<&str>) -> Option<String> {
    s.map(str::trim).filter(|t| !t.is_empty()).map(str::to_string)
}

/// Site-wide slug for a browsable tasting: `tier:name:file_slug`.
fn global_slug(record: &TastingRecord, file_slug: &str) -> String {
    let tier = record.contributor.tier.as_str();
    let name = record.contributor.name.as_deref().unwrap_or("Unknown");
    format!("{tier}:{name}:{file_slug}")
}

/// Split a global slug back into its parts. Anything with fewer than
/// three `:`-separated segments is treated as a bare file slug (the
/// contributor name itself may contain colons, so the middle is joined
/// back together).
fn parse_global_slug(slug: &str) -> (Option<String>, String) {
    let parts: Vec<&str> = slug.split(':').collect();
    if parts.len() >= 3 {
        let name = parts[1..parts.len() - 1].join(":");
        let file = parts[parts.len() - 1].to_string();
        (Some(name), file)
    } else {
        (None, slug.to_string())
    }
}

/// Immediate subdirectories of `dir`, sorted by name; missing parent
/// directories yield an empty list.
fn subdirs(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut dirs: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    dirs.sort();
    dirs
}

fn row_from_record(store: &Store, path: &Path, record: &TastingRecord) -> BottleTasting {
    let identity = BottleIdentity::from_whisky(&record.whisky);

    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let overall = record.overall_1_10();

    BottleTasting {
        tasting_slug: file_slug(&filename),
        file_rel_path: store.root().rel_path(path).to_string_lossy().into_owned(),
        filename,
        bottle_name: identity.name,
        bottle_slug: identity.slug,
        bottle_key: identity.key,
        category: clean(record.whisky.category.as_deref()),
        contributor_id: clean(record.contributor.id.as_deref()),
        contributor_name: clean(record.contributor.name.as_deref()),
        contributor_tier: Some(record.contributor.tier.as_str().to_string()),
        overall_1to10: overall,
        overall_stars_1to5: overall.map(stars_from_1to10),
    }
}

impl Store {
    /// One row per parseable tasting file under `data/tastings`,
    /// excluding the consumer form templates.
    pub fn load_all_bottle_tastings(&self) -> Result<Vec<BottleTasting>> {
        let base = self.root().tastings_dir();
        if !base.is_dir() {
            return Ok(Vec::new());
        }
        let templates = self.root().consumer_templates_dir();

        let mut rows = Vec::new();
        for path in json_files_under(&base) {
            if path.starts_with(&templates) {
                continue;
            }
            match read_record(&path) {
                Ok(record) => rows.push(row_from_record(self, &path, &record)),
                Err(e) => {
                    log::warn!("skipping malformed tasting {}: {e}", path.display());
                }
            }
        }
        Ok(rows)
    }

    /// Browsable tastings with global slugs: every per-contributor
    /// directory under `experts/` then `consumers/`, each sorted.
    pub fn list_all_tastings(&self) -> Result<Vec<TastingEntry>> {
        let mut out = Vec::new();

        for parent in [self.root().experts_dir(), self.root().consumers_dir()] {
            for dir in subdirs(&parent) {
                for path in json_files_under(&dir) {
                    let Ok(record) = read_record(&path).map_err(|e| {
                        log::warn!("skipping malformed tasting {}: {e}", path.display());
                    }) else {
                        continue;
                    };
                    let filename = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    out.push(TastingEntry {
                        slug: global_slug(&record, &file_slug(&filename)),
                        record,
                        origin: dir.clone(),
                    });
                }
            }
        }

        Ok(out)
    }

    /// Look one tasting up by its global (or bare file) slug.
    ///
    /// A full `tier:name:file` slug is matched exactly by contributor
    /// name first; a bare file slug falls back to a search across
    /// expert then consumer directories.
    pub fn tasting_by_slug(&self, slug: &str) -> Result<Option<TastingEntry>> {
        let (name, file) = parse_global_slug(slug);

        if let Some(name) = &name {
            for dir in subdirs(&self.root().experts_dir()) {
                let path = dir.join(format!("{file}.json"));
                if !path.is_file() {
                    continue;
                }
                if let Ok(record) = read_record(&path) {
                    if record.contributor.name.as_deref() == Some(name.as_str()) {
                        return Ok(Some(TastingEntry {
                            slug: slug.to_string(),
                            record,
                            origin: dir,
                        }));
                    }
                }
            }
        }

        for parent in [self.root().experts_dir(), self.root().consumers_dir()] {
            for dir in subdirs(&parent) {
                let path = dir.join(format!("{file}.json"));
                if !path.is_file() {
                    continue;
                }
                if let Ok(record) = read_record(&path) {
                    return Ok(Some(TastingEntry {
                        slug: global_slug(&record, &file),
                        record,
                        origin: dir,
                    }));
                }
            }
        }

        Ok(None)
    }

    /// Walk the whole corpus and report every file that fails to
    /// parse. The loader skips these silently; this is the loud path.
    pub fn validate_tastings(&self) -> Result<ValidationReport> {
        let base = self.root().tastings_dir();
        if !base.is_dir() {
            return Ok(ValidationReport::default());
        }
        let templates = self.root().consumer_templates_dir();

        let mut report = ValidationReport::default();
        for path in json_files_under(&base) {
            if path.starts_with(&templates) {
                continue;
            }
            report.scanned += 1;
            if let Err(e) = read_record(&path) {
                report
                    .failures
                    .push((self.root().rel_path(&path), e));
            }
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn tasting_json(name: &str, age: Option<f64>, score: Option<f64>) -> String {
        let age = age.map_or("null".to_string(), |a| a.to_string());
        let score = score.map_or("null".to_string(), |s| format!("{{\"overall_1_10\": {s}}}"));
        format!(
            r#"{{
                "contributor": {{"id": "jane-doe", "name": "Jane Doe", "tier": "expert"}},
                "whisky": {{"name_display": "{name}", "category": "Blended Scotch Whisky", "age_years": {age}}},
                "tasting": {{"score": {score}}}
            }}"#
        )
    }

    fn write(root: &Path, rel: &str, contents: &str) {
        let full = root.join(rel);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(full, contents).unwrap();
    }

    fn store(tmp: &TempDir) -> Store {
        Store::open(tmp.path())
    }

    #[test]
    fn loads_rows_in_lexicographic_path_order() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "data/tastings/experts/zed/b.json",
            &tasting_json("Glen Zed", None, None),
        );
        write(
            tmp.path(),
            "data/tastings/experts/abe/a.json",
            &tasting_json("Glen Abe", None, None),
        );
        write(
            tmp.path(),
            "data/tastings/experts/abe/c.JSON",
            &tasting_json("Glen Abe", None, None),
        );

        let rows = store(&tmp).load_all_bottle_tastings().unwrap();
        let slugs: Vec<&str> = rows.iter().map(|r| r.tasting_slug.as_str()).collect();
        assert_eq!(slugs, vec!["a", "c", "b"]);
    }

    #[test]
    fn skips_the_consumer_templates_subtree() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "data/tastings/consumers/templates/form.json",
            &tasting_json("Template Bottle", None, None),
        );
        write(
            tmp.path(),
            "data/tastings/consumers/joe/real.json",
            &tasting_json("Real Bottle", None, None),
        );

        let rows = store(&tmp).load_all_bottle_tastings().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].bottle_name, "Real Bottle");
    }

    #[test]
    fn malformed_files_are_skipped_not_fatal() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "data/tastings/experts/x/bad.json", "{not json");
        write(
            tmp.path(),
            "data/tastings/experts/x/good.json",
            &tasting_json("Good Bottle", None, None),
        );

        let rows = store(&tmp).load_all_bottle_tastings().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].tasting_slug, "good");
    }

    #[test]
    fn missing_tastings_dir_is_empty_not_an_error() {
        let tmp = TempDir::new().unwrap();
        let rows = store(&tmp).load_all_bottle_tastings().unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn rows_carry_identity_score_and_stars() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "data/tastings/experts/jane-doe/chivas.json",
            &tasting_json("Chivas Regal 12 Year Old", Some(12.0), Some(9.0)),
        );

        let rows = store(&tmp).load_all_bottle_tastings().unwrap();
        let row = &rows[0];
        assert_eq!(row.bottle_key, "chivas-regal-12yo");
        assert_eq!(row.bottle_slug, "chivas-regal-12-year-old");
        assert_eq!(row.overall_1to10, Some(9.0));
        assert_eq!(row.overall_stars_1to5, Some(5));
        assert_eq!(row.contributor_id.as_deref(), Some("jane-doe"));
        assert_eq!(row.contributor_tier.as_deref(), Some("expert"));
        assert!(row.file_rel_path.starts_with("data/tastings/experts"));
    }

    #[test]
    fn unscored_rows_have_no_stars() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "data/tastings/experts/jane-doe/t.json",
            &tasting_json("Glen Foo", None, None),
        );
        let rows = store(&tmp).load_all_bottle_tastings().unwrap();
        assert_eq!(rows[0].overall_1to10, None);
        assert_eq!(rows[0].overall_stars_1to5, None);
    }

    #[test]
    fn global_slug_roundtrip() {
        let record: TastingRecord = serde_json::from_str(
            r#"{"contributor": {"name": "Jane Doe", "tier": "expert"}}"#,
        )
        .unwrap();
        let slug = global_slug(&record, "my-file");
        assert_eq!(slug, "expert:Jane Doe:my-file");

        let (name, file) = parse_global_slug(&slug);
        assert_eq!(name.as_deref(), Some("Jane Doe"));
        assert_eq!(file, "my-file");

        let (none, bare) = parse_global_slug("just-a-file");
        assert!(none.is_none());
        assert_eq!(bare, "just-a-file");
    }

    #[test]
    fn list_all_tastings_orders_experts_before_consumers() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "data/tastings/consumers/joe/c.json",
            &tasting_json("Consumer Bottle", None, None),
        );
        write(
            tmp.path(),
            "data/tastings/experts/jane-doe/e.json",
            &tasting_json("Expert Bottle", None, None),
        );

        let entries = store(&tmp).list_all_tastings().unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].slug.ends_with(":e"));
        assert!(entries[1].slug.ends_with(":c"));
    }

    #[test]
    fn tasting_by_slug_matches_global_then_bare() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "data/tastings/experts/jane-doe/chivas.json",
            &tasting_json("Chivas Regal", None, None),
        );
        let store = store(&tmp);

        let hit = store
            .tasting_by_slug("expert:Jane Doe:chivas")
            .unwrap()
            .unwrap();
        assert_eq!(hit.slug, "expert:Jane Doe:chivas");

        // a bare file slug still finds it and rebuilds the global slug
        let bare = store.tasting_by_slug("chivas").unwrap().unwrap();
        assert_eq!(bare.slug, "expert:Jane Doe:chivas");

        assert!(store.tasting_by_slug("nope").unwrap().is_none());
    }

    #[test]
    fn validate_reports_failures_with_paths() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "data/tastings/experts/x/bad.json", "{broken");
        write(
            tmp.path(),
            "data/tastings/experts/x/good.json",
            &tasting_json("Fine", None, None),
        );

        let report = store(&tmp).validate_tastings().unwrap();
        assert_eq!(report.scanned, 2);
        assert_eq!(report.failures.len(), 1);
        assert!(!report.is_clean());
        assert!(report.failures[0].0.ends_with("bad.json"));
    }
}
