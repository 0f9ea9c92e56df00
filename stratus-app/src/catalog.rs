//! Published-game catalog.
//!
//! The original deployment kept these markers in a document store; the
//! application only needs insert/remove/find plus two listing orders, so
//! the catalog is a small trait with an in-memory implementation for
//! tests and a YAML-file one for real use.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{io_err, yaml_err, AppError};

/// Marker for a published game, keyed by (author, repo).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Published {
    pub author: String,
    pub repo: String,
    pub timestamp: DateTime<Utc>,
}

/// Store of published-game markers.
pub trait Catalog {
    /// Upsert a marker. Re-publishing refreshes the timestamp.
    fn insert(&mut self, marker: Published) -> Result<(), AppError>;

    /// Remove the marker; false when none was there.
    fn remove(&mut self, author: &str, repo: &str) -> Result<bool, AppError>;

    fn find(&self, author: &str, repo: &str) -> Result<Option<Published>, AppError>;

    /// Newest first (front page).
    fn recent(&self, limit: usize) -> Result<Vec<Published>, AppError>;

    /// Sorted by author, then repo (games index).
    fn all(&self) -> Result<Vec<Published>, AppError>;

    /// Everything one author has published (dashboard).
    fn by_author(&self, author: &str) -> Result<Vec<Published>, AppError>;
}

fn upsert(markers: &mut Vec<Published>, marker: Published) {
    markers.retain(|entry| !(entry.author == marker.author && entry.repo == marker.repo));
    markers.push(marker);
}

fn recent_of(markers: &[Published], limit: usize) -> Vec<Published> {
    let mut sorted = markers.to_vec();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted.truncate(limit);
    sorted
}

fn all_of(markers: &[Published]) -> Vec<Published> {
    let mut sorted = markers.to_vec();
    sorted.sort_by(|a, b| (&a.author, &a.repo).cmp(&(&b.author, &b.repo)));
    sorted
}

// ---------------------------------------------------------------------------
// In-memory catalog
// ---------------------------------------------------------------------------

/// Catalog held entirely in memory. Used in tests and anywhere
/// persistence does not matter.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    markers: Vec<Published>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Catalog for MemoryCatalog {
    fn insert(&mut self, marker: Published) -> Result<(), AppError> {
        upsert(&mut self.markers, marker);
        Ok(())
    }

    fn remove(&mut self, author: &str, repo: &str) -> Result<bool, AppError> {
        let before = self.markers.len();
        self.markers
            .retain(|entry| !(entry.author == author && entry.repo == repo));
        Ok(self.markers.len() != before)
    }

    fn find(&self, author: &str, repo: &str) -> Result<Option<Published>, AppError> {
        Ok(self
            .markers
            .iter()
            .find(|entry| entry.author == author && entry.repo == repo)
            .cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<Published>, AppError> {
        Ok(recent_of(&self.markers, limit))
    }

    fn all(&self) -> Result<Vec<Published>, AppError> {
        Ok(all_of(&self.markers))
    }

    fn by_author(&self, author: &str) -> Result<Vec<Published>, AppError> {
        Ok(self
            .markers
            .iter()
            .filter(|entry| entry.author == author)
            .cloned()
            .collect())
    }
}

// ---------------------------------------------------------------------------
// YAML-file catalog
// ---------------------------------------------------------------------------

/// Catalog persisted as one YAML file. Saved after every mutation via a
/// tmp sibling and rename, so a crash never leaves a half-written file.
#[derive(Debug)]
pub struct YamlCatalog {
    path: PathBuf,
    markers: Vec<Published>,
}

impl YamlCatalog {
    /// Open the catalog file, or start empty when it does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let path = path.into();
        let markers = if path.exists() {
            let contents = std::fs::read_to_string(&path).map_err(|err| io_err(&path, err))?;
            serde_yaml::from_str(&contents).map_err(|err| yaml_err(&path, err))?
        } else {
            Vec::new()
        };
        Ok(Self { path, markers })
    }

    fn save(&self) -> Result<(), AppError> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|err| io_err(dir, err))?;
        }
        let yaml = serde_yaml::to_string(&self.markers).map_err(|err| yaml_err(&self.path, err))?;
        let tmp = self.path.with_extension("yaml.tmp");
        std::fs::write(&tmp, yaml).map_err(|err| io_err(&tmp, err))?;
        std::fs::rename(&tmp, &self.path).map_err(|err| io_err(&self.path, err))?;
        Ok(())
    }
}

impl Catalog for YamlCatalog {
    fn insert(&mut self, marker: Published) -> Result<(), AppError> {
        upsert(&mut self.markers, marker);
        self.save()
    }

    fn remove(&mut self, author: &str, repo: &str) -> Result<bool, AppError> {
        let before = self.markers.len();
        self.markers
            .retain(|entry| !(entry.author == author && entry.repo == repo));
        let removed = self.markers.len() != before;
        if removed {
            self.save()?;
        }
        Ok(removed)
    }

    fn find(&self, author: &str, repo: &str) -> Result<Option<Published>, AppError> {
        Ok(self
            .markers
            .iter()
            .find(|entry| entry.author == author && entry.repo == repo)
            .cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<Published>, AppError> {
        Ok(recent_of(&self.markers, limit))
    }

    fn all(&self) -> Result<Vec<Published>, AppError> {
        Ok(all_of(&self.markers))
    }

    fn by_author(&self, author: &str) -> Result<Vec<Published>, AppError> {
        Ok(self
            .markers
            .iter()
            .filter(|entry| entry.author == author)
            .cloned()
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use tempfile::TempDir;

    use super::*;

    fn marker(author: &str, repo: &str, hour: u32) -> Published {
        Published {
            author: author.to_string(),
            repo: repo.to_string(),
            timestamp: Utc.with_ymd_and_hms(2015, 4, 1, hour, 0, 0).unwrap(),
        }
    }

    #[test]
    fn insert_find_remove_roundtrip() {
        let mut catalog = MemoryCatalog::new();
        catalog.insert(marker("dcrn", "mygame", 1)).expect("insert");

        assert!(catalog.find("dcrn", "mygame").expect("find").is_some());
        assert!(catalog.remove("dcrn", "mygame").expect("remove"));
        assert!(catalog.find("dcrn", "mygame").expect("find").is_none());
        assert!(!catalog.remove("dcrn", "mygame").expect("second remove"));
    }

    #[test]
    fn insert_is_an_upsert() {
        let mut catalog = MemoryCatalog::new();
        catalog.insert(marker("dcrn", "mygame", 1)).expect("insert");
        catalog.insert(marker("dcrn", "mygame", 2)).expect("re-insert");

        assert_eq!(catalog.all().expect("all").len(), 1);
        let found = catalog.find("dcrn", "mygame").expect("find").expect("some");
        assert_eq!(found.timestamp, marker("dcrn", "mygame", 2).timestamp);
    }

    #[test]
    fn recent_is_newest_first_and_capped() {
        let mut catalog = MemoryCatalog::new();
        catalog.insert(marker("a", "one", 1)).expect("insert");
        catalog.insert(marker("b", "two", 3)).expect("insert");
        catalog.insert(marker("c", "three", 2)).expect("insert");

        let recent = catalog.recent(2).expect("recent");
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].repo, "two");
        assert_eq!(recent[1].repo, "three");
    }

    #[test]
    fn all_sorts_by_author_then_repo() {
        let mut catalog = MemoryCatalog::new();
        catalog.insert(marker("b", "z", 1)).expect("insert");
        catalog.insert(marker("a", "z", 1)).expect("insert");
        catalog.insert(marker("a", "a", 1)).expect("insert");

        let all = catalog.all().expect("all");
        let keys: Vec<(&str, &str)> = all
            .iter()
            .map(|entry| (entry.author.as_str(), entry.repo.as_str()))
            .collect();
        assert_eq!(keys, vec![("a", "a"), ("a", "z"), ("b", "z")]);
    }

    #[test]
    fn yaml_catalog_persists_across_reopen() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("catalog.yaml");

        let mut catalog = YamlCatalog::open(&path).expect("open");
        catalog.insert(marker("dcrn", "mygame", 1)).expect("insert");
        drop(catalog);

        let catalog = YamlCatalog::open(&path).expect("reopen");
        assert!(catalog.find("dcrn", "mygame").expect("find").is_some());
    }

    #[test]
    fn yaml_catalog_leaves_no_tmp_file_behind() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("catalog.yaml");

        let mut catalog = YamlCatalog::open(&path).expect("open");
        catalog.insert(marker("dcrn", "mygame", 1)).expect("insert");

        assert!(path.exists());
        assert!(!path.with_extension("yaml.tmp").exists());
    }

    #[test]
    fn yaml_catalog_starts_empty_when_file_absent() {
        let dir = TempDir::new().expect("tempdir");
        let catalog = YamlCatalog::open(dir.path().join("catalog.yaml")).expect("open");
        assert!(catalog.all().expect("all").is_empty());
    }
}
