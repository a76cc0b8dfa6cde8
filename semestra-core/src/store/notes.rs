//! Read-only store for the notes catalog.
//!
//! The catalog lives as a single JSON document at `<data_dir>/notes.json`,
//! written by the notes side of the app. A missing file is an empty
//! catalog, not an error.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{SemestraError, SemestraResult};
use crate::notes::Catalog;

pub struct NotesStore {
    path: PathBuf,
}

impl NotesStore {
    pub fn new(data_dir: &Path) -> Self {
        NotesStore {
            path: data_dir.join("notes.json"),
        }
    }

    pub fn load(&self) -> SemestraResult<Catalog> {
        if !self.path.exists() {
            warn!(file = %self.path.display(), "notes catalog missing, using empty catalog");
            return Ok(Catalog::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|e| SemestraError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let store = NotesStore::new(dir.path());
        let catalog = store.load().unwrap();
        assert!(catalog.semesters.is_empty());
    }

    #[test]
    fn test_loads_catalog_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let json = r#"{
            "semesters": [
                { "id": 1, "name": "Y1S1", "is_active": true, "courses": [] }
            ]
        }"#;
        std::fs::write(dir.path().join("notes.json"), json).unwrap();

        let catalog = NotesStore::new(dir.path()).load().unwrap();
        assert_eq!(catalog.semesters.len(), 1);
        assert_eq!(catalog.active_semester().map(|s| s.name.as_str()), Some("Y1S1"));
    }

    #[test]
    fn test_malformed_catalog_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.json"), "not json").unwrap();

        assert!(matches!(
            NotesStore::new(dir.path()).load(),
            Err(SemestraError::Serialization(_))
        ));
    }
}
