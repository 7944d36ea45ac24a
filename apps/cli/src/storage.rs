//! File-backed dataset loading and starred-id persistence.

use anyhow::Context;
use kanji_core::{parse_dataset, StarStore, StarredSet, StoreError, VocabEntry};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Read and parse the vocabulary dataset.
pub fn load_dataset(path: &Path) -> anyhow::Result<Vec<VocabEntry>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset {}", path.display()))?;
    let entries = parse_dataset(&content)
        .with_context(|| format!("failed to parse dataset {}", path.display()))?;
    tracing::info!(path = %path.display(), entries = entries.len(), "loaded dataset");
    Ok(entries)
}

/// Starred ids stored as a JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStarStore {
    path: PathBuf,
}

impl JsonFileStarStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StarStore for JsonFileStarStore {
    fn load(&self) -> Result<StarredSet, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(StarredSet::from_json_lenient(&raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(StarredSet::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn persist(&mut self, starred: &StarredSet) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, starred.to_json()?)?;
        tracing::debug!(path = %self.path.display(), count = starred.len(), "saved starred ids");
        Ok(())
    }
}
