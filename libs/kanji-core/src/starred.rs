//! Starred entries and their persistence seam.

use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

/// Ids the user marked for focused review.
///
/// Ids that are not in the loaded dataset are kept but never match an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StarredSet(BTreeSet<i64>);

impl StarredSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: i64) -> bool {
        self.0.contains(&id)
    }

    /// Flip membership of `id`. Returns whether it is starred afterwards.
    pub fn toggle(&mut self, id: i64) -> bool {
        if self.0.remove(&id) {
            false
        } else {
            self.0.insert(id);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.0.iter().copied()
    }

    /// Serialize as a JSON array of integers.
    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string(&self.0)?)
    }

    /// Parse stored JSON, tolerating garbage.
    ///
    /// Anything that is not a JSON array yields an empty set. Array items that
    /// are integers or integer strings are kept; everything else is skipped.
    pub fn from_json_lenient(raw: &str) -> Self {
        let items = match serde_json::from_str::<Value>(raw) {
            Ok(Value::Array(items)) => items,
            Ok(_) => {
                tracing::warn!("starred data is not an array, starting empty");
                return Self::default();
            }
            Err(e) => {
                tracing::warn!(error = %e, "starred data is not valid JSON, starting empty");
                return Self::default();
            }
        };

        items
            .iter()
            .filter_map(|item| match item {
                Value::Number(n) => n.as_i64(),
                Value::String(s) => s.trim().parse::<i64>().ok(),
                _ => None,
            })
            .collect()
    }
}

impl FromIterator<i64> for StarredSet {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Durable storage for the starred set, owned by the presentation layer.
pub trait StarStore {
    /// Read the stored set once at startup.
    fn load(&self) -> Result<StarredSet, StoreError>;

    /// Write the full set. Called synchronously after every toggle.
    fn persist(&mut self, starred: &StarredSet) -> Result<(), StoreError>;
}

/// Store that keeps the last persisted set in memory.
#[derive(Debug, Default)]
pub struct MemoryStarStore {
    saved: StarredSet,
    writes: usize,
}

impl MemoryStarStore {
    pub fn with_ids(ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            saved: ids.into_iter().collect(),
            writes: 0,
        }
    }

    pub fn saved(&self) -> &StarredSet {
        &self.saved
    }

    /// Number of persist calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl StarStore for MemoryStarStore {
    fn load(&self) -> Result<StarredSet, StoreError> {
        Ok(self.saved.clone())
    }

    fn persist(&mut self, starred: &StarredSet) -> Result<(), StoreError> {
        self.saved = starred.clone();
        self.writes += 1;
        Ok(())
    }
}
