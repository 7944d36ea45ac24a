//! Vocabulary dataset loading.
//!
//! # Format
//! ```json
//! [
//!   {"id": 1, "level": "N3", "kanji": "本", "meaning": "book", "alts": ["origin"], "compound": false},
//!   {"id": 2, "level": "N3", "kanji": "日本", "meaning": "Japan", "compound": true}
//! ]
//! ```

use crate::error::DatasetError;
use crate::types::{Level, VocabEntry, LESSON_SIZE};
use std::collections::HashSet;

/// Parse a JSON dataset into vocabulary entries.
///
/// Blank input is an empty dataset. Duplicate ids are rejected.
pub fn parse_dataset(content: &str) -> Result<Vec<VocabEntry>, DatasetError> {
    if content.trim().is_empty() {
        return Ok(vec![]);
    }

    let entries: Vec<VocabEntry> = serde_json::from_str(content)?;

    let mut seen_ids = HashSet::new();
    for (index, entry) in entries.iter().enumerate() {
        if !seen_ids.insert(entry.id) {
            return Err(DatasetError::DuplicateId {
                id: entry.id,
                index,
            });
        }
    }

    tracing::debug!(entries = entries.len(), "parsed vocabulary dataset");
    Ok(entries)
}

/// Entries of one level, sorted ascending by id.
pub fn level_entries(entries: &[VocabEntry], level: Level) -> Vec<&VocabEntry> {
    let mut items: Vec<&VocabEntry> = entries.iter().filter(|e| e.level == level).collect();
    items.sort_by_key(|e| e.id);
    items
}

/// Number of lessons in a level (at least 1, even for an empty level).
pub fn lesson_count(entries: &[VocabEntry], level: Level) -> usize {
    let total = entries.iter().filter(|e| e.level == level).count();
    total.div_ceil(LESSON_SIZE).max(1)
}

/// 1-indexed lesson for a position in the id-sorted level list.
pub fn lesson_for_position(position: usize) -> usize {
    position / LESSON_SIZE + 1
}
