//! Test fixtures and factory functions for creating vocabulary data.

use kanji_core::{Level, VocabEntry};

/// Generate a JSON dataset with `count` entries per level.
///
/// Every third entry is a compound; ids are unique across levels.
pub fn sample_dataset_json(levels: &[Level], count: i64) -> String {
    let entries: Vec<serde_json::Value> = levels
        .iter()
        .enumerate()
        .flat_map(|(li, level)| {
            (1..=count).map(move |n| {
                let id = li as i64 * 1000 + n;
                serde_json::json!({
                    "id": id,
                    "level": level.as_str(),
                    "kanji": format!("字{id}"),
                    "meaning": format!("meaning {id}"),
                    "alts": [format!("alt {id}")],
                    "compound": n % 3 == 0,
                })
            })
        })
        .collect();
    serde_json::Value::Array(entries).to_string()
}

/// A single non-compound entry.
pub fn entry(id: i64, level: Level, kanji: &str, meaning: &str) -> VocabEntry {
    VocabEntry {
        id,
        level,
        kanji: kanji.to_string(),
        meaning: meaning.to_string(),
        alts: vec![],
        compound: false,
    }
}

/// Five N3 single-kanji entries with real meanings.
pub fn five_n3() -> Vec<VocabEntry> {
    vec![
        entry(1, Level::N3, "本", "book"),
        entry(2, Level::N3, "木", "tree"),
        entry(3, Level::N3, "水", "water"),
        entry(4, Level::N3, "火", "fire"),
        entry(5, Level::N3, "山", "mountain"),
    ]
}
