//! Filtering the vocabulary into the pool a session draws from.

use crate::dataset::{lesson_for_position, level_entries};
use crate::starred::StarredSet;
use crate::types::{PracticeScope, SessionConfig, VocabEntry};

/// Eligible entries for a configuration, in id order.
#[derive(Debug, Clone, Default)]
pub struct Bank {
    entries: Vec<VocabEntry>,
    summary: String,
}

impl Bank {
    pub fn entries(&self) -> &[VocabEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Info line describing the bank, e.g.
    /// "Bank size: 12 item(s) in N3 all lessons • all items. Starred total: 3."
    pub fn describe(&self) -> &str {
        &self.summary
    }
}

/// Filter `entries` by level, lessons, compounds and practice scope.
///
/// Lesson membership is positional: an entry's lesson is its index in the
/// id-sorted level list divided by the lesson size, plus one. An empty result
/// is a valid bank.
pub fn build_bank(entries: &[VocabEntry], config: &SessionConfig, starred: &StarredSet) -> Bank {
    let filtered: Vec<VocabEntry> = level_entries(entries, config.level)
        .into_iter()
        .enumerate()
        .filter(|(position, _)| config.lessons.contains(lesson_for_position(*position)))
        .map(|(_, entry)| entry)
        .filter(|entry| config.include_compounds || !entry.compound)
        .filter(|entry| match config.practice_scope {
            PracticeScope::All => true,
            PracticeScope::StarredOnly => starred.contains(entry.id),
        })
        .cloned()
        .collect();

    let compounds = if config.include_compounds {
        " (including compounds)"
    } else {
        ""
    };
    let scope = match config.practice_scope {
        PracticeScope::All => "all items",
        PracticeScope::StarredOnly => "starred only",
    };
    let summary = format!(
        "Bank size: {} item(s) in {} {}{} • {}. Starred total: {}.",
        filtered.len(),
        config.level,
        config.lessons.inline_label(),
        compounds,
        scope,
        starred.len()
    );

    tracing::debug!(
        level = %config.level,
        size = filtered.len(),
        "built bank"
    );

    Bank {
        entries: filtered,
        summary,
    }
}
