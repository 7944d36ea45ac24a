//! Answer checking for multiple-choice and written questions.

use crate::normalize::{normalize_english, normalize_kanji};
use crate::types::{Direction, VocabEntry};
use serde::Serialize;
use std::collections::HashSet;

/// Outcome of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeOutcome {
    Correct,
    Incorrect,
    /// The question was already answered correctly; nothing changed.
    AlreadyCorrect,
}

/// Result of grading one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grade {
    pub outcome: GradeOutcome,
    /// What the user submitted, verbatim.
    pub submitted: String,
    /// Canonical answer, revealed for feedback.
    pub correct_answer: String,
}

impl Grade {
    pub fn is_correct(&self) -> bool {
        matches!(self.outcome, GradeOutcome::Correct | GradeOutcome::AlreadyCorrect)
    }
}

/// Answer shown by an explicit reveal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reveal {
    pub answer: String,
    pub compound: bool,
}

impl Reveal {
    pub fn kind_label(&self) -> &'static str {
        if self.compound {
            "Compound"
        } else {
            "Single kanji"
        }
    }
}

/// Multiple-choice options are verbatim dataset text, so only exact equality counts.
pub fn is_correct_choice(entry: &VocabEntry, direction: Direction, choice: &str) -> bool {
    choice == entry.target(direction)
}

/// Normalized strings a written answer may match.
///
/// Kanji-to-meaning accepts the meaning and every alternative; meaning-to-kanji
/// accepts only the kanji.
pub fn accepted_answers(entry: &VocabEntry, direction: Direction) -> HashSet<String> {
    match direction {
        Direction::KanjiToMeaning => std::iter::once(&entry.meaning)
            .chain(entry.alts.iter())
            .map(|s| normalize_english(s))
            .collect(),
        Direction::MeaningToKanji => HashSet::from([normalize_kanji(&entry.kanji)]),
    }
}

/// Check a written answer with the normalizer matching the direction.
pub fn is_correct_written(entry: &VocabEntry, direction: Direction, input: &str) -> bool {
    let normalized = match direction {
        Direction::KanjiToMeaning => normalize_english(input),
        Direction::MeaningToKanji => normalize_kanji(input),
    };
    accepted_answers(entry, direction).contains(&normalized)
}
