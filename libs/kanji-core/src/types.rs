//! Core types for the kanji drill.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Number of entries per lesson within a level.
pub const LESSON_SIZE: usize = 10;

/// JLPT proficiency level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    N5,
    N4,
    N3,
    N2,
    N1,
}

impl Default for Level {
    fn default() -> Self {
        Self::N3
    }
}

impl Level {
    pub const ALL: [Level; 5] = [Self::N5, Self::N4, Self::N3, Self::N2, Self::N1];

    /// Get the level tag as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::N5 => "N5",
            Self::N4 => "N4",
            Self::N3 => "N3",
            Self::N2 => "N2",
            Self::N1 => "N1",
        }
    }

    /// Parse from string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single vocabulary item from the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub id: i64,
    pub level: Level,
    pub kanji: String,
    pub meaning: String,
    #[serde(default)]
    pub alts: Vec<String>,
    #[serde(default)]
    pub compound: bool,
}

impl VocabEntry {
    /// Text shown to the user for the given direction.
    pub fn prompt(&self, direction: Direction) -> &str {
        match direction {
            Direction::KanjiToMeaning => &self.kanji,
            Direction::MeaningToKanji => &self.meaning,
        }
    }

    /// Canonical correct answer for the given direction.
    pub fn target(&self, direction: Direction) -> &str {
        match direction {
            Direction::KanjiToMeaning => &self.meaning,
            Direction::MeaningToKanji => &self.kanji,
        }
    }
}

/// Which field is the prompt and which is the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    KanjiToMeaning,
    MeaningToKanji,
}

impl Direction {
    /// Instruction shown above the prompt.
    pub fn prompt_label(&self) -> &'static str {
        match self {
            Self::KanjiToMeaning => "What does this mean (English)?",
            Self::MeaningToKanji => "Which kanji matches this meaning?",
        }
    }
}

/// Direction setting for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DirectionPolicy {
    KanjiToMeaning,
    MeaningToKanji,
    Mixed,
}

impl Default for DirectionPolicy {
    fn default() -> Self {
        Self::Mixed
    }
}

impl DirectionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::KanjiToMeaning => "kanji-to-meaning",
            Self::MeaningToKanji => "meaning-to-kanji",
            Self::Mixed => "mixed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "kanji-to-meaning" | "k-en" => Some(Self::KanjiToMeaning),
            "meaning-to-kanji" | "en-k" => Some(Self::MeaningToKanji),
            "mixed" => Some(Self::Mixed),
            _ => None,
        }
    }

    fn short_label(&self) -> &'static str {
        match self {
            Self::KanjiToMeaning => "K→EN",
            Self::MeaningToKanji => "EN→K",
            Self::Mixed => "Mixed dir",
        }
    }
}

/// How the user answers a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnswerMode {
    MultipleChoice,
    Written,
}

impl AnswerMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MultipleChoice => "multiple-choice",
            Self::Written => "written",
        }
    }
}

/// Answer mode setting for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModePolicy {
    MultipleChoice,
    Written,
    Mixed,
}

impl Default for ModePolicy {
    fn default() -> Self {
        Self::Mixed
    }
}

impl ModePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MultipleChoice => "multiple-choice",
            Self::Written => "written",
            Self::Mixed => "mixed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "multiple-choice" | "mc" => Some(Self::MultipleChoice),
            "written" | "write" => Some(Self::Written),
            "mixed" => Some(Self::Mixed),
            _ => None,
        }
    }

    fn short_label(&self) -> &'static str {
        match self {
            Self::MultipleChoice => "MC",
            Self::Written => "Written",
            Self::Mixed => "Mixed mode",
        }
    }
}

/// Which entries of the filtered level are eligible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PracticeScope {
    All,
    StarredOnly,
}

impl Default for PracticeScope {
    fn default() -> Self {
        Self::All
    }
}

impl PracticeScope {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "all" => Some(Self::All),
            "starred-only" | "starred" => Some(Self::StarredOnly),
            _ => None,
        }
    }
}

/// Lessons included in the bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LessonSelection {
    All,
    Only(BTreeSet<usize>),
}

impl Default for LessonSelection {
    fn default() -> Self {
        Self::All
    }
}

impl LessonSelection {
    /// Build a selection from raw picker values ("all", "1", "2", ...).
    ///
    /// "all" wins over any numbers; an empty or unparsable selection is "all".
    pub fn from_values<S: AsRef<str>>(values: &[S]) -> Self {
        let mut lessons = BTreeSet::new();
        for value in values {
            let value = value.as_ref().trim();
            if value.eq_ignore_ascii_case("all") {
                return Self::All;
            }
            if let Ok(n) = value.parse::<usize>() {
                if n > 0 {
                    lessons.insert(n);
                }
            }
        }
        if lessons.is_empty() {
            Self::All
        } else {
            Self::Only(lessons)
        }
    }

    /// Whether the 1-indexed lesson number is included.
    pub fn contains(&self, lesson: usize) -> bool {
        match self {
            Self::All => true,
            Self::Only(set) => set.contains(&lesson),
        }
    }

    /// Drop lessons beyond `lesson_count`, falling back to "all" if none remain.
    pub fn retain_available(self, lesson_count: usize) -> Self {
        match self {
            Self::All => Self::All,
            Self::Only(set) => {
                let kept: BTreeSet<usize> = set
                    .into_iter()
                    .filter(|&n| n >= 1 && n <= lesson_count)
                    .collect();
                if kept.is_empty() {
                    Self::All
                } else {
                    Self::Only(kept)
                }
            }
        }
    }

    /// Human label, e.g. "All lessons", "Lesson 2", "Lessons 1, 3".
    pub fn label(&self) -> String {
        match self {
            Self::All => "All lessons".to_string(),
            Self::Only(set) if set.len() == 1 => {
                format!("Lesson {}", set.iter().next().copied().unwrap_or_default())
            }
            Self::Only(set) => format!("Lessons {}", join_numbers(set)),
        }
    }

    /// Lowercase label used inside sentences.
    pub(crate) fn inline_label(&self) -> String {
        match self {
            Self::All => "all lessons".to_string(),
            Self::Only(set) => format!("lessons {}", join_numbers(set)),
        }
    }
}

fn join_numbers(set: &BTreeSet<usize>) -> String {
    set.iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Settings for one drill session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub level: Level,
    pub lessons: LessonSelection,
    pub include_compounds: bool,
    pub direction: DirectionPolicy,
    pub mode: ModePolicy,
    pub shuffle: bool,
    pub count: usize,
    pub practice_scope: PracticeScope,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            level: Level::default(),
            lessons: LessonSelection::default(),
            include_compounds: false,
            direction: DirectionPolicy::default(),
            mode: ModePolicy::default(),
            shuffle: true,
            count: 10,
            practice_scope: PracticeScope::default(),
        }
    }
}

impl SessionConfig {
    /// One-line description of the settings, shown during a session.
    pub fn summary_line(&self) -> String {
        let compounds = if self.include_compounds { " +comp" } else { "" };
        let scope = match self.practice_scope {
            PracticeScope::All => "All",
            PracticeScope::StarredOnly => "Starred",
        };
        format!(
            "{} {}{} • {} • {} • {}",
            self.level,
            self.lessons.label(),
            compounds,
            self.direction.short_label(),
            self.mode.short_label(),
            scope
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lesson_selection_all_wins() {
        assert_eq!(LessonSelection::from_values(&["2", "all"]), LessonSelection::All);
        assert_eq!(LessonSelection::from_values::<&str>(&[]), LessonSelection::All);
    }

    #[test]
    fn lesson_selection_dedupes() {
        let selection = LessonSelection::from_values(&["3", "1", "3"]);
        assert_eq!(selection, LessonSelection::Only(BTreeSet::from([1, 3])));
        assert_eq!(selection.label(), "Lessons 1, 3");
    }

    #[test]
    fn lesson_labels() {
        assert_eq!(LessonSelection::All.label(), "All lessons");
        assert_eq!(LessonSelection::from_values(&["2"]).label(), "Lesson 2");
    }

    #[test]
    fn retain_available_falls_back_to_all() {
        let selection = LessonSelection::from_values(&["4", "5"]);
        assert_eq!(selection.retain_available(3), LessonSelection::All);

        let selection = LessonSelection::from_values(&["1", "5"]);
        assert_eq!(
            selection.retain_available(3),
            LessonSelection::Only(BTreeSet::from([1]))
        );
    }

    #[test]
    fn summary_line_for_defaults() {
        assert_eq!(
            SessionConfig::default().summary_line(),
            "N3 All lessons • Mixed dir • Mixed mode • All"
        );
    }

    #[test]
    fn summary_line_with_compounds_and_stars() {
        let config = SessionConfig {
            level: Level::N5,
            lessons: LessonSelection::from_values(&["1"]),
            include_compounds: true,
            direction: DirectionPolicy::KanjiToMeaning,
            mode: ModePolicy::Written,
            practice_scope: PracticeScope::StarredOnly,
            ..SessionConfig::default()
        };
        assert_eq!(
            config.summary_line(),
            "N5 Lesson 1 +comp • K→EN • Written • Starred"
        );
    }

    #[test]
    fn level_parse() {
        assert_eq!(Level::parse("n4"), Some(Level::N4));
        assert_eq!(Level::parse("N6"), None);
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: SessionConfig =
            serde_json::from_str(r#"{"level":"N5","direction":"kanji-to-meaning"}"#).unwrap();
        assert_eq!(config.level, Level::N5);
        assert_eq!(config.direction, DirectionPolicy::KanjiToMeaning);
        assert_eq!(config.count, 10);
        assert!(config.shuffle);
    }

    #[test]
    fn entry_prompt_and_target() {
        let entry = VocabEntry {
            id: 1,
            level: Level::N3,
            kanji: "本".to_string(),
            meaning: "book".to_string(),
            alts: vec![],
            compound: false,
        };
        assert_eq!(entry.prompt(Direction::KanjiToMeaning), "本");
        assert_eq!(entry.target(Direction::KanjiToMeaning), "book");
        assert_eq!(entry.prompt(Direction::MeaningToKanji), "book");
        assert_eq!(entry.target(Direction::MeaningToKanji), "本");
    }
}
