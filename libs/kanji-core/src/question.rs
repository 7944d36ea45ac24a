//! Question generation: direction, answer mode and multiple-choice options.

use crate::random::{shuffle, RandomSource};
use crate::types::{AnswerMode, Direction, DirectionPolicy, ModePolicy, VocabEntry};
use serde::Serialize;

/// Number of options offered in multiple-choice mode.
pub const CHOICE_COUNT: usize = 4;

/// A question as presented to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub entry: VocabEntry,
    pub direction: Direction,
    pub mode: AnswerMode,
    /// Options in display order; empty for written questions.
    pub choices: Vec<String>,
}

impl Question {
    pub fn prompt(&self) -> &str {
        self.entry.prompt(self.direction)
    }

    pub fn target(&self) -> &str {
        self.entry.target(self.direction)
    }

    pub fn prompt_label(&self) -> &'static str {
        self.direction.prompt_label()
    }
}

/// Resolve the direction for one question.
pub fn pick_direction<R: RandomSource + ?Sized>(policy: DirectionPolicy, rng: &mut R) -> Direction {
    match policy {
        DirectionPolicy::KanjiToMeaning => Direction::KanjiToMeaning,
        DirectionPolicy::MeaningToKanji => Direction::MeaningToKanji,
        DirectionPolicy::Mixed => {
            if rng.coin() {
                Direction::KanjiToMeaning
            } else {
                Direction::MeaningToKanji
            }
        }
    }
}

/// Resolve the answer mode for one question.
pub fn pick_mode<R: RandomSource + ?Sized>(policy: ModePolicy, rng: &mut R) -> AnswerMode {
    match policy {
        ModePolicy::MultipleChoice => AnswerMode::MultipleChoice,
        ModePolicy::Written => AnswerMode::Written,
        ModePolicy::Mixed => {
            if rng.coin() {
                AnswerMode::MultipleChoice
            } else {
                AnswerMode::Written
            }
        }
    }
}

/// Build the shuffled options for a multiple-choice question.
///
/// Distractors are drawn without replacement from every other bank entry,
/// shown in the field the target uses. Two entries may share display text, but
/// no entry is drawn twice.
pub fn build_choices<R: RandomSource + ?Sized>(
    entry: &VocabEntry,
    bank: &[VocabEntry],
    direction: Direction,
    rng: &mut R,
) -> Vec<String> {
    let mut pool: Vec<&str> = bank
        .iter()
        .filter(|other| other.id != entry.id)
        .map(|other| other.target(direction))
        .collect();

    // Partial Fisher–Yates: only the first few slots need to be random.
    let wanted = (CHOICE_COUNT - 1).min(pool.len());
    for i in 0..wanted {
        let j = i + rng.pick_index(pool.len() - i);
        pool.swap(i, j);
    }

    let mut choices: Vec<String> = std::iter::once(entry.target(direction))
        .chain(pool.into_iter().take(wanted))
        .map(str::to_string)
        .collect();
    shuffle(&mut choices, rng);
    choices
}

/// Generate the question for `entry` under the session policies.
pub fn generate_question<R: RandomSource + ?Sized>(
    entry: &VocabEntry,
    bank: &[VocabEntry],
    direction: DirectionPolicy,
    mode: ModePolicy,
    rng: &mut R,
) -> Question {
    let direction = pick_direction(direction, rng);
    let mode = pick_mode(mode, rng);
    let choices = match mode {
        AnswerMode::MultipleChoice => build_choices(entry, bank, direction, rng),
        AnswerMode::Written => Vec::new(),
    };

    Question {
        entry: entry.clone(),
        direction,
        mode,
        choices,
    }
}
