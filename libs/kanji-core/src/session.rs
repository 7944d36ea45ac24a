//! Session selection and the per-question answer state machine.

use crate::bank::Bank;
use crate::error::{DrillError, Result};
use crate::grading::{is_correct_choice, is_correct_written, Grade, GradeOutcome, Reveal};
use crate::question::{generate_question, Question, CHOICE_COUNT};
use crate::random::{shuffle, RandomSource};
use crate::types::{AnswerMode, DirectionPolicy, ModePolicy, PracticeScope, SessionConfig, VocabEntry};
use serde::Serialize;

/// Smallest bank that can fill a multiple-choice question.
pub const MIN_BANK_SIZE: usize = CHOICE_COUNT;

/// Answer state of the question under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerState {
    AwaitingAnswer,
    /// Answered wrong at least once; may retry or move on.
    Incorrect,
    /// Answer shown without grading; may retry or move on.
    Revealed,
    /// Answered right; input is locked.
    Correct,
}

impl AnswerState {
    pub fn can_advance(&self) -> bool {
        !matches!(self, Self::AwaitingAnswer)
    }

    pub fn is_locked(&self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// Position and running score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Progress {
    /// Zero-based index of the current question (equals `total` once finished).
    pub index: usize,
    pub total: usize,
    pub correct: u32,
    pub wrong_attempts: u32,
    pub finished: bool,
}

/// Final tally of a finished session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub correct: u32,
    pub wrong_attempts: u32,
    pub total: usize,
}

impl Summary {
    /// Score line, e.g. "4/5".
    pub fn score_text(&self) -> String {
        format!("{}/{}", self.correct, self.total)
    }
}

/// One fixed-length run through a sampled slice of the bank.
#[derive(Debug, Clone)]
pub struct Session {
    items: Vec<VocabEntry>,
    pool: Vec<VocabEntry>,
    direction: DirectionPolicy,
    mode: ModePolicy,
    cursor: usize,
    correct: u32,
    wrong_attempts: u32,
    current: Option<Question>,
    state: AnswerState,
    selected: Option<String>,
}

impl Session {
    /// Draw a session from `bank`.
    ///
    /// Refuses to start with a zero count, on an empty starred bank, or on a
    /// bank too small for multiple choice. With `shuffle` the bank is permuted
    /// first; the session takes the first `min(count, bank.len())` entries.
    pub fn start<R: RandomSource + ?Sized>(
        bank: &Bank,
        config: &SessionConfig,
        count: usize,
        shuffle_items: bool,
        rng: &mut R,
    ) -> Result<Self> {
        if count == 0 {
            return Err(DrillError::NoQuestions);
        }
        if config.practice_scope == PracticeScope::StarredOnly && bank.is_empty() {
            return Err(DrillError::NoStarredItems);
        }
        if bank.len() < MIN_BANK_SIZE {
            return Err(DrillError::NotEnoughItems {
                have: bank.len(),
                need: MIN_BANK_SIZE,
            });
        }

        let mut items = bank.entries().to_vec();
        if shuffle_items {
            shuffle(&mut items, rng);
        }
        items.truncate(count.min(bank.len()));

        let mut session = Self {
            items,
            pool: bank.entries().to_vec(),
            direction: config.direction,
            mode: config.mode,
            cursor: 0,
            correct: 0,
            wrong_attempts: 0,
            current: None,
            state: AnswerState::AwaitingAnswer,
            selected: None,
        };
        session.present(rng);

        tracing::debug!(
            total = session.items.len(),
            shuffled = shuffle_items,
            "session started"
        );
        Ok(session)
    }

    /// Entries in session order.
    pub fn items(&self) -> &[VocabEntry] {
        &self.items
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.items.len()
    }

    pub fn question(&self) -> Result<&Question> {
        self.current.as_ref().ok_or(DrillError::SessionFinished)
    }

    pub fn answer_state(&self) -> AnswerState {
        self.state
    }

    pub fn selected_choice(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Remember a multiple-choice selection without grading it.
    pub fn select_choice(&mut self, choice: &str) -> Result<()> {
        let question = self.question()?;
        if question.mode != AnswerMode::MultipleChoice {
            return Err(DrillError::WrongMode {
                expected: question.mode.as_str(),
            });
        }
        if !question.choices.iter().any(|c| c == choice) {
            return Err(DrillError::UnknownChoice(choice.to_string()));
        }
        self.selected = Some(choice.to_string());
        Ok(())
    }

    /// Grade a multiple-choice answer. `choice` replaces any earlier selection;
    /// `None` grades the current selection.
    pub fn submit_choice(&mut self, choice: Option<&str>) -> Result<Grade> {
        if let Some(grade) = self.already_correct()? {
            return Ok(grade);
        }
        if let Some(choice) = choice {
            self.select_choice(choice)?;
        }
        let question = self.question()?;
        if question.mode != AnswerMode::MultipleChoice {
            return Err(DrillError::WrongMode {
                expected: question.mode.as_str(),
            });
        }
        let selected = self.selected.clone().ok_or(DrillError::NoChoiceSelected)?;
        let ok = is_correct_choice(&question.entry, question.direction, &selected);
        Ok(self.record(ok, selected))
    }

    /// Grade a written answer.
    pub fn submit_written(&mut self, input: &str) -> Result<Grade> {
        if let Some(grade) = self.already_correct()? {
            return Ok(grade);
        }
        let question = self.question()?;
        if question.mode != AnswerMode::Written {
            return Err(DrillError::WrongMode {
                expected: question.mode.as_str(),
            });
        }
        if input.trim().is_empty() {
            return Err(DrillError::EmptyAnswer);
        }
        let ok = is_correct_written(&question.entry, question.direction, input);
        Ok(self.record(ok, input.to_string()))
    }

    /// Show the answer without scoring it. Unlocks advancing.
    pub fn reveal_answer(&mut self) -> Result<Reveal> {
        let question = self.question()?;
        let reveal = Reveal {
            answer: question.target().to_string(),
            compound: question.entry.compound,
        };
        if self.state == AnswerState::AwaitingAnswer {
            self.state = AnswerState::Revealed;
        }
        Ok(reveal)
    }

    /// Move to the next question, or finish after the last one.
    pub fn advance<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Result<Progress> {
        if self.is_finished() {
            return Err(DrillError::SessionFinished);
        }
        if !self.state.can_advance() {
            return Err(DrillError::NotAnswered);
        }

        self.cursor += 1;
        if self.is_finished() {
            self.current = None;
            self.selected = None;
            tracing::debug!(
                correct = self.correct,
                wrong_attempts = self.wrong_attempts,
                total = self.items.len(),
                "session finished"
            );
        } else {
            self.present(rng);
        }
        Ok(self.progress())
    }

    pub fn progress(&self) -> Progress {
        Progress {
            index: self.cursor.min(self.items.len()),
            total: self.items.len(),
            correct: self.correct,
            wrong_attempts: self.wrong_attempts,
            finished: self.is_finished(),
        }
    }

    /// Final tally; only available once finished.
    pub fn summary(&self) -> Result<Summary> {
        if !self.is_finished() {
            return Err(DrillError::SessionInProgress);
        }
        Ok(Summary {
            correct: self.correct,
            wrong_attempts: self.wrong_attempts,
            total: self.items.len(),
        })
    }

    fn present<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        self.state = AnswerState::AwaitingAnswer;
        self.selected = None;
        self.current = self
            .items
            .get(self.cursor)
            .map(|entry| generate_question(entry, &self.pool, self.direction, self.mode, rng));
    }

    fn already_correct(&self) -> Result<Option<Grade>> {
        let question = self.question()?;
        if !self.state.is_locked() {
            return Ok(None);
        }
        Ok(Some(Grade {
            outcome: GradeOutcome::AlreadyCorrect,
            submitted: String::new(),
            correct_answer: question.target().to_string(),
        }))
    }

    fn record(&mut self, ok: bool, submitted: String) -> Grade {
        let correct_answer = self
            .current
            .as_ref()
            .map(|q| q.target().to_string())
            .unwrap_or_default();

        let outcome = if ok {
            self.correct += 1;
            self.state = AnswerState::Correct;
            GradeOutcome::Correct
        } else {
            self.wrong_attempts += 1;
            self.state = AnswerState::Incorrect;
            GradeOutcome::Incorrect
        };

        tracing::debug!(index = self.cursor, ?outcome, "graded answer");
        Grade {
            outcome,
            submitted,
            correct_answer,
        }
    }
}
