//! Kanji meaning drill engine.
//!
//! Provides:
//! - Dataset loading and positional lesson grouping
//! - Bank filtering by level, lesson, compounds and starred items
//! - Question generation (direction, answer mode, multiple-choice options)
//! - Written answer normalization and grading
//! - Session lifecycle with progress and final summary

pub mod bank;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod grading;
pub mod normalize;
pub mod question;
pub mod random;
pub mod session;
pub mod starred;
pub mod types;

pub use bank::{build_bank, Bank};
pub use dataset::{lesson_count, parse_dataset};
pub use engine::{Engine, QUICK_PRACTICE_COUNT};
pub use error::{DatasetError, DrillError, PersistError, Result, StoreError};
pub use grading::{Grade, GradeOutcome, Reveal};
pub use normalize::{normalize_english, normalize_kanji};
pub use question::{build_choices, Question};
pub use random::RandomSource;
pub use session::{AnswerState, Progress, Session, Summary};
pub use starred::{MemoryStarStore, StarStore, StarredSet};
pub use types::{
    AnswerMode, Direction, DirectionPolicy, LessonSelection, Level, ModePolicy, PracticeScope,
    SessionConfig, VocabEntry, LESSON_SIZE,
};
