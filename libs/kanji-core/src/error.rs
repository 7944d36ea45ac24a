//! Error types for kanji-core.

use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Result type alias using DrillError.
pub type Result<T> = std::result::Result<T, DrillError>;

/// Recoverable conditions surfaced to the user by the drill engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrillError {
    #[error("no starred items yet; star a card to mark it for review, then try starred only again")]
    NoStarredItems,

    #[error("not enough items in this bank (have {have}, need at least {need}); try enabling compounds or choosing another level")]
    NotEnoughItems { have: usize, need: usize },

    #[error("pick an option first")]
    NoChoiceSelected,

    #[error("choice {0:?} is not one of the offered options")]
    UnknownChoice(String),

    #[error("type an answer first")]
    EmptyAnswer,

    #[error("the current question expects a {expected} answer")]
    WrongMode { expected: &'static str },

    #[error("answer or reveal the current question before moving on")]
    NotAnswered,

    #[error("no session is running")]
    NoActiveSession,

    #[error("the session is finished")]
    SessionFinished,

    #[error("the session is still in progress")]
    SessionInProgress,

    #[error("ask for at least one question")]
    NoQuestions,

    #[error("failed to save starred items")]
    Persist(#[source] PersistError),
}

impl From<StoreError> for DrillError {
    fn from(err: StoreError) -> Self {
        Self::Persist(PersistError(Arc::new(err)))
    }
}

/// A shared [`StoreError`], so [`DrillError`] can stay `Clone` and `Eq`.
#[derive(Debug, Clone)]
pub struct PersistError(Arc<StoreError>);

impl PersistError {
    pub fn store_error(&self) -> &StoreError {
        &self.0
    }
}

impl PartialEq for PersistError {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0.to_string() == other.0.to_string()
    }
}

impl Eq for PersistError {}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for PersistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

/// Errors that can occur while loading the vocabulary dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate ID {id} at entry {index}")]
    DuplicateId { id: i64, index: usize },
}

/// Errors raised by a star store while reading or persisting ids.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not access the starred file")]
    Io(#[from] std::io::Error),

    #[error("could not encode starred ids")]
    Json(#[from] serde_json::Error),
}
