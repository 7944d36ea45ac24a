//! The drill engine: the single value a presentation layer talks to.

use crate::bank::{build_bank, Bank};
use crate::dataset::lesson_count;
use crate::error::{DrillError, Result};
use crate::grading::{Grade, Reveal};
use crate::question::Question;
use crate::random::RandomSource;
use crate::session::{AnswerState, Progress, Session, Summary};
use crate::starred::{StarStore, StarredSet};
use crate::types::{Level, SessionConfig, VocabEntry};

/// Question count used by quick practice.
pub const QUICK_PRACTICE_COUNT: usize = 5;

/// Owns the dataset, settings, bank, starred set and the active session.
///
/// Every mutation goes through a method call; nothing is global.
pub struct Engine<R, S> {
    entries: Vec<VocabEntry>,
    config: SessionConfig,
    bank: Bank,
    starred: StarredSet,
    store: S,
    rng: R,
    session: Option<Session>,
    last_start: Option<(usize, bool)>,
}

impl<R: RandomSource, S: StarStore> Engine<R, S> {
    /// Create an engine over a loaded dataset.
    ///
    /// The starred set is read from `store` once; an unreadable store starts
    /// empty.
    pub fn new(entries: Vec<VocabEntry>, store: S, rng: R) -> Self {
        let starred = store.load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "could not load starred items, starting empty");
            StarredSet::new()
        });
        let config = SessionConfig::default();
        let bank = build_bank(&entries, &config, &starred);

        Self {
            entries,
            config,
            bank,
            starred,
            store,
            rng,
            session: None,
            last_start: None,
        }
    }

    pub fn entries(&self) -> &[VocabEntry] {
        &self.entries
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn bank(&self) -> &Bank {
        &self.bank
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Number of lessons available for `level`.
    pub fn lesson_count(&self, level: Level) -> usize {
        lesson_count(&self.entries, level)
    }

    /// Apply new settings and rebuild the bank.
    ///
    /// Lesson numbers the level does not have are dropped. The active session,
    /// if any, keeps the settings it started with.
    pub fn build_bank(&mut self, mut config: SessionConfig) -> &Bank {
        let available = self.lesson_count(config.level);
        config.lessons = config.lessons.retain_available(available);
        self.config = config;
        self.rebuild_bank();
        &self.bank
    }

    /// Start a session of up to `count` questions from the current bank.
    ///
    /// On error the previous session, if any, is left in place.
    pub fn start_session(&mut self, count: usize, shuffle: bool) -> Result<&Question> {
        let session = Session::start(&self.bank, &self.config, count, shuffle, &mut self.rng)?;
        self.config.count = count;
        self.config.shuffle = shuffle;
        self.last_start = Some((count, shuffle));
        self.session = Some(session);
        self.current_question()
    }

    /// Five shuffled questions with the current settings.
    pub fn quick_practice(&mut self) -> Result<&Question> {
        self.start_session(QUICK_PRACTICE_COUNT, true)
    }

    /// Start over with the count and shuffle flag of the last session.
    pub fn restart(&mut self) -> Result<&Question> {
        let (count, shuffle) = self
            .last_start
            .unwrap_or((self.config.count, self.config.shuffle));
        self.start_session(count, shuffle)
    }

    /// Drop the active session and refresh the bank.
    pub fn quit(&mut self) {
        if self.session.take().is_some() {
            tracing::debug!("session abandoned");
        }
        self.rebuild_bank();
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn current_question(&self) -> Result<&Question> {
        self.active()?.question()
    }

    pub fn answer_state(&self) -> Result<AnswerState> {
        Ok(self.active()?.answer_state())
    }

    pub fn select_choice(&mut self, choice: &str) -> Result<()> {
        self.active_mut()?.select_choice(choice)
    }

    /// Grade a multiple-choice answer; `None` grades the earlier selection.
    pub fn submit_choice(&mut self, choice: Option<&str>) -> Result<Grade> {
        self.active_mut()?.submit_choice(choice)
    }

    pub fn submit_written(&mut self, input: &str) -> Result<Grade> {
        self.active_mut()?.submit_written(input)
    }

    pub fn reveal_answer(&mut self) -> Result<Reveal> {
        self.active_mut()?.reveal_answer()
    }

    pub fn advance(&mut self) -> Result<Progress> {
        let session = self.session.as_mut().ok_or(DrillError::NoActiveSession)?;
        session.advance(&mut self.rng)
    }

    pub fn progress(&self) -> Result<Progress> {
        Ok(self.active()?.progress())
    }

    pub fn summary(&self) -> Result<Summary> {
        self.active()?.summary()
    }

    pub fn starred(&self) -> &StarredSet {
        &self.starred
    }

    pub fn is_starred(&self, id: i64) -> bool {
        self.starred.contains(id)
    }

    /// Flip the star on `id` and persist the set. Returns the new state.
    ///
    /// A failed save leaves the set and the bank as they were.
    pub fn toggle_star(&mut self, id: i64) -> Result<bool> {
        let starred = self.starred.toggle(id);
        if let Err(e) = self.store.persist(&self.starred) {
            self.starred.toggle(id);
            tracing::warn!(id, error = %e, "could not save starred items");
            return Err(e.into());
        }
        self.rebuild_bank();
        tracing::debug!(id, starred, "toggled star");
        Ok(starred)
    }

    /// Flip the star on the entry of the current question.
    pub fn toggle_current_star(&mut self) -> Result<bool> {
        let id = self.current_question()?.entry.id;
        self.toggle_star(id)
    }

    fn rebuild_bank(&mut self) {
        self.bank = build_bank(&self.entries, &self.config, &self.starred);
    }

    fn active(&self) -> Result<&Session> {
        self.session.as_ref().ok_or(DrillError::NoActiveSession)
    }

    fn active_mut(&mut self) -> Result<&mut Session> {
        self.session.as_mut().ok_or(DrillError::NoActiveSession)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::grading::GradeOutcome;
    use crate::starred::MemoryStarStore;
    use crate::types::{DirectionPolicy, LessonSelection, ModePolicy, PracticeScope};
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn entries(n: i64) -> Vec<VocabEntry> {
        (1..=n)
            .map(|id| VocabEntry {
                id,
                level: Level::N3,
                kanji: format!("漢{id}"),
                meaning: format!("meaning {id}"),
                alts: vec![],
                compound: false,
            })
            .collect()
    }

    fn engine(n: i64) -> Engine<StdRng, MemoryStarStore> {
        Engine::new(entries(n), MemoryStarStore::default(), StdRng::seed_from_u64(17))
    }

    struct BrokenStore;

    impl StarStore for BrokenStore {
        fn load(&self) -> std::result::Result<StarredSet, StoreError> {
            Err(StoreError::Io(std::io::Error::other("unavailable")))
        }

        fn persist(&mut self, _starred: &StarredSet) -> std::result::Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::other("read-only")))
        }
    }

    #[test]
    fn empty_dataset_never_panics() {
        let mut engine = engine(0);
        assert!(engine.bank().is_empty());
        assert_eq!(engine.lesson_count(Level::N3), 1);
        assert_eq!(engine.current_question().unwrap_err(), DrillError::NoActiveSession);
        assert_eq!(engine.progress().unwrap_err(), DrillError::NoActiveSession);
        assert_eq!(engine.summary().unwrap_err(), DrillError::NoActiveSession);
        assert_eq!(engine.advance().unwrap_err(), DrillError::NoActiveSession);
        assert_eq!(engine.reveal_answer().unwrap_err(), DrillError::NoActiveSession);
        assert_eq!(engine.submit_written("x").unwrap_err(), DrillError::NoActiveSession);
        assert_eq!(engine.submit_choice(Some("x")).unwrap_err(), DrillError::NoActiveSession);
        assert_eq!(engine.toggle_current_star().unwrap_err(), DrillError::NoActiveSession);
        assert_eq!(engine.select_choice("x").unwrap_err(), DrillError::NoActiveSession);
        assert_eq!(engine.answer_state().unwrap_err(), DrillError::NoActiveSession);
        assert!(matches!(
            engine.start_session(10, true),
            Err(DrillError::NotEnoughItems { have: 0, .. })
        ));
    }

    #[test]
    fn build_bank_drops_missing_lessons() {
        let mut engine = engine(12);
        assert_eq!(engine.lesson_count(Level::N3), 2);

        let config = SessionConfig {
            lessons: LessonSelection::from_values(&["2", "7"]),
            ..SessionConfig::default()
        };
        assert_eq!(engine.build_bank(config).len(), 2);
        assert_eq!(engine.config().lessons, LessonSelection::from_values(&["2"]));

        let config = SessionConfig {
            lessons: LessonSelection::from_values(&["7"]),
            ..SessionConfig::default()
        };
        assert_eq!(engine.build_bank(config).len(), 12);
        assert_eq!(engine.config().lessons, LessonSelection::All);
    }

    #[test]
    fn toggle_star_persists_every_time() {
        let mut engine = engine(6);
        assert!(engine.toggle_star(3).unwrap());
        assert!(engine.is_starred(3));
        assert!(!engine.toggle_star(3).unwrap());
        assert!(engine.toggle_star(4).unwrap());
        assert_eq!(engine.store().writes(), 3);
        assert_eq!(engine.store().saved().iter().collect::<Vec<_>>(), vec![4]);
    }

    #[test]
    fn stars_loaded_from_store_drive_starred_scope() {
        let store = MemoryStarStore::with_ids([1, 2, 3, 4, 42]);
        let mut engine = Engine::new(entries(8), store, StdRng::seed_from_u64(1));
        let config = SessionConfig {
            practice_scope: PracticeScope::StarredOnly,
            ..SessionConfig::default()
        };
        assert_eq!(engine.build_bank(config).len(), 4);
        assert!(engine.start_session(10, false).is_ok());
        assert_eq!(engine.progress().unwrap().total, 4);
    }

    #[test]
    fn starred_scope_without_stars_is_guided() {
        let mut engine = engine(8);
        engine.build_bank(SessionConfig {
            practice_scope: PracticeScope::StarredOnly,
            ..SessionConfig::default()
        });
        assert_eq!(engine.start_session(5, true).unwrap_err(), DrillError::NoStarredItems);
        assert!(engine.session().is_none());
    }

    #[test]
    fn broken_store_loads_empty_and_reports_persist_failure() {
        let mut engine = Engine::new(entries(6), BrokenStore, StdRng::seed_from_u64(1));
        assert!(engine.starred().is_empty());
        assert!(matches!(engine.toggle_star(1), Err(DrillError::Persist(_))));
    }

    #[test]
    fn failed_toggle_keeps_stars_and_bank_in_step() {
        let mut engine = Engine::new(entries(6), BrokenStore, StdRng::seed_from_u64(1));
        engine.build_bank(SessionConfig {
            practice_scope: PracticeScope::StarredOnly,
            ..SessionConfig::default()
        });

        let err = engine.toggle_star(1).unwrap_err();
        assert!(!engine.is_starred(1));
        assert!(engine.starred().is_empty());
        assert!(engine.bank().is_empty());

        let chain: Vec<String> = std::iter::successors(
            Some(&err as &(dyn std::error::Error + 'static)),
            |e| e.source(),
        )
        .map(|e| e.to_string())
        .collect();
        assert_eq!(
            chain,
            vec![
                "failed to save starred items",
                "could not access the starred file",
                "read-only",
            ]
        );
    }

    #[test]
    fn zero_count_installs_no_session() {
        let mut engine = engine(8);
        assert_eq!(engine.start_session(0, true).unwrap_err(), DrillError::NoQuestions);
        assert!(engine.session().is_none());

        engine.start_session(3, false).unwrap();
        assert_eq!(engine.start_session(0, false).unwrap_err(), DrillError::NoQuestions);
        assert_eq!(engine.progress().unwrap().total, 3);
    }

    #[test]
    fn toggle_current_star_uses_cursor_entry() {
        let mut engine = engine(6);
        engine.build_bank(SessionConfig {
            shuffle: false,
            ..SessionConfig::default()
        });
        engine.start_session(6, false).unwrap();
        assert!(engine.toggle_current_star().unwrap());
        assert!(engine.is_starred(1));
    }

    #[test]
    fn quick_practice_and_restart() {
        let mut engine = engine(12);
        engine.quick_practice().unwrap();
        assert_eq!(engine.progress().unwrap().total, QUICK_PRACTICE_COUNT);

        engine.reveal_answer().unwrap();
        engine.advance().unwrap();
        engine.restart().unwrap();
        let progress = engine.progress().unwrap();
        assert_eq!(progress.index, 0);
        assert_eq!(progress.total, QUICK_PRACTICE_COUNT);
    }

    #[test]
    fn quit_discards_session() {
        let mut engine = engine(6);
        engine.start_session(4, true).unwrap();
        engine.quit();
        assert!(engine.session().is_none());
        assert_eq!(engine.bank().len(), 6);
    }

    #[test]
    fn multiple_choice_flow() {
        let mut engine = engine(8);
        engine.build_bank(SessionConfig {
            direction: DirectionPolicy::KanjiToMeaning,
            mode: ModePolicy::MultipleChoice,
            ..SessionConfig::default()
        });
        engine.start_session(3, true).unwrap();

        for _ in 0..3 {
            let question = engine.current_question().unwrap().clone();
            assert_eq!(question.choices.len(), 4);
            engine.select_choice(question.target()).unwrap();
            let grade = engine.submit_choice(None).unwrap();
            assert_eq!(grade.outcome, GradeOutcome::Correct);
            engine.advance().unwrap();
        }

        let summary = engine.summary().unwrap();
        assert_eq!(summary.correct, 3);
        assert_eq!(summary.wrong_attempts, 0);
        assert_eq!(engine.advance().unwrap_err(), DrillError::SessionFinished);
    }
}
