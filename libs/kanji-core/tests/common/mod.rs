//! Common test utilities for integration tests.

pub mod fixtures;

use kanji_core::{Engine, MemoryStarStore, VocabEntry};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub type TestEngine = Engine<StdRng, MemoryStarStore>;

/// Engine over `entries` with a seeded RNG and an in-memory star store.
pub fn engine_with(entries: Vec<VocabEntry>, seed: u64) -> TestEngine {
    Engine::new(entries, MemoryStarStore::default(), StdRng::seed_from_u64(seed))
}
