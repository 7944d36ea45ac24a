//! Injectable randomness for shuffling and question generation.

use rand::Rng;

/// Source of uniform random indices.
///
/// Any [`rand::Rng`] implements this, so tests can pass a seeded
/// `StdRng` and production code can pass `rand::rng()`.
pub trait RandomSource {
    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Fair coin flip.
    fn coin(&mut self) -> bool {
        self.pick_index(2) == 0
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn pick_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Unbiased in-place Fisher–Yates shuffle with a fresh draw per swap.
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.pick_index(i + 1);
        items.swap(i, j);
    }
}
