//! # Shuffle and Permutation
//!
//! Fisher-Yates shuffle over `u64` slices, driven by a [`RandomSource`].
//!
//! The randomness here is not security relevant. [`ThreadRandom`] pulls from
//! the thread-local generator; [`SeededRandom`] is a ChaCha8 stream for
//! reproducible orders (tests, replays).

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A source of random `u64` values.
pub trait RandomSource {
    /// Returns the next random value.
    fn random_u64(&mut self) -> u64;
}

/// Random source backed by `rand::thread_rng()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    #[inline]
    fn random_u64(&mut self) -> u64 {
        rand::thread_rng().next_u64()
    }
}

/// Deterministic random source. Same seed = same sequence, ALWAYS.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: ChaCha8Rng,
}

impl SeededRandom {
    /// Creates a source from a 64-bit seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    #[inline]
    fn random_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }
}

/// Returns a random `u64` from the thread-local generator.
#[inline]
#[must_use]
pub fn random_u64() -> u64 {
    ThreadRandom.random_u64()
}

/// Shuffles `xs` in place using the thread-local generator.
pub fn shuffle(xs: &mut [u64]) {
    shuffle_with(xs, &mut ThreadRandom);
}

/// Shuffles `xs` in place, drawing swap positions from `rng`.
pub fn shuffle_with<R: RandomSource + ?Sized>(xs: &mut [u64], rng: &mut R) {
    if xs.is_empty() {
        return;
    }
    for i in (1..xs.len()).rev() {
        // i + 1 <= len, which always fits in a u64; the remainder is <= i.
        let bound = i as u64 + 1;
        let j = (rng.random_u64() % bound) as usize;
        xs.swap(i, j);
    }
}

/// Returns a random permutation of `0..n`.
#[must_use]
pub fn permutation(n: u64) -> Vec<u64> {
    permutation_with(n, &mut ThreadRandom)
}

/// Returns a permutation of `0..n` drawn from `rng`.
#[must_use]
pub fn permutation_with<R: RandomSource + ?Sized>(n: u64, rng: &mut R) -> Vec<u64> {
    let mut order: Vec<u64> = (0..n).collect();
    shuffle_with(&mut order, rng);
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of values, cycling.
    struct Scripted {
        values: Vec<u64>,
        pos: usize,
    }

    impl RandomSource for Scripted {
        fn random_u64(&mut self) -> u64 {
            let v = self.values[self.pos % self.values.len()];
            self.pos += 1;
            v
        }
    }

    fn sorted(mut xs: Vec<u64>) -> Vec<u64> {
        xs.sort_unstable();
        xs
    }

    #[test]
    fn test_permutation_elements() {
        assert_eq!(sorted(permutation(1)), vec![0]);
        assert_eq!(sorted(permutation(2)), vec![0, 1]);
        assert_eq!(sorted(permutation(5)), vec![0, 1, 2, 3, 4]);
        assert!(permutation(0).is_empty());
    }

    #[test]
    fn test_shuffle_empty_and_uniform() {
        let mut xs: Vec<u64> = Vec::new();
        shuffle(&mut xs);
        assert!(xs.is_empty());

        let mut xs = vec![1, 1, 1];
        shuffle(&mut xs);
        assert_eq!(xs, vec![1, 1, 1]);
    }

    #[test]
    fn test_shuffle_swap_positions() {
        // i = 3: j = 4 % 4 = 0; i = 2: j = 5 % 3 = 2; i = 1: j = 7 % 2 = 1
        let mut rng = Scripted {
            values: vec![4, 5, 7],
            pos: 0,
        };
        let mut xs = vec![10, 20, 30, 40];
        shuffle_with(&mut xs, &mut rng);
        assert_eq!(xs, vec![40, 20, 30, 10]);
        assert_eq!(rng.pos, 3, "one draw per index above zero");
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = permutation_with(64, &mut SeededRandom::new(7));
        let b = permutation_with(64, &mut SeededRandom::new(7));
        assert_eq!(a, b);
        assert_eq!(sorted(a), (0..64).collect::<Vec<_>>());
    }

    #[test]
    fn test_random_u64_varies() {
        // 2^-64 per collision; eight draws all equal means the source is stuck.
        let first = random_u64();
        assert!((0..8).any(|_| random_u64() != first));
    }
}
