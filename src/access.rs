//! Reproducible access-position sampling.
//!
//! The sampler is reseeded with the same constant for every trial, so every
//! encoding in a run is probed at exactly the same positions. Constant
//! seeding, not true randomness, is the design point: it removes
//! access-pattern variance as a confound between encodings.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed for access-position sampling, identical for every trial.
pub const ACCESS_SEED: u64 = 137;

/// Number of positions probed per trial.
pub const NUM_ACCESSES: usize = 50_000;

/// Draws `size` positions uniformly (modulo `bound`) from a generator
/// seeded with `seed`.
///
/// Deterministic for a given `(size, bound, seed)` triple.
///
/// # Panics
///
/// Panics if `bound` is zero. Callers must guard against an empty sequence
/// before sampling.
pub fn sample(size: usize, bound: usize, seed: u64) -> Vec<usize> {
    assert!(bound > 0, "cannot sample positions from an empty sequence");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..size)
        .map(|_| (rng.next_u64() % bound as u64) as usize)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_has_requested_size() {
        assert_eq!(sample(NUM_ACCESSES, 1000, ACCESS_SEED).len(), NUM_ACCESSES);
        assert_eq!(sample(0, 1000, ACCESS_SEED).len(), 0);
    }

    #[test]
    fn sample_stays_in_bounds() {
        for bound in [1, 2, 7, 1000] {
            let positions = sample(10_000, bound, ACCESS_SEED);
            assert!(positions.iter().all(|&p| p < bound), "bound={bound}");
        }
    }

    #[test]
    fn sample_is_deterministic() {
        let a = sample(5000, 12_345, ACCESS_SEED);
        let b = sample(5000, 12_345, ACCESS_SEED);
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic(expected = "empty sequence")]
    fn sample_rejects_zero_bound() {
        let _ = sample(10, 0, ACCESS_SEED);
    }
}
