//! Deterministic workload generation.
//!
//! Every trial in a run reads the same generated sequence, so the generator
//! must be bit-identical across runs and platforms for a given seed. ChaCha8
//! guarantees that; the platform-dependent `StdRng` would not.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed for workload generation.
pub const WORKLOAD_SEED: u64 = 1337;

/// Default number of workload elements when none is given on the command line.
pub const DEFAULT_NUM_ELEMENTS: usize = 5_000_000;

/// Default width of generated values in bits.
///
/// Prefix-sum based encodings index by cumulative sum, so the product of
/// element count and mean value must fit in `usize`. 32-bit values leave
/// enough headroom for any in-memory workload; pass 64 to reproduce a
/// full-range distribution (and accept that prefix-summed construction may
/// fail for large counts).
pub const DEFAULT_VALUE_BITS: u32 = 32;

/// Generates `n` values of at most `value_bits` significant bits.
///
/// Output is deterministic for a given `(n, value_bits, seed)` triple.
pub fn generate(n: usize, value_bits: u32, seed: u64) -> Vec<u64> {
    assert!(
        (1..=64).contains(&value_bits),
        "value_bits must be in 1..=64, got {value_bits}"
    );
    let shift = 64 - value_bits;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.next_u64() >> shift).collect()
}

/// Returns the same multiset of values in non-decreasing order.
///
/// Used for the second pass of a run, which characterizes the advantage
/// some encodings gain from monotone input. Idempotent.
pub fn to_ordered(values: &[u64]) -> Vec<u64> {
    let mut ordered = values.to_vec();
    ordered.sort_unstable();
    ordered
}
