//! Shared data generators and constants for the benchmarks.
#![allow(dead_code)]

use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Expected-item counts used for sizing filters.
pub const SIZES: &[u64] = &[1_000, 10_000, 100_000, 1_000_000];

/// Target false positive rates. Lower rates mean more probes per operation.
pub const FP_RATES: &[f64] = &[0.1, 0.01, 0.001, 0.0001];

/// Input lengths for hashing throughput.
pub const KEY_LENGTHS: &[usize] = &[4, 8, 16, 32, 64, 256, 1024];

const SEED: u64 = 0xb100_f11e;

fn rng() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

/// Random alphanumeric strings of a fixed length.
pub fn generate_strings(count: usize, len: usize) -> Vec<String> {
    let mut rng = rng();
    (0..count)
        .map(|_| {
            (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(len)
                .map(char::from)
                .collect()
        })
        .collect()
}

/// Random byte strings of a fixed length.
pub fn generate_bytes(count: usize, len: usize) -> Vec<Vec<u8>> {
    let mut rng = rng();
    (0..count)
        .map(|_| (0..len).map(|_| rng.gen()).collect())
        .collect()
}

/// Random `u64` values.
pub fn generate_u64s(count: usize) -> Vec<u64> {
    let mut rng = rng();
    (0..count).map(|_| rng.gen()).collect()
}

/// Random `u64` values drawn from a different seed than `generate_u64s`.
pub fn generate_absent_u64s(count: usize) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(!SEED);
    (0..count).map(|_| rng.gen()).collect()
}
