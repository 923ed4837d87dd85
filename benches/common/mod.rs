//! Data generators and sizes shared by the benchmarks.
#![allow(dead_code)]

use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Filter capacities exercised by size-scaling benchmarks.
pub const SIZES: &[usize] = &[1_000, 10_000, 100_000, 1_000_000];

/// Target rates exercised by rate-scaling benchmarks.
pub const FP_RATES: &[f64] = &[0.1, 0.01, 0.001, 0.0001];

const SEED: u64 = 0x5eed;

fn rng() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

/// `count` random alphanumeric strings of length `len`.
pub fn random_strings(count: usize, len: usize) -> Vec<String> {
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

/// `count` random u64 values.
pub fn random_u64(count: usize) -> Vec<u64> {
    let mut rng = rng();
    (0..count).map(|_| rng.gen()).collect()
}

/// `0..count` as u64.
pub fn sequential_u64(count: usize) -> Vec<u64> {
    (0..count as u64).collect()
}

/// Values guaranteed disjoint from [`sequential_u64`] of the same `count`.
pub fn absent_u64(count: usize) -> Vec<u64> {
    (count as u64..2 * count as u64).collect()
}
