//! Deterministic seed mixing and the seeded random streams used by placement, pursuit and
//! hatching.

use std::time::Duration;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

pub(crate) const PLACEMENT_STREAM: u64 = 1;
pub(crate) const PURSUIT_STREAM: u64 = 2;
pub(crate) const HATCH_STREAM: u64 = 3;

pub(crate) fn mix_seed_stream(seed: u64, stream: u64) -> u64 {
    let mut mixed = seed ^ stream.wrapping_mul(0xD6E8_FD9A_5B89_7A4D);
    mixed ^= mixed >> 33;
    mixed = mixed.wrapping_mul(0xFF51_AFD7_ED55_8CCD);
    mixed ^= mixed >> 33;
    mixed = mixed.wrapping_mul(0xC4CE_B9FE_1A85_EC53);
    mixed ^ (mixed >> 33)
}

pub(crate) fn derive_level_seed(run_seed: u64, level: u32) -> u64 {
    let mut mixed = run_seed ^ 0x9E37_79B9_7F4A_7C15;
    mixed ^= u64::from(level).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed ^= mixed >> 30;
    mixed = mixed.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed ^= mixed >> 27;
    mixed = mixed.wrapping_mul(0x94D0_49BB_1331_11EB);
    mixed ^ (mixed >> 31)
}

/// A ChaCha8 stream with the few sampling helpers the simulation needs.
#[derive(Clone, Debug)]
pub struct RandomStream {
    rng: ChaCha8Rng,
}

impl RandomStream {
    pub fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    pub(crate) fn for_stream(seed: u64, stream: u64) -> Self {
        Self::new(mix_seed_stream(seed, stream))
    }

    /// Uniform in `0..n`; returns 0 when `n` is 0.
    pub fn below(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        (self.rng.next_u64() % n as u64) as usize
    }

    /// Fisher-Yates in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.below(i + 1);
            items.swap(i, j);
        }
    }

    /// Removes and returns `count` items drawn without replacement, leaving the rest in `pool`.
    pub fn take<T>(&mut self, pool: &mut Vec<T>, count: usize) -> Vec<T> {
        let count = count.min(pool.len());
        for i in 0..count {
            let j = i + self.below(pool.len() - i);
            pool.swap(i, j);
        }
        pool.drain(..count).collect()
    }

    /// Whole milliseconds, uniform in `0..=max`.
    pub fn millis_up_to(&mut self, max: Duration) -> Duration {
        let max_ms = max.as_millis() as u64;
        Duration::from_millis(self.rng.next_u64() % (max_ms + 1))
    }
}
