//! Seed mixing and the replaceable randomness seam used by maze generation.

use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

/// Source of uniform choices for the generator. Tests can script it; runs use [`ChaCha8Rng`].
pub trait RandomSource {
    /// Uniform index in `0..len`. Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl RandomSource for ChaCha8Rng {
    fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        (Rng::next_u64(self) % len as u64) as usize
    }
}

/// Deterministic stream for a user-facing seed. Nearby seeds land far apart after mixing.
pub fn maze_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(mix_seed(seed))
}

static RUNTIME_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Fresh seed from wall-clock time, process id and a call counter, for runs without `--seed`.
pub fn runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(process::id());
    let counter = RUNTIME_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.rotate_left(7);

    mix_seed(entropy)
}

pub(crate) fn mix_seed(seed: u64) -> u64 {
    let mut mixed = seed ^ 0x9E37_79B9_7F4A_7C15;
    mixed ^= mixed >> 30;
    mixed = mixed.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed ^= mixed >> 27;
    mixed = mixed.wrapping_mul(0x94D0_49BB_1331_11EB);
    mixed ^ (mixed >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_index_stays_inside_requested_range() {
        let mut rng = maze_rng(12_345);
        for len in 1..50 {
            assert!(rng.pick_index(len) < len);
        }
    }

    #[test]
    fn mixed_seed_changes_when_input_changes() {
        assert_ne!(mix_seed(1), mix_seed(2));
        assert_eq!(mix_seed(99), mix_seed(99));
    }

    #[test]
    fn runtime_seed_changes_between_calls() {
        assert_ne!(runtime_seed(), runtime_seed());
    }

    #[test]
    fn equal_seeds_produce_equal_streams() {
        let mut left = maze_rng(7);
        let mut right = maze_rng(7);
        let left_picks: Vec<_> = (0..20).map(|_| left.pick_index(4)).collect();
        let right_picks: Vec<_> = (0..20).map(|_| right.pick_index(4)).collect();
        assert_eq!(left_picks, right_picks);
    }
}
