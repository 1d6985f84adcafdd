//! Seedable randomness: bounded draws, Fisher–Yates shuffling, and seed mixing
//! for batches of mazes.

use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

/// The generator used by every entry point that takes a plain `u64` seed.
pub type MazeRng = ChaCha8Rng;

pub fn seeded(seed: u64) -> MazeRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Unbiased draw in `[0, bound)` using multiply-and-reject.
pub fn uniform_below<R: Rng + ?Sized>(rng: &mut R, bound: usize) -> usize {
    assert!(bound > 0, "uniform_below needs a non-empty range");
    let bound = bound as u64;
    let threshold = bound.wrapping_neg() % bound;
    loop {
        let wide = u128::from(rng.next_u64()) * u128::from(bound);
        if (wide as u64) >= threshold {
            return (wide >> 64) as usize;
        }
    }
}

/// In-place Fisher–Yates: for `i` from `len` down to 1, swap `i - 1` with a
/// uniform pick from `[0, i - 1]`.
pub fn shuffle<R: Rng + ?Sized, T>(rng: &mut R, items: &mut [T]) {
    for i in (1..=items.len()).rev() {
        let j = uniform_below(rng, i);
        items.swap(i - 1, j);
    }
}

pub fn choose<'a, R: Rng + ?Sized, T>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(uniform_below(rng, items.len()))
}

/// Keeps gallery seeds apart from seeds handed straight to a generator.
const GALLERY_STREAM: u64 = 0x6D61_7A65_6761_6C6C;

/// Seed for maze `index` of a gallery, independent of generation order.
/// Position `index + 1` of a SplitMix64 stream keyed by the gallery seed, so
/// distinct indices never collide.
pub fn derive_maze_seed(gallery_seed: u64, index: u64) -> u64 {
    let step = index.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    let mut mixed = (gallery_seed ^ GALLERY_STREAM).wrapping_add(step);
    mixed = (mixed ^ (mixed >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed = (mixed ^ (mixed >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    mixed ^ (mixed >> 31)
}

static RUNTIME_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A fresh seed for callers that were not given one: the clock and process id
/// key the stream, a per-process counter picks the position in it.
pub fn runtime_seed() -> u64 {
    let clock = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as u64);
    let entropy = clock ^ u64::from(process::id()).rotate_left(32);
    derive_maze_seed(entropy, RUNTIME_SEED_COUNTER.fetch_add(1, Ordering::Relaxed))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn uniform_below_stays_inside_requested_bounds() {
        let mut rng = seeded(12_345);
        for bound in 1..50 {
            for _ in 0..20 {
                assert!(uniform_below(&mut rng, bound) < bound);
            }
        }
    }

    #[test]
    fn uniform_below_one_is_always_zero() {
        let mut rng = seeded(7);
        assert!((0..100).all(|_| uniform_below(&mut rng, 1) == 0));
    }

    #[test]
    fn uniform_below_reaches_every_value() {
        let mut rng = seeded(99);
        let mut seen = [false; 6];
        for _ in 0..600 {
            seen[uniform_below(&mut rng, 6)] = true;
        }
        assert!(seen.iter().all(|&hit| hit));
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = seeded(2024);
        let original: Vec<u32> = (0..64).collect();
        let mut shuffled = original.clone();
        shuffle(&mut rng, &mut shuffled);

        assert_eq!(shuffled.len(), original.len());
        assert_ne!(shuffled, original, "64 items should not come back in order");
        shuffled.sort_unstable();
        assert_eq!(shuffled, original);
    }

    #[test]
    fn shuffle_handles_empty_and_single_slices() {
        let mut rng = seeded(1);
        let mut empty: Vec<u8> = Vec::new();
        shuffle(&mut rng, &mut empty);
        assert!(empty.is_empty());

        let mut single = vec![42];
        shuffle(&mut rng, &mut single);
        assert_eq!(single, vec![42]);
    }

    #[test]
    fn shuffle_is_deterministic_for_a_seed() {
        let mut left: Vec<u32> = (0..32).collect();
        let mut right = left.clone();
        shuffle(&mut seeded(5), &mut left);
        shuffle(&mut seeded(5), &mut right);
        assert_eq!(left, right);
    }

    #[test]
    fn choose_returns_none_for_empty_slices() {
        let mut rng = seeded(3);
        let empty: [u8; 0] = [];
        assert_eq!(choose(&mut rng, &empty), None);
        assert_eq!(choose(&mut rng, &["only"]), Some(&"only"));
    }

    #[test]
    fn runtime_seed_changes_between_calls() {
        assert_ne!(runtime_seed(), runtime_seed());
    }

    #[test]
    fn maze_seeds_of_one_gallery_never_collide() {
        let seeds: BTreeSet<u64> = (0..1_000).map(|index| derive_maze_seed(42, index)).collect();
        assert_eq!(seeds.len(), 1_000);
    }

    #[test]
    fn maze_seed_changes_when_inputs_change() {
        let baseline = derive_maze_seed(99, 2);
        assert_ne!(baseline, derive_maze_seed(98, 2));
        assert_ne!(baseline, derive_maze_seed(99, 3));
        assert_eq!(baseline, derive_maze_seed(99, 2));
    }
}
