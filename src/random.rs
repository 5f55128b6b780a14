//! Seedable random number generation.
//!
//! All stochastic operations in this crate take an explicit `&mut impl Rng`
//! rather than reaching for ambient global state. [`create_rng`] is the
//! single construction point: a ChaCha8 generator whose output stream is
//! stable for a given seed, which makes seeded runs reproducible in tests
//! and keeps the draw order fixed relative to iteration/ant/node order.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Creates a deterministic generator from a 64-bit seed.
pub fn create_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Draws a fresh seed from the operating system.
///
/// Used when a config leaves `seed` unset.
pub fn random_seed() -> u64 {
    rand::random()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = create_rng(42);
        let mut b = create_rng(42);
        for _ in 0..100 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = create_rng(1);
        let mut b = create_rng(2);
        let xs: Vec<u64> = (0..8).map(|_| a.random()).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.random()).collect();
        assert_ne!(xs, ys);
    }
}
