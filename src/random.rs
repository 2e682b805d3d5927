//! Seedable random sources shared by the runners.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The RNG used when a runner seeds itself from its config.
pub type SearchRng = ChaCha8Rng;

/// Creates a deterministic RNG from a seed.
pub fn create_rng(seed: u64) -> SearchRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Creates an RNG from `seed`, or from OS entropy when `None`.
pub fn rng_from_seed(seed: Option<u64>) -> SearchRng {
    create_rng(seed.unwrap_or_else(rand::random))
}
