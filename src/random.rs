//! Seedable random number generation.
//!
//! Every operator takes `&mut R: Rng` explicitly; nothing in the crate reads
//! a global generator. Seeding one [`StdRng`] at startup makes a whole run
//! reproducible.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic generator from a 64-bit seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator seeded from `seed`, or from OS entropy when `None`.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}
