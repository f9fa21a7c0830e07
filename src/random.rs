//! Random source shared by a whole run.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a seeded generator.
///
/// One generator is created per run and threaded through every
/// accept/reject draw, never re-created per decision.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
