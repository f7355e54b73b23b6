//! Boolean randomizer.

use rand::Rng;

/// Generate a random boolean with even odds.
pub fn random_bool<R: Rng>(rng: &mut R) -> bool {
    rng.gen_bool(0.5)
}
