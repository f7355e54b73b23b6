//! Numeric randomizers.

use rand::Rng;

/// Generate a random positive, non-zero integer.
pub fn random_int<R: Rng>(rng: &mut R) -> i64 {
    rng.gen_range(1..=i32::MAX as i64)
}

/// Generate a random non-negative float.
pub fn random_float<R: Rng>(rng: &mut R) -> f64 {
    rng.gen_range(0.0..=1_000_000.0)
}

/// Generate a random integer in the given inclusive range.
pub fn random_int_range<R: Rng>(rng: &mut R, min: i64, max: i64) -> i64 {
    rng.gen_range(min..=max)
}
