//! String randomizers.

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Generate a random alphanumeric string with a length drawn uniformly
/// from the inclusive `[min, max]` range.
pub fn random_string<R: Rng>(rng: &mut R, min: usize, max: usize) -> String {
    let length = rng.gen_range(min..=max);
    (0..length).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_length_is_in_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let s = random_string(&mut rng, 5, 20);
            assert!((5..=20).contains(&s.len()));
            assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_zero_length_range() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(random_string(&mut rng, 0, 0), "");
    }

    #[test]
    fn test_deterministic_generation() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(random_string(&mut rng1, 5, 20), random_string(&mut rng2, 5, 20));
    }
}
