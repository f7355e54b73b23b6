//! Enum variant randomizer.

use rand::seq::SliceRandom;
use rand::Rng;

/// Pick a random variant from the list, or `None` if the list is empty.
pub fn random_variant<'a, R: Rng>(rng: &mut R, variants: &'a [String]) -> Option<&'a str> {
    variants.choose(rng).map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_chosen_variant_is_from_list() {
        let mut rng = StdRng::seed_from_u64(42);
        let variants: Vec<String> = ["Red", "Green", "Blue"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        for _ in 0..20 {
            let variant = random_variant(&mut rng, &variants).unwrap();
            assert!(variants.iter().any(|v| v == variant));
        }
    }

    #[test]
    fn test_empty_variant_list() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(random_variant(&mut rng, &[]), None);
    }
}
