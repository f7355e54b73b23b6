//! Date randomizer.

use chrono::{Duration, NaiveDate};
use rand::Rng;

/// Generate a random date in the given inclusive `[start, end]` range.
///
/// A collapsed or inverted range yields `start`.
pub fn random_date<R: Rng>(rng: &mut R, start: NaiveDate, end: NaiveDate) -> NaiveDate {
    let span = (end - start).num_days();
    if span <= 0 {
        return start;
    }
    start + Duration::days(rng.gen_range(0..=span))
}
