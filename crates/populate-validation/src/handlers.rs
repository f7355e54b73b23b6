//! Tag handlers narrowing the date range.
//!
//! Each handler holds a private copy of the base configuration and derives
//! a narrowed variant on first use, memoized for the handler's lifetime.
//! The memoization goes through [`OnceLock`], so concurrent first use from
//! multiple threads initializes exactly once.

use chrono::{Duration, NaiveDate, Utc};
use populate_core::randomizers::date;
use populate_core::{
    MemberDescriptor, PopulateConfig, PopulateError, Randomizer, RandomizerContext, TypeRef,
    Value, DEFAULT_DATE_RANGE_YEARS,
};
use std::sync::{Arc, OnceLock};
use tracing::debug;

/// Randomizer producing dates uniformly within fixed bounds.
struct BoundedDateRandomizer {
    start: NaiveDate,
    end: NaiveDate,
}

impl Randomizer for BoundedDateRandomizer {
    fn random_value(&self, ctx: &mut RandomizerContext<'_>) -> Result<Value, PopulateError> {
        Ok(Value::Date(date::random_date(ctx.rng(), self.start, self.end)))
    }
}

/// One handler per recognized tag: given a member, produce a randomizer
/// bound to the member's static type, or `None` to let the resolution
/// chain continue.
pub(crate) trait TagHandler: Send + Sync {
    fn randomizer_for(&self, member: &MemberDescriptor) -> Option<Arc<dyn Randomizer>>;
}

/// Handler for the `future` tag: dates strictly after today.
pub(crate) struct FutureHandler {
    base: PopulateConfig,
    narrowed: OnceLock<PopulateConfig>,
}

impl FutureHandler {
    pub(crate) fn new(config: &PopulateConfig) -> Self {
        Self {
            base: config.copy(),
            narrowed: OnceLock::new(),
        }
    }

    fn narrowed(&self) -> &PopulateConfig {
        self.narrowed.get_or_init(|| {
            let today = Utc::now().date_naive();
            let start = today + Duration::days(1);
            let end = today + Duration::days(365 * DEFAULT_DATE_RANGE_YEARS);
            debug!(%start, %end, "narrowing date range for future tag");
            // start precedes end by construction
            self.base
                .copy()
                .date_range(start, end)
                .expect("ordered date range")
        })
    }
}

impl TagHandler for FutureHandler {
    fn randomizer_for(&self, member: &MemberDescriptor) -> Option<Arc<dyn Randomizer>> {
        if member.type_ref != TypeRef::Date {
            return None;
        }
        let (start, end) = self.narrowed().date_bounds();
        Some(Arc::new(BoundedDateRandomizer { start, end }))
    }
}

/// Handler for the `past_or_present` tag: dates up to and including today.
pub(crate) struct PastOrPresentHandler {
    base: PopulateConfig,
    narrowed: OnceLock<PopulateConfig>,
}

impl PastOrPresentHandler {
    pub(crate) fn new(config: &PopulateConfig) -> Self {
        Self {
            base: config.copy(),
            narrowed: OnceLock::new(),
        }
    }

    fn narrowed(&self) -> &PopulateConfig {
        self.narrowed.get_or_init(|| {
            let today = Utc::now().date_naive();
            let start = today - Duration::days(365 * DEFAULT_DATE_RANGE_YEARS);
            debug!(%start, end = %today, "narrowing date range for past-or-present tag");
            // start precedes end by construction
            self.base
                .copy()
                .date_range(start, today)
                .expect("ordered date range")
        })
    }
}

impl TagHandler for PastOrPresentHandler {
    fn randomizer_for(&self, member: &MemberDescriptor) -> Option<Arc<dyn Randomizer>> {
        if member.type_ref != TypeRef::Date {
            return None;
        }
        let (start, end) = self.narrowed().date_bounds();
        Some(Arc::new(BoundedDateRandomizer { start, end }))
    }
}
