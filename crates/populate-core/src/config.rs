//! Population configuration.
//!
//! [`PopulateConfig`] bundles every policy knob consulted during a populate
//! call. It is logically immutable once handed to a [`crate::Populator`]:
//! collaborators that need a specialized variant (for example a tag handler
//! narrowing the date range) must [`PopulateConfig::copy`] it first and
//! mutate the copy, never the shared original.
//!
//! Range setters validate eagerly and fail at the call site, before any
//! population starts.

use crate::error::PopulateError;
use crate::predicate::FieldPredicate;
use crate::randomizer::Randomizer;
use chrono::{Duration, NaiveDate, Utc};
use std::fmt;
use std::sync::Arc;

/// Metadata tag marking a member as excluded from population.
pub const EXCLUDE_TAG: &str = "populate.exclude";

/// Default width of the date range, in years, on both sides of today.
pub const DEFAULT_DATE_RANGE_YEARS: i64 = 10;

/// What the engine returns when it re-enters a type already under
/// construction on the active path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CyclePolicy {
    /// Return `Value::Null` (the default)
    #[default]
    Null,
    /// Return an object holding each member's inline default
    Default,
}

/// Policy knobs for one populator instance.
#[derive(Clone)]
pub struct PopulateConfig {
    pub(crate) seed: u64,
    pub(crate) collection_size_range: (usize, usize),
    pub(crate) string_length_range: (usize, usize),
    pub(crate) date_range: (NaiveDate, NaiveDate),
    pub(crate) cycle_policy: CyclePolicy,
    pub(crate) ignore_randomization_errors: bool,
    pub(crate) resolve_abstract_types: bool,
    pub(crate) exclusions: Vec<FieldPredicate>,
    pub(crate) overrides: Vec<(FieldPredicate, Arc<dyn Randomizer>)>,
}

impl Default for PopulateConfig {
    fn default() -> Self {
        let today = Utc::now().date_naive();
        let span = Duration::days(365 * DEFAULT_DATE_RANGE_YEARS);
        Self {
            seed: 123,
            collection_size_range: (1, 10),
            string_length_range: (5, 20),
            date_range: (today - span, today + span),
            cycle_policy: CyclePolicy::Null,
            ignore_randomization_errors: false,
            resolve_abstract_types: false,
            exclusions: Vec::new(),
            overrides: Vec::new(),
        }
    }
}

impl PopulateConfig {
    /// Create a configuration with default knobs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the random seed. The same seed and configuration reproduce the
    /// same instance on every populate call.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the inclusive size range for populated collections and arrays.
    ///
    /// Fails immediately if `min < 0` or `min > max`.
    pub fn collection_size_range(mut self, min: i64, max: i64) -> Result<Self, PopulateError> {
        if min < 0 || min > max {
            return Err(PopulateError::InvalidSizeRange { min, max });
        }
        self.collection_size_range = (min as usize, max as usize);
        Ok(self)
    }

    /// Set the inclusive length range for populated strings.
    ///
    /// Fails immediately if `min < 0` or `min > max`.
    pub fn string_length_range(mut self, min: i64, max: i64) -> Result<Self, PopulateError> {
        if min < 0 || min > max {
            return Err(PopulateError::InvalidSizeRange { min, max });
        }
        self.string_length_range = (min as usize, max as usize);
        Ok(self)
    }

    /// Set the inclusive range for populated dates.
    ///
    /// Fails immediately if `start > end`.
    pub fn date_range(mut self, start: NaiveDate, end: NaiveDate) -> Result<Self, PopulateError> {
        if start > end {
            return Err(PopulateError::InvalidDateRange { start, end });
        }
        self.date_range = (start, end);
        Ok(self)
    }

    /// Exclude every member matching the predicate. Excluded members keep
    /// their inline default value, subtree included.
    pub fn exclude_field(mut self, predicate: FieldPredicate) -> Self {
        self.exclusions.push(predicate);
        self
    }

    /// Register a randomizer for every member matching the predicate.
    ///
    /// Overrides take precedence over every other resolution step; the most
    /// recently registered matching override wins.
    pub fn randomize(
        mut self,
        predicate: FieldPredicate,
        randomizer: impl Randomizer + 'static,
    ) -> Self {
        self.overrides.push((predicate, Arc::new(randomizer)));
        self
    }

    /// Swallow member-level randomization failures instead of aborting the
    /// whole populate call, leaving the failed member at its default.
    pub fn ignore_randomization_errors(mut self, ignore: bool) -> Self {
        self.ignore_randomization_errors = ignore;
        self
    }

    /// Resolve abstract types through the registered subtype table. When
    /// disabled, populating an abstract type fails.
    pub fn resolve_abstract_types(mut self, resolve: bool) -> Self {
        self.resolve_abstract_types = resolve;
        self
    }

    /// Set what a cycle-guard hit yields.
    pub fn cycle_policy(mut self, policy: CyclePolicy) -> Self {
        self.cycle_policy = policy;
        self
    }

    /// Independent clone, safe to specialize without affecting the original.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Configured inclusive collection and array size bounds.
    pub fn collection_size_bounds(&self) -> (usize, usize) {
        self.collection_size_range
    }

    /// Configured inclusive string length bounds.
    pub fn string_length_bounds(&self) -> (usize, usize) {
        self.string_length_range
    }

    /// Configured inclusive date bounds.
    pub fn date_bounds(&self) -> (NaiveDate, NaiveDate) {
        self.date_range
    }

    /// Whether the member is excluded, either by the exclusion tag or by
    /// any configured exclusion predicate.
    pub fn is_excluded(&self, member: &crate::types::MemberDescriptor) -> bool {
        member.has_tag(EXCLUDE_TAG) || self.exclusions.iter().any(|p| p.matches(member))
    }

    /// Most recently registered override whose predicate matches.
    pub(crate) fn override_for(
        &self,
        member: &crate::types::MemberDescriptor,
    ) -> Option<&Arc<dyn Randomizer>> {
        self.overrides
            .iter()
            .rev()
            .find(|(predicate, _)| predicate.matches(member))
            .map(|(_, randomizer)| randomizer)
    }
}

impl fmt::Debug for PopulateConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PopulateConfig")
            .field("seed", &self.seed)
            .field("collection_size_range", &self.collection_size_range)
            .field("string_length_range", &self.string_length_range)
            .field("date_range", &self.date_range)
            .field("cycle_policy", &self.cycle_policy)
            .field(
                "ignore_randomization_errors",
                &self.ignore_randomization_errors,
            )
            .field("resolve_abstract_types", &self.resolve_abstract_types)
            .field("exclusions", &self.exclusions.len())
            .field("overrides", &self.overrides.len())
            .finish()
    }
}
