//! Validation-tag randomizer registry for the population engine.
//!
//! Members can carry declarative validation-style tags in their
//! descriptors; this crate turns two of them into value constraints:
//!
//! - [`tags::FUTURE`] — the populated date is strictly after today;
//! - [`tags::PAST_OR_PRESENT`] — the populated date is today or earlier.
//!
//! The registry plugs into the engine's resolution chain through the
//! [`RandomizerRegistry`] seam, after explicit overrides and before the
//! by-type defaults:
//!
//! ```rust
//! use populate_core::{
//!     MemberDescriptor, PopulateConfig, Populator, TypeDescriptor, TypeRef, TypeRegistry,
//! };
//! use populate_validation::{tags, ValidationRandomizerRegistry};
//! use std::sync::Arc;
//!
//! let mut registry = TypeRegistry::new();
//! registry.register(
//!     TypeDescriptor::structure("Subscription").with_member(
//!         MemberDescriptor::new("expires", TypeRef::Date).with_tag(tags::FUTURE),
//!     ),
//! );
//!
//! let config = PopulateConfig::new();
//! let populator = Populator::with_config(Arc::new(registry), config.copy())
//!     .with_randomizer_registry(Arc::new(ValidationRandomizerRegistry::new(&config)));
//!
//! let subscription = populator.populate("Subscription").unwrap();
//! assert!(subscription.field("expires").unwrap().as_date().is_some());
//! ```
//!
//! Each handler derives a narrowed copy of the shared configuration on
//! first use and reuses it afterwards; the shared original is never
//! mutated.

mod handlers;
pub mod tags;

use handlers::{FutureHandler, PastOrPresentHandler, TagHandler};
use populate_core::{MemberDescriptor, PopulateConfig, Randomizer, RandomizerRegistry};
use std::sync::Arc;

/// Randomizer registry dispatching on validation tags.
pub struct ValidationRandomizerRegistry {
    future: FutureHandler,
    past_or_present: PastOrPresentHandler,
}

impl ValidationRandomizerRegistry {
    /// Create a registry over a private copy of the given configuration.
    pub fn new(config: &PopulateConfig) -> Self {
        Self {
            future: FutureHandler::new(config),
            past_or_present: PastOrPresentHandler::new(config),
        }
    }
}

impl RandomizerRegistry for ValidationRandomizerRegistry {
    fn randomizer_for(&self, member: &MemberDescriptor) -> Option<Arc<dyn Randomizer>> {
        for tag in &member.tags {
            let handler: &dyn TagHandler = match tag.as_str() {
                tags::FUTURE => &self.future,
                tags::PAST_OR_PRESENT => &self.past_or_present,
                _ => continue,
            };
            if let Some(randomizer) = handler.randomizer_for(member) {
                return Some(randomizer);
            }
        }
        None
    }
}
