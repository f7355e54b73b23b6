//! Randomizer traits: the leaf-value capability and the registry seam.

use crate::context::RandomizerContext;
use crate::error::PopulateError;
use crate::types::MemberDescriptor;
use crate::value::Value;
use std::sync::Arc;

/// Capability producing one value on demand.
///
/// Every randomizer receives the invocation context, so path-sensitive
/// ("context-aware") behavior is a matter of reading
/// [`RandomizerContext::current_field`]; randomizers that do not care
/// simply ignore it. Closures with the matching signature implement this
/// trait directly.
pub trait Randomizer: Send + Sync {
    /// Produce one value for the member currently being populated.
    fn random_value(&self, ctx: &mut RandomizerContext<'_>) -> Result<Value, PopulateError>;
}

impl<F> Randomizer for F
where
    F: for<'a, 'b> Fn(&'a mut RandomizerContext<'b>) -> Result<Value, PopulateError>
        + Send
        + Sync,
{
    fn random_value(&self, ctx: &mut RandomizerContext<'_>) -> Result<Value, PopulateError> {
        self(ctx)
    }
}

/// A pluggable source of randomizers consulted by the resolution chain
/// after explicit overrides and before the by-type defaults.
///
/// Tag-driven handler packs (such as the validation-tag registry) implement
/// this trait and are attached to a populator at construction time.
pub trait RandomizerRegistry: Send + Sync {
    /// A randomizer for the given member, or `None` to let the chain
    /// continue with the next step.
    fn randomizer_for(&self, member: &MemberDescriptor) -> Option<Arc<dyn Randomizer>>;
}
