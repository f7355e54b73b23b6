//! Composable field predicates.
//!
//! A [`FieldPredicate`] is a pure boolean test over a [`MemberDescriptor`],
//! closed under `and`, `or` and `negate`. Exclusion policies and randomizer
//! overrides are both expressed through predicates, evaluated per concrete
//! member descriptor.

use crate::types::{MemberDescriptor, Modifiers, TypeRef};
use std::fmt;
use std::sync::Arc;

/// Composable boolean test over a member descriptor.
#[derive(Clone)]
pub struct FieldPredicate {
    test: Arc<dyn Fn(&MemberDescriptor) -> bool + Send + Sync>,
}

impl FieldPredicate {
    /// Build a predicate from an arbitrary test function.
    pub fn new(test: impl Fn(&MemberDescriptor) -> bool + Send + Sync + 'static) -> Self {
        Self {
            test: Arc::new(test),
        }
    }

    /// Matches members with the given name, in any declaring type.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(move |m| m.name == name)
    }

    /// Matches members whose static type equals the given one.
    pub fn of_type(type_ref: TypeRef) -> Self {
        Self::new(move |m| m.type_ref == type_ref)
    }

    /// Matches members declared in the given type.
    pub fn in_type(declaring_type: impl Into<String>) -> Self {
        let declaring_type = declaring_type.into();
        Self::new(move |m| m.declaring_type == declaring_type)
    }

    /// Matches members carrying the given metadata tag.
    pub fn has_tag(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self::new(move |m| m.has_tag(&tag))
    }

    /// Matches members carrying all modifiers of the given set.
    pub fn has_modifiers(modifiers: Modifiers) -> Self {
        Self::new(move |m| m.modifiers.contains(modifiers))
    }

    /// Both predicates must match.
    pub fn and(self, other: FieldPredicate) -> Self {
        Self::new(move |m| self.matches(m) && other.matches(m))
    }

    /// Either predicate must match.
    pub fn or(self, other: FieldPredicate) -> Self {
        Self::new(move |m| self.matches(m) || other.matches(m))
    }

    /// Invert the predicate.
    pub fn negate(self) -> Self {
        Self::new(move |m| !self.matches(m))
    }

    /// Evaluate the predicate against a member descriptor.
    pub fn matches(&self, member: &MemberDescriptor) -> bool {
        (self.test)(member)
    }
}

impl fmt::Debug for FieldPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FieldPredicate(..)")
    }
}
