//! The recursive population engine.
//!
//! [`Populator`] walks a registered type graph depth-first and produces a
//! fully populated [`Value`] tree. At every member it consults the
//! exclusion policy first, then the randomizer resolution chain in fixed
//! precedence order:
//!
//! 1. explicit per-predicate overrides from the configuration, most
//!    recently registered first;
//! 2. attached [`RandomizerRegistry`] packs (metadata-tag handlers);
//! 3. the by-type default randomizers for scalar kinds;
//! 4. recursion into the engine itself for named types, collections and
//!    arrays (abstract types resolve through the registered subtype table
//!    when enabled);
//! 5. otherwise the member fails with *no randomizer available*, which
//!    either aborts the whole call or, under error tolerance, is swallowed
//!    at the member level.
//!
//! Every root [`Populator::populate`] call re-seeds a fresh RNG from the
//! configured seed and starts with an empty traversal context, so the same
//! configuration reproduces the same instance call after call.

use crate::config::{CyclePolicy, PopulateConfig};
use crate::context::{RandomizerContext, TraversalContext};
use crate::error::PopulateError;
use crate::randomizer::{Randomizer, RandomizerRegistry};
use crate::randomizers;
use crate::randomizers::enumeration;
use crate::types::{MemberDescriptor, Modifiers, TypeDescriptor, TypeKind, TypeRef, TypeRegistry};
use crate::value::Value;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use tracing::{debug, warn};

/// Element type used when a container declares none.
const DEFAULT_ELEMENT_TYPE: TypeRef = TypeRef::String;

/// Recursive population engine over a registered type graph.
///
/// A populator is cheap to construct and safe to share across threads:
/// all per-call state (RNG, traversal path, cycle guard) lives on the
/// stack of each `populate` call.
pub struct Populator {
    registry: Arc<TypeRegistry>,
    config: PopulateConfig,
    randomizer_registries: Vec<Arc<dyn RandomizerRegistry>>,
}

impl Populator {
    /// Create a populator with the default configuration.
    pub fn new(registry: Arc<TypeRegistry>) -> Self {
        Self::with_config(registry, PopulateConfig::new())
    }

    /// Create a populator with an explicit configuration.
    pub fn with_config(registry: Arc<TypeRegistry>, config: PopulateConfig) -> Self {
        Self {
            registry,
            config,
            randomizer_registries: Vec::new(),
        }
    }

    /// Attach a randomizer registry pack, consulted after explicit
    /// overrides and before the by-type defaults. Packs are consulted in
    /// attachment order.
    pub fn with_randomizer_registry(mut self, registry: Arc<dyn RandomizerRegistry>) -> Self {
        self.randomizer_registries.push(registry);
        self
    }

    /// The configuration this populator runs with.
    pub fn config(&self) -> &PopulateConfig {
        &self.config
    }

    /// The type registry this populator reads from.
    pub fn type_registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Produce a fully populated instance of the named type.
    pub fn populate(&self, type_name: &str) -> Result<Value, PopulateError> {
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let mut ctx = TraversalContext::new();
        debug!(type_name, seed = self.config.seed, "populating root instance");
        self.populate_named(type_name, &mut ctx, &mut rng)
    }

    fn populate_named(
        &self,
        name: &str,
        ctx: &mut TraversalContext,
        rng: &mut StdRng,
    ) -> Result<Value, PopulateError> {
        let descriptor = self
            .registry
            .get(name)
            .ok_or_else(|| PopulateError::UnknownType(name.to_string()))?;

        match &descriptor.kind {
            TypeKind::Opaque => Err(PopulateError::NoRandomizerAvailable {
                path: ctx.current_path(),
                type_name: name.to_string(),
            }),
            TypeKind::Enum(variants) => {
                let variant = enumeration::random_variant(rng, variants)
                    .ok_or_else(|| PopulateError::NoConstructibleType(name.to_string()))?;
                Ok(Value::Enum {
                    type_name: name.to_string(),
                    variant: variant.to_string(),
                })
            }
            TypeKind::Abstract => {
                if !self.config.resolve_abstract_types {
                    return Err(PopulateError::NoConstructibleType(name.to_string()));
                }
                let candidates = self.registry.candidates(name);
                if candidates.is_empty() {
                    return Err(PopulateError::NoConstructibleType(name.to_string()));
                }
                let chosen = &candidates[rng.gen_range(0..candidates.len())];
                debug!(
                    abstract_type = name,
                    concrete = chosen.as_str(),
                    "resolved abstract type"
                );
                self.populate_named(chosen, ctx, rng)
            }
            TypeKind::Struct => self.populate_struct(descriptor, ctx, rng),
        }
    }

    fn populate_struct(
        &self,
        descriptor: &TypeDescriptor,
        ctx: &mut TraversalContext,
        rng: &mut StdRng,
    ) -> Result<Value, PopulateError> {
        if !ctx.enter_type(&descriptor.name) {
            debug!(
                type_name = descriptor.name.as_str(),
                path = %ctx.current_path(),
                "cycle guard hit"
            );
            return Ok(self.cycle_terminal(descriptor));
        }
        let result = self.populate_members(descriptor, ctx, rng);
        ctx.leave_type(&descriptor.name);
        result
    }

    fn populate_members(
        &self,
        descriptor: &TypeDescriptor,
        ctx: &mut TraversalContext,
        rng: &mut StdRng,
    ) -> Result<Value, PopulateError> {
        let mut instance = self.instantiate(descriptor, rng)?;

        for member in &descriptor.members {
            // static members are structurally unpopulatable
            if member.modifiers.contains(Modifiers::STATIC) {
                continue;
            }

            ctx.push_member(&member.name);
            let outcome = self.populate_member(member, ctx, rng);
            ctx.pop_member();

            match outcome {
                Ok(Some(value)) => {
                    if let Value::Object { fields, .. } = &mut instance {
                        fields.insert(member.name.clone(), value);
                    }
                }
                // excluded: the inline default stays as-is
                Ok(None) => {}
                Err(e) if self.config.ignore_randomization_errors && e.is_member_recoverable() => {
                    warn!(
                        member = member.name.as_str(),
                        declaring = member.declaring_type.as_str(),
                        error = %e,
                        "ignoring randomization error"
                    );
                }
                Err(e) => return Err(e),
            }
        }

        Ok(instance)
    }

    fn instantiate(
        &self,
        descriptor: &TypeDescriptor,
        rng: &mut StdRng,
    ) -> Result<Value, PopulateError> {
        if let Some(factory) = &descriptor.factory {
            return factory
                .call(rng)
                .map_err(|e| PopulateError::FactoryFailed {
                    type_name: descriptor.name.clone(),
                    reason: e.to_string(),
                });
        }
        Ok(Self::default_instance(descriptor))
    }

    /// An object holding each populatable member's inline default.
    fn default_instance(descriptor: &TypeDescriptor) -> Value {
        let fields = descriptor
            .members
            .iter()
            .filter(|m| !m.modifiers.contains(Modifiers::STATIC))
            .map(|m| (m.name.clone(), m.default.clone().unwrap_or(Value::Null)))
            .collect();
        Value::Object {
            type_name: descriptor.name.clone(),
            fields,
        }
    }

    fn cycle_terminal(&self, descriptor: &TypeDescriptor) -> Value {
        match self.config.cycle_policy {
            CyclePolicy::Null => Value::Null,
            CyclePolicy::Default => Self::default_instance(descriptor),
        }
    }

    /// Resolve and invoke a randomizer for one member.
    ///
    /// `Ok(None)` means the member is excluded and must keep its default.
    fn populate_member(
        &self,
        member: &MemberDescriptor,
        ctx: &mut TraversalContext,
        rng: &mut StdRng,
    ) -> Result<Option<Value>, PopulateError> {
        if self.config.is_excluded(member) {
            debug!(path = %ctx.current_path(), "member excluded");
            return Ok(None);
        }

        if let Some(randomizer) = self.config.override_for(member) {
            return self.invoke(randomizer.as_ref(), ctx, rng).map(Some);
        }

        for registry in &self.randomizer_registries {
            if let Some(randomizer) = registry.randomizer_for(member) {
                return self.invoke(randomizer.as_ref(), ctx, rng).map(Some);
            }
        }

        self.populate_type_ref(&member.type_ref, ctx, rng).map(Some)
    }

    fn invoke(
        &self,
        randomizer: &dyn Randomizer,
        ctx: &TraversalContext,
        rng: &mut StdRng,
    ) -> Result<Value, PopulateError> {
        let mut rctx = RandomizerContext::new(ctx, &self.config, rng);
        randomizer.random_value(&mut rctx)
    }

    fn populate_type_ref(
        &self,
        type_ref: &TypeRef,
        ctx: &mut TraversalContext,
        rng: &mut StdRng,
    ) -> Result<Value, PopulateError> {
        match type_ref {
            TypeRef::Named(name) => self.populate_named(name, ctx, rng),
            TypeRef::List(element) => Ok(Value::List(self.populate_elements(
                element.as_deref(),
                ctx,
                rng,
            )?)),
            TypeRef::Array(element) => Ok(Value::Array(self.populate_elements(
                element.as_deref(),
                ctx,
                rng,
            )?)),
            scalar => randomizers::scalar_value(scalar, &self.config, rng).ok_or_else(|| {
                PopulateError::NoRandomizerAvailable {
                    path: ctx.current_path(),
                    type_name: format!("{scalar:?}"),
                }
            }),
        }
    }

    /// Populate the elements of one collection or array, with a size drawn
    /// uniformly from the configured inclusive range.
    fn populate_elements(
        &self,
        element: Option<&TypeRef>,
        ctx: &mut TraversalContext,
        rng: &mut StdRng,
    ) -> Result<Vec<Value>, PopulateError> {
        let element = element.unwrap_or(&DEFAULT_ELEMENT_TYPE);
        let (min, max) = self.config.collection_size_bounds();
        let size = rng.gen_range(min..=max);

        let mut items = Vec::with_capacity(size);
        for _ in 0..size {
            items.push(self.populate_type_ref(element, ctx, rng)?);
        }
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::FieldPredicate;

    fn person_registry() -> Arc<TypeRegistry> {
        let mut registry = TypeRegistry::new();
        registry.register(
            TypeDescriptor::structure("Person")
                .with_member(MemberDescriptor::new("name", TypeRef::String))
                .with_member(MemberDescriptor::new("age", TypeRef::Int))
                .with_member(MemberDescriptor::new(
                    "nicknames",
                    TypeRef::list_of(TypeRef::String),
                )),
        );
        Arc::new(registry)
    }

    #[test]
    fn test_populates_every_member() {
        let populator = Populator::new(person_registry());

        let person = populator.populate("Person").unwrap();

        assert_eq!(person.object_type(), Some("Person"));
        assert!(person.field("name").unwrap().as_str().is_some());
        assert!(person.field("age").unwrap().as_i64().is_some());
        assert!(!person.field("nicknames").unwrap().as_slice().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_type_fails() {
        let populator = Populator::new(person_registry());

        assert!(matches!(
            populator.populate("Ghost"),
            Err(PopulateError::UnknownType(_))
        ));
    }

    #[test]
    fn test_static_members_are_skipped() {
        let mut registry = TypeRegistry::new();
        registry.register(
            TypeDescriptor::structure("Counter")
                .with_member(
                    MemberDescriptor::new("instances", TypeRef::Int)
                        .with_modifiers(Modifiers::STATIC),
                )
                .with_member(MemberDescriptor::new("value", TypeRef::Int)),
        );

        let populator = Populator::new(Arc::new(registry));
        let counter = populator.populate("Counter").unwrap();

        assert!(counter.field("instances").is_none());
        assert!(counter.field("value").unwrap().as_i64().is_some());
    }

    #[test]
    fn test_excluded_member_keeps_inline_default() {
        let config = PopulateConfig::new().exclude_field(FieldPredicate::named("nicknames"));
        let populator = Populator::with_config(person_registry(), config);

        let person = populator.populate("Person").unwrap();

        // no inline default declared, so the member stays null
        assert!(person.field("nicknames").unwrap().is_null());
        assert!(person.field("name").unwrap().as_str().is_some());
    }

    #[test]
    fn test_factory_failure_surfaces_as_factory_failed() {
        let mut registry = TypeRegistry::new();
        registry.register(TypeDescriptor::structure("Broken").with_factory(|_| {
            Err(PopulateError::NoConstructibleType("inner".to_string()))
        }));

        let populator = Populator::new(Arc::new(registry));

        assert!(matches!(
            populator.populate("Broken"),
            Err(PopulateError::FactoryFailed { .. })
        ));
    }

    #[test]
    fn test_enum_member_gets_a_registered_variant() {
        let mut registry = TypeRegistry::new();
        registry.register(TypeDescriptor::enumeration("Color", ["Red", "Green", "Blue"]));
        registry.register(
            TypeDescriptor::structure("Pixel")
                .with_member(MemberDescriptor::new("color", TypeRef::named("Color"))),
        );

        let populator = Populator::new(Arc::new(registry));
        let pixel = populator.populate("Pixel").unwrap();

        let (type_name, variant) = pixel.field("color").unwrap().as_variant().unwrap();
        assert_eq!(type_name, "Color");
        assert!(["Red", "Green", "Blue"].contains(&variant));
    }
}
