//! Core population engine for generating fully populated test instances.
//!
//! Given a [`TypeRegistry`] describing the shape of a type graph, the
//! [`Populator`] produces a [`Value`] tree with every reachable member
//! filled with non-default, internally consistent random values. It
//! recurses through nested objects, collections, arrays and abstract
//! types, terminates on self-referential graphs through a cycle guard,
//! and exposes the current dotted member path to user-supplied
//! randomizers so they can make per-location decisions.
//!
//! # Architecture
//!
//! ```text
//! TypeRegistry (descriptors, subtype table)
//!        │
//!        ▼
//! ┌─────────────────────┐     ┌──────────────────────────────┐
//! │      Populator      │────▶│ resolution chain             │
//! │                     │     │  1. config overrides         │
//! │  - PopulateConfig   │     │  2. RandomizerRegistry packs │
//! │  - rng (per call)   │     │  3. by-type defaults         │
//! │  - TraversalContext │     │  4. recursion into engine    │
//! └─────────┬───────────┘     └──────────────────────────────┘
//!           │
//!           ▼
//!   Value::Object { type_name, fields }
//! ```
//!
//! # Example
//!
//! ```rust
//! use populate_core::{MemberDescriptor, Populator, TypeDescriptor, TypeRef, TypeRegistry};
//! use std::sync::Arc;
//!
//! let mut registry = TypeRegistry::new();
//! registry.register(
//!     TypeDescriptor::structure("Person")
//!         .with_member(MemberDescriptor::new("name", TypeRef::String))
//!         .with_member(MemberDescriptor::new("age", TypeRef::Int)),
//! );
//!
//! let populator = Populator::new(Arc::new(registry));
//! let person = populator.populate("Person").unwrap();
//!
//! assert!(person.field("name").unwrap().as_str().is_some());
//! ```
//!
//! Population is deterministic: the same seed and configuration reproduce
//! the same instance on every call.

pub mod config;
pub mod context;
pub mod error;
pub mod populator;
pub mod predicate;
pub mod randomizer;
pub mod randomizers;
pub mod types;
pub mod value;

// Re-exports for convenience
pub use config::{CyclePolicy, PopulateConfig, DEFAULT_DATE_RANGE_YEARS, EXCLUDE_TAG};
pub use context::{RandomizerContext, TraversalContext};
pub use error::PopulateError;
pub use populator::Populator;
pub use predicate::FieldPredicate;
pub use randomizer::{Randomizer, RandomizerRegistry};
pub use types::{
    Factory, MemberDescriptor, Modifiers, TypeDescriptor, TypeKind, TypeRef, TypeRegistry,
};
pub use value::Value;
