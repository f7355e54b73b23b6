//! Type and member descriptors.
//!
//! There is no runtime reflection: the shape of every populatable type is
//! registered up front in a [`TypeRegistry`]. A [`TypeDescriptor`] is the
//! static description of one type, a [`MemberDescriptor`] the description
//! of one named, typed slot within it. Descriptors are built once at
//! startup and read many times.

use crate::error::PopulateError;
use crate::value::Value;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::ops::BitOr;
use std::sync::Arc;

/// Member modifier bitset.
///
/// Combining modifiers with `|` builds a set; [`Modifiers::contains`] uses
/// all-of semantics, so a predicate built from `STATIC | TRANSIENT` only
/// matches members carrying both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers(u8);

impl Modifiers {
    /// Empty modifier set
    pub const NONE: Modifiers = Modifiers(0);
    /// Public visibility
    pub const PUBLIC: Modifiers = Modifiers(1);
    /// Protected visibility
    pub const PROTECTED: Modifiers = Modifiers(1 << 1);
    /// Private visibility
    pub const PRIVATE: Modifiers = Modifiers(1 << 2);
    /// Static member, never populated
    pub const STATIC: Modifiers = Modifiers(1 << 3);
    /// Final-like member
    pub const FINAL: Modifiers = Modifiers(1 << 4);
    /// Transient-like member
    pub const TRANSIENT: Modifiers = Modifiers(1 << 5);

    /// Check that every modifier in `other` is present in this set.
    pub fn contains(self, other: Modifiers) -> bool {
        self.0 & other.0 == other.0
    }

    /// Check if the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Modifiers) -> Modifiers {
        Modifiers(self.0 | rhs.0)
    }
}

/// Static type of a member slot.
///
/// Container element types may be absent ("unknown element type"); the
/// engine then falls back to [`TypeRef::String`] elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeRef {
    /// Boolean scalar
    Bool,
    /// Integer scalar
    Int,
    /// Floating point scalar
    Float,
    /// String scalar
    String,
    /// Calendar date scalar
    Date,
    /// Reference to a registered type by name
    Named(String),
    /// Variable-size collection with an optional element type
    List(Option<Box<TypeRef>>),
    /// Array with an optional element type
    Array(Option<Box<TypeRef>>),
}

impl TypeRef {
    /// Reference a registered type by name.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// A list with a known element type.
    pub fn list_of(element: TypeRef) -> Self {
        Self::List(Some(Box::new(element)))
    }

    /// A list with an unknown element type.
    pub fn list() -> Self {
        Self::List(None)
    }

    /// An array with a known element type.
    pub fn array_of(element: TypeRef) -> Self {
        Self::Array(Some(Box::new(element)))
    }

    /// An array with an unknown element type.
    pub fn array() -> Self {
        Self::Array(None)
    }
}

/// Static description of one named, typed slot within a declaring type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberDescriptor {
    /// Name of the type declaring this member, set on registration
    pub declaring_type: String,

    /// Member name, unique within the declaring type
    pub name: String,

    /// Static type of the member
    pub type_ref: TypeRef,

    /// Declarative metadata tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Modifier set
    #[serde(default)]
    pub modifiers: Modifiers,

    /// Inline default value the member holds before population.
    /// Excluded members are left at this value.
    #[serde(default)]
    pub default: Option<Value>,
}

impl MemberDescriptor {
    /// Create a member descriptor. The declaring type is filled in when
    /// the member is attached to a [`TypeDescriptor`].
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            declaring_type: String::new(),
            name: name.into(),
            type_ref,
            tags: Vec::new(),
            modifiers: Modifiers::NONE,
            default: None,
        }
    }

    /// Attach a metadata tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Set the modifier set.
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Set the inline default value.
    pub fn with_default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    /// Check whether the member carries the given tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Fallible factory producing the initial object value for a type,
/// the analogue of a non-trivial constructor.
#[derive(Clone)]
pub struct Factory(Arc<dyn Fn(&mut StdRng) -> Result<Value, PopulateError> + Send + Sync>);

impl Factory {
    /// Wrap a factory closure.
    pub fn new(
        f: impl Fn(&mut StdRng) -> Result<Value, PopulateError> + Send + Sync + 'static,
    ) -> Self {
        Self(Arc::new(f))
    }

    /// Invoke the factory.
    pub fn call(&self, rng: &mut StdRng) -> Result<Value, PopulateError> {
        (self.0)(rng)
    }
}

impl fmt::Debug for Factory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Factory(..)")
    }
}

/// What kind of type a descriptor describes.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeKind {
    /// Concrete type with an ordered member list
    Struct,
    /// Enum with a fixed variant list
    Enum(Vec<String>),
    /// Abstract type, constructible only through a registered subtype
    Abstract,
    /// Known but never populatable (external resource handles)
    Opaque,
}

/// Static description of one registered type.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    /// Type name, unique within the registry
    pub name: String,

    /// Kind of the type
    pub kind: TypeKind,

    /// Members in declaration order (structs only)
    pub members: Vec<MemberDescriptor>,

    /// Optional factory producing the initial object value
    pub factory: Option<Factory>,
}

impl TypeDescriptor {
    /// A concrete struct type.
    pub fn structure(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Struct,
            members: Vec::new(),
            factory: None,
        }
    }

    /// An enum type with the given variants.
    pub fn enumeration(
        name: impl Into<String>,
        variants: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Enum(variants.into_iter().map(Into::into).collect()),
            members: Vec::new(),
            factory: None,
        }
    }

    /// An abstract type (interface-like), constructible only through
    /// subtypes registered with [`TypeRegistry::register_subtype`].
    pub fn abstract_type(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Abstract,
            members: Vec::new(),
            factory: None,
        }
    }

    /// A known but never populatable type.
    pub fn opaque(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Opaque,
            members: Vec::new(),
            factory: None,
        }
    }

    /// Append a member in declaration order, stamping its declaring type.
    pub fn with_member(mut self, mut member: MemberDescriptor) -> Self {
        member.declaring_type = self.name.clone();
        self.members.push(member);
        self
    }

    /// Set a factory for the initial object value.
    pub fn with_factory(
        mut self,
        f: impl Fn(&mut StdRng) -> Result<Value, PopulateError> + Send + Sync + 'static,
    ) -> Self {
        self.factory = Some(Factory::new(f));
        self
    }
}

/// Registry of type descriptors and the abstract-to-concrete subtype table.
///
/// The subtype table is the explicit replacement for classpath scanning:
/// callers register which concrete types implement an abstract one, once,
/// at startup.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: HashMap<String, TypeDescriptor>,
    subtypes: HashMap<String, Vec<String>>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type descriptor, replacing any previous one of the same name.
    pub fn register(&mut self, descriptor: TypeDescriptor) -> &mut Self {
        self.types.insert(descriptor.name.clone(), descriptor);
        self
    }

    /// Register a concrete subtype for an abstract type.
    ///
    /// Candidates are kept sorted so selection under a fixed seed is
    /// deterministic regardless of registration order.
    pub fn register_subtype(
        &mut self,
        abstract_name: impl Into<String>,
        concrete_name: impl Into<String>,
    ) -> &mut Self {
        let candidates = self.subtypes.entry(abstract_name.into()).or_default();
        candidates.push(concrete_name.into());
        candidates.sort();
        candidates.dedup();
        self
    }

    /// Look up a type descriptor by name.
    pub fn get(&self, name: &str) -> Option<&TypeDescriptor> {
        self.types.get(name)
    }

    /// Concrete candidates registered for an abstract type.
    pub fn candidates(&self, name: &str) -> &[String] {
        self.subtypes.get(name).map(Vec::as_slice).unwrap_or(&[])
    }
}
