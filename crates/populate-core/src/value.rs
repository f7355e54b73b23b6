//! Dynamic value representation for populated instances.
//!
//! The engine has no runtime reflection to write into arbitrary structs,
//! so a populated instance is a [`Value`] tree: the registration-based
//! analogue of "an instance of T". Objects carry the name of the concrete
//! type they were built from, which is how callers observe which candidate
//! an abstract type resolved to.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A populated value.
///
/// Lists and arrays are distinct kinds so that the configured size range
/// can be observed on both container families independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Null / absent value
    Null,

    /// Boolean value
    Bool(bool),

    /// 64-bit signed integer
    Int(i64),

    /// 64-bit floating point
    Float(f64),

    /// String value
    String(String),

    /// Calendar date
    Date(NaiveDate),

    /// Enum variant of a registered enum type
    Enum {
        /// Name of the enum type
        type_name: String,
        /// Chosen variant
        variant: String,
    },

    /// Variable-size collection
    List(Vec<Value>),

    /// Fixed-kind array
    Array(Vec<Value>),

    /// Object built from a struct descriptor
    Object {
        /// Name of the concrete type this object was built from
        type_name: String,
        /// Member values keyed by member name
        fields: BTreeMap<String, Value>,
    },
}

impl Value {
    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a date.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Try to get the elements of this value, for both lists and arrays.
    pub fn as_slice(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) | Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Try to get this value as an enum `(type name, variant)` pair.
    pub fn as_variant(&self) -> Option<(&str, &str)> {
        match self {
            Self::Enum { type_name, variant } => Some((type_name, variant)),
            _ => None,
        }
    }

    /// Try to get the field map of an object value.
    pub fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Self::Object { fields, .. } => Some(fields),
            _ => None,
        }
    }

    /// Name of the concrete type an object value was built from.
    pub fn object_type(&self) -> Option<&str> {
        match self {
            Self::Object { type_name, .. } => Some(type_name),
            _ => None,
        }
    }

    /// Get a direct member of an object value by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.as_object().and_then(|fields| fields.get(name))
    }

    /// Walk a dotted member path (e.g. `"b2.a2.s2"`) through nested objects.
    ///
    /// Returns `None` as soon as a segment is missing or the current value
    /// is not an object.
    pub fn at(&self, path: &str) -> Option<&Value> {
        let mut current = self;
        for segment in path.split('.') {
            current = current.field(segment)?;
        }
        Some(current)
    }
}
