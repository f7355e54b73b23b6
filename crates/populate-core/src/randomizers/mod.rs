//! Default leaf randomizers for scalar value kinds.
//!
//! These are the by-type fallbacks of the resolution chain: one module per
//! value family, free functions over a caller-supplied RNG so every draw
//! stays on the engine's seeded random source.

pub mod boolean;
pub mod date;
pub mod enumeration;
pub mod numeric;
pub mod text;

use crate::config::PopulateConfig;
use crate::types::TypeRef;
use crate::value::Value;
use rand::Rng;

/// Produce a value for a scalar type reference, or `None` if the type
/// reference is not a scalar kind.
pub fn scalar_value<R: Rng>(
    type_ref: &TypeRef,
    config: &PopulateConfig,
    rng: &mut R,
) -> Option<Value> {
    match type_ref {
        TypeRef::Bool => Some(Value::Bool(boolean::random_bool(rng))),
        TypeRef::Int => Some(Value::Int(numeric::random_int(rng))),
        TypeRef::Float => Some(Value::Float(numeric::random_float(rng))),
        TypeRef::String => {
            let (min, max) = config.string_length_bounds();
            Some(Value::String(text::random_string(rng, min, max)))
        }
        TypeRef::Date => {
            let (start, end) = config.date_bounds();
            Some(Value::Date(date::random_date(rng, start, end)))
        }
        TypeRef::Named(_) | TypeRef::List(_) | TypeRef::Array(_) => None,
    }
}
