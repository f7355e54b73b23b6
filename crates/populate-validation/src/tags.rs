//! Metadata tag names recognized by the validation registry.

/// The member's date must be strictly in the future.
pub const FUTURE: &str = "validation.future";

/// The member's date must be in the past or present.
pub const PAST_OR_PRESENT: &str = "validation.past_or_present";
