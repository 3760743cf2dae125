//! Filter implementations for merged movies.

pub mod field_match;

// Re-export for convenience
pub use field_match::FieldMatchFilter;
