//! Error types for the needle map crate.

use needle_types::TypeError;

/// Errors from needle map operations.
///
/// Lookups, sets and deletes never fail; misses and no-op deletes are
/// reported through their return values. Visitor errors from
/// `ascending_visit` are returned as the visitor's own type.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    /// The map configuration could not be parsed.
    #[error("invalid map config: {0}")]
    Config(String),

    /// A caller-supplied value could not be converted to an index type.
    #[error(transparent)]
    Type(#[from] TypeError),
}

/// Convenience alias for needle map results.
pub type MapResult<T> = Result<T, MapError>;
