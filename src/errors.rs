/*!
This module contains error types for table sorting.
*/

use std::fmt;

/// Alias for a [`Result`] that wraps a [`SortError`].
pub type SortResult<T> = Result<T, SortError>;

/// Top-level sorting errors.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SortError {
    /// Variant for sort key parsing errors.
    KeyParsing(String),

    /// Variant for well-formed sort keys that name a field or direction that is not offered.
    UnsupportedSortKey(String),

    /// Variant for lookups of an entity type that has no comparator factory registered.
    UnknownEntityType(String),

    /// Variant for registering a comparator factory under a name that is already taken.
    DuplicateEntityType(String),
}

impl std::error::Error for SortError {}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::KeyParsing(base_err) => write!(f, "{}", base_err),
            SortError::UnsupportedSortKey(key) => {
                write!(f, "The sort key \"{}\" is not one of the accepted sort keys.", key)
            }
            SortError::UnknownEntityType(entity_type) => write!(
                f,
                "No comparator factory is registered for entity type \"{}\".",
                entity_type
            ),
            SortError::DuplicateEntityType(entity_type) => write!(
                f,
                "A comparator factory is already registered for entity type \"{}\".",
                entity_type
            ),
        }
    }
}
