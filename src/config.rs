/*!
This module contains global configuration constants for table sorting.

Sort keys and field names here mirror the property names used by the UI's data models, so they
keep the models' PascalCase spelling.
*/

/// The separator between the field name and the direction in a sort key.
pub const SORT_KEY_SEPARATOR: char = ':';

/**
The sort key used for upstream instances when the caller does not supply one.

Upstreams are listed alphabetically by the service they point at.
*/
pub const DEFAULT_UPSTREAM_INSTANCE_SORT_KEY: &str = "DestinationName:asc";

/// The only property that upstream instances can be sorted on.
pub const UPSTREAM_INSTANCE_SORT_FIELDS: [&str; 1] = ["DestinationName"];

/// The name upstream instance comparators are registered under.
pub const UPSTREAM_INSTANCE_ENTITY_TYPE: &str = "upstream-instance";
