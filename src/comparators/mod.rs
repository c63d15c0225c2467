/*!
This module holds the comparator factories for each kind of entity shown in a table, along with a
registry for looking the factories up by entity type.

Every factory takes a [`Properties`] capability and an optional sort key. It returns the comparator
that the capability produces for the entity's sortable fields.
*/

use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::config::UPSTREAM_INSTANCE_ENTITY_TYPE;
use crate::errors::{SortError, SortResult};
use crate::properties::{ComparatorOf, Properties};

mod upstream_instance;
pub use upstream_instance::{upstream_instance, UpstreamInstanceComparators};

/// A comparator factory as stored in a [`ComparatorRegistry`].
pub type ComparatorFactory<P> = Arc<dyn Fn(&P, Option<&str>) -> ComparatorOf<P> + Send + Sync>;

/**
A registry mapping entity type names to comparator factories.

# Concurrency

The registry is thread-safe. Lookups take a shared lock so they can proceed in parallel. The lock is
not held while a factory runs.
*/
pub struct ComparatorRegistry<P: Properties> {
    /// The registered factories keyed by entity type.
    factories: RwLock<HashMap<String, ComparatorFactory<P>>>,
}

/// Private methods
impl<P: Properties> ComparatorRegistry<P> {
    /// Get the registered entity types in sorted order.
    fn sorted_entity_types(&self) -> Vec<String> {
        let mut entity_types: Vec<String> = self.factories.read().keys().cloned().collect();
        entity_types.sort();

        entity_types
    }
}

/// Public methods
impl<P: Properties + 'static> ComparatorRegistry<P> {
    /**
    Create an empty [`ComparatorRegistry`].

    No factories are registered, not even the built-in ones. Use
    [`ComparatorRegistry::with_defaults`] to start with the built-in entity types.
    */
    pub fn new() -> Self {
        ComparatorRegistry {
            factories: RwLock::new(HashMap::new()),
        }
    }

    /// Create a [`ComparatorRegistry`] with the factories for all built-in entity types.
    pub fn with_defaults() -> Self {
        let mut factories: HashMap<String, ComparatorFactory<P>> = HashMap::new();
        factories.insert(
            UPSTREAM_INSTANCE_ENTITY_TYPE.to_string(),
            Arc::new(|properties: &P, sort_key: Option<&str>| {
                upstream_instance(properties).comparator(sort_key)
            }),
        );

        ComparatorRegistry {
            factories: RwLock::new(factories),
        }
    }

    /**
    Register a comparator factory for an entity type.

    # Errors

    Returns [`SortError::DuplicateEntityType`] if a factory is already registered for the entity
    type. The existing registration is left untouched.
    */
    pub fn register<F>(&self, entity_type: &str, factory: F) -> SortResult<()>
    where
        F: Fn(&P, Option<&str>) -> ComparatorOf<P> + Send + Sync + 'static,
    {
        let mut factories = self.factories.write();
        if factories.contains_key(entity_type) {
            return Err(SortError::DuplicateEntityType(entity_type.to_string()));
        }

        log::debug!("Registering a comparator factory for entity type {}", entity_type);
        factories.insert(entity_type.to_string(), Arc::new(factory));

        Ok(())
    }

    /**
    Get a comparator for an entity type.

    # Errors

    Returns [`SortError::UnknownEntityType`] if no factory is registered for the entity type.
    */
    pub fn comparator(
        &self,
        entity_type: &str,
        properties: &P,
        sort_key: Option<&str>,
    ) -> SortResult<ComparatorOf<P>> {
        let factory = self
            .factories
            .read()
            .get(entity_type)
            .map(Arc::clone)
            .ok_or_else(|| SortError::UnknownEntityType(entity_type.to_string()))?;

        log::trace!(
            "Building a comparator for entity type {} with sort key {:?}",
            entity_type,
            sort_key
        );

        Ok(factory(properties, sort_key))
    }

    /// Get the registered entity types in sorted order.
    pub fn entity_types(&self) -> Vec<String> {
        self.sorted_entity_types()
    }
}

impl<P: Properties> fmt::Debug for ComparatorRegistry<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComparatorRegistry")
            .field("entity_types", &self.sorted_entity_types())
            .finish()
    }
}
