/*!
Comparators for the upstreams listed on a service instance.

Upstreams can only be sorted by the name of the service they point at.
*/

use crate::config::{DEFAULT_UPSTREAM_INSTANCE_SORT_KEY, UPSTREAM_INSTANCE_SORT_FIELDS};
use crate::properties::{ComparatorOf, Properties, SortProvider};

/// Produces upstream instance comparators from sort keys.
#[derive(Debug)]
pub struct UpstreamInstanceComparators<'a, P> {
    /// The capability that comparators are built with.
    properties: &'a P,
}

/// Public methods
impl<'a, P: Properties> UpstreamInstanceComparators<'a, P> {
    /// Create a new instance of [`UpstreamInstanceComparators`].
    pub fn new(properties: &'a P) -> Self {
        UpstreamInstanceComparators { properties }
    }

    /**
    Get a comparator for the provided sort key.

    Uses [`DEFAULT_UPSTREAM_INSTANCE_SORT_KEY`] if no key is provided. Keys are forwarded as-is and
    whatever the capability produces is returned unmodified. Nothing is cached, so every call goes
    back to the capability.
    */
    pub fn comparator(&self, sort_key: Option<&str>) -> ComparatorOf<P> {
        let sort_key = sort_key.unwrap_or(DEFAULT_UPSTREAM_INSTANCE_SORT_KEY);

        self.properties
            .properties(&UPSTREAM_INSTANCE_SORT_FIELDS)
            .provide(sort_key)
    }
}

/// Create an [`UpstreamInstanceComparators`] that builds comparators with `properties`.
pub fn upstream_instance<P: Properties>(properties: &P) -> UpstreamInstanceComparators<'_, P> {
    UpstreamInstanceComparators::new(properties)
}
