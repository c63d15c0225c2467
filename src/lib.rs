/*!
Comparators for the sortable tables of a service mesh UI.

Tables are sorted by a sort key of the form `<FieldName>:<direction>` that travels in the page's
query string. Each kind of entity shown in a table has a comparator factory that lists the fields
the entity can be sorted by and hands the sort key to a [`Properties`] capability. The capability
turns the key into a [`Comparator`]. [`PropertyComparators`] is the capability used by the UI.
Factories are looked up by entity type through a [`ComparatorRegistry`].

```
use table_sort::{sort_by_comparator, upstream_instance, PropertyComparators, UpstreamInstance};

let properties = PropertyComparators::new();
let mut upstreams = vec![UpstreamInstance::new("web"), UpstreamInstance::new("api")];

sort_by_comparator(&mut upstreams, &upstream_instance(&properties).comparator(None));
assert_eq!(upstreams[0].destination_name, "api");
```
*/

#![warn(missing_debug_implementations, missing_docs)]

pub mod comparators;
pub use comparators::{
    upstream_instance, ComparatorFactory, ComparatorRegistry, UpstreamInstanceComparators,
};

mod comparator;
pub use comparator::{sort_by_comparator, Comparator};

pub mod config;

mod errors;
pub use errors::{SortError, SortResult};

pub mod properties;
pub use properties::{
    ComparatorOf, Properties, PropertyComparator, PropertyComparators, PropertyProvider,
    SortProvider,
};

mod sort_key;
pub use sort_key::{Direction, SortDescriptor};

mod sortable;
pub use sortable::{FieldValue, Sortable};

mod upstream;
pub use upstream::{DestinationType, UpstreamInstance};
