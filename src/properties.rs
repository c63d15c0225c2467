/*!
This module provides the capability that turns a list of sortable properties into comparators.

Comparator factories for individual entity types do not build comparators themselves. They are
handed a [`Properties`] implementation, name the fields their entity can be sorted on and forward
the user's sort key. This keeps sort key handling in a single place.

[`PropertyComparators`] is the implementation used by the UI. For a list of fields it accepts the
keys `<field>:asc` and `<field>:desc` for every field. Any other key resolves to the first field in
ascending order, so a stale or hand-edited sort key in a URL still produces a sorted table.
*/

use std::cmp::Ordering;

use crate::comparator::Comparator;
use crate::errors::{SortError, SortResult};
use crate::sort_key::{Direction, SortDescriptor};
use crate::sortable::Sortable;

/**
Trait for values that produce a comparator from a sort key.

This is implemented for any `Fn(&str) -> O`, so closures can be used wherever a provider is
expected.
*/
pub trait SortProvider {
    /// The comparator produced.
    type Output;

    /// Produce a comparator for the provided sort key.
    fn provide(&self, sort_key: &str) -> Self::Output;
}

impl<F, O> SortProvider for F
where
    F: Fn(&str) -> O,
{
    type Output = O;

    fn provide(&self, sort_key: &str) -> O {
        self(sort_key)
    }
}

/// Trait for capabilities that build sort key providers from a list of field names.
pub trait Properties {
    /// The provider returned for a list of fields.
    type Provider: SortProvider;

    /// Get a provider that only produces comparators over the provided fields.
    fn properties(&self, field_names: &[&str]) -> Self::Provider;
}

/// The comparator produced by a [`Properties`] implementation.
pub type ComparatorOf<P> = <<P as Properties>::Provider as SortProvider>::Output;

/// The [`Properties`] capability used for table views.
#[derive(Clone, Copy, Debug, Default)]
pub struct PropertyComparators;

/// Public methods
impl PropertyComparators {
    /// Create a new instance of [`PropertyComparators`].
    pub fn new() -> Self {
        PropertyComparators
    }
}

impl Properties for PropertyComparators {
    type Provider = PropertyProvider;

    fn properties(&self, field_names: &[&str]) -> PropertyProvider {
        PropertyProvider::new(field_names)
    }
}

/// Resolves sort keys against a fixed set of sortable fields.
#[derive(Clone, Debug)]
pub struct PropertyProvider {
    /**
    The accepted sort keys.

    For every field, in order, this holds the ascending and then the descending descriptor. The
    first entry is used when a sort key is not accepted.
    */
    comparables: Vec<SortDescriptor>,
}

/// Public methods
impl PropertyProvider {
    /// Create a new instance of [`PropertyProvider`] for the provided fields.
    pub fn new(field_names: &[&str]) -> Self {
        let comparables = field_names
            .iter()
            .flat_map(|&field| {
                Direction::ALL
                    .into_iter()
                    .map(move |direction| SortDescriptor::new(field, direction))
            })
            .collect();

        PropertyProvider { comparables }
    }

    /// Get the sort keys that are accepted as-is.
    pub fn comparables(&self) -> &[SortDescriptor] {
        &self.comparables
    }

    /**
    Get the accepted descriptor matching a sort key.

    # Errors

    Returns [`SortError::KeyParsing`] if the key is malformed and
    [`SortError::UnsupportedSortKey`] if it is well formed but not one of the comparables.
    */
    pub fn accept(&self, sort_key: &str) -> SortResult<&SortDescriptor> {
        let descriptor = sort_key.parse::<SortDescriptor>()?;

        self.comparables
            .iter()
            .find(|comparable| **comparable == descriptor)
            .ok_or_else(|| SortError::UnsupportedSortKey(sort_key.to_string()))
    }

    /**
    Resolve a sort key to the descriptor that will be sorted by.

    Returns `None` only if the provider was created without any fields.
    */
    pub fn resolve(&self, sort_key: &str) -> Option<&SortDescriptor> {
        match self.accept(sort_key) {
            Ok(descriptor) => Some(descriptor),
            Err(error) => {
                let fallback = self.comparables.first();
                log::debug!(
                    "{} Falling back to {:?}.",
                    error,
                    fallback.map(|descriptor| descriptor.to_string())
                );

                fallback
            }
        }
    }
}

impl SortProvider for PropertyProvider {
    type Output = PropertyComparator;

    fn provide(&self, sort_key: &str) -> PropertyComparator {
        PropertyComparator {
            descriptor: self.resolve(sort_key).cloned(),
        }
    }
}

/**
Compares records by a single named property.

A comparator without a descriptor considers all records equal.
*/
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PropertyComparator {
    /// The field and direction to compare by.
    descriptor: Option<SortDescriptor>,
}

/// Public methods
impl PropertyComparator {
    /// Create a comparator that sorts by the provided descriptor.
    pub fn new(descriptor: SortDescriptor) -> Self {
        PropertyComparator {
            descriptor: Some(descriptor),
        }
    }

    /// Get the descriptor that records are compared by.
    pub fn descriptor(&self) -> Option<&SortDescriptor> {
        self.descriptor.as_ref()
    }
}

impl<T: Sortable + ?Sized> Comparator<T> for PropertyComparator {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        let descriptor = match self.descriptor.as_ref() {
            Some(descriptor) => descriptor,
            None => return Ordering::Equal,
        };

        let ordering = a
            .field(descriptor.field())
            .cmp(&b.field(descriptor.field()));

        match descriptor.direction() {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    }
}

#[cfg(test)]
mod properties_tests {
    use pretty_assertions::assert_eq;

    use crate::comparator::sort_by_comparator;
    use crate::sortable::FieldValue;

    use super::*;

    fn setup() {
        let _ = env_logger::builder()
            // Include all events in tests
            .filter_level(log::LevelFilter::max())
            // Ensure events are captured by `cargo test`
            .is_test(true)
            // Ignore errors initializing the logger if tests race to configure it
            .try_init();
    }

    #[derive(Debug, PartialEq)]
    struct Row {
        name: &'static str,
        port: Option<i64>,
    }

    impl Sortable for Row {
        fn field(&self, name: &str) -> Option<FieldValue<'_>> {
            match name {
                "Name" => Some(self.name.into()),
                "Port" => self.port.map(FieldValue::from),
                _ => None,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                name: "web",
                port: Some(8080),
            },
            Row {
                name: "api",
                port: None,
            },
            Row {
                name: "db",
                port: Some(5432),
            },
        ]
    }

    fn names(rows: &[Row]) -> Vec<&'static str> {
        rows.iter().map(|row| row.name).collect()
    }

    #[test]
    fn comparables_list_both_directions_for_each_field_in_order() {
        let provider = PropertyComparators::new().properties(&["Name", "Port"]);
        let keys: Vec<String> = provider
            .comparables()
            .iter()
            .map(|descriptor| descriptor.to_string())
            .collect();

        assert_eq!(keys, vec!["Name:asc", "Name:desc", "Port:asc", "Port:desc"]);
    }

    #[test]
    fn accepted_keys_are_used_as_is() {
        setup();

        let provider = PropertyComparators::new().properties(&["Name", "Port"]);

        assert_eq!(
            provider.provide("Port:desc").descriptor(),
            Some(&SortDescriptor::new("Port", Direction::Desc))
        );
    }

    #[test]
    fn unaccepted_keys_fall_back_to_the_first_field_ascending() {
        setup();

        let provider = PropertyComparators::new().properties(&["Name", "Port"]);
        let expected = SortDescriptor::new("Name", Direction::Asc);

        for key in ["Datacenter:asc", "Port:sideways", "garbage", ""] {
            assert_eq!(provider.provide(key).descriptor(), Some(&expected));
        }
    }

    #[test]
    fn rejected_keys_report_why_they_were_not_accepted() {
        let provider = PropertyComparators::new().properties(&["Name", "Port"]);

        assert_eq!(
            provider.accept("Name:desc"),
            Ok(&SortDescriptor::new("Name", Direction::Desc))
        );
        assert!(matches!(
            provider.accept("Name:sideways"),
            Err(SortError::KeyParsing(_))
        ));
        assert_eq!(
            provider.accept("Datacenter:asc"),
            Err(SortError::UnsupportedSortKey("Datacenter:asc".to_string()))
        );
    }

    #[test]
    fn providers_without_fields_keep_the_input_order() {
        setup();

        let comparator = PropertyComparators::new().properties(&[]).provide("Name:asc");
        assert_eq!(comparator.descriptor(), None);

        let mut rows = rows();
        sort_by_comparator(&mut rows, &comparator);

        assert_eq!(names(&rows), vec!["web", "api", "db"]);
    }

    #[test]
    fn comparators_sort_in_the_requested_direction() {
        let provider = PropertyComparators::new().properties(&["Name", "Port"]);

        let mut rows = rows();
        sort_by_comparator(&mut rows, &provider.provide("Name:asc"));
        assert_eq!(names(&rows), vec!["api", "db", "web"]);

        sort_by_comparator(&mut rows, &provider.provide("Name:desc"));
        assert_eq!(names(&rows), vec!["web", "db", "api"]);
    }

    #[test]
    fn missing_values_sort_first_when_ascending() {
        let provider = PropertyComparators::new().properties(&["Port"]);

        let mut rows = rows();
        sort_by_comparator(&mut rows, &provider.provide("Port:asc"));
        assert_eq!(names(&rows), vec!["api", "db", "web"]);

        sort_by_comparator(&mut rows, &provider.provide("Port:desc"));
        assert_eq!(names(&rows), vec!["web", "db", "api"]);
    }

    #[test]
    fn closures_can_be_used_as_providers() {
        let provider = |key: &str| key.len();

        assert_eq!(provider.provide("Name:asc"), 8);
    }
}
