/*!
This module contains the interface that records implement so that they can be sorted by named
properties.
*/

use std::cmp::Ordering;

/**
A value read from a record for comparison.

Values of different kinds are ordered by kind first (booleans, then integers, then strings). A
well-formed field always yields the same kind so this only matters for loosely typed data.

Strings are ordered ignoring case so that `api` sorts before `Billing`. Strings that only differ by
case fall back to byte order, which keeps the ordering total and consistent with equality.
*/
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FieldValue<'a> {
    /// A boolean value. `false` sorts before `true`.
    Bool(bool),
    /// An integer value.
    Int(i64),
    /// A string value.
    Str(&'a str),
}

/// Private methods
impl FieldValue<'_> {
    /// The position of the value's kind in the ordering across kinds.
    fn kind_rank(&self) -> u8 {
        match self {
            FieldValue::Bool(_) => 0,
            FieldValue::Int(_) => 1,
            FieldValue::Str(_) => 2,
        }
    }
}

/// Compare strings ignoring case, using byte order to break ties.
fn compare_case_insensitive(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}

impl Ord for FieldValue<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a.cmp(b),
            (FieldValue::Int(a), FieldValue::Int(b)) => a.cmp(b),
            (FieldValue::Str(a), FieldValue::Str(b)) => compare_case_insensitive(a, b),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }
}

impl PartialOrd for FieldValue<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        FieldValue::Str(value)
    }
}

impl From<i64> for FieldValue<'_> {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<bool> for FieldValue<'_> {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

/// Trait for records that expose their properties by name.
pub trait Sortable {
    /**
    Get the value of the named field.

    Returns `None` if the record does not have the field or the field is not set. Missing values
    sort before all present values.
    */
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}
