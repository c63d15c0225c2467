/*!
This module contains the parsed form of sort keys.

A sort key is a string of the form `<FieldName>:<direction>` e.g. `DestinationName:asc`. Keys come
straight from the query string of a table view, so they are treated as untrusted input. Code that
merely forwards keys should do so without parsing them. Only code that needs to act on a key
should parse it into a [`SortDescriptor`].
*/

use std::fmt;
use std::str::FromStr;

use crate::config::SORT_KEY_SEPARATOR;
use crate::errors::{SortError, SortResult};

/// The direction to sort a field in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    /// Smallest values first.
    Asc,
    /// Largest values first.
    Desc,
}

/// Public methods
impl Direction {
    /// All directions in the order they are offered for a field.
    pub const ALL: [Direction; 2] = [Direction::Asc, Direction::Desc];

    /// Get the string used for this direction in sort keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Direction {
    type Err = SortError;

    fn from_str(value: &str) -> SortResult<Direction> {
        match value {
            "asc" => Ok(Direction::Asc),
            "desc" => Ok(Direction::Desc),
            _ => Err(SortError::KeyParsing(format!(
                "Expected a sort direction of \"asc\" or \"desc\" but got \"{}\".",
                value
            ))),
        }
    }
}

/// A sort key split into the field to sort on and the direction to sort it in.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct SortDescriptor {
    /// The name of the field to sort on.
    field: String,

    /// The direction to sort the field in.
    direction: Direction,
}

/// Public methods
impl SortDescriptor {
    /// Construct a new [`SortDescriptor`].
    pub fn new<F: Into<String>>(field: F, direction: Direction) -> Self {
        SortDescriptor {
            field: field.into(),
            direction,
        }
    }

    /// Get the name of the field to sort on.
    pub fn field(&self) -> &str {
        self.field.as_str()
    }

    /// Get the direction to sort in.
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl fmt::Display for SortDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.field, SORT_KEY_SEPARATOR, self.direction)
    }
}

impl FromStr for SortDescriptor {
    type Err = SortError;

    /**
    Parse a sort key.

    Only the last separator splits the key so that the direction is always the final segment.
    */
    fn from_str(key: &str) -> SortResult<SortDescriptor> {
        let (field, direction) = key.rsplit_once(SORT_KEY_SEPARATOR).ok_or_else(|| {
            SortError::KeyParsing(format!(
                "The sort key \"{}\" is missing the \"{}\" separator.",
                key, SORT_KEY_SEPARATOR
            ))
        })?;

        if field.is_empty() {
            return Err(SortError::KeyParsing(format!(
                "The sort key \"{}\" does not name a field.",
                key
            )));
        }

        Ok(SortDescriptor::new(field, direction.parse()?))
    }
}
