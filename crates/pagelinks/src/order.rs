//! Ordering expressions of the form `field,direction`.

use std::fmt;
use std::str::FromStr;

use pagelinks_core::Error;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Sort direction of an ordering expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending (`asc`)
    Asc,
    /// Descending (`desc`)
    Desc,
}

impl Direction {
    /// Returns the direction exactly as written in an expression.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(Error::InvalidDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated ordering: an allowed field and a direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Order {
    /// Field to order by, as given.
    pub field: String,
    /// Sort direction.
    pub direction: Direction,
}

impl Order {
    /// Split into `(field, direction)`.
    #[must_use]
    pub fn into_parts(self) -> (String, Direction) {
        (self.field, self.direction)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.field, self.direction)
    }
}

/// Parse a `field,direction` expression, accepting only fields in `allowed`.
///
/// Matching is exact and case-sensitive; whitespace is not trimmed.
///
/// # Errors
///
/// - [`Error::MalformedInput`] unless the value splits into exactly two parts on `,`
/// - [`Error::InvalidField`] if the field is not in `allowed`
/// - [`Error::InvalidDirection`] unless the direction is `asc` or `desc`
pub fn parse_order<S>(value: &str, allowed: &[S]) -> Result<Order>
where
    S: AsRef<str>,
{
    let mut parts = value.split(',');
    let (Some(field), Some(direction), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(Error::MalformedInput(value.to_string()));
    };

    if !allowed.iter().any(|candidate| candidate.as_ref() == field) {
        return Err(Error::InvalidField(field.to_string()));
    }

    let direction = direction.parse()?;

    Ok(Order {
        field: field.to_string(),
        direction,
    })
}
