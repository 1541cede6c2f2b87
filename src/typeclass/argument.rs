//! Extra arguments bound to a step at composition time.

use std::fmt;

use smallvec::SmallVec;

/// An ordered list of extra arguments. Most steps carry only a few.
pub type Arguments = SmallVec<[Argument; 4]>;

/// A dynamically typed extra argument.
///
/// Steps built with [`Step::applied`](super::Step::applied) and effectful
/// actions receive their leading arguments as a slice of `Argument`s, after
/// the value being bound.
///
/// # Examples
///
/// ```rust
/// use seqmonad::typeclass::Argument;
///
/// let count = Argument::from(11);
/// assert_eq!(count.as_integer(), Some(11));
/// assert_eq!(count.as_text(), None);
/// assert_eq!(Argument::from("label").to_string(), "label");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Argument {
    /// A boolean flag.
    Boolean(bool),
    /// A signed integer.
    Integer(i64),
    /// A floating point number.
    Float(f64),
    /// A piece of text.
    Text(String),
}

impl Argument {
    /// Returns the integer payload, if any.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the numeric payload as a float. Integers are widened.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            Self::Integer(value) => Some(*value as f64),
            _ => None,
        }
    }

    /// Returns the text payload, if any.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Returns whether the payload is an integer or a float.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
    }

    /// Returns the boolean payload, if any.
    #[must_use]
    pub const fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(value) => fmt::Display::fmt(value, formatter),
            Self::Integer(value) => fmt::Display::fmt(value, formatter),
            Self::Float(value) => fmt::Display::fmt(value, formatter),
            Self::Text(value) => fmt::Display::fmt(value, formatter),
        }
    }
}

impl From<bool> for Argument {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i32> for Argument {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for Argument {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Argument {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Argument {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Argument {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
