//! The optional-value monad.
//!
//! [`Maybe`] builds monads with zero (`Nothing`) or one (`Just`) value.
//! Absence is not an error: binding over `Nothing` simply produces nothing,
//! so a filtering step can reject a value without any special handling
//! downstream.
//!
//! # Examples
//!
//! ```rust
//! use seqmonad::typeclass::{ListM, Maybe};
//!
//! let positive = |n: i32| if n > 0 { Maybe::just(n) } else { Maybe::nothing() };
//!
//! let kept = ListM::from_vec(vec![3, -1, 5]).and_then(positive);
//! assert_eq!(kept.to_vec(), vec![3, 5]);
//! ```

use super::monad::{Monad, Variant};
use crate::control::LazySequence;

/// Constructors for the optional-value monad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Maybe;

impl Maybe {
    /// Creates a monad holding exactly one value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmonad::typeclass::Maybe;
    ///
    /// assert_eq!(Maybe::just(7).to_vec(), vec![7]);
    /// ```
    #[inline]
    pub fn just<T: 'static>(value: T) -> Monad<T> {
        Monad::pure(value)
    }

    /// Creates a monad holding no value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmonad::typeclass::Maybe;
    ///
    /// assert!(Maybe::nothing::<i32>().is_empty());
    /// ```
    #[inline]
    pub fn nothing<T: 'static>() -> Monad<T> {
        Monad::with_variant(Variant::Nothing, LazySequence::empty())
    }

    /// Converts an `Option` into `Just` or `Nothing`.
    #[inline]
    pub fn from_option<T: 'static>(option: Option<T>) -> Monad<T> {
        option.map_or_else(Self::nothing, Self::just)
    }
}
