//! Composition syntax for monadic values.
//!
//! This module provides the [`do_!`] macro, Haskell-style do-notation over
//! [`Monad`](crate::typeclass::Monad): a flat list of steps instead of a
//! nested chain of `and_then` calls.
//!
//! # Examples
//!
//! ```rust
//! use seqmonad::do_;
//! use seqmonad::typeclass::{ListM, Maybe};
//!
//! let result = do_! {
//!     ListM::from_vec(vec![1, 2, 3]) =>
//!     |x: i32| Maybe::just(x * 2),
//!     |x: i32| if x == 4 { Maybe::nothing() } else { Maybe::just(x) },
//! };
//! assert_eq!(result.to_vec(), vec![2, 6]);
//! ```

mod do_macro;

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::do_;
