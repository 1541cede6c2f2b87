//! The monad abstraction and its variants.
//!
//! This module provides a single monadic type, [`Monad<T>`], together with
//! the constructors and combinators that share its composition protocol:
//!
//! - [`Maybe`]: the optional-value monad (`Nothing` / `Just`)
//! - [`ListM`]: the list (nondeterministic) monad
//! - [`Step`]: the explicit right-hand side of a bind
//! - [`sequence`] and [`map_m`]: flattening combinators over collections
//!
//! Effectful monads live in [`crate::effect`].
//!
//! # Examples
//!
//! ```rust
//! use seqmonad::typeclass::{ListM, Maybe, map_m};
//!
//! let mult2 = |x: i32| Maybe::just(x * 2);
//! let sum10 = |x: i32| Maybe::just(x + 10);
//!
//! let chained = ListM::from_vec(vec![1, 2, 3]).and_then(mult2).and_then(sum10);
//! assert_eq!(chained.to_vec(), vec![12, 14, 16]);
//!
//! let doubled = map_m(mult2, chained);
//! assert_eq!(doubled.to_string(), "Monad(24,28,32)");
//! ```

mod argument;
mod combinators;
mod error;
mod list;
mod maybe;
mod monad;
mod step;

pub use argument::{Argument, Arguments};
pub use combinators::{map_m, sequence};
pub use error::MonadError;
pub use list::ListM;
pub use maybe::Maybe;
pub use monad::{Monad, Variant};
pub use step::{AppliedTransform, Arity, Step, Transform};
