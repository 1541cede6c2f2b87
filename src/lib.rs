//! # seqmonad
//!
//! A small library for composing computations through a monadic interface,
//! backed by lazy, replayable sequences.
//!
//! ## Overview
//!
//! Every monad in this crate wraps a [`LazySequence`](control::LazySequence):
//! a pull-based sequence that can be iterated any number of times even when
//! it is defined over a one-shot iterator. On top of it, one composition
//! protocol is shared by every variant:
//!
//! - **Control**: `LazySequence`, forking and the replay buffer
//! - **Type Classes**: `Monad`, `Maybe` (`Nothing`/`Just`), `ListM`, `Step`,
//!   and the `sequence`/`map_m` combinators
//! - **Effect System**: `IO` monads that perform an `Action` once and replay
//!   its result, including the `PrintAction` (`PrintM`)
//! - **Composition**: the `do_!` macro for do-notation
//!
//! ## Feature Flags
//!
//! - `control`: Lazy replayable sequences
//! - `typeclass`: The monad core, variants and combinators
//! - `effect`: Effectful monads
//! - `compose`: The `do_!` macro
//! - `serde`: Serialization of configuration and arguments
//!
//! ## Example
//!
//! ```rust
//! use seqmonad::prelude::*;
//!
//! let result = Maybe::just(1)
//!     .and_then(|x| Maybe::just(x * 2))
//!     .and_then(|x| Maybe::just(x + 10));
//! assert_eq!(result.to_vec(), vec![12]);
//!
//! let list = ListM::from_vec(vec![1, 2, 3]).map(|x| x * 10);
//! assert_eq!(list.to_string(), "Monad(10,20,30)");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use seqmonad::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "compose")]
pub mod compose;
