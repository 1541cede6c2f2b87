//! Haskell-style do-notation for monadic values.
//!
//! This module provides the [`do_!`] macro, which chains a sequence of steps
//! onto an initial monad. Each step becomes one bind, so the element type may
//! change from step to step (unlike [`Monad::do_`](crate::typeclass::Monad::do_),
//! whose steps all map `T` to `T`).
//!
//! # Syntax
//!
//! ```text
//! do_! {
//!     initial =>
//!     function,               // and_then(function)
//!     (function, arg, ...),   // and_then(move |value| function(value, arg, ...))
//!     >> monad,               // followed_by(monad)
//!     >>= step,               // bind(step), for an explicit `Step`
//! }
//! ```
//!
//! Argument expressions in a `(function, arg, ...)` step are evaluated each
//! time the step runs, so they should be cheap (usually literals).
//!
//! Nothing is evaluated by the macro itself: the result is an unevaluated
//! monad, just like a chain of `and_then` calls.
//!
//! # Examples
//!
//! ```rust
//! use seqmonad::do_;
//! use seqmonad::typeclass::{Maybe, Monad};
//!
//! fn mult2(x: i64) -> Monad<i64> { Maybe::just(x * 2) }
//! fn sum10(x: i64) -> Monad<i64> { Maybe::just(x + 10) }
//! fn multn(x: i64, n: i64) -> Monad<i64> { Maybe::just(x * n) }
//!
//! let result = do_! {
//!     Maybe::just(1) =>
//!     mult2,
//!     sum10,
//!     (multn, 11),
//! };
//! assert_eq!(result.to_vec(), vec![132]);
//! ```
//!
//! ## Changing the element type
//!
//! ```rust
//! use seqmonad::do_;
//! use seqmonad::typeclass::{ListM, Maybe};
//!
//! let labels = do_! {
//!     ListM::from_vec(vec![1, 2]) =>
//!     |x: i32| Maybe::just(x * 10),
//!     |x: i32| Maybe::just(format!("#{x}")),
//! };
//! assert_eq!(labels.to_vec(), vec!["#10".to_string(), "#20".to_string()]);
//! ```
//!
//! ## Constant steps
//!
//! ```rust
//! use seqmonad::do_;
//! use seqmonad::typeclass::ListM;
//!
//! let repeated = do_! {
//!     ListM::new(0..2) =>
//!     >> ListM::from_vec(vec!['a', 'b']),
//! };
//! assert_eq!(repeated.to_vec(), vec!['a', 'b', 'a', 'b']);
//! ```
#[macro_export]
macro_rules! do_ {
    // ==========================================================================
    // Terminal case: no steps left
    // ==========================================================================

    (@chain ($monad:expr)) => {
        $monad
    };

    // Separator left over after a parenthesised step
    (@chain ($monad:expr) , $($rest:tt)*) => {
        $crate::do_!(@chain ($monad) $($rest)*)
    };

    // ==========================================================================
    // Steps
    // ==========================================================================

    // Constant step: >> monad
    (@chain ($monad:expr) >> $next:expr $(, $($rest:tt)*)?) => {
        $crate::do_!(@chain ($monad.followed_by($next)) $($($rest)*)?)
    };

    // Explicit step value: >>= step
    (@chain ($monad:expr) >>= $step:expr $(, $($rest:tt)*)?) => {
        $crate::do_!(@chain ($monad.bind($step)) $($($rest)*)?)
    };

    // Partial application: (function, arguments...)
    (@chain ($monad:expr) ($function:expr, $($argument:expr),+ $(,)?) $($rest:tt)*) => {
        $crate::do_!(@chain ($monad.and_then({
            let function = $function;
            move |value| function(value, $($argument),+)
        })) $($rest)*)
    };

    // Plain transformation
    (@chain ($monad:expr) $function:expr $(, $($rest:tt)*)?) => {
        $crate::do_!(@chain ($monad.and_then($function)) $($($rest)*)?)
    };

    // ==========================================================================
    // Entry point: initial => steps
    // ==========================================================================

    ($initial:expr => $($steps:tt)*) => {
        $crate::do_!(@chain ($initial) $($steps)*)
    };

    ($initial:expr) => {
        $initial
    };
}
