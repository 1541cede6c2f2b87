//! Control structures for lazy, replayable evaluation.
//!
//! This module provides the evaluation substrate every monad in this crate
//! is built on:
//!
//! - [`LazySequence`]: a pull-based sequence that can be iterated many times,
//!   even when it is defined over a one-shot iterator
//!
//! # Examples
//!
//! ```rust
//! use seqmonad::control::LazySequence;
//!
//! let squares = LazySequence::from_source((1..).map(|n: u64| n * n));
//! let replay = squares.clone();
//!
//! assert_eq!(squares.take(3).collect::<Vec<_>>(), vec![1, 4, 9]);
//! assert_eq!(replay.take(4).collect::<Vec<_>>(), vec![1, 4, 9, 16]);
//! ```

mod lazy_sequence;
mod replay;

pub use lazy_sequence::LazySequence;
