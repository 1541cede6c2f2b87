//! Replayable lazy sequences.
//!
//! This module provides [`LazySequence<T>`], a pull-based sequence that can be
//! iterated any number of times even when it is defined over a one-shot
//! iterator. Every produced value is appended to a shared replay buffer, and
//! each fork of the sequence keeps its own cursor into that buffer.
//!
//! # Examples
//!
//! ```rust
//! use seqmonad::control::LazySequence;
//!
//! let sequence = LazySequence::from_source((1..=3).map(|n| n * 10));
//! let (first, second) = sequence.fork();
//!
//! assert_eq!(first.collect::<Vec<_>>(), vec![10, 20, 30]);
//! assert_eq!(second.collect::<Vec<_>>(), vec![10, 20, 30]);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use static_assertions::assert_impl_all;

use super::replay::ReplayBuffer;

/// A lazily evaluated, replayable sequence of values.
///
/// A `LazySequence<T>` never evaluates its source eagerly: values are pulled
/// one at a time, only when a consumer asks for the next value. Values that
/// have already been pulled by any fork are kept in a shared buffer, so a
/// later fork replays them without calling the source again.
///
/// # Forking
///
/// [`fork`](Self::fork) (and [`Clone`]) produce independent views over the
/// same values. Advancing one view never affects another, and the source is
/// invoked at most once per value regardless of how many views exist.
///
/// # Thread Safety
///
/// This type is NOT thread-safe. The replay buffer lives behind an `Rc`.
///
/// # Examples
///
/// ```rust
/// use seqmonad::control::LazySequence;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let pulls = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&pulls);
/// let sequence = LazySequence::from_source((0..3).inspect(move |_| counter.set(counter.get() + 1)));
///
/// assert_eq!(pulls.get(), 0); // nothing pulled yet
///
/// let replay = sequence.clone();
/// assert_eq!(sequence.collect::<Vec<_>>(), vec![0, 1, 2]);
/// assert_eq!(replay.collect::<Vec<_>>(), vec![0, 1, 2]);
/// assert_eq!(pulls.get(), 3); // each value produced exactly once
/// ```
pub struct LazySequence<T> {
    buffer: Rc<RefCell<ReplayBuffer<T>>>,
    cursor: usize,
}

assert_impl_all!(LazySequence<i32>: Iterator, Clone, fmt::Debug);

impl<T: 'static> LazySequence<T> {
    /// Wraps a finite or infinite producer of values.
    ///
    /// The producer is not advanced until the sequence is iterated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmonad::control::LazySequence;
    ///
    /// let naturals = LazySequence::from_source(0_u64..);
    /// assert_eq!(naturals.take(3).collect::<Vec<_>>(), vec![0, 1, 2]);
    /// ```
    pub fn from_source<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Self {
            buffer: Rc::new(RefCell::new(ReplayBuffer::pending(Box::new(
                source.into_iter(),
            )))),
            cursor: 0,
        }
    }

    /// Creates a sequence over values that are already known.
    ///
    /// The buffer is filled up front and no source is retained.
    pub fn from_values(values: Vec<T>) -> Self {
        Self {
            buffer: Rc::new(RefCell::new(ReplayBuffer::filled(values))),
            cursor: 0,
        }
    }

    /// Creates a sequence that produces no values.
    #[inline]
    pub fn empty() -> Self {
        Self::from_values(Vec::new())
    }

    /// Creates a sequence that produces exactly one value.
    #[inline]
    pub fn once(value: T) -> Self {
        Self::from_values(vec![value])
    }
}

impl<T: Clone + 'static> LazySequence<T> {
    /// Splits the sequence into two independent views at the current position.
    ///
    /// Both views replay the same values in the same order. Neither view can
    /// observe how far the other has advanced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmonad::control::LazySequence;
    ///
    /// let mut sequence = LazySequence::from_source(vec!['a', 'b', 'c']);
    /// assert_eq!(sequence.next(), Some('a'));
    ///
    /// let (mut left, right) = sequence.fork();
    /// assert_eq!(left.next(), Some('b'));
    /// assert_eq!(right.collect::<String>(), "bc");
    /// assert_eq!(left.collect::<String>(), "c");
    /// ```
    #[must_use]
    pub fn fork(self) -> (Self, Self) {
        let other = Self {
            buffer: Rc::clone(&self.buffer),
            cursor: self.cursor,
        };
        (self, other)
    }

    /// Lazily applies `function` to every value.
    ///
    /// Each output value is computed only when it is pulled. The resulting
    /// sequence owns a fork of `self`, so `self`'s other views are unaffected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmonad::control::LazySequence;
    ///
    /// let doubled = LazySequence::from_source(1..=3).map(|n| n * 2);
    /// assert_eq!(doubled.collect::<Vec<_>>(), vec![2, 4, 6]);
    /// ```
    pub fn map<U, F>(self, function: F) -> LazySequence<U>
    where
        U: 'static,
        F: FnMut(T) -> U + 'static,
    {
        LazySequence::from_source(Iterator::map(self, function))
    }

    /// Maps every value to a sub-sequence and concatenates the results.
    ///
    /// Sub-sequences are produced one at a time, in input order, and each is
    /// fully drained before the next input value is pulled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmonad::control::LazySequence;
    ///
    /// let expanded = LazySequence::from_source(vec![1, 2])
    ///     .flatten_map(|n| LazySequence::from_values(vec![n, n * 10]));
    /// assert_eq!(expanded.collect::<Vec<_>>(), vec![1, 10, 2, 20]);
    /// ```
    pub fn flatten_map<U, F>(self, function: F) -> LazySequence<U>
    where
        U: Clone + 'static,
        F: FnMut(T) -> LazySequence<U> + 'static,
    {
        LazySequence::from_source(Iterator::flat_map(self, function))
    }

    /// Limits the sequence to at most `count` values.
    ///
    /// This is the way to bound an infinite sequence before draining it.
    pub fn take(self, count: usize) -> Self {
        Self::from_source(Iterator::take(self, count))
    }

    /// Returns the number of values produced so far by any view.
    pub fn buffered_len(&self) -> usize {
        self.buffer.borrow().len()
    }

    /// Returns whether the underlying source has been fully drained.
    pub fn is_exhausted(&self) -> bool {
        self.buffer.borrow().is_exhausted()
    }
}

impl<T: Clone + 'static> Iterator for LazySequence<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let value = ReplayBuffer::get(&self.buffer, self.cursor)?;
        self.cursor += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let buffer = self.buffer.borrow();
        let remaining = buffer.len().saturating_sub(self.cursor);
        if buffer.is_exhausted() {
            (remaining, Some(remaining))
        } else {
            (remaining, None)
        }
    }
}

impl<T> Clone for LazySequence<T> {
    fn clone(&self) -> Self {
        Self {
            buffer: Rc::clone(&self.buffer),
            cursor: self.cursor,
        }
    }
}

impl<T> fmt::Debug for LazySequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let buffer = self.buffer.borrow();
        formatter
            .debug_struct("LazySequence")
            .field("cursor", &self.cursor)
            .field("buffered", &buffer.len())
            .field("exhausted", &buffer.is_exhausted())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    fn counted(limit: i32, pulls: &Rc<Cell<usize>>) -> LazySequence<i32> {
        let counter = Rc::clone(pulls);
        LazySequence::from_source((0..limit).inspect(move |_| counter.set(counter.get() + 1)))
    }

    #[rstest]
    fn from_source_does_not_pull() {
        let pulls = Rc::new(Cell::new(0));
        let _sequence = counted(5, &pulls);
        assert_eq!(pulls.get(), 0);
    }

    #[rstest]
    fn clone_replays_without_pulling_again() {
        let pulls = Rc::new(Cell::new(0));
        let sequence = counted(4, &pulls);
        let replay = sequence.clone();

        assert_eq!(sequence.collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(replay.collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(pulls.get(), 4);
    }

    #[rstest]
    fn forks_advance_independently() {
        let (mut left, mut right) = LazySequence::from_source(1..=3).fork();
        assert_eq!(left.next(), Some(1));
        assert_eq!(left.next(), Some(2));
        assert_eq!(right.next(), Some(1));
        assert_eq!(left.next(), Some(3));
        assert_eq!(left.next(), None);
        assert_eq!(right.collect::<Vec<_>>(), vec![2, 3]);
    }

    #[rstest]
    fn map_is_pull_based() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut mapped = LazySequence::from_source(0..).map(move |n: u32| {
            counter.set(counter.get() + 1);
            n + 1
        });

        assert_eq!(calls.get(), 0);
        assert_eq!(mapped.next(), Some(1));
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn flatten_map_preserves_order() {
        let sequence = LazySequence::from_values(vec![3, 1])
            .flatten_map(|n| LazySequence::from_source(0..n));
        assert_eq!(sequence.collect::<Vec<_>>(), vec![0, 1, 2, 0]);
    }

    #[rstest]
    fn exhaustion_is_reported() {
        let sequence = LazySequence::from_source(vec![1, 2]);
        assert!(!sequence.is_exhausted());
        let replay = sequence.clone();
        assert_eq!(sequence.count(), 2);
        assert!(replay.is_exhausted());
        assert_eq!(replay.buffered_len(), 2);
    }

    #[rstest]
    fn size_hint_counts_buffered_values() {
        let mut sequence = LazySequence::from_values(vec![1, 2, 3]);
        sequence.next();
        assert_eq!(sequence.size_hint(), (2, Some(2)));

        let infinite = LazySequence::from_source(0..);
        assert_eq!(infinite.size_hint(), (0, None));
    }

    #[rstest]
    fn take_bounds_an_infinite_source() {
        let bounded = LazySequence::from_source(0..).take(3);
        assert_eq!(bounded.collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[rstest]
    fn debug_shows_buffer_state() {
        let sequence = LazySequence::from_values(vec![1]);
        assert_eq!(
            format!("{sequence:?}"),
            "LazySequence { cursor: 0, buffered: 1, exhausted: true }"
        );
    }
}
