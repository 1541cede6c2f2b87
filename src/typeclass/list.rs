//! The list (nondeterministic) monad.
//!
//! A list monad holds any number of values, in order. Binding runs the
//! transformation once per value and concatenates the results, so the
//! insertion order of the source decides the enumeration order of every
//! composed result.

use super::monad::{Monad, Variant};
use crate::control::LazySequence;

/// Constructors for the list monad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListM;

impl ListM {
    /// Wraps any iterable, lazily.
    ///
    /// The iterable is not consumed until the monad is iterated, so it may be
    /// an unbounded generator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmonad::typeclass::ListM;
    ///
    /// let evens = ListM::new((0..).step_by(2));
    /// assert_eq!(evens.take(3).to_vec(), vec![0, 2, 4]);
    /// ```
    pub fn new<I>(items: I) -> Monad<I::Item>
    where
        I: IntoIterator,
        I::Item: 'static,
        I::IntoIter: 'static,
    {
        Monad::with_variant(Variant::List, LazySequence::from_source(items))
    }

    /// Wraps values that are already materialised.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmonad::typeclass::ListM;
    ///
    /// assert_eq!(ListM::from_vec(vec![1, 2]).to_string(), "ListM(1,2)");
    /// ```
    #[inline]
    pub fn from_vec<T: 'static>(values: Vec<T>) -> Monad<T> {
        Monad::from(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    #[rstest]
    fn new_is_lazy_and_replayable() {
        let pulls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&pulls);
        let list = ListM::new((1..=3).inspect(move |_| counter.set(counter.get() + 1)));

        assert_eq!(pulls.get(), 0);
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
        assert_eq!(pulls.get(), 3);
    }

    #[rstest]
    fn bind_enumerates_left_operand_outermost() {
        let list = ListM::from_vec(vec!['a', 'b'])
            .and_then(|letter| ListM::from_vec(vec![(letter, 1), (letter, 2)]));
        assert_eq!(list.to_vec(), vec![('a', 1), ('a', 2), ('b', 1), ('b', 2)]);
    }

    #[rstest]
    fn empty_list_has_list_variant() {
        let list = ListM::from_vec(Vec::<i32>::new());
        assert_eq!(list.variant(), Variant::List);
        assert_eq!(list.to_string(), "ListM()");
    }
}
