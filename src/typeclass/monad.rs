//! Monad - sequencing computations that produce zero, one or many values.
//!
//! This module provides [`Monad<T>`], a single composition protocol shared
//! by the optional-value monad ([`Maybe`](super::Maybe)), the list monad
//! ([`ListM`](super::ListM)) and effectful monads
//! ([`IO`](crate::effect::IO)). Every instance wraps a
//! [`LazySequence<T>`], so composition never evaluates anything: values are
//! only produced when the result is iterated.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Monad::pure(a).and_then(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.and_then(Monad::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.and_then(f).and_then(g) == m.and_then(|x| f(x).and_then(g))
//! ```
//!
//! Equality here compares the produced values, in order.
//!
//! # Examples
//!
//! ```rust
//! use seqmonad::typeclass::{ListM, Maybe};
//!
//! let result = Maybe::just(1)
//!     .and_then(|x| Maybe::just(x * 2))
//!     .and_then(|x| Maybe::just(x + 10));
//! assert_eq!(result.to_vec(), vec![12]);
//!
//! // The list monad enumerates every combination, left operand outermost.
//! let pairs = ListM::from_vec(vec![1, 2])
//!     .and_then(|x| ListM::from_vec(vec![x * 10, x * 100]));
//! assert_eq!(pairs.to_vec(), vec![10, 100, 20, 200]);
//! ```

use std::fmt;

use static_assertions::{assert_impl_all, assert_not_impl_any};

use super::step::Step;
use crate::control::LazySequence;

/// The constructor a monadic value was built with.
///
/// The variant only affects how a value is rendered; composition always
/// produces [`Variant::Monad`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// The result of a composition, or a value built from an arbitrary source.
    Monad,
    /// The absent optional value.
    Nothing,
    /// The present optional value.
    Just,
    /// A nondeterministic list of values.
    List,
    /// The captured result of an effectful action, named after the action.
    Effect(&'static str),
}

impl Variant {
    /// Returns the name used in the textual representation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monad => "Monad",
            Self::Nothing => "Nothing",
            Self::Just => "Just",
            Self::List => "ListM",
            Self::Effect(name) => name,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// A lazily evaluated, replayable monadic value.
///
/// `Monad<T>` is immutable from the caller's point of view: every operation
/// borrows `self` and returns a new value. Iterating a monad forks its
/// underlying sequence, so the same value can be iterated again and always
/// yields the same values in the same order.
///
/// # Type Parameters
///
/// - `T`: The type of the produced values. Reading requires `T: Clone`,
///   because every fork receives its own copy of each buffered value.
///
/// # Examples
///
/// ```rust
/// use seqmonad::typeclass::ListM;
///
/// let monad = ListM::from_vec(vec![1, 2, 3])
///     .and_then(|x| ListM::from_vec(vec![x * 2]))
///     .map(|x| x + 10);
///
/// // Replayable: both iterations see the same values.
/// assert_eq!(monad.to_vec(), vec![12, 14, 16]);
/// assert_eq!(monad.to_vec(), vec![12, 14, 16]);
/// assert_eq!(monad.to_string(), "Monad(12,14,16)");
/// ```
pub struct Monad<T> {
    variant: Variant,
    sequence: LazySequence<T>,
}

assert_impl_all!(Monad<i32>: Clone, IntoIterator, PartialEq, fmt::Display, fmt::Debug);
assert_not_impl_any!(Monad<i32>: Send, Sync);

impl<T> Monad<T> {
    /// Returns the constructor this value was built with.
    #[inline]
    pub const fn variant(&self) -> Variant {
        self.variant
    }
}

impl<T: 'static> Monad<T> {
    pub(crate) const fn with_variant(variant: Variant, sequence: LazySequence<T>) -> Self {
        Self { variant, sequence }
    }

    /// Lifts a single value into a monad (`unit`/`return`).
    ///
    /// The result is rendered as `Just`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmonad::typeclass::Monad;
    ///
    /// assert_eq!(Monad::pure(5).to_string(), "Just(5)");
    /// ```
    #[inline]
    pub fn pure(value: T) -> Self {
        Self::with_variant(Variant::Just, LazySequence::once(value))
    }

    /// Wraps any finite or infinite iterable without evaluating it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmonad::typeclass::Monad;
    ///
    /// let naturals = Monad::from_source(0_u32..);
    /// assert_eq!(naturals.take(3).to_vec(), vec![0, 1, 2]);
    /// ```
    pub fn from_source<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Self::with_variant(Variant::Monad, LazySequence::from_source(source))
    }
}

impl<T: Clone + 'static> Monad<T> {
    fn composite(sequence: LazySequence<T>) -> Self {
        Self::with_variant(Variant::Monad, sequence)
    }

    /// Returns a fresh view over the produced values.
    ///
    /// Each call starts from the first value, regardless of how far earlier
    /// views were advanced.
    #[inline]
    pub fn iter(&self) -> LazySequence<T> {
        self.sequence.clone()
    }

    /// Binds every value through `step`, concatenating the results in order.
    ///
    /// - [`Step::Transform`]: each value is passed to the function.
    /// - [`Step::Applied`]: each value is passed to the function, followed by
    ///   the step's extra arguments.
    /// - [`Step::Constant`]: same as [`followed_by`](Self::followed_by).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmonad::typeclass::{ListM, Maybe, Step};
    ///
    /// let doubled = ListM::from_vec(vec![1, 2]).bind(Step::transform(|x: i32| Maybe::just(x * 2)));
    /// assert_eq!(doubled.to_vec(), vec![2, 4]);
    ///
    /// let replaced = ListM::from_vec(vec![1, 2]).bind(Step::constant(ListM::from_vec(vec!['a', 'b'])));
    /// assert_eq!(replaced.to_vec(), vec!['a', 'b', 'a', 'b']);
    /// ```
    pub fn bind<U: Clone + 'static>(&self, step: Step<T, U>) -> Monad<U> {
        match step {
            Step::Transform(function) => {
                Monad::composite(self.iter().flatten_map(move |value| function(value).sequence))
            }
            Step::Applied {
                function,
                arguments,
            } => Monad::composite(
                self.iter()
                    .flatten_map(move |value| function(value, arguments.as_slice()).sequence),
            ),
            Step::Constant(next) => self.followed_by(next),
        }
    }

    /// Binds every value through `function` (Haskell's `>>=`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmonad::typeclass::Maybe;
    ///
    /// let halved = Maybe::just(10).and_then(|n| {
    ///     if n % 2 == 0 { Maybe::just(n / 2) } else { Maybe::nothing() }
    /// });
    /// assert_eq!(halved.to_vec(), vec![5]);
    ///
    /// let absent = Maybe::nothing::<i32>().and_then(|n| Maybe::just(n / 2));
    /// assert!(absent.is_empty());
    /// ```
    #[inline]
    pub fn and_then<U, F>(&self, function: F) -> Monad<U>
    where
        U: Clone + 'static,
        F: Fn(T) -> Monad<U> + 'static,
    {
        self.bind(Step::transform(function))
    }

    /// Emits every value of `next` once per value of `self` (Haskell's `>>`).
    ///
    /// The values of `self` are discarded, so the result has
    /// `self.cardinality() * next.cardinality()` values, all taken from `next`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmonad::typeclass::ListM;
    ///
    /// let repeated = ListM::new(0..3).followed_by(ListM::from_vec(vec!["x", "y"]));
    /// assert_eq!(repeated.to_vec(), vec!["x", "y", "x", "y", "x", "y"]);
    /// ```
    pub fn followed_by<U: Clone + 'static>(&self, next: Monad<U>) -> Monad<U> {
        Monad::composite(self.iter().flatten_map(move |_| next.iter()))
    }

    /// Alias for [`followed_by`](Self::followed_by).
    #[inline]
    pub fn then<U: Clone + 'static>(&self, next: Monad<U>) -> Monad<U> {
        self.followed_by(next)
    }

    /// Applies `function` to every value without flattening the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmonad::typeclass::ListM;
    ///
    /// let lengths = ListM::from_vec(vec!["a", "bcd"]).map(str::len);
    /// assert_eq!(lengths.to_vec(), vec![1, 3]);
    /// ```
    pub fn map<U, F>(&self, function: F) -> Monad<U>
    where
        U: Clone + 'static,
        F: FnMut(T) -> U + 'static,
    {
        Monad::composite(self.iter().map(function))
    }

    /// Chains `steps` left to right with [`bind`](Self::bind).
    ///
    /// Nothing is evaluated: the composed monad is returned as is, and the
    /// steps run only when it is iterated. With no steps, the result is a
    /// replay of `self` that keeps its variant.
    ///
    /// For steps that change the element type, use the [`do_!`](crate::do_!)
    /// macro instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmonad::typeclass::{Maybe, Step};
    ///
    /// let result = Maybe::just(1).do_([
    ///     Step::transform(|x: i32| Maybe::just(x * 2)),
    ///     Step::transform(|x: i32| Maybe::just(x + 10)),
    /// ]);
    /// assert_eq!(result.to_vec(), vec![12]);
    /// ```
    pub fn do_<I>(&self, steps: I) -> Self
    where
        I: IntoIterator<Item = Step<T, T>>,
    {
        steps
            .into_iter()
            .fold(self.clone(), |monad, step| monad.bind(step))
    }

    /// Forces every value to be produced and discards them.
    ///
    /// This is how the side effects of a composed effectful chain are
    /// triggered. It never returns for an infinite monad; bound it with
    /// [`take`](Self::take) first.
    pub fn run(&self) {
        self.iter().for_each(drop);
    }

    /// Collects the produced values.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Limits the monad to its first `count` values.
    pub fn take(&self, count: usize) -> Self {
        Self::composite(self.iter().take(count))
    }

    /// Counts the produced values by evaluating all of them.
    pub fn cardinality(&self) -> usize {
        self.iter().count()
    }

    /// Returns whether the monad produces no value. Evaluates at most one.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

impl<T> Clone for Monad<T> {
    fn clone(&self) -> Self {
        Self {
            variant: self.variant,
            sequence: self.sequence.clone(),
        }
    }
}

impl<T: 'static> Default for Monad<T> {
    fn default() -> Self {
        Self::with_variant(Variant::Nothing, LazySequence::empty())
    }
}

impl<T: Clone + PartialEq + 'static> PartialEq for Monad<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Clone + 'static> IntoIterator for Monad<T> {
    type Item = T;
    type IntoIter = LazySequence<T>;

    fn into_iter(self) -> LazySequence<T> {
        self.sequence
    }
}

impl<T: Clone + 'static> IntoIterator for &Monad<T> {
    type Item = T;
    type IntoIter = LazySequence<T>;

    fn into_iter(self) -> LazySequence<T> {
        self.iter()
    }
}

impl<T: 'static> FromIterator<T> for Monad<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterable: I) -> Self {
        Self::with_variant(
            Variant::List,
            LazySequence::from_values(iterable.into_iter().collect()),
        )
    }
}

impl<T: 'static> From<Option<T>> for Monad<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::pure(value),
            None => Self::default(),
        }
    }
}

impl<T: 'static> From<Vec<T>> for Monad<T> {
    fn from(values: Vec<T>) -> Self {
        Self::with_variant(Variant::List, LazySequence::from_values(values))
    }
}

fn render<T, F>(
    monad: &Monad<T>,
    formatter: &mut fmt::Formatter<'_>,
    mut write_value: F,
) -> fmt::Result
where
    T: Clone + 'static,
    F: FnMut(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    write!(formatter, "{}(", monad.variant)?;
    for (index, value) in monad.iter().enumerate() {
        if index > 0 {
            formatter.write_str(",")?;
        }
        write_value(&value, formatter)?;
    }
    formatter.write_str(")")
}

impl<T: fmt::Display + Clone + 'static> fmt::Display for Monad<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, formatter, |value, formatter| write!(formatter, "{value}"))
    }
}

impl<T: fmt::Debug + Clone + 'static> fmt::Debug for Monad<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, formatter, |value, formatter| write!(formatter, "{value:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{ListM, Maybe};
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    #[rstest]
    fn composition_is_lazy() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let monad = ListM::from_vec(vec![1, 2, 3]).and_then(move |x| {
            counter.set(counter.get() + 1);
            Maybe::just(x)
        });

        assert_eq!(calls.get(), 0);
        monad.run();
        assert_eq!(calls.get(), 3);
    }

    #[rstest]
    fn replay_does_not_rerun_transformations() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let monad = ListM::from_vec(vec![1, 2]).map(move |x| {
            counter.set(counter.get() + 1);
            x * 3
        });

        assert_eq!(monad.to_vec(), vec![3, 6]);
        assert_eq!(monad.to_vec(), vec![3, 6]);
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn followed_by_multiplies_cardinality() {
        let monad = ListM::from_vec(vec![1, 2, 3]).followed_by(ListM::from_vec(vec![7, 8]));
        assert_eq!(monad.cardinality(), 6);
        assert_eq!(monad.to_vec(), vec![7, 8, 7, 8, 7, 8]);
    }

    #[rstest]
    fn then_is_followed_by() {
        let left = Maybe::just(()).then(Maybe::just("x"));
        let right = Maybe::just(()).followed_by(Maybe::just("x"));
        assert_eq!(left, right);
    }

    #[rstest]
    fn nothing_absorbs_followed_by() {
        let monad = Maybe::nothing::<i32>().followed_by(ListM::from_vec(vec![1, 2]));
        assert!(monad.is_empty());
    }

    #[rstest]
    fn do_without_steps_keeps_variant() {
        let monad = Maybe::just(4).do_(Vec::new());
        assert_eq!(monad.variant(), Variant::Just);
        assert_eq!(monad.to_vec(), vec![4]);
    }

    #[rstest]
    fn composition_is_labelled_monad() {
        let monad = Maybe::just(1).map(|x| x + 1);
        assert_eq!(monad.variant(), Variant::Monad);
    }

    #[rstest]
    fn take_bounds_infinite_monads() {
        let monad = Monad::from_source(1_u64..).and_then(|n| ListM::from_vec(vec![n, n]));
        assert_eq!(monad.take(5).to_vec(), vec![1, 1, 2, 2, 3]);
    }

    #[rstest]
    fn conversions_pick_variants() {
        assert_eq!(Monad::from(Some(1)).variant(), Variant::Just);
        assert_eq!(Monad::<i32>::from(None).variant(), Variant::Nothing);
        assert_eq!(Monad::from(vec![1]).variant(), Variant::List);
        assert_eq!((0..3).collect::<Monad<_>>().to_string(), "ListM(0,1,2)");
    }

    #[rstest]
    fn equality_ignores_variant() {
        assert_eq!(Maybe::just(3), ListM::from_vec(vec![3]));
        assert_ne!(Maybe::just(3), Maybe::nothing());
    }

    #[rstest]
    #[case(Maybe::just(1), "Just(1)")]
    #[case(Maybe::nothing(), "Nothing()")]
    #[case(ListM::from_vec(vec![1, 2, 3]), "ListM(1,2,3)")]
    fn display_lists_values(#[case] monad: Monad<i32>, #[case] expected: &str) {
        assert_eq!(monad.to_string(), expected);
    }

    #[rstest]
    fn debug_quotes_strings() {
        let monad = Maybe::just("Hello, world!".to_string());
        assert_eq!(format!("{monad:?}"), "Just(\"Hello, world!\")");
    }

    #[rstest]
    fn nested_monads_render_recursively() {
        let nested = ListM::from_vec(vec![Maybe::just(1), Maybe::nothing(), Maybe::just(2)]);
        assert_eq!(nested.to_string(), "ListM(Just(1),Nothing(),Just(2))");
    }
}
