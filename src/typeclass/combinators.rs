//! Combinators over collections of monadic values.
//!
//! Both combinators flatten: the result produces the individual values of
//! every input monad, in order, rather than a single list of them. An input
//! of `Nothing` therefore contributes no value at all, which is what makes
//! [`map_m`] usable as a filter.

use super::monad::Monad;

/// Concatenates the values of every monad in `monads`, in order.
///
/// The items may be anything iterable, such as [`Monad<T>`], `Option<T>` or
/// `Vec<T>`. Neither the collection nor its items are consumed until the
/// result is iterated.
///
/// # Examples
///
/// ```rust
/// use seqmonad::typeclass::{Maybe, sequence};
///
/// let flat = sequence(vec![Maybe::just(1), Maybe::nothing(), Maybe::just(3)]);
/// assert_eq!(flat.to_vec(), vec![1, 3]);
/// ```
pub fn sequence<T, I>(monads: I) -> Monad<T>
where
    T: Clone + 'static,
    I: IntoIterator,
    I::IntoIter: 'static,
    I::Item: IntoIterator<Item = T>,
    <I::Item as IntoIterator>::IntoIter: 'static,
{
    Monad::from_source(monads.into_iter().flatten())
}

/// Applies `function` to every value of `values` and flattens the results.
///
/// Equivalent to `sequence(values.map(function))`.
///
/// # Examples
///
/// ```rust
/// use seqmonad::typeclass::{ListM, Maybe, map_m};
///
/// let reject_22 = |x: i32| if x == 22 { Maybe::nothing() } else { Maybe::just(x) };
/// let kept = map_m(reject_22, ListM::from_vec(vec![2, 12, 22]));
/// assert_eq!(kept.to_vec(), vec![2, 12]);
/// ```
pub fn map_m<T, U, M, F, I>(function: F, values: I) -> Monad<U>
where
    U: Clone + 'static,
    F: FnMut(T) -> M + 'static,
    I: IntoIterator<Item = T>,
    I::IntoIter: 'static,
    M: IntoIterator<Item = U>,
    M::IntoIter: 'static,
{
    sequence(values.into_iter().map(function))
}
