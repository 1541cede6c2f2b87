#![cfg(feature = "typeclass")]
//! Property-based tests for the Monad laws.
//!
//! This module verifies that every monad variant satisfies:
//! - Left Identity: pure(a).and_then(f) == f(a)
//! - Right Identity: m.and_then(pure) == m
//! - Associativity: m.and_then(f).and_then(g) == m.and_then(|x| f(x).and_then(g))
//!
//! Equality is the equality of the produced value sequences.

use proptest::prelude::*;
use seqmonad::typeclass::{ListM, Maybe, Monad};

fn double(value: i32) -> Monad<i32> {
    Maybe::just(value.wrapping_mul(2))
}

fn spread(value: i32) -> Monad<i32> {
    ListM::from_vec(vec![value, value.wrapping_add(1)])
}

fn keep_even(value: i32) -> Monad<i32> {
    if value % 2 == 0 {
        Maybe::just(value)
    } else {
        Maybe::nothing()
    }
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    /// Left Identity Law: pure(a).and_then(f) == f(a)
    #[test]
    fn prop_left_identity(value: i32) {
        prop_assert_eq!(Maybe::just(value).and_then(double).to_vec(), double(value).to_vec());
        prop_assert_eq!(Monad::pure(value).and_then(spread).to_vec(), spread(value).to_vec());
        prop_assert_eq!(Monad::pure(value).and_then(keep_even).to_vec(), keep_even(value).to_vec());
    }

    /// Right Identity Law: m.and_then(pure) == m
    #[test]
    fn prop_right_identity(values in prop::collection::vec(any::<i32>(), 0..20)) {
        let monad = ListM::from_vec(values.clone());
        prop_assert_eq!(monad.and_then(Monad::pure).to_vec(), values);
    }

    /// Right Identity Law for the optional monad, including absence.
    #[test]
    fn prop_right_identity_maybe(option: Option<i32>) {
        let monad = Maybe::from_option(option);
        prop_assert_eq!(monad.and_then(Maybe::just), monad);
    }

    /// Associativity Law: m.and_then(f).and_then(g) == m.and_then(|x| f(x).and_then(g))
    #[test]
    fn prop_associativity(values in prop::collection::vec(any::<i32>(), 0..10)) {
        let monad = ListM::from_vec(values);

        let left = monad.and_then(spread).and_then(keep_even);
        let right = monad.and_then(|x| spread(x).and_then(keep_even));

        prop_assert_eq!(left.to_vec(), right.to_vec());
    }
}

// =============================================================================
// Replay and Cardinality Laws
// =============================================================================

proptest! {
    /// Iterating a monad twice yields the same values in the same order.
    #[test]
    fn prop_replay_idempotence(values in prop::collection::vec(any::<i32>(), 0..20)) {
        let monad = ListM::new(values.clone().into_iter()).and_then(spread).map(|x| x / 3);

        let first = monad.to_vec();
        let second = monad.to_vec();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), values.len() * 2);
    }

    /// Partially consumed views never disturb a later full iteration.
    #[test]
    fn prop_replay_after_partial_iteration(
        values in prop::collection::vec(any::<i32>(), 0..20),
        prefix in 0usize..25,
    ) {
        let monad = ListM::new(values.clone().into_iter());
        let partial: Vec<i32> = monad.iter().take(prefix).collect();

        prop_assert_eq!(&partial[..], &values[..prefix.min(values.len())]);
        prop_assert_eq!(monad.to_vec(), values);
    }

    /// m.followed_by(n) has |m| * |n| values, all taken from n.
    #[test]
    fn prop_followed_by_cardinality(
        left in prop::collection::vec(any::<u8>(), 0..8),
        right in prop::collection::vec(any::<i16>(), 0..8),
    ) {
        let first = ListM::from_vec(left.clone());
        let second = ListM::from_vec(right.clone());
        let combined = first.followed_by(second);

        prop_assert_eq!(combined.cardinality(), left.len() * right.len());
        let expected: Vec<i16> = left.iter().flat_map(|_| right.iter().copied()).collect();
        prop_assert_eq!(combined.to_vec(), expected);
    }

    /// Absence propagates through any producer.
    #[test]
    fn prop_absence_propagation(offset: i32) {
        let result = Maybe::nothing::<i32>().and_then(move |x| Maybe::just(x.wrapping_add(offset)));
        prop_assert!(result.is_empty());
    }
}
