#![cfg(feature = "control")]
//! Property-based tests for `Either` Functor and Monad laws.

use monadkit::control::Either;
use monadkit::typeclass::{Functor, Monad};
use proptest::prelude::*;

fn either_strategy() -> impl Strategy<Value = Either<String, i32>> {
    prop_oneof![
        any::<i32>().prop_map(Either::Right),
        "[a-z]{0,8}".prop_map(Either::Left),
    ]
}

fn checked_double(value: i32) -> Either<String, i32> {
    value
        .checked_mul(2)
        .map_or_else(|| Either::Left("overflow".to_string()), Either::Right)
}

fn non_negative(value: i32) -> Either<String, i32> {
    if value >= 0 {
        Either::Right(value)
    } else {
        Either::Left(format!("{value} is negative"))
    }
}

proptest! {
    #[test]
    fn prop_either_left_identity(value: i32) {
        prop_assert_eq!(Either::pure(value).flat_map(checked_double), checked_double(value));
    }

    #[test]
    fn prop_either_right_identity(either in either_strategy()) {
        prop_assert_eq!(either.clone().flat_map(Either::pure), either);
    }

    #[test]
    fn prop_either_associativity(either in either_strategy()) {
        let left = either.clone().flat_map(checked_double).flat_map(non_negative);
        let right = either.flat_map(|x| checked_double(x).flat_map(non_negative));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_either_functor_identity(either in either_strategy()) {
        prop_assert_eq!(either.clone().fmap(|x| x), either);
    }

    #[test]
    fn prop_either_left_short_circuits(message in "[a-z]{1,8}") {
        let left: Either<String, i32> = Either::as_left(message.clone());
        prop_assert_eq!(left.bind(checked_double), Either::Left(message));
    }
}
