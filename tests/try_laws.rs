#![cfg(feature = "control")]
//! Property-based tests for `Try` Monad laws on the `Success` branch.

use monadkit::control::Try;
use monadkit::typeclass::{Functor, Monad};
use proptest::prelude::*;

fn increment(value: i32) -> Try<i32, String> {
    Try::success(value.wrapping_add(1))
}

fn reject_odd(value: i32) -> Try<i32, String> {
    if value % 2 == 0 {
        Try::success(value)
    } else {
        Try::failure(format!("{value} is odd"))
    }
}

proptest! {
    #[test]
    fn prop_try_left_identity(value: i32) {
        prop_assert_eq!(Try::pure(value).flat_map(reject_odd), reject_odd(value));
    }

    #[test]
    fn prop_try_right_identity(value: i32) {
        let computation: Try<i32, String> = Try::success(value);
        prop_assert_eq!(computation.clone().flat_map(Try::pure), computation);
    }

    #[test]
    fn prop_try_associativity(value: i32) {
        let computation: Try<i32, String> = Try::success(value);
        let left = computation.clone().flat_map(increment).flat_map(reject_odd);
        let right = computation.flat_map(|x| increment(x).flat_map(reject_odd));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_try_functor_composition(value: i32) {
        let function1 = |x: i32| x.wrapping_add(1);
        let function2 = |x: i32| x.wrapping_mul(3);
        let computation: Try<i32, String> = Try::success(value);
        prop_assert_eq!(
            computation.clone().fmap(function1).fmap(function2),
            computation.fmap(move |x| function2(function1(x)))
        );
    }

    #[test]
    fn prop_try_failure_short_circuits(message in "[a-z]{1,8}") {
        let failed: Try<i32, String> = Try::failure(message.clone());
        prop_assert_eq!(failed.flat_map(increment), Try::Failure(message));
    }
}
