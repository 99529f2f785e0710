//! Unit tests for the `Either<L, R>` container.
//!
//! `Right` is the success channel; `Left` carries a caller-built failure and
//! short-circuits every combinator that targets `Right`.

#![cfg(feature = "control")]

use monadkit::control::{Either, Maybe};
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Construction and Inspection
// =============================================================================

#[rstest]
fn as_right_is_right() {
    let value: Either<String, i32> = Either::as_right(1);
    assert!(value.is_right());
    assert!(!value.is_left());
}

#[rstest]
fn as_left_is_left() {
    let value: Either<String, i32> = Either::as_left("e".to_string());
    assert!(value.is_left());
    assert_eq!(value.left(), Maybe::Some("e".to_string()));
}

#[rstest]
fn right_extraction_from_left_is_none() {
    let value: Either<&str, i32> = Either::as_left("e");
    assert_eq!(value.right(), Maybe::none());
}

#[rstest]
#[case(Maybe::Some(3), Either::Right(3))]
#[case(Maybe::None, Either::Left("missing"))]
fn from_option_bridges_maybe(#[case] input: Maybe<i32>, #[case] expected: Either<&str, i32>) {
    assert_eq!(Either::from_option(input, "missing"), expected);
}

// =============================================================================
// Short-circuiting
// =============================================================================

#[rstest]
fn bind_on_left_never_calls_function() {
    let calls = Cell::new(0);
    let result = Either::<&str, i32>::as_left("e").bind(|x| {
        calls.set(calls.get() + 1);
        Either::as_right(x + 1)
    });
    assert_eq!(result, Either::Left("e"));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn map_on_left_carries_payload_into_new_type() {
    let result: Either<&str, String> = Either::<&str, i32>::as_left("e").map(|x| x.to_string());
    assert_eq!(result, Either::Left("e"));
}

#[rstest]
fn bind_adopts_returned_left() {
    let result: Either<&str, i32> = Either::as_right(1).bind(|_| Either::as_left("late"));
    assert_eq!(result, Either::Left("late"));
}

// =============================================================================
// ensure
// =============================================================================

#[rstest]
#[case(5, 10, Either::Left("bad"))]
#[case(5, 0, Either::Right(5))]
fn ensure_checks_predicate(
    #[case] value: i32,
    #[case] threshold: i32,
    #[case] expected: Either<&'static str, i32>,
) {
    assert_eq!(Either::as_right(value).ensure("bad", |x| *x > threshold), expected);
}

#[rstest]
fn ensure_keeps_existing_left() {
    let result = Either::<&str, i32>::as_left("first").ensure("second", |_| false);
    assert_eq!(result, Either::Left("first"));
}

// =============================================================================
// Extraction
// =============================================================================

#[rstest]
fn match_with_dispatches_by_channel() {
    let render = |value: Either<String, i32>| {
        value.match_with(|error| format!("error: {error}"), |number| format!("ok: {number}"))
    };
    assert_eq!(render(Either::as_right(2)), "ok: 2");
    assert_eq!(render(Either::as_left("nope".to_string())), "error: nope");
}

#[rstest]
fn get_or_else_and_or_else() {
    let left: Either<&str, i32> = Either::as_left("e");
    assert_eq!(left.get_or_else(9), 9);
    assert_eq!(left.or_else(|| Either::as_right(4)), Either::Right(4));
}

#[rstest]
fn display_names_the_channel() {
    assert_eq!(Either::<i32, &str>::as_left(1).to_string(), "Left(1)");
    assert_eq!(Either::<i32, &str>::as_right("x").to_string(), "Right(x)");
}

#[rstest]
fn into_result_round_trip() {
    let parsed: Either<std::num::ParseIntError, i32> = "17".parse::<i32>().into();
    assert_eq!(parsed.into_result().ok(), Some(17));
}

#[rstest]
#[should_panic(expected = "not captured")]
fn panic_in_bind_propagates() {
    let _ = Either::<&str, i32>::as_right(1).bind(|_| -> Either<&str, i32> { panic!("not captured") });
}
