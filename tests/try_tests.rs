//! Unit tests for the `Try<A, E>` container.
//!
//! Every combinator that runs a caller-supplied function captures a panic
//! raised by it and turns it into a `Failure`.

#![cfg(feature = "control")]

use monadkit::control::{CaughtPanic, Either, Maybe, Try};
use rstest::rstest;

fn raiser(_value: i32) -> Try<i32, String> {
    panic!("boom")
}

// =============================================================================
// Capturing
// =============================================================================

#[rstest]
fn bind_converts_panic_into_failure() {
    assert_eq!(Try::success(1).bind(raiser), Try::Failure("boom".to_string()));
}

#[rstest]
fn map_converts_panic_into_failure() {
    let result: Try<i32> = Try::success(1).map(|_| panic!("map failed"));
    assert_eq!(result, Try::Failure(CaughtPanic::new("map failed")));
}

#[rstest]
fn of_captures_thunk_panic() {
    let result: Try<Vec<i32>> = Try::of(|| {
        let values: Vec<i32> = Vec::new();
        vec![values[3]]
    });
    let Try::Failure(error) = result else {
        panic!("expected a failure");
    };
    assert!(error.message().contains("index out of bounds"));
}

#[rstest]
fn of_keeps_successful_value() {
    let result: Try<i32> = Try::of(|| 6 * 7);
    assert_eq!(result, Try::Success(42));
}

#[rstest]
fn non_string_payload_uses_placeholder_message() {
    let result: Try<i32> = Try::of(|| std::panic::panic_any(17_u8));
    assert_eq!(result, Try::Failure(CaughtPanic::new("unknown panic payload")));
}

#[rstest]
fn caught_panic_displays_message() {
    let result: Try<i32> = Try::of(|| panic!("disk full"));
    let Try::Failure(error) = result else {
        panic!("expected a failure");
    };
    assert_eq!(error.to_string(), "computation panicked: disk full");
}

// =============================================================================
// Short-circuiting
// =============================================================================

#[rstest]
fn failure_skips_map() {
    let failed: Try<i32, String> = Try::failure("earlier".to_string());
    assert_eq!(failed.map(|x| x + 1), Try::Failure("earlier".to_string()));
}

// =============================================================================
// Recovery
// =============================================================================

#[rstest]
fn recover_turns_failure_into_success() {
    let failed: Try<usize, String> = Try::failure("error".to_string());
    assert_eq!(failed.recover(|error| error.len()), Try::Success(5));
}

#[rstest]
fn recover_after_captured_panic() {
    let recovered = Try::success(1)
        .bind(raiser)
        .recover(|message| i32::try_from(message.len()).unwrap_or(i32::MAX));
    assert_eq!(recovered, Try::Success(4));
}

#[rstest]
fn recover_with_can_keep_failing() {
    let failed: Try<i32, String> = Try::failure("fatal".to_string());
    let result = failed.recover_with(|error| Try::failure(format!("still {error}")));
    assert_eq!(result, Try::Failure("still fatal".to_string()));
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
#[case(Ok(1), Try::Success(1))]
#[case(Err("no"), Try::Failure("no"))]
fn from_result_maps_channels(#[case] input: Result<i32, &'static str>, #[case] expected: Try<i32, &'static str>) {
    assert_eq!(Try::from_result(input), expected);
}

#[rstest]
fn failure_converts_to_left_and_none() {
    let failed: Try<i32, String> = Try::failure("e".to_string());
    assert_eq!(failed.clone().into_either(), Either::Left("e".to_string()));
    assert_eq!(failed.clone().to_maybe(), Maybe::none());
    assert_eq!(failed.into_result(), Err("e".to_string()));
}

#[rstest]
fn match_with_and_get_or_else() {
    let success: Try<i32, String> = Try::success(3);
    assert_eq!(success.clone().match_with(|v| v * 2, |_| 0), 6);
    assert_eq!(Try::<i32, String>::failure("e".to_string()).get_or_else(-1), -1);
    assert_eq!(success.get_or_else(-1), 3);
}
