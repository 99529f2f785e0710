//! Unit tests for the `Writer<W, A>` container.
//!
//! Logs are folded through the writer's `LogMonoid`, always as
//! `combine(old, new)`.

#![cfg(feature = "effect")]

use monadkit::effect::{LogMonoid, Writer, WriterError};
use rstest::{fixture, rstest};

#[fixture]
fn text() -> LogMonoid<String> {
    LogMonoid::from_monoid()
}

#[fixture]
fn lines() -> LogMonoid<Vec<String>> {
    LogMonoid::from_monoid()
}

fn factorial(number: u64, monoid: &LogMonoid<String>) -> Writer<String, u64> {
    let mut writer = Writer::of(1, monoid);
    for factor in 1..=number {
        writer = writer.bind(move |product, make| {
            make.make(product * factor, format!("{product}*{factor};"))
        });
    }
    writer
}

// =============================================================================
// Accumulation
// =============================================================================

#[rstest]
fn factorial_logs_every_step_in_call_order(text: LogMonoid<String>) {
    let (value, log) = factorial(5, &text).run();
    assert_eq!(value, 120);
    assert_eq!(log, "1*1;1*2;2*3;6*4;24*5;");
}

#[rstest]
fn tell_appends_after_existing_entries(lines: LogMonoid<Vec<String>>) {
    let (_, log) = Writer::of((), &lines)
        .tell(vec!["first".to_string()])
        .tell(vec!["second".to_string()])
        .run();
    assert_eq!(log, vec!["first", "second"]);
}

#[rstest]
fn map_leaves_log_untouched(text: LogMonoid<String>) {
    let writer = Writer::of(2, &text).tell("kept".to_string());
    let mapped = writer.clone().map(|x| x * 10);
    assert_eq!(mapped.log(), writer.log());
    assert_eq!(mapped.value(), &20);
}

#[rstest]
fn custom_monoid_folds_with_its_own_rule() {
    let longest = LogMonoid::new(String::new(), |left: String, right: String| {
        if right.len() > left.len() { right } else { left }
    });

    let (_, log) = Writer::of(0, &longest)
        .tell("ab".to_string())
        .tell("abcd".to_string())
        .tell("abc".to_string())
        .run();
    assert_eq!(log, "abcd");
}

#[rstest]
fn censor_and_listen(text: LogMonoid<String>) {
    let ((value, seen), log) = Writer::of(1, &text)
        .tell("a".to_string())
        .censor(|log| log.repeat(2))
        .listen()
        .run();
    assert_eq!(value, 1);
    assert_eq!(seen, "aa");
    assert_eq!(log, "aa");
}

#[rstest]
fn maker_of_uses_identity_log(text: LogMonoid<String>) {
    let writer = Writer::of(3, &text)
        .tell("x".to_string())
        .bind(|value, make| make.of(value + 1));
    assert_eq!(writer.run(), (4, "x".to_string()));
}

// =============================================================================
// Monoid identity
// =============================================================================

#[rstest]
fn try_bind_reports_mismatch(text: LogMonoid<String>) {
    let other = LogMonoid::<String>::from_monoid();
    let result = Writer::of(1, &text).try_bind(|value, _| Writer::of(value, &other));
    assert_eq!(result.err(), Some(WriterError::MonoidMismatch));
}

#[rstest]
fn try_bind_accepts_clone_of_same_handle(text: LogMonoid<String>) {
    let shared = text.clone();
    let result = Writer::of(1, &text).try_bind(move |value, _| Writer::of(value + 1, &shared));
    assert_eq!(result.map(Writer::run), Ok((2, String::new())));
}

#[rstest]
#[should_panic(expected = "different LogMonoid")]
fn bind_fails_loudly_on_mismatch(text: LogMonoid<String>) {
    let other = LogMonoid::<String>::from_monoid();
    let _ = Writer::of(1, &text).bind(|value, _| Writer::of(value, &other));
}

#[rstest]
#[should_panic(expected = "different LogMonoid")]
fn then_fails_loudly_on_mismatch(text: LogMonoid<String>) {
    let other = LogMonoid::<String>::from_monoid();
    let _ = Writer::of(1, &text).then(Writer::of(2, &other));
}
