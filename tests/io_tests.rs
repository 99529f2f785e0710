//! Unit tests for the `IO<A>` container.
//!
//! An IO describes a computation; it runs only inside `run_unsafe`, and
//! each call re-runs the whole composed chain.

#![cfg(feature = "effect")]

use monadkit::effect::IO;
use rstest::rstest;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[rstest]
fn composition_performs_no_effect() {
    let runs = Rc::new(Cell::new(0));
    let counted = Rc::clone(&runs);

    let _io = IO::new(move || counted.set(counted.get() + 1))
        .map(|()| 1)
        .bind(IO::of);

    assert_eq!(runs.get(), 0);
}

#[rstest]
fn every_run_repeats_the_side_effect() {
    let counter = Rc::new(Cell::new(0));
    let observed = Rc::clone(&counter);

    let io = IO::of(1).bind(move |value| {
        observed.set(observed.get() + 1);
        IO::of(value)
    });

    assert_eq!(io.run_unsafe(), 1);
    assert_eq!(io.run_unsafe(), 1);
    assert_eq!(counter.get(), 2);
}

#[rstest]
fn effects_run_in_composition_order() {
    let journal = Rc::new(RefCell::new(Vec::new()));

    let write = |entry: &'static str| {
        let journal = Rc::clone(&journal);
        IO::new(move || journal.borrow_mut().push(entry))
    };

    let program = write("open").then(write("read")).then(write("close"));
    program.run_unsafe();

    assert_eq!(*journal.borrow(), vec!["open", "read", "close"]);
}

#[rstest]
fn bind_feeds_result_into_next_action() {
    let io = IO::new(|| "21".to_string())
        .map(|text| text.parse::<i32>().unwrap_or_default())
        .bind(|value| IO::pure(value * 2));
    assert_eq!(io.run_unsafe(), 42);
}

#[rstest]
fn map2_runs_left_before_right() {
    let journal = Rc::new(RefCell::new(String::new()));
    let left_journal = Rc::clone(&journal);
    let right_journal = Rc::clone(&journal);

    let left = IO::new(move || {
        left_journal.borrow_mut().push('L');
        2
    });
    let right = IO::new(move || {
        right_journal.borrow_mut().push('R');
        3
    });

    assert_eq!(left.map2(right, |a, b| a * b).run_unsafe(), 6);
    assert_eq!(journal.borrow().as_str(), "LR");
}

#[rstest]
fn reads_fresh_state_on_each_run() {
    let source = Rc::new(Cell::new(1));
    let reader = Rc::clone(&source);
    let io = IO::new(move || reader.get()).map(|value| value * 100);

    assert_eq!(io.run_unsafe(), 100);
    source.set(2);
    assert_eq!(io.run_unsafe(), 200);
}
