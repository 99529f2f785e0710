//! A variant may not take the name of the generated matcher.

#![allow(dead_code)]

use monadkit::adt::Adt;

#[derive(Adt)]
enum Command {
    MatchWith,
    Quit,
}

fn main() {}
