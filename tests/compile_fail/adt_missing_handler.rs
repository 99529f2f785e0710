//! A matcher that leaves out a handler does not compile.

#![allow(dead_code)]

use monadkit::adt::Adt;

#[derive(Adt)]
enum Light {
    Red,
    Green,
}

fn main() {
    let _ = Light::red().match_with(LightCases { red: || "stop" });
}
