//! The derive only accepts enums.

#![allow(dead_code)]

use monadkit::adt::Adt;

#[derive(Adt)]
struct Point {
    x: i32,
}

fn main() {}
