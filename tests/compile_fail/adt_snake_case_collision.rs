//! Variants whose constructors would share a name are rejected.

#![allow(dead_code)]

use monadkit::adt::Adt;

#[derive(Adt)]
enum Request {
    HTTPRequest,
    HttpRequest,
}

fn main() {}
