//! Short-circuiting containers.
//!
//! - [`Maybe`]: presence or absence of a value (`Some`/`None`)
//! - [`Either`]: success or an explicit, caller-built failure (`Right`/`Left`)
//! - [`Try`]: success or a failure captured from a panicking function (`Success`/`Failure`)
//!
//! The three differ in how failure enters the container. `Maybe` and
//! `Either` only ever hold what the caller put there, and a panic inside a
//! function passed to their combinators propagates as usual. `Try` turns
//! every combinator boundary into a catch boundary.
//!
//! # Examples
//!
//! ```rust
//! use monadkit::control::{Either, Maybe, Try};
//!
//! let port = Maybe::from_nullable(Some(8080)).map(|port| port + 1);
//! assert_eq!(port.get_or_else(80), 8081);
//!
//! let checked: Either<&str, i32> = Either::as_right(5).ensure("too small", |value| *value > 10);
//! assert_eq!(checked, Either::Left("too small"));
//!
//! let parsed: Try<i32, String> = Try::success("forty-two").map(|text| text.parse::<i32>().unwrap());
//! assert!(parsed.is_failure());
//! ```

mod caught_panic;
mod either;
mod maybe;
mod try_monad;

pub use caught_panic::{CaughtPanic, FromPanic};
pub use either::Either;
pub use maybe::Maybe;
pub use try_monad::Try;
