//! Applicative type class - lifting plain values into a container.
//!
//! `pure` is the unit of every monad: `Maybe::Some`, `Either::Right`,
//! `Try::Success`, a singleton `List`, or an `IO` that yields the value.
//!
//! `Writer` is deliberately absent: its unit needs a runtime monoid handle,
//! so it is spelled `Writer::of(value, &monoid)` instead.
//!
//! # Examples
//!
//! ```rust
//! use monadkit::control::{Either, Maybe};
//! use monadkit::typeclass::Applicative;
//!
//! let x: Maybe<i32> = <Maybe<()> as Applicative>::pure(42);
//! assert_eq!(x, Maybe::Some(42));
//!
//! let y: Either<String, &str> = <Either<String, ()> as Applicative>::pure("hello");
//! assert_eq!(y, Either::Right("hello"));
//! ```

use super::functor::Functor;

/// A type class for functors that can lift a plain value.
///
/// # Laws
///
/// Together with [`Monad`](super::Monad), `pure` must be a two-sided identity
/// for `flat_map`:
///
/// ```text
/// Self::pure(a).flat_map(f) == f(a)
/// m.flat_map(Self::pure) == m
/// ```
///
/// The `Clone` bound exists for containers that hand the value out more than
/// once, such as an `IO` that can be run repeatedly.
pub trait Applicative: Functor {
    /// Lifts a value into the minimal context of this applicative.
    fn pure<B>(value: B) -> Self::WithType<B>
    where
        B: Clone + 'static;
}
