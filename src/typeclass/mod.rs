//! Type class traits shared by every monadkit container.
//!
//! - [`TypeConstructor`]: Higher-kinded type emulation through GATs
//! - [`Functor`]: Mapping over the wrapped value(s)
//! - [`Applicative`]: Lifting a plain value into a container (`pure`)
//! - [`Monad`]: Sequencing dependent computations (`flat_map`)
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types so that `Functor` and
//! `Monad` can talk about "the same container holding another type".
//!
//! ## Function Bounds
//!
//! The trait methods take `Fn + 'static` closures. That is the one bound every
//! container can honour: a `List` calls the function once per element and an
//! `IO` calls it again on every run. The containers' inherent `map`/`bind`
//! methods accept looser bounds where their semantics allow it.
//!
//! # Examples
//!
//! ```rust
//! use monadkit::control::Maybe;
//! use monadkit::typeclass::{Applicative, Functor, Monad};
//!
//! fn increment_all<M>(container: M) -> M::WithType<i32>
//! where
//!     M: Functor<Inner = i32>,
//! {
//!     container.fmap(|value| value + 1)
//! }
//!
//! assert_eq!(increment_all(Maybe::pure(5)), Maybe::Some(6));
//!
//! let chained = <Maybe<()> as Applicative>::pure(10).flat_map(|value| Maybe::Some(value * 2));
//! assert_eq!(chained, Maybe::Some(20));
//! ```
//!
//! ## Using Semigroup and Monoid
//!
//! ```rust
//! use monadkit::typeclass::{Monoid, Semigroup};
//!
//! assert_eq!(String::from("Hello, ").combine(String::from("World!")), "Hello, World!");
//! assert_eq!(String::combine_all(vec!["a".to_string(), "b".to_string()]), "ab");
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
