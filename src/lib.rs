//! # monadkit
//!
//! Law-abiding monadic containers and derived algebraic data types.
//!
//! ## Overview
//!
//! Every container is an immutable value with its own `bind`/`map` and a
//! total `match_with` for case analysis:
//!
//! - **Control**: [`Maybe`](control::Maybe), [`Either`](control::Either),
//!   [`Try`](control::Try) (captures panics raised by its combinators)
//! - **Effect**: [`IO`](effect::IO) (deferred, re-runnable),
//!   [`Writer`](effect::Writer) (value plus a monoid-folded log)
//! - **Persistent**: [`List`](persistent::List)
//! - **ADT**: `#[derive(Adt)]` constructors and exhaustive matchers
//!
//! The shared [`Monad`](typeclass::Monad) contract lives in [`typeclass`],
//! built on GAT-based higher-kinded type emulation.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Applicative, Monad, Monoid)
//! - `control`: Maybe, Either, Try
//! - `effect`: IO, Writer
//! - `persistent`: List
//! - `adt`: The `Adt` trait
//! - `derive`: `#[derive(Adt)]`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use monadkit::prelude::*;
//!
//! fn half(value: i32) -> Either<String, i32> {
//!     if value % 2 == 0 {
//!         Either::as_right(value / 2)
//!     } else {
//!         Either::as_left(format!("{value} is odd"))
//!     }
//! }
//!
//! assert_eq!(Either::as_right(12).bind(half).bind(half), Either::Right(3));
//! assert_eq!(
//!     Either::as_right(12).bind(half).bind(half).bind(half),
//!     Either::Left("3 is odd".to_string()),
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every enabled area.
///
/// # Usage
///
/// ```rust
/// use monadkit::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;

    #[cfg(feature = "adt")]
    pub use crate::adt::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "persistent")]
pub mod persistent;

#[cfg(feature = "adt")]
pub mod adt;
