//! Either type - success or an explicit failure.
//!
//! This module provides the `Either<L, R>` type, which represents a value
//! that is either a `Left(L)` or a `Right(R)`. `Right` is the success channel
//! and the one `bind`/`map` operate on; `Left` carries a failure payload the
//! caller built explicitly.
//!
//! Unlike [`Try`](super::Try), `Either` never captures panics: a function
//! passed to `bind` that panics unwinds straight through.
//!
//! # Examples
//!
//! ```rust
//! use monadkit::control::Either;
//!
//! fn parse_age(text: &str) -> Either<String, u32> {
//!     match text.parse::<u32>() {
//!         Ok(age) => Either::as_right(age),
//!         Err(error) => Either::as_left(error.to_string()),
//!     }
//! }
//!
//! let adult = parse_age("42").ensure("minor".to_string(), |age| *age >= 18);
//! assert_eq!(adult, Either::Right(42));
//!
//! let minor = parse_age("12").ensure("minor".to_string(), |age| *age >= 18);
//! assert_eq!(minor, Either::Left("minor".to_string()));
//! ```

use std::fmt;

use super::Maybe;
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A value that is either a `Left(L)` failure or a `Right(R)` success.
///
/// # Type Parameters
///
/// * `L` - The type of the failure payload
/// * `R` - The type of the success value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The failure channel.
    Left(L),
    /// The success channel.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a success.
    #[inline]
    pub const fn as_right(value: R) -> Self {
        Self::Right(value)
    }

    /// Creates a failure.
    #[inline]
    pub const fn as_left(value: L) -> Self {
        Self::Left(value)
    }

    /// Lifts a value into the success channel. Same as [`Either::as_right`].
    #[inline]
    pub const fn pure(value: R) -> Self {
        Self::Right(value)
    }

    /// Bridges a [`Maybe`] into an `Either`: `Some` becomes `Right`, `None`
    /// becomes `Left(left_value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::{Either, Maybe};
    ///
    /// let found: Either<&str, i32> = Either::from_option(Maybe::Some(1), "missing");
    /// assert_eq!(found, Either::Right(1));
    ///
    /// let missing: Either<&str, i32> = Either::from_option(Maybe::none(), "missing");
    /// assert_eq!(missing, Either::Left("missing"));
    /// ```
    #[inline]
    pub fn from_option(option: Maybe<R>, left_value: L) -> Self {
        option.match_with(Self::Right, || Self::Left(left_value))
    }

    // =========================================================================
    // Case Analysis
    // =========================================================================

    /// Total case analysis over both channels.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// let result = right.match_with(
    ///     |n| format!("Number: {n}"),
    ///     |s| format!("String: {s}"),
    /// );
    /// assert_eq!(result, "String: hello");
    /// ```
    #[inline]
    pub fn match_with<D, FL, FR>(self, if_left: FL, if_right: FR) -> D
    where
        FL: FnOnce(L) -> D,
        FR: FnOnce(R) -> D,
    {
        match self {
            Self::Left(value) => if_left(value),
            Self::Right(value) => if_right(value),
        }
    }

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// The failure payload, if any.
    #[inline]
    pub fn left(self) -> Maybe<L> {
        self.match_with(Maybe::Some, |_| Maybe::None)
    }

    /// The success value, if any.
    #[inline]
    pub fn right(self) -> Maybe<R> {
        self.match_with(|_| Maybe::None, Maybe::Some)
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Sequences a dependent computation on the success value.
    ///
    /// A `Right` adopts whatever `function` returns; a `Left` short-circuits
    /// and carries its payload, unchanged, into the new type. `function` is
    /// not called for `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Either;
    ///
    /// let halve = |n: i32| if n % 2 == 0 { Either::Right(n / 2) } else { Either::Left("odd") };
    ///
    /// assert_eq!(Either::as_right(8).bind(halve), Either::Right(4));
    /// assert_eq!(Either::as_right(7).bind(halve), Either::Left("odd"));
    /// assert_eq!(Either::<&str, i32>::as_left("e").bind(halve), Either::Left("e"));
    /// ```
    #[inline]
    pub fn bind<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        self.match_with(Either::Left, function)
    }

    /// Transforms the success value. Equivalent to `bind(|x| Either::pure(f(x)))`.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.bind(|value| Either::Right(function(value)))
    }

    /// Transforms the failure payload, leaving a success untouched.
    #[inline]
    pub fn map_left<M, F>(self, function: F) -> Either<M, R>
    where
        F: FnOnce(L) -> M,
    {
        self.match_with(|value| Either::Left(function(value)), Either::Right)
    }

    /// Unwraps the success value or substitutes `default`.
    #[inline]
    pub fn get_or_else(self, default: R) -> R {
        self.match_with(|_| default, |value| value)
    }

    /// Returns `self` if it is a `Right`; otherwise evaluates `fallback`.
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, fallback: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Left(_) => fallback(),
            right @ Self::Right(_) => right,
        }
    }

    /// Downgrades a success that fails `predicate` to `Left(left_value)`.
    ///
    /// A `Left` is returned as-is; `predicate` is not evaluated for it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Either;
    ///
    /// assert_eq!(Either::as_right(5).ensure("bad", |x| *x > 10), Either::Left("bad"));
    /// assert_eq!(Either::as_right(5).ensure("bad", |x| *x > 0), Either::Right(5));
    /// assert_eq!(Either::<&str, i32>::as_left("first").ensure("bad", |_| false), Either::Left("first"));
    /// ```
    #[inline]
    #[must_use]
    pub fn ensure<P>(self, left_value: L, predicate: P) -> Self
    where
        P: FnOnce(&R) -> bool,
    {
        match self {
            Self::Right(value) => {
                if predicate(&value) {
                    Self::Right(value)
                } else {
                    Self::Left(left_value)
                }
            }
            left @ Self::Left(_) => left,
        }
    }

    /// Exchanges the two channels.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        self.match_with(Either::Right, Either::Left)
    }

    /// Converts into a standard `Result`, with `Right` as `Ok`.
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        self.match_with(Err, Ok)
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: Fn(R) -> B + 'static,
        B: 'static,
    {
        self.map(function)
    }
}

impl<L, R> Applicative for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B>
    where
        B: Clone + 'static,
    {
        Either::Right(value)
    }
}

impl<L, R> Monad for Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: Fn(R) -> Either<L, B> + 'static,
        B: 'static,
    {
        self.bind(function)
    }
}
