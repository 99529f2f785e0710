//! Try type - success or a failure captured from a panicking computation.
//!
//! `Try<A, E>` looks like [`Either`](super::Either) with the channels named
//! `Success`/`Failure`, but it is the only container that intercepts errors
//! on its own. Every combinator that runs a caller-supplied function (`of`,
//! `bind`, `map`, `recover`, `recover_with`) runs it under
//! [`std::panic::catch_unwind`]; if the function panics, the payload is turned
//! into `E` through [`FromPanic`] and the result is a `Failure`.
//!
//! A `Failure` short-circuits `bind` and `map` without calling the function.
//!
//! # Panic Output
//!
//! Capturing happens after the process-wide panic hook has run, so the
//! default hook still prints the panic message to stderr. Capturing requires
//! the default `panic = "unwind"` strategy; with `panic = "abort"` the process
//! terminates instead.
//!
//! # Examples
//!
//! ```rust
//! use monadkit::control::Try;
//!
//! fn raiser(_value: i32) -> Try<i32, String> {
//!     panic!("boom")
//! }
//!
//! let failed = Try::success(1).bind(raiser);
//! assert_eq!(failed, Try::Failure("boom".to_string()));
//!
//! let recovered = failed.recover(|error| error.len() as i32);
//! assert_eq!(recovered, Try::Success(4));
//! ```

use std::panic::{AssertUnwindSafe, catch_unwind};

use super::caught_panic::{CaughtPanic, FromPanic, panic_message};
use super::{Either, Maybe};
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A computation result that is either a `Success(A)` or a captured `Failure(E)`.
///
/// # Type Parameters
///
/// * `A` - The type of the success value
/// * `E` - The failure payload; [`CaughtPanic`] unless chosen otherwise
///
/// # Monad Laws
///
/// On the `Success` branch `Try` satisfies left identity, right identity and
/// associativity as long as the functions involved do not panic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Try<A, E = CaughtPanic> {
    /// The computation produced a value.
    Success(A),
    /// The computation failed with the contained error.
    Failure(E),
}

/// Runs `computation`, converting a panic into `E`.
fn capture<T, E, F>(computation: F) -> Result<T, E>
where
    E: FromPanic,
    F: FnOnce() -> T,
{
    catch_unwind(AssertUnwindSafe(computation)).map_err(|payload| {
        tracing::debug!(
            panic_message = panic_message(payload.as_ref()),
            "captured panic as Try failure"
        );
        E::from_panic(payload)
    })
}

impl<A, E> Try<A, E> {
    /// Creates a success.
    #[inline]
    pub const fn success(value: A) -> Self {
        Self::Success(value)
    }

    /// Creates a failure.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Lifts a value into `Success`.
    #[inline]
    pub const fn pure(value: A) -> Self {
        Self::Success(value)
    }

    /// Runs `thunk` immediately, capturing a panic as `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Try;
    ///
    /// let parsed: Try<i32> = Try::of(|| "12".parse::<i32>().unwrap());
    /// assert_eq!(parsed, Try::Success(12));
    ///
    /// let broken: Try<i32> = Try::of(|| "twelve".parse::<i32>().unwrap());
    /// assert!(broken.is_failure());
    /// ```
    pub fn of<F>(thunk: F) -> Self
    where
        E: FromPanic,
        F: FnOnce() -> A,
    {
        match capture(thunk) {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }

    /// Adopts an explicit `Result`, with `Err` as `Failure`.
    #[inline]
    pub fn from_result(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }

    /// Total case analysis over both variants.
    #[inline]
    pub fn match_with<D, S, F>(self, if_success: S, if_failure: F) -> D
    where
        S: FnOnce(A) -> D,
        F: FnOnce(E) -> D,
    {
        match self {
            Self::Success(value) => if_success(value),
            Self::Failure(error) => if_failure(error),
        }
    }

    /// Returns `true` for `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Sequences a dependent computation, capturing a panic raised by `function`.
    ///
    /// On `Failure`, returns a `Failure` carrying the same error without
    /// calling `function`.
    pub fn bind<B, F>(self, function: F) -> Try<B, E>
    where
        E: FromPanic,
        F: FnOnce(A) -> Try<B, E>,
    {
        match self {
            Self::Success(value) => capture(|| function(value)).unwrap_or_else(Try::Failure),
            Self::Failure(error) => Try::Failure(error),
        }
    }

    /// Transforms the success value, capturing a panic raised by `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::{CaughtPanic, Try};
    ///
    /// let doubled: Try<i32> = Try::success(21).map(|x| x * 2);
    /// assert_eq!(doubled, Try::Success(42));
    ///
    /// let failed: Try<i32> = Try::success(0).map(|_| panic!("no"));
    /// assert_eq!(failed, Try::Failure(CaughtPanic::new("no")));
    /// ```
    pub fn map<B, F>(self, function: F) -> Try<B, E>
    where
        E: FromPanic,
        F: FnOnce(A) -> B,
    {
        self.bind(|value| Try::Success(function(value)))
    }

    /// Unwraps the success value or substitutes `default`.
    #[inline]
    pub fn get_or_else(self, default: A) -> A {
        self.match_with(|value| value, |_| default)
    }

    /// Turns a `Failure` into a `Success` built from its error.
    ///
    /// If `function` itself panics the result is a new `Failure` carrying that
    /// panic. A `Success` is returned unchanged.
    #[must_use]
    pub fn recover<F>(self, function: F) -> Self
    where
        E: FromPanic,
        F: FnOnce(E) -> A,
    {
        self.recover_with(|error| Self::Success(function(error)))
    }

    /// Replaces a `Failure` with the `Try` produced from its error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Try;
    ///
    /// let retried: Try<i32, String> = Try::failure("timeout".to_string())
    ///     .recover_with(|error| if error == "timeout" { Try::Success(0) } else { Try::Failure(error) });
    /// assert_eq!(retried, Try::Success(0));
    /// ```
    #[must_use]
    pub fn recover_with<F>(self, function: F) -> Self
    where
        E: FromPanic,
        F: FnOnce(E) -> Self,
    {
        match self {
            success @ Self::Success(_) => success,
            Self::Failure(error) => capture(|| function(error)).unwrap_or_else(Self::Failure),
        }
    }

    /// Converts into a standard `Result`.
    #[inline]
    pub fn into_result(self) -> Result<A, E> {
        self.match_with(Ok, Err)
    }

    /// Converts into an [`Either`], with `Success` as `Right`.
    #[inline]
    pub fn into_either(self) -> Either<E, A> {
        self.match_with(Either::Right, Either::Left)
    }

    /// Keeps the success value, discarding any error.
    #[inline]
    pub fn to_maybe(self) -> Maybe<A> {
        self.match_with(Maybe::Some, |_| Maybe::None)
    }
}

impl<A, E> From<Result<A, E>> for Try<A, E> {
    fn from(result: Result<A, E>) -> Self {
        Self::from_result(result)
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A, E> TypeConstructor for Try<A, E> {
    type Inner = A;
    type WithType<B> = Try<B, E>;
}

impl<A, E: FromPanic> Functor for Try<A, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Try<B, E>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        self.map(function)
    }
}

impl<A, E: FromPanic> Applicative for Try<A, E> {
    #[inline]
    fn pure<B>(value: B) -> Try<B, E>
    where
        B: Clone + 'static,
    {
        Try::Success(value)
    }
}

impl<A, E: FromPanic> Monad for Try<A, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Try<B, E>
    where
        F: Fn(A) -> Try<B, E> + 'static,
        B: 'static,
    {
        self.bind(function)
    }
}
