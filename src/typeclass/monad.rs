//! Monad type class - sequencing computations within a context.
//!
//! Every container in this crate implements [`Monad`] by delegating to its
//! inherent `bind`, so generic code can sequence any of them.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadkit::control::Maybe;
//! use monadkit::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> Maybe<i32> {
//!     Maybe::from_nullable(text.parse::<i32>().ok()).filter(|n| *n > 0)
//! }
//!
//! let result = Maybe::Some("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Maybe::Some(n * 2));
//! assert_eq!(result, Maybe::Some(84));
//! ```

use super::functor::Functor;

/// A type class for types that support sequencing of dependent computations.
///
/// `flat_map` runs a function producing a new container and flattens the
/// nested result according to the container's own rule: short-circuiting for
/// `Maybe`/`Either`/`Try`, concatenation for `List`, deferred chaining for
/// `IO` and log combination for `Writer`.
pub trait Monad: Functor {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// In Haskell, this is `>>=` (bind).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::persistent::List;
    /// use monadkit::typeclass::Monad;
    ///
    /// let expanded = List::of([1, 2, 3]).flat_map(|x| List::of([x, x * 10]));
    /// assert_eq!(expanded, List::of([1, 10, 2, 20, 3, 30]));
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: Fn(Self::Inner) -> Self::WithType<B> + 'static,
        B: 'static;

    /// Alias for `flat_map` to match Rust's naming conventions.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: Fn(Self::Inner) -> Self::WithType<B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// If `self` is a failure-like value the failure propagates and `next`
    /// is never reached.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Maybe;
    /// use monadkit::typeclass::Monad;
    ///
    /// assert_eq!(Maybe::Some(5).then(Maybe::Some("hello")), Maybe::Some("hello"));
    /// assert_eq!(Maybe::<i32>::none().then(Maybe::Some("hello")), Maybe::none());
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        Self::WithType<B>: Clone + 'static,
        B: 'static,
    {
        self.flat_map(move |_| next.clone())
    }
}
