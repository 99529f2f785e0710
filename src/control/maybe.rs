//! Maybe type - presence or absence of a value.
//!
//! `Maybe<A>` is the crate's Option container. It is named `Maybe` so it can
//! sit next to `std::option::Option` without shadowing it; the variants keep
//! the familiar `Some`/`None` names.
//!
//! [`Maybe::match_with`] is the extraction primitive: `get_or_else`,
//! `or_else`, `bind` and `map` are all defined through it. Absence is a
//! value, never an error, and nothing in this module panics on its own.
//!
//! # Examples
//!
//! ```rust
//! use monadkit::control::Maybe;
//!
//! let six = Maybe::pure(5).map(|x| x + 1);
//! assert_eq!(six.match_with(|value| value, || 0), 6);
//!
//! let none: Maybe<i32> = Maybe::none();
//! assert_eq!(none.map(|x| x + 1), Maybe::none());
//! ```

use std::fmt;

use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// An optional value: either `Some(A)` or the canonical `None`.
///
/// `None` carries no data, so every `Maybe::<A>::None` is the same value;
/// obtain it through [`Maybe::none`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<A> {
    /// A present value.
    Some(A),
    /// No value.
    None,
}

impl<A> Maybe<A> {
    /// Returns the canonical empty value.
    #[inline]
    #[must_use]
    pub const fn none() -> Self {
        Self::None
    }

    /// Wraps a value in `Some`.
    #[inline]
    pub const fn pure(value: A) -> Self {
        Self::Some(value)
    }

    /// Wraps a nullable value: `Option::None` becomes `None`, anything else `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Maybe;
    ///
    /// let lookup = std::env::var("MONADKIT_SURELY_UNSET").ok();
    /// assert_eq!(Maybe::from_nullable(lookup), Maybe::none());
    /// assert_eq!(Maybe::from_nullable(Some("set")), Maybe::Some("set"));
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<A>) -> Self {
        value.map_or(Self::None, Self::Some)
    }

    /// Total case analysis: calls `if_some` with the value, or `if_none`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Maybe;
    ///
    /// let describe = |maybe: Maybe<i32>| maybe.match_with(
    ///     |value| format!("got {value}"),
    ///     || "nothing".to_string(),
    /// );
    /// assert_eq!(describe(Maybe::Some(3)), "got 3");
    /// assert_eq!(describe(Maybe::none()), "nothing");
    /// ```
    #[inline]
    pub fn match_with<D, S, N>(self, if_some: S, if_none: N) -> D
    where
        S: FnOnce(A) -> D,
        N: FnOnce() -> D,
    {
        match self {
            Self::Some(value) => if_some(value),
            Self::None => if_none(),
        }
    }

    /// Sequences a computation that may itself produce no value.
    ///
    /// `None` short-circuits without calling `function`.
    #[inline]
    pub fn bind<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        self.match_with(function, Maybe::none)
    }

    /// Transforms the value if present. Equivalent to `bind(|x| Maybe::pure(f(x)))`.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.bind(|value| Maybe::pure(function(value)))
    }

    /// Unwraps the value or substitutes `default`.
    #[inline]
    pub fn get_or_else(self, default: A) -> A {
        self.match_with(|value| value, || default)
    }

    /// Returns `self` when it holds a value; otherwise evaluates `fallback`.
    ///
    /// The fallback runs only on `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Maybe;
    ///
    /// let primary: Maybe<&str> = Maybe::none();
    /// assert_eq!(primary.or_else(|| Maybe::Some("backup")), Maybe::Some("backup"));
    ///
    /// let kept = Maybe::Some("primary").or_else(|| unreachable!());
    /// assert_eq!(kept, Maybe::Some("primary"));
    /// ```
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, fallback: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        self.match_with(Self::Some, fallback)
    }

    /// Keeps the value only if it satisfies `predicate`.
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        self.bind(|value| {
            if predicate(&value) {
                Self::Some(value)
            } else {
                Self::None
            }
        })
    }

    /// Returns `true` for `Some`.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` for `None`.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Borrows the value: `&Maybe<A>` to `Maybe<&A>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    /// Converts into the standard library's `Option`.
    #[inline]
    pub fn into_option(self) -> Option<A> {
        self.match_with(Some, || None)
    }
}

impl<A> Default for Maybe<A> {
    fn default() -> Self {
        Self::None
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    fn from(value: Option<A>) -> Self {
        Self::from_nullable(value)
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    fn from(value: Maybe<A>) -> Self {
        value.into_option()
    }
}

impl<A: fmt::Display> fmt::Display for Maybe<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::None => write!(formatter, "None"),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        self.map(function)
    }
}

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B>
    where
        B: Clone + 'static,
    {
        Maybe::Some(value)
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: Fn(A) -> Maybe<B> + 'static,
        B: 'static,
    {
        self.bind(function)
    }
}
