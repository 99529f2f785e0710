//! Functor type class - mapping over container values.
//!
//! A `Functor` transforms the contents of a container without changing its
//! shape: a `Maybe::None` stays `None`, a `List` keeps its length, a `Writer`
//! keeps its log.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadkit::control::Maybe;
//! use monadkit::typeclass::Functor;
//!
//! let transformed: Maybe<String> = Maybe::Some(5).fmap(|n| n.to_string());
//! assert_eq!(transformed, Maybe::Some("5".to_string()));
//!
//! let none: Maybe<i32> = Maybe::none();
//! assert_eq!(none.fmap(|n| n.to_string()), Maybe::none());
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// fa.fmap(|x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value(s) inside the functor.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms the inner value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::persistent::List;
    /// use monadkit::typeclass::Functor;
    ///
    /// let doubled = List::of([1, 2, 3]).fmap(|n| n * 2);
    /// assert_eq!(doubled, List::of([2, 4, 6]));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: Fn(Self::Inner) -> B + 'static,
        B: 'static;

    /// Replaces the value(s) inside the functor with a constant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::control::Maybe;
    /// use monadkit::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::Some(5).replace("replaced"), Maybe::Some("replaced"));
    /// assert_eq!(Maybe::<i32>::none().replace("replaced"), Maybe::none());
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone + 'static,
    {
        self.fmap(move |_| value.clone())
    }

    /// Discards the value(s) inside the functor, keeping only the structure.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.fmap(|_| ())
    }
}
