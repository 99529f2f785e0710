//! Runtime monoid handle used by [`Writer`](super::Writer) to fold logs.
//!
//! A [`Monoid`] instance is fixed per type, but a `Writer` log type can be
//! folded in more than one way (concatenate, keep the longest, count...). A
//! `LogMonoid<W>` packages one such choice as a value: an identity element
//! and an associative combine function.
//!
//! Handles are compared by identity. Cloning a handle yields the same
//! monoid; calling [`LogMonoid::new`] or [`LogMonoid::from_monoid`] twice
//! yields two different ones, even if they would fold logs identically.

use std::fmt;
use std::rc::Rc;

use crate::typeclass::{Monoid, Semigroup};

struct MonoidOperations<W> {
    identity: W,
    combine: Box<dyn Fn(W, W) -> W>,
}

/// A shared identity element and associative combine for log type `W`.
///
/// # Examples
///
/// ```rust
/// use monadkit::effect::LogMonoid;
///
/// let sum = LogMonoid::new(0, |left: i32, right: i32| left + right);
/// assert_eq!(sum.identity(), 0);
/// assert_eq!(sum.combine(2, 3), 5);
///
/// let same = sum.clone();
/// assert!(sum.same_as(&same));
///
/// let other = LogMonoid::new(0, |left: i32, right: i32| left + right);
/// assert!(!sum.same_as(&other));
/// ```
pub struct LogMonoid<W> {
    operations: Rc<MonoidOperations<W>>,
}

impl<W> LogMonoid<W> {
    /// Creates a handle from an identity element and a combine function.
    ///
    /// `combine` must be associative and `identity` must be neutral for it;
    /// neither is checked.
    pub fn new<F>(identity: W, combine: F) -> Self
    where
        F: Fn(W, W) -> W + 'static,
    {
        Self {
            operations: Rc::new(MonoidOperations {
                identity,
                combine: Box::new(combine),
            }),
        }
    }

    /// Creates a handle from the type-level [`Monoid`] instance of `W`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::effect::LogMonoid;
    ///
    /// let lines = LogMonoid::<Vec<&str>>::from_monoid();
    /// assert_eq!(lines.combine(vec!["a"], vec!["b"]), vec!["a", "b"]);
    /// ```
    #[must_use]
    pub fn from_monoid() -> Self
    where
        W: Monoid + 'static,
    {
        Self::new(W::empty(), Semigroup::combine)
    }

    /// Returns a copy of the identity element.
    pub fn identity(&self) -> W
    where
        W: Clone,
    {
        self.operations.identity.clone()
    }

    /// Combines two logs, `left` first.
    pub fn combine(&self, left: W, right: W) -> W {
        (self.operations.combine)(left, right)
    }

    /// Returns `true` if both handles refer to the same monoid.
    pub fn same_as(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.operations, &other.operations)
    }
}

impl<W> Clone for LogMonoid<W> {
    fn clone(&self) -> Self {
        Self {
            operations: Rc::clone(&self.operations),
        }
    }
}

impl<W: fmt::Debug> fmt::Debug for LogMonoid<W> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LogMonoid")
            .field("identity", &self.operations.identity)
            .finish_non_exhaustive()
    }
}
