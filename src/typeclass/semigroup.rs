//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadkit::typeclass::Semigroup;
//!
//! assert_eq!(String::from("Hello, ").combine(String::from("World!")), "Hello, World!");
//! assert_eq!(vec![1, 2].combine(vec![3, 4]), vec![1, 2, 3, 4]);
//! ```

/// A type class for types with an associative binary operation.
///
/// `combine` keeps argument order: `a.combine(b)` places `a` before `b`,
/// which is what makes non-commutative logs read in the order they were
/// written.
pub trait Semigroup {
    /// Combines two values using the associative operation.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, cloning as needed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::typeclass::Semigroup;
    ///
    /// let a = String::from("foo");
    /// let b = String::from("bar");
    /// assert_eq!(a.combine_ref(&b), "foobar");
    /// assert_eq!(a, "foo");
    /// ```
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}
