//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Maybe<_>` or `List<_>` as type constructors.
//! [`TypeConstructor`] works around this: every container names the type it is
//! currently applied to (`Inner`) and how to re-apply itself to another type
//! (`WithType<B>`).
//!
//! # Example
//!
//! ```rust
//! use monadkit::control::Maybe;
//! use monadkit::typeclass::TypeConstructor;
//!
//! fn empty_like<T: TypeConstructor>(_value: &T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none: Maybe<String> = empty_like(&Maybe::Some(42));
//! assert!(none.is_none());
//! ```

/// A trait representing a type constructor.
///
/// # Laws
///
/// For any `F: TypeConstructor`, `<F as TypeConstructor>::WithType<F::Inner>`
/// is the same type as `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `Maybe<i32>`, this would be `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// The `TypeConstructor<Inner = B>` constraint keeps the result chainable.
    type WithType<B>: TypeConstructor<Inner = B>;
}
