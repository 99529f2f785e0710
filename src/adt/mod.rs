//! Algebraic data types: tagged sum types with generated constructors and
//! exhaustive matchers.
//!
//! Any enum can derive [`Adt`] (with the `derive` feature). For an enum
//! `Shape` the derive generates:
//!
//! - one snake_case constructor per variant (`Shape::circle(radius)`),
//! - a `ShapeCases` struct with one public handler field per variant,
//! - `Shape::match_with(ShapeCases { .. })`, which dispatches on the variant,
//! - an implementation of this module's [`Adt`] trait.
//!
//! Because `ShapeCases` is a plain struct, leaving out a handler is rejected
//! by the compiler; no dispatch can fall through at runtime.
//!
//! # Examples
//!
//! ```rust
//! # #[cfg(feature = "derive")]
//! # {
//! use monadkit::adt::Adt;
//!
//! #[derive(Debug, Clone, PartialEq, Adt)]
//! enum Shape {
//!     Circle { radius: f64 },
//!     Rectangle(f64, f64),
//!     Dot,
//! }
//!
//! let area = |shape: Shape| shape.match_with(ShapeCases {
//!     circle: |radius| 3.0 * radius * radius,
//!     rectangle: |width, height| width * height,
//!     dot: || 0.0,
//! });
//!
//! assert_eq!(area(Shape::circle(1.0)), 3.0);
//! assert_eq!(area(Shape::rectangle(2.0, 4.0)), 8.0);
//! assert_eq!(Shape::dot().tag(), "Dot");
//! assert_eq!(Shape::TAGS, &["Circle", "Rectangle", "Dot"]);
//! # }
//! ```
//!
//! Leaving a handler out of the `Cases` struct is a compile error
//! (`missing field`), so every variant is handled by construction.

#[cfg(feature = "derive")]
pub use monadkit_derive::Adt;

/// Discriminant metadata for a tagged sum type.
///
/// Implemented by `#[derive(Adt)]`; the tags are the variant names as
/// written in the enum, in declaration order.
pub trait Adt {
    /// Every variant tag, in declaration order.
    const TAGS: &'static [&'static str];

    /// The tag of this value's variant.
    fn tag(&self) -> &'static str;
}
