//! Derive macro for monadkit algebraic data types.
//!
//! # Available Derive Macros
//!
//! - [`Adt`]: Generates per-variant constructors and an exhaustive matcher
//!   for an enum.
//!
//! # Example
//!
//! ```rust,ignore
//! use monadkit::adt::Adt;
//!
//! #[derive(Debug, PartialEq, Adt)]
//! enum Shape {
//!     Circle { radius: f64 },
//!     Rectangle(f64, f64),
//!     Point,
//! }
//!
//! let area = Shape::rectangle(3.0, 4.0).match_with(ShapeCases {
//!     circle: |radius| std::f64::consts::PI * radius * radius,
//!     rectangle: |width, height| width * height,
//!     point: || 0.0,
//! });
//! assert_eq!(area, 12.0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod adt;

use proc_macro::TokenStream;

/// Derive macro turning an enum into a monadkit algebraic data type.
///
/// # Generated Code
///
/// For an enum `Shape` the macro generates:
///
/// - one constructor per variant, named after the variant in snake_case and
///   taking the variant's payload fields in declaration order
///   (`Shape::circle(radius)`, `Shape::rectangle(width, height)`,
///   `Shape::point()`); keyword names become raw identifiers
///   (`Match` -> `r#match`)
/// - a `ShapeCases` struct with one public handler field per variant
/// - `Shape::match_with(self, cases: ShapeCases<..>)`, which calls exactly
///   the handler of the value's variant
/// - an implementation of `monadkit::adt::Adt` exposing `TAGS` and `tag()`
///
/// Because every `ShapeCases` field has to be initialised, leaving out the
/// handler of any variant is rejected at compile time.
///
/// # Variant Types
///
/// - **Unit variants** (`Point`): constructor takes no arguments, handler is `FnOnce() -> D`
/// - **Tuple variants** (`Rectangle(f64, f64)`): handler is `FnOnce(f64, f64) -> D`
/// - **Struct variants** (`Circle { radius: f64 }`): handler receives the fields in order
///
/// # Generics
///
/// ```rust,ignore
/// #[derive(Adt)]
/// enum Tree<T> {
///     Leaf(T),
///     Node(Box<Tree<T>>, Box<Tree<T>>),
/// }
///
/// let tree = Tree::node(Box::new(Tree::leaf(1)), Box::new(Tree::leaf(2)));
/// ```
#[proc_macro_derive(Adt)]
pub fn derive_adt(input: TokenStream) -> TokenStream {
    adt::derive_adt_impl(input)
}
