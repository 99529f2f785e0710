//! Persistent (immutable) data structures.
//!
//! - [`List`]: Persistent singly-linked list with monadic flattening
//!
//! # Structural Sharing
//!
//! Operations never modify a list; they build new lists that share as much
//! structure with their inputs as possible.
//!
//! # Examples
//!
//! ```rust
//! use monadkit::persistent::List;
//!
//! let list = List::empty().cons(3).cons(2).cons(1);
//! assert_eq!(list.head(), Some(&1));
//!
//! let evens = List::of(1..=10).filter(|x| x % 2 == 0);
//! assert_eq!(evens.fold_left(0, |sum, x| sum + x), 30);
//! ```

mod list;

pub use list::Iter;
pub use list::List;
