//! Persistent (immutable) singly-linked list.
//!
//! This module provides [`List`], a cons-list that is either a `Pair` of a
//! head element and a tail list, or the canonical `Empty` list.
//!
//! # Overview
//!
//! - O(1) prepend (`cons`, `pair`)
//! - O(1) head, tail and length access
//! - O(n) append, reverse, filter and bind
//!
//! Lists are never mutated. `cons` shares the whole receiver as its tail,
//! and `append`, `filter` and `bind` share both the second list and the
//! elements themselves, so none of them requires `T: Clone`.
//!
//! The empty list owns no allocation; every `List::empty()` is equal to
//! every other. Test for emptiness with [`List::is_empty`] or
//! [`List::match_with`].
//!
//! # Examples
//!
//! ```rust
//! use monadkit::persistent::List;
//!
//! let list = List::of([1, 2, 3]);
//! let expanded = list.bind(|x| List::of([*x, x * 10]));
//! assert_eq!(expanded.to_vec(), vec![1, 10, 2, 20, 3, 30]);
//!
//! // Structural sharing: the original list is preserved
//! let extended = list.cons(0);
//! assert_eq!(list.len(), 3);
//! assert_eq!(extended.len(), 4);
//! ```
//!
//! # Structural Sharing
//!
//! ```text
//! list1: 1 -> 2 -> 3 -> Empty
//! list2 = list1.cons(0): 0 -> [1 -> 2 -> 3 -> Empty]  // shares [1, 2, 3] with list1
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::rc::Rc;

use crate::typeclass::{Applicative, Functor, Monad, Monoid, Semigroup, TypeConstructor};

/// A `Pair` cell.
///
/// The element sits behind its own `Rc` so that lists built from this one
/// can share it without cloning.
struct Node<T> {
    head: Rc<T>,
    tail: List<T>,
    /// Length of the list starting at this node.
    length: usize,
}

/// A persistent singly-linked list: a `Pair` of head and tail, or `Empty`.
///
/// # Time Complexity
///
/// | Operation     | Complexity |
/// |---------------|------------|
/// | `empty`       | O(1)       |
/// | `pair`/`cons` | O(1)       |
/// | `head`/`tail` | O(1)       |
/// | `len`         | O(1)       |
/// | `append`      | O(n)       |
/// | `reverse`     | O(n)       |
/// | `bind`        | O(total)   |
///
/// # Examples
///
/// ```rust
/// use monadkit::persistent::List;
///
/// let list = List::pair(1, List::pair(2, List::empty()));
/// assert_eq!(list.head(), Some(&1));
/// assert_eq!(list.tail().head(), Some(&2));
/// ```
pub struct List<T> {
    node: Option<Rc<Node<T>>>,
}

impl<T> List<T> {
    /// Returns the canonical empty list.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self { node: None }
    }

    /// A list holding exactly `value`.
    #[inline]
    #[must_use]
    pub fn pure(value: T) -> Self {
        Self::pair(value, Self::empty())
    }

    /// Builds a `Pair` from a head element and a tail list.
    #[inline]
    #[must_use]
    pub fn pair(head: T, tail: Self) -> Self {
        Self::pair_shared(Rc::new(head), tail)
    }

    fn pair_shared(head: Rc<T>, tail: Self) -> Self {
        let length = tail.len() + 1;
        Self {
            node: Some(Rc::new(Node { head, tail, length })),
        }
    }

    /// Prepends an element, sharing `self` as the new tail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::persistent::List;
    ///
    /// let list = List::empty().cons(3).cons(2).cons(1);
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn cons(&self, head: T) -> Self {
        Self::pair(head, self.clone())
    }

    /// Builds a list holding the items in iteration order.
    pub fn of<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut elements: Vec<T> = items.into_iter().collect();
        let mut list = Self::empty();
        while let Some(element) = elements.pop() {
            list = Self::pair(element, list);
        }
        list
    }

    /// Total case analysis: `if_pair` receives the head and the tail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::persistent::List;
    ///
    /// let describe = |list: &List<i32>| list.match_with(
    ///     |head, tail| format!("{head} then {} more", tail.len()),
    ///     || "empty".to_string(),
    /// );
    /// assert_eq!(describe(&List::of([1, 2, 3])), "1 then 2 more");
    /// assert_eq!(describe(&List::empty()), "empty");
    /// ```
    pub fn match_with<D, P, E>(&self, if_pair: P, if_empty: E) -> D
    where
        P: FnOnce(&T, &Self) -> D,
        E: FnOnce() -> D,
    {
        match self.node.as_deref() {
            Some(node) => if_pair(&node.head, &node.tail),
            None => if_empty(),
        }
    }

    /// Returns `true` for the empty list.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.node.is_none()
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.node.as_ref().map_or(0, |node| node.length)
    }

    /// The first element, if any.
    #[inline]
    pub fn head(&self) -> Option<&T> {
        self.node.as_deref().map(|node| &*node.head)
    }

    /// Everything after the head; the empty list stays empty.
    #[inline]
    #[must_use]
    pub fn tail(&self) -> Self {
        self.node
            .as_ref()
            .map_or_else(Self::empty, |node| node.tail.clone())
    }

    /// Borrowing iterator from head to last element.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.node.as_deref(),
            remaining: self.len(),
        }
    }

    fn nodes(&self) -> impl Iterator<Item = &Node<T>> {
        std::iter::successors(self.node.as_deref(), |node| node.tail.node.as_deref())
    }

    /// Rebuilds `heads` in order in front of `tail`.
    fn from_shared(heads: Vec<&Rc<T>>, tail: Self) -> Self {
        heads
            .into_iter()
            .rev()
            .fold(tail, |list, head| Self::pair_shared(Rc::clone(head), list))
    }

    /// Maps every element to a list and concatenates the results in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::persistent::List;
    ///
    /// let pairs = List::of([1, 2]).bind(|x| List::of([(*x, 'a'), (*x, 'b')]));
    /// assert_eq!(pairs.to_vec(), vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]);
    /// ```
    pub fn bind<B, F>(&self, function: F) -> List<B>
    where
        F: FnMut(&T) -> List<B>,
    {
        let expansions: Vec<List<B>> = self.iter().map(function).collect();
        expansions
            .iter()
            .rev()
            .fold(List::empty(), |tail, expansion| expansion.append(&tail))
    }

    /// Transforms every element.
    pub fn map<B, F>(&self, function: F) -> List<B>
    where
        F: FnMut(&T) -> B,
    {
        self.iter().map(function).collect()
    }

    /// Keeps, in order, the elements satisfying `predicate`.
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let kept: Vec<&Rc<T>> = self
            .nodes()
            .map(|node| &node.head)
            .filter(|head| predicate(head))
            .collect();
        Self::from_shared(kept, Self::empty())
    }

    /// Folds head to tail: `f(f(f(seed, a), b), c)`.
    pub fn fold_left<D, F>(&self, seed: D, function: F) -> D
    where
        F: FnMut(D, &T) -> D,
    {
        self.iter().fold(seed, function)
    }

    /// Folds the tail first, then combines the head: `f(fold_right(tail), head)`.
    ///
    /// The accumulator is the first argument, the head the second. Runs in
    /// constant stack depth.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::persistent::List;
    ///
    /// let trace = List::of(["a", "b", "c"])
    ///     .fold_right(String::new(), |accumulator, head| accumulator + head);
    /// assert_eq!(trace, "cba");
    /// ```
    pub fn fold_right<D, F>(&self, seed: D, function: F) -> D
    where
        F: FnMut(D, &T) -> D,
    {
        let elements: Vec<&T> = self.iter().collect();
        elements.into_iter().rev().fold(seed, function)
    }

    /// Concatenates `other` after `self`; `other` is shared, not copied.
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        let heads: Vec<&Rc<T>> = self.nodes().map(|node| &node.head).collect();
        Self::from_shared(heads, other.clone())
    }

    /// The elements in reverse order.
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.nodes().fold(Self::empty(), |list, node| {
            Self::pair_shared(Rc::clone(&node.head), list)
        })
    }

    /// Copies the elements into a `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

/// Borrowing iterator over a [`List`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.tail.node.as_deref();
        self.remaining -= 1;
        Some(&*node.head)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        Self {
            node: self.node.clone(),
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::empty()
    }
}

// Unlinks uniquely owned nodes one at a time so that dropping a long list
// does not recurse once per element.
impl<T> Drop for List<T> {
    fn drop(&mut self) {
        let mut next = self.node.take();
        while let Some(node) = next {
            match Rc::try_unwrap(node) {
                Ok(mut owned) => next = owned.tail.node.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for List<T> {
    type Inner = T;
    type WithType<B> = List<B>;
}

impl<T: Clone> Functor for List<T> {
    fn fmap<B, F>(self, function: F) -> List<B>
    where
        F: Fn(T) -> B + 'static,
        B: 'static,
    {
        self.map(|element| function(element.clone()))
    }
}

impl<T: Clone> Applicative for List<T> {
    fn pure<B>(value: B) -> List<B>
    where
        B: Clone + 'static,
    {
        List::pure(value)
    }
}

impl<T: Clone> Monad for List<T> {
    fn flat_map<B, F>(self, function: F) -> List<B>
    where
        F: Fn(T) -> List<B> + 'static,
        B: 'static,
    {
        self.bind(|element| function(element.clone()))
    }
}

impl<T> Semigroup for List<T> {
    fn combine(self, other: Self) -> Self {
        self.append(&other)
    }
}

impl<T> Monoid for List<T> {
    fn empty() -> Self {
        Self::empty()
    }
}
