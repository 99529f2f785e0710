//! IO Monad - deferred, re-runnable side effects.
//!
//! The `IO` type describes a computation that may perform side effects.
//! Nothing happens when an `IO` is built or composed; effects occur only
//! inside [`IO::run_unsafe`], and every call re-executes the entire composed
//! chain. Results are never cached.
//!
//! # Examples
//!
//! ```rust
//! use monadkit::effect::IO;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let counter = Rc::new(Cell::new(0));
//! let observed = Rc::clone(&counter);
//!
//! let io = IO::of(1).bind(move |value| {
//!     observed.set(observed.get() + 1);
//!     IO::of(value)
//! });
//!
//! // Not executed yet
//! assert_eq!(counter.get(), 0);
//!
//! assert_eq!(io.run_unsafe(), 1);
//! assert_eq!(io.run_unsafe(), 1);
//! assert_eq!(counter.get(), 2);
//! ```

use std::fmt;
use std::rc::Rc;

use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A monad representing a deferred computation producing `A`.
///
/// `IO<A>` wraps its computation behind an `Rc`, so cloning an `IO` is
/// cheap and both clones run the same computation.
///
/// # Monad Laws
///
/// Compared by the values their runs produce, `IO` satisfies:
///
/// 1. **Left Identity**: `IO::pure(a).bind(f) == f(a)`
/// 2. **Right Identity**: `m.bind(IO::pure) == m`
/// 3. **Associativity**: `m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))`
pub struct IO<A> {
    /// The wrapped computation; called once per run.
    run_io: Rc<dyn Fn() -> A>,
}

impl<A: 'static> IO<A> {
    /// Creates an IO action from a function.
    ///
    /// The function is not called until `run_unsafe`, and is called again on
    /// every run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::effect::IO;
    ///
    /// let io = IO::new(|| 10 + 20);
    /// assert_eq!(io.run_unsafe(), 30);
    /// ```
    pub fn new<F>(action: F) -> Self
    where
        F: Fn() -> A + 'static,
    {
        Self {
            run_io: Rc::new(action),
        }
    }

    /// Wraps a pure value; each run yields a clone of it.
    pub fn of(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move || value.clone())
    }

    /// Alias for [`IO::of`].
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::of(value)
    }

    /// Executes the computation and returns its result.
    ///
    /// This is the only operation that performs the side effect. It can be
    /// called any number of times; each call runs the whole chain again.
    pub fn run_unsafe(&self) -> A {
        tracing::trace!("running IO computation");
        (self.run_io)()
    }

    /// Chains a dependent IO.
    ///
    /// The returned IO, when run, runs `self`, passes the result to
    /// `function`, and runs the IO it returns.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::effect::IO;
    ///
    /// let io = IO::pure(10).bind(|x| IO::pure(x * 2));
    /// assert_eq!(io.run_unsafe(), 20);
    /// ```
    pub fn bind<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> IO<B> + 'static,
        B: 'static,
    {
        IO::new(move || function(self.run_unsafe()).run_unsafe())
    }

    /// Transforms the result of the computation.
    pub fn map<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        IO::new(move || function(self.run_unsafe()))
    }

    /// Sequences two IO actions, discarding the result of the first.
    ///
    /// The first action still runs for its side effects.
    pub fn then<B>(self, next: IO<B>) -> IO<B>
    where
        B: 'static,
    {
        IO::new(move || {
            self.run_unsafe();
            next.run_unsafe()
        })
    }

    /// Runs both actions in order and combines their results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::effect::IO;
    ///
    /// let io = IO::pure(10).map2(IO::pure(20), |a, b| a + b);
    /// assert_eq!(io.run_unsafe(), 30);
    /// ```
    pub fn map2<B, C, F>(self, other: IO<B>, function: F) -> IO<C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        IO::new(move || {
            let first = self.run_unsafe();
            let second = other.run_unsafe();
            function(first, second)
        })
    }

    /// Runs both actions in order and pairs their results.
    pub fn product<B>(self, other: IO<B>) -> IO<(A, B)>
    where
        B: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }
}

impl<A> Clone for IO<A> {
    fn clone(&self) -> Self {
        Self {
            run_io: Rc::clone(&self.run_io),
        }
    }
}

impl<A> fmt::Debug for IO<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("IO").finish_non_exhaustive()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for IO<A> {
    type Inner = A;
    type WithType<B> = IO<B>;
}

impl<A: 'static> Functor for IO<A> {
    fn fmap<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        self.map(function)
    }
}

impl<A: 'static> Applicative for IO<A> {
    fn pure<B>(value: B) -> IO<B>
    where
        B: Clone + 'static,
    {
        IO::of(value)
    }
}

impl<A: 'static> Monad for IO<A> {
    fn flat_map<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> IO<B> + 'static,
        B: 'static,
    {
        self.bind(function)
    }
}
