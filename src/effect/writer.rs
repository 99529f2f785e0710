//! Writer Monad - a value paired with an accumulated log.
//!
//! A `Writer<W, A>` carries a result `A`, a log `W`, and the
//! [`LogMonoid`] that folds logs together. Every combinator that joins two
//! logs does so as `monoid.combine(old, new)`, so non-commutative logs such
//! as strings or vectors read in the order the entries were written.
//!
//! # Monoid Identity
//!
//! A writer chain is tied to one monoid handle. The continuation given to
//! [`Writer::bind`] receives a [`WriterMaker`] bound to that handle and
//! should build its result with it. Returning a writer built from a
//! different handle is a programming error: `bind` panics, while
//! [`Writer::try_bind`] reports [`WriterError::MonoidMismatch`].
//!
//! # Laws
//!
//! With a fixed monoid, and comparing `(value, log)` pairs:
//!
//! - Left Identity: `Writer::of(a, &m).bind(f) == f(a)`
//! - Right Identity: `w.bind(|x, make| make.of(x)) == w`
//! - Associativity: `w.bind(f).bind(g) == w.bind(|x, make| f(x, make).bind(g))`
//!
//! # Examples
//!
//! ```rust
//! use monadkit::effect::{LogMonoid, Writer};
//!
//! let log = LogMonoid::<Vec<String>>::from_monoid();
//!
//! let (value, entries) = Writer::of(3, &log)
//!     .tell(vec!["start".to_string()])
//!     .bind(|x, make| make.make(x * x, vec![format!("squared {x}")]))
//!     .map(|x| x + 1)
//!     .run();
//!
//! assert_eq!(value, 10);
//! assert_eq!(entries, vec!["start", "squared 3"]);
//! ```

use std::fmt;

use super::error::WriterError;
use super::log_monoid::LogMonoid;
use crate::typeclass::{Functor, Monad, TypeConstructor};

/// A computation result `A` paired with a log `W`.
///
/// # Type Parameters
///
/// * `W` - The log type, folded by the writer's [`LogMonoid`]
/// * `A` - The result type
pub struct Writer<W, A> {
    value: A,
    log: W,
    monoid: LogMonoid<W>,
}

/// Builds writers bound to the monoid of the writer being extended.
///
/// Handed to the continuation of [`Writer::bind`] so that the continuation
/// never needs to reach for a monoid handle itself.
pub struct WriterMaker<W> {
    monoid: LogMonoid<W>,
}

impl<W> WriterMaker<W> {
    /// Builds a writer holding `value` with `log` as its log.
    pub fn make<A>(&self, value: A, log: W) -> Writer<W, A> {
        Writer {
            value,
            log,
            monoid: self.monoid.clone(),
        }
    }

    /// Builds a writer holding `value` with an identity log.
    pub fn of<A>(&self, value: A) -> Writer<W, A>
    where
        W: Clone,
    {
        Writer::of(value, &self.monoid)
    }
}

impl<W, A> Writer<W, A> {
    /// Wraps `value` with the monoid's identity as its log.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::effect::{LogMonoid, Writer};
    ///
    /// let text = LogMonoid::<String>::from_monoid();
    /// assert_eq!(Writer::of(1, &text).run(), (1, String::new()));
    /// ```
    pub fn of(value: A, monoid: &LogMonoid<W>) -> Self
    where
        W: Clone,
    {
        Self {
            value,
            log: monoid.identity(),
            monoid: monoid.clone(),
        }
    }

    /// Chains a dependent computation and appends its log.
    ///
    /// `function` receives the current value and a [`WriterMaker`] bound to
    /// this writer's monoid. The resulting log is
    /// `monoid.combine(current_log, returned_log)`.
    ///
    /// # Panics
    ///
    /// Panics if `function` returns a writer built with a different
    /// [`LogMonoid`] handle. Use [`Writer::try_bind`] to get the error
    /// instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::effect::{LogMonoid, Writer};
    ///
    /// let text = LogMonoid::<String>::from_monoid();
    /// let doubled = Writer::of(21, &text)
    ///     .bind(|x, make| make.make(x * 2, "doubled;".to_string()));
    /// assert_eq!(doubled.run(), (42, "doubled;".to_string()));
    /// ```
    pub fn bind<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A, &WriterMaker<W>) -> Writer<W, B>,
    {
        match self.try_bind(function) {
            Ok(writer) => writer,
            Err(error) => {
                tracing::error!(%error, "writer continuation broke monoid identity");
                panic!("{error}")
            }
        }
    }

    /// Like [`Writer::bind`], but reports a monoid mismatch as an error.
    ///
    /// # Errors
    ///
    /// Returns [`WriterError::MonoidMismatch`] if `function` returns a writer
    /// built with a different [`LogMonoid`] handle.
    pub fn try_bind<B, F>(self, function: F) -> Result<Writer<W, B>, WriterError>
    where
        F: FnOnce(A, &WriterMaker<W>) -> Writer<W, B>,
    {
        let maker = WriterMaker {
            monoid: self.monoid,
        };
        let next = function(self.value, &maker);

        if !next.monoid.same_as(&maker.monoid) {
            return Err(WriterError::MonoidMismatch);
        }

        Ok(Writer {
            value: next.value,
            log: maker.monoid.combine(self.log, next.log),
            monoid: maker.monoid,
        })
    }

    /// Transforms the value, leaving the log untouched.
    pub fn map<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> B,
    {
        Writer {
            value: function(self.value),
            log: self.log,
            monoid: self.monoid,
        }
    }

    /// Appends one log entry.
    #[must_use]
    pub fn tell(self, entry: W) -> Self {
        let log = self.monoid.combine(self.log, entry);
        Self {
            value: self.value,
            log,
            monoid: self.monoid,
        }
    }

    /// Sequences `next` after this writer, keeping both logs.
    ///
    /// # Panics
    ///
    /// Panics if `next` was built with a different [`LogMonoid`] handle.
    pub fn then<B>(self, next: Writer<W, B>) -> Writer<W, B> {
        self.bind(|_, _| next)
    }

    /// Pairs the value with a copy of the log accumulated so far.
    pub fn listen(self) -> Writer<W, (A, W)>
    where
        W: Clone,
    {
        let captured = self.log.clone();
        self.map(|value| (value, captured))
    }

    /// Rewrites the accumulated log.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::effect::{LogMonoid, Writer};
    ///
    /// let text = LogMonoid::<String>::from_monoid();
    /// let shouted = Writer::of((), &text)
    ///     .tell("quiet".to_string())
    ///     .censor(|log| log.to_uppercase());
    /// assert_eq!(shouted.log(), "QUIET");
    /// ```
    #[must_use]
    pub fn censor<F>(self, modifier: F) -> Self
    where
        F: FnOnce(W) -> W,
    {
        Self {
            value: self.value,
            log: modifier(self.log),
            monoid: self.monoid,
        }
    }

    /// Extracts the value and the log.
    pub fn run(self) -> (A, W) {
        (self.value, self.log)
    }

    /// Borrows the value.
    pub const fn value(&self) -> &A {
        &self.value
    }

    /// Borrows the accumulated log.
    pub const fn log(&self) -> &W {
        &self.log
    }

    /// The monoid handle this writer folds its log with.
    pub const fn monoid(&self) -> &LogMonoid<W> {
        &self.monoid
    }
}

impl<W: Clone, A: Clone> Clone for Writer<W, A> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            log: self.log.clone(),
            monoid: self.monoid.clone(),
        }
    }
}

/// Compares values and logs; the monoid handle is not part of equality.
impl<W: PartialEq, A: PartialEq> PartialEq for Writer<W, A> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.log == other.log
    }
}

impl<W: fmt::Debug, A: fmt::Debug> fmt::Debug for Writer<W, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Writer")
            .field("value", &self.value)
            .field("log", &self.log)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<W, A> TypeConstructor for Writer<W, A> {
    type Inner = A;
    type WithType<B> = Writer<W, B>;
}

impl<W, A> Functor for Writer<W, A> {
    fn fmap<B, F>(self, function: F) -> Writer<W, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        self.map(function)
    }
}

impl<W, A> Monad for Writer<W, A> {
    /// Binds without a [`WriterMaker`]; `function` must reuse this writer's
    /// monoid handle.
    fn flat_map<B, F>(self, function: F) -> Writer<W, B>
    where
        F: Fn(A) -> Writer<W, B> + 'static,
        B: 'static,
    {
        self.bind(move |value, _| function(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn text() -> LogMonoid<String> {
        LogMonoid::from_monoid()
    }

    #[rstest]
    fn of_starts_with_identity_log(text: LogMonoid<String>) {
        let writer = Writer::of(5, &text);
        assert_eq!(writer.value(), &5);
        assert_eq!(writer.log(), "");
        assert!(writer.monoid().same_as(&text));
    }

    #[rstest]
    fn bind_combines_old_log_before_new(text: LogMonoid<String>) {
        let writer = Writer::of(1, &text)
            .tell("a".to_string())
            .bind(|x, make| make.make(x + 1, "b".to_string()));
        assert_eq!(writer.run(), (2, "ab".to_string()));
    }

    #[rstest]
    fn map_preserves_log(text: LogMonoid<String>) {
        let writer = Writer::of(1, &text).tell("kept".to_string()).map(|x| x * 3);
        assert_eq!(writer.run(), (3, "kept".to_string()));
    }

    #[rstest]
    fn try_bind_rejects_foreign_monoid(text: LogMonoid<String>) {
        let foreign = LogMonoid::<String>::from_monoid();
        let result = Writer::of(1, &text).try_bind(|x, _| Writer::of(x, &foreign));
        assert_eq!(result.err(), Some(WriterError::MonoidMismatch));
    }

    #[rstest]
    #[should_panic(expected = "different LogMonoid")]
    fn bind_panics_on_foreign_monoid(text: LogMonoid<String>) {
        let foreign = LogMonoid::<String>::from_monoid();
        let _ = Writer::of(1, &text).bind(|x, _| Writer::of(x, &foreign));
    }

    #[rstest]
    fn listen_exposes_log_so_far(text: LogMonoid<String>) {
        let ((value, seen), log) = Writer::of(7, &text).tell("x".to_string()).listen().run();
        assert_eq!(value, 7);
        assert_eq!(seen, "x");
        assert_eq!(log, "x");
    }

    #[rstest]
    fn then_keeps_both_logs(text: LogMonoid<String>) {
        let first = Writer::of((), &text).tell("1".to_string());
        let second = Writer::of(2, &text).tell("2".to_string());
        assert_eq!(first.then(second).run(), (2, "12".to_string()));
    }
}
