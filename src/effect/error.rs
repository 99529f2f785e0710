//! Error types for the effect containers.

/// Errors reported by [`Writer`](super::Writer) composition.
///
/// # Examples
///
/// ```rust
/// use monadkit::effect::{LogMonoid, Writer, WriterError};
///
/// let first = LogMonoid::<String>::from_monoid();
/// let second = LogMonoid::<String>::from_monoid();
///
/// let mixed = Writer::of(1, &first).try_bind(|value, _| Writer::of(value, &second));
/// assert_eq!(mixed.err(), Some(WriterError::MonoidMismatch));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum WriterError {
    /// The continuation produced a `Writer` folding its log through a
    /// different `LogMonoid` than the receiver.
    #[error("Writer::bind: continuation returned a Writer built with a different LogMonoid")]
    MonoidMismatch,
}
