//! Conversion of panic payloads into `Try` failure values.

use std::any::Any;

/// The default failure payload of [`Try`](super::Try).
///
/// Holds the text of the captured panic. Panics raised with a `&str` or
/// `String` message keep that message; any other payload is reported as
/// `"unknown panic payload"`.
///
/// # Examples
///
/// ```rust
/// use monadkit::control::{CaughtPanic, Try};
///
/// let failed: Try<i32> = Try::of(|| panic!("boom"));
/// assert_eq!(failed.into_result(), Err(CaughtPanic::new("boom")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("computation panicked: {message}")]
pub struct CaughtPanic {
    message: String,
}

impl CaughtPanic {
    /// Creates a captured panic carrying the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The panic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Types that can be built from a captured panic payload.
///
/// `Try` calls [`FromPanic::from_panic`] whenever a function passed to one of
/// its combinators panics. Implement it for a domain error type to receive
/// typed failures raised with [`std::panic::panic_any`]:
///
/// ```rust
/// use std::any::Any;
/// use monadkit::control::{FromPanic, Try};
///
/// #[derive(Debug, PartialEq)]
/// enum ParseFailure {
///     Empty,
///     Other(String),
/// }
///
/// impl FromPanic for ParseFailure {
///     fn from_panic(payload: Box<dyn Any + Send>) -> Self {
///         match payload.downcast::<ParseFailure>() {
///             Ok(failure) => *failure,
///             Err(other) => ParseFailure::Other(format!("{other:?}")),
///         }
///     }
/// }
///
/// let result: Try<usize, ParseFailure> =
///     Try::success("").map(|text: &str| {
///         if text.is_empty() {
///             std::panic::panic_any(ParseFailure::Empty);
///         }
///         text.len()
///     });
/// assert_eq!(result.into_result(), Err(ParseFailure::Empty));
/// ```
pub trait FromPanic: Sized {
    /// Builds the failure value from the payload handed out by `catch_unwind`.
    fn from_panic(payload: Box<dyn Any + Send>) -> Self;
}

impl FromPanic for CaughtPanic {
    fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        match payload.downcast::<Self>() {
            Ok(caught) => *caught,
            Err(payload) => Self::new(panic_message(payload.as_ref())),
        }
    }
}

impl FromPanic for String {
    fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        match payload.downcast::<Self>() {
            Ok(message) => *message,
            Err(payload) => panic_message(payload.as_ref()).to_owned(),
        }
    }
}

impl FromPanic for Box<dyn Any + Send> {
    fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        payload
    }
}

/// Extracts the human-readable message of a panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else if let Some(caught) = payload.downcast_ref::<CaughtPanic>() {
        caught.message()
    } else {
        "unknown panic payload"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn payload_of<T: Any + Send>(value: T) -> Box<dyn Any + Send> {
        Box::new(value)
    }

    #[rstest]
    fn static_str_payload_keeps_message() {
        assert_eq!(CaughtPanic::from_panic(payload_of("boom")).message(), "boom");
    }

    #[rstest]
    fn string_payload_keeps_message() {
        assert_eq!(
            String::from_panic(payload_of(String::from("formatted 42"))),
            "formatted 42"
        );
    }

    #[rstest]
    fn unknown_payload_gets_placeholder() {
        assert_eq!(
            CaughtPanic::from_panic(payload_of(42_u8)).message(),
            "unknown panic payload"
        );
    }

    #[rstest]
    fn caught_panic_payload_is_preserved() {
        let original = CaughtPanic::new("typed");
        assert_eq!(CaughtPanic::from_panic(payload_of(original.clone())), original);
    }

    #[rstest]
    fn display_includes_message() {
        assert_eq!(
            CaughtPanic::new("boom").to_string(),
            "computation panicked: boom"
        );
    }
}
