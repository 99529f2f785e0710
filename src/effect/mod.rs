//! Effect containers: deferred side effects and accumulated logs.
//!
//! # Base Monads
//!
//! - [`IO`]: A deferred, re-runnable computation
//! - [`Writer`]: A value paired with a log folded through a [`LogMonoid`]
//!
//! # IO Monad
//!
//! Side effects are deferred until `run_unsafe` is called, and every call
//! runs the whole composed chain again.
//!
//! ```rust
//! use monadkit::effect::IO;
//!
//! let io = IO::pure(10)
//!     .map(|x| x * 2)
//!     .bind(|x| IO::pure(x + 1));
//!
//! assert_eq!(io.run_unsafe(), 21);
//! assert_eq!(io.run_unsafe(), 21);
//! ```
//!
//! # Writer Monad
//!
//! ```rust
//! use monadkit::effect::{LogMonoid, Writer};
//!
//! let log = LogMonoid::<String>::from_monoid();
//! let (value, output) = Writer::of(2, &log)
//!     .bind(|value, make| make.make(value * 10, "times ten;".to_string()))
//!     .tell("done;".to_string())
//!     .run();
//!
//! assert_eq!(value, 20);
//! assert_eq!(output, "times ten;done;");
//! ```

// =============================================================================
// IO Monad
// =============================================================================

mod io;

pub use io::IO;

// =============================================================================
// Writer Monad
// =============================================================================

mod error;
mod log_monoid;
mod writer;

pub use error::WriterError;
pub use log_monoid::LogMonoid;
pub use writer::{Writer, WriterMaker};
