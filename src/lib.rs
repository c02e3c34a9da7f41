//! Optional and Outcome containers with a complete combinator API.
//!
//! Two closed tagged unions let calling code express absence and fallibility
//! as data:
//!
//! - [`Optional<T>`]: `Present(T)` or `Absent`
//! - [`Outcome<T, E>`]: `Success(T)` or `Failure(E)`
//!
//! Both are immutable values. Every combinator consumes its receiver and
//! returns a new container; nothing is ever mutated in place, so instances can
//! be shared across threads whenever their payloads can.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ optional.rs  │◀───▶│  convert.rs  │◀───▶│  outcome.rs  │
//! │ (Optional,   │     │ (ok_or, ok,  │     │ (Outcome,    │
//! │  Iter)       │     │  transpose,  │     │  map_err)    │
//! └──────────────┘     │  flatten)    │     └──────────────┘
//!        │             └──────────────┘            │
//!        ▼                                         ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                      error.rs                       │
//! │      (ExpectError, UnwrapError, raise path)         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! `intent.rs` adds payload-only markers (`some`, `none`, `ok`, `err`) that
//! promote into either container, and `laws.rs` states the algebraic laws as
//! predicates.
//!
//! # Errors
//!
//! Only `unwrap`, `expect`, `unwrap_err` and `expect_err` can fail, and only
//! when called on the wrong variant. That is a contract violation: it panics
//! with an [`ExpectError`] or [`UnwrapError`] message and, with the `tracing`
//! feature, logs the violation first. The `try_*` variants return the error
//! instead.
//!
//! # Usage
//!
//! ```
//! use sumkit::{Optional, Outcome};
//!
//! fn divide(a: f32, b: f32) -> Optional<f32> {
//!     if b != 0.0 { Optional::some(a / b) } else { Optional::none() }
//! }
//!
//! let quotient: Outcome<f32, &str> = divide(1.0, 4.0).ok_or("division by zero");
//! assert_eq!(quotient, Outcome::Success(0.25));
//! assert_eq!(divide(1.0, 0.0).map_or(-1.0, |q| q * 2.0), -1.0);
//! ```

// Module declarations
pub mod convert;
mod error;
pub mod intent;
pub mod laws;
mod optional;
mod outcome;
pub mod testing;

// Re-exports for public API
pub use error::{ExpectError, UnwrapError};
pub use intent::{err, none, ok, some, ErrValue, NoneValue, OkValue, SomeValue};
pub use optional::{IntoIter, Iter, Optional};
pub use outcome::Outcome;
