// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A computation that either succeeded with a value or failed with an error.
//!
//! `Outcome<T, E>` mirrors [`Optional`](crate::Optional) with a payload on
//! both sides. The same laziness rule applies: plain arguments are evaluated
//! by the caller, closures only when needed.
//!
//! Short-circuiting per combinator:
//!
//! | Combinator           | Runs its argument on | Passes through      |
//! |----------------------|----------------------|---------------------|
//! | `map`, `and_then`    | `Success`            | `Failure` unchanged |
//! | `map_err`, `or_else` | `Failure`            | `Success` unchanged |
//! | `inspect`            | `Success`            | always self         |
//! | `inspect_err`        | `Failure`            | always self         |
//!
//! ```
//! use sumkit::Outcome;
//!
//! fn parse(input: &str) -> Outcome<i32, String> {
//!     input.parse::<i32>().map_err(|e| e.to_string()).into()
//! }
//!
//! let doubled = parse("21").map(|n| n * 2).unwrap_or(0);
//! assert_eq!(doubled, 42);
//! assert!(parse("x").is_err());
//! ```

use std::fmt::Debug;

use crate::error::{raise, ExpectError, UnwrapError, UNWRAP_ERR_SUCCESS, UNWRAP_FAILURE};
use crate::optional::{IntoIter, Iter};

/// Success with a `T`, or failure with an `E`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use = "this `Outcome` may be a `Failure`, which should be handled"]
pub enum Outcome<T, E> {
    Success(T),
    Failure(E),
}

use Outcome::{Failure, Success};

impl<T, E> Outcome<T, E> {
    #[inline]
    pub const fn success(value: T) -> Self {
        Success(value)
    }

    #[inline]
    pub const fn failure(error: E) -> Self {
        Failure(error)
    }

    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Success(_))
    }

    #[inline]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    #[inline]
    pub fn is_ok_and(self, predicate: impl FnOnce(T) -> bool) -> bool {
        match self {
            Success(value) => predicate(value),
            Failure(_) => false,
        }
    }

    #[inline]
    pub fn is_err_and(self, predicate: impl FnOnce(E) -> bool) -> bool {
        match self {
            Success(_) => false,
            Failure(error) => predicate(error),
        }
    }

    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(error),
        }
    }

    // ========================================================================
    // TRANSFORMATION
    // ========================================================================

    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        match self {
            Success(value) => Success(f(value)),
            Failure(error) => Failure(error),
        }
    }

    /// `f(value)` on success, otherwise the eagerly evaluated `default`.
    #[inline]
    pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Success(value) => f(value),
            Failure(_) => default,
        }
    }

    /// `f(value)` on success, `on_failure(error)` otherwise.
    #[inline]
    pub fn map_or_else<U>(self, on_failure: impl FnOnce(E) -> U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Success(value) => f(value),
            Failure(error) => on_failure(error),
        }
    }

    #[inline]
    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(f(error)),
        }
    }

    #[inline]
    pub fn inspect(self, action: impl FnOnce(&T)) -> Self {
        if let Success(value) = &self {
            action(value);
        }
        self
    }

    #[inline]
    pub fn inspect_err(self, action: impl FnOnce(&E)) -> Self {
        if let Failure(error) = &self {
            action(error);
        }
        self
    }

    // ========================================================================
    // EXTRACTION
    // ========================================================================

    /// The success value.
    ///
    /// # Panics
    ///
    /// Raises [`ExpectError`] carrying `message` on failure.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Success(value) => value,
            Failure(_) => raise(ExpectError::new(message)),
        }
    }

    /// The success value.
    ///
    /// # Panics
    ///
    /// Raises [`UnwrapError`] annotated with the `Debug` form of the error.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: Debug,
    {
        match self {
            Success(value) => value,
            Failure(error) => raise(UnwrapError::with_payload(UNWRAP_FAILURE, &error)),
        }
    }

    /// The error value.
    ///
    /// # Panics
    ///
    /// Raises [`ExpectError`] carrying `message` on success.
    #[inline]
    #[track_caller]
    pub fn expect_err(self, message: &str) -> E {
        match self {
            Success(_) => raise(ExpectError::new(message)),
            Failure(error) => error,
        }
    }

    /// The error value.
    ///
    /// # Panics
    ///
    /// Raises [`UnwrapError`] annotated with the `Debug` form of the success
    /// value.
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: Debug,
    {
        match self {
            Success(value) => raise(UnwrapError::with_payload(UNWRAP_ERR_SUCCESS, &value)),
            Failure(error) => error,
        }
    }

    pub fn try_expect(self, message: &str) -> Result<T, ExpectError> {
        match self {
            Success(value) => Ok(value),
            Failure(_) => Err(ExpectError::new(message)),
        }
    }

    pub fn try_unwrap(self) -> Result<T, UnwrapError>
    where
        E: Debug,
    {
        match self {
            Success(value) => Ok(value),
            Failure(error) => Err(UnwrapError::with_payload(UNWRAP_FAILURE, &error)),
        }
    }

    pub fn try_expect_err(self, message: &str) -> Result<E, ExpectError> {
        match self {
            Success(_) => Err(ExpectError::new(message)),
            Failure(error) => Ok(error),
        }
    }

    pub fn try_unwrap_err(self) -> Result<E, UnwrapError>
    where
        T: Debug,
    {
        match self {
            Success(value) => Err(UnwrapError::with_payload(UNWRAP_ERR_SUCCESS, &value)),
            Failure(error) => Ok(error),
        }
    }

    /// The success value or the eagerly evaluated `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Success(value) => value,
            Failure(_) => default,
        }
    }

    /// The success value, or `op(error)` which only runs on failure.
    #[inline]
    pub fn unwrap_or_else(self, op: impl FnOnce(E) -> T) -> T {
        match self {
            Success(value) => value,
            Failure(error) => op(error),
        }
    }

    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Success(value) => value,
            Failure(_) => T::default(),
        }
    }

    // ========================================================================
    // CHAINING
    // ========================================================================

    /// `res` on success; on failure the existing error propagates.
    #[inline]
    pub fn and<U>(self, res: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Success(_) => res,
            Failure(error) => Failure(error),
        }
    }

    #[inline]
    pub fn and_then<U>(self, op: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Success(value) => op(value),
            Failure(error) => Failure(error),
        }
    }

    /// This success if there is one, otherwise `res`.
    #[inline]
    pub fn or<F>(self, res: Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Success(value) => Success(value),
            Failure(_) => res,
        }
    }

    /// Recover from a failure. `op` sees the error and may change its type.
    #[inline]
    pub fn or_else<F>(self, op: impl FnOnce(E) -> Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Success(value) => Success(value),
            Failure(error) => op(error),
        }
    }

    // ========================================================================
    // INSPECTION
    // ========================================================================

    #[inline]
    pub fn contains<U>(&self, x: &U) -> bool
    where
        U: PartialEq<T>,
    {
        match self {
            Success(value) => x.eq(value),
            Failure(_) => false,
        }
    }

    #[inline]
    pub fn contains_err<F>(&self, f: &F) -> bool
    where
        F: PartialEq<E>,
    {
        match self {
            Success(_) => false,
            Failure(error) => f.eq(error),
        }
    }

    #[inline]
    pub fn match_with<R>(self, on_ok: impl FnOnce(T) -> R, on_err: impl FnOnce(E) -> R) -> R {
        match self {
            Success(value) => on_ok(value),
            Failure(error) => on_err(error),
        }
    }

    /// Copy the container with explicit copy functions for each side.
    pub fn deep_clone(
        &self,
        clone_ok: impl FnOnce(&T) -> T,
        clone_err: impl FnOnce(&E) -> E,
    ) -> Self {
        match self {
            Success(value) => Success(clone_ok(value)),
            Failure(error) => Failure(clone_err(error)),
        }
    }

    /// Iterate over the success value, if any.
    pub fn iter(&self) -> Iter<'_, T> {
        match self {
            Success(value) => Iter::new(Some(value)),
            Failure(_) => Iter::new(None),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Success(value),
            Err(error) => Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Success(value) => Ok(value),
            Failure(error) => Err(error),
        }
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        match self {
            Success(value) => IntoIter::new(Some(value)),
            Failure(_) => IntoIter::new(None),
        }
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
