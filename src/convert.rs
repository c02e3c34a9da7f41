// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Conversions between [`Optional`] and [`Outcome`], and between their nested
//! forms.
//!
//! Each conversion is a free function. The inherent methods (`opt.ok_or(e)`,
//! `res.transpose()`, ...) forward here, so both spellings behave identically.
//!
//! | From                         | To                           | Function             |
//! |------------------------------|------------------------------|----------------------|
//! | `Optional<T>`                | `Outcome<T, E>`              | `ok_or`, `ok_or_else`|
//! | `Outcome<T, E>`              | `Optional<T>` / `Optional<E>`| `ok`, `err`          |
//! | `Optional<Outcome<T, E>>`    | `Outcome<Optional<T>, E>`    | `transpose_optional` |
//! | `Outcome<Optional<T>, E>`    | `Optional<Outcome<T, E>>`    | `transpose_outcome`  |
//! | `Outcome<Outcome<T, E>, E>`  | `Outcome<T, E>`              | `flatten`            |
//! | `Optional<(T, U)>`           | `(Optional<T>, Optional<U>)` | `unzip`              |
//!
//! The two transposes are inverses of each other.

use crate::optional::Optional::{self, Absent, Present};
use crate::outcome::Outcome::{self, Failure, Success};

/// `Success(value)` when present, otherwise `Failure(error)`.
///
/// `error` is evaluated by the caller even when the value is present.
#[inline]
pub fn ok_or<T, E>(optional: Optional<T>, error: E) -> Outcome<T, E> {
    match optional {
        Present(value) => Success(value),
        Absent => Failure(error),
    }
}

/// Like [`ok_or`], but the error is only built when absent.
#[inline]
pub fn ok_or_else<T, E>(optional: Optional<T>, error: impl FnOnce() -> E) -> Outcome<T, E> {
    match optional {
        Present(value) => Success(value),
        Absent => Failure(error()),
    }
}

/// Keep the success value, discard the error.
#[inline]
pub fn ok<T, E>(outcome: Outcome<T, E>) -> Optional<T> {
    match outcome {
        Success(value) => Present(value),
        Failure(_) => Absent,
    }
}

/// Keep the error value, discard the success.
#[inline]
pub fn err<T, E>(outcome: Outcome<T, E>) -> Optional<E> {
    match outcome {
        Success(_) => Absent,
        Failure(error) => Present(error),
    }
}

#[inline]
pub fn transpose_optional<T, E>(optional: Optional<Outcome<T, E>>) -> Outcome<Optional<T>, E> {
    match optional {
        Absent => Success(Absent),
        Present(Success(value)) => Success(Present(value)),
        Present(Failure(error)) => Failure(error),
    }
}

#[inline]
pub fn transpose_outcome<T, E>(outcome: Outcome<Optional<T>, E>) -> Optional<Outcome<T, E>> {
    match outcome {
        Success(Absent) => Absent,
        Success(Present(value)) => Present(Success(value)),
        Failure(error) => Present(Failure(error)),
    }
}

/// Remove one level of nesting; an outer or inner failure becomes the result.
#[inline]
pub fn flatten<T, E>(outcome: Outcome<Outcome<T, E>, E>) -> Outcome<T, E> {
    outcome.and_then(|inner| inner)
}

/// Split an optional pair into a pair of optionals.
#[inline]
pub fn unzip<T, U>(optional: Optional<(T, U)>) -> (Optional<T>, Optional<U>) {
    match optional {
        Present((left, right)) => (Present(left), Present(right)),
        Absent => (Absent, Absent),
    }
}

impl<T> Optional<T> {
    /// See [`ok_or`].
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
        ok_or(self, error)
    }

    /// See [`ok_or_else`].
    #[inline]
    pub fn ok_or_else<E>(self, error: impl FnOnce() -> E) -> Outcome<T, E> {
        ok_or_else(self, error)
    }
}

impl<T, U> Optional<(T, U)> {
    #[inline]
    pub fn unzip(self) -> (Optional<T>, Optional<U>) {
        unzip(self)
    }
}

impl<T, E> Optional<Outcome<T, E>> {
    /// `Absent` → `Success(Absent)`, `Present(Success(v))` →
    /// `Success(Present(v))`, `Present(Failure(e))` → `Failure(e)`.
    #[inline]
    pub fn transpose(self) -> Outcome<Optional<T>, E> {
        transpose_optional(self)
    }
}

impl<T, E> Outcome<T, E> {
    #[inline]
    pub fn ok(self) -> Optional<T> {
        ok(self)
    }

    #[inline]
    pub fn err(self) -> Optional<E> {
        err(self)
    }
}

impl<T, E> Outcome<Optional<T>, E> {
    /// `Success(Absent)` → `Absent`, `Success(Present(v))` →
    /// `Present(Success(v))`, `Failure(e)` → `Present(Failure(e))`.
    #[inline]
    pub fn transpose(self) -> Optional<Outcome<T, E>> {
        transpose_outcome(self)
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Same as `and_then(identity)`.
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        flatten(self)
    }
}
