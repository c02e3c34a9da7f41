// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Construction markers that carry only the payload.
//!
//! `Outcome::success(1)` has to know its error type at the call site. The
//! markers here don't: `ok(1)` is an `OkValue<i32>` and becomes an
//! `Outcome<i32, E>` for whatever `E` the context asks for. Promotion is a
//! plain wrap with no other effect.
//!
//! ```
//! use sumkit::{err, ok, Outcome};
//!
//! fn half(n: u32) -> Outcome<u32, String> {
//!     if n % 2 == 0 {
//!         ok(n / 2).into()
//!     } else {
//!         err(format!("{} is odd", n)).into()
//!     }
//! }
//!
//! assert_eq!(half(8), Outcome::Success(4));
//! assert!(half(3).is_err());
//! ```

use crate::optional::Optional;
use crate::outcome::Outcome;

/// A present value with no container type attached yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SomeValue<T>(pub T);

/// Absence with no container type attached yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoneValue;

/// A success value whose error type is left to the context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OkValue<T>(pub T);

/// An error value whose success type is left to the context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrValue<E>(pub E);

#[inline]
pub fn some<T>(value: T) -> SomeValue<T> {
    SomeValue(value)
}

#[inline]
pub fn none() -> NoneValue {
    NoneValue
}

#[inline]
pub fn ok<T>(value: T) -> OkValue<T> {
    OkValue(value)
}

#[inline]
pub fn err<E>(error: E) -> ErrValue<E> {
    ErrValue(error)
}

impl<T> SomeValue<T> {
    #[inline]
    pub fn into_optional(self) -> Optional<T> {
        Optional::Present(self.0)
    }
}

impl NoneValue {
    #[inline]
    pub fn into_optional<T>(self) -> Optional<T> {
        Optional::Absent
    }
}

impl<T> OkValue<T> {
    #[inline]
    pub fn into_outcome<E>(self) -> Outcome<T, E> {
        Outcome::Success(self.0)
    }
}

impl<E> ErrValue<E> {
    #[inline]
    pub fn into_outcome<T>(self) -> Outcome<T, E> {
        Outcome::Failure(self.0)
    }
}

impl<T> From<SomeValue<T>> for Optional<T> {
    #[inline]
    fn from(marker: SomeValue<T>) -> Self {
        marker.into_optional()
    }
}

impl<T> From<NoneValue> for Optional<T> {
    #[inline]
    fn from(marker: NoneValue) -> Self {
        marker.into_optional()
    }
}

impl<T, E> From<OkValue<T>> for Outcome<T, E> {
    #[inline]
    fn from(marker: OkValue<T>) -> Self {
        marker.into_outcome()
    }
}

impl<T, E> From<ErrValue<E>> for Outcome<T, E> {
    #[inline]
    fn from(marker: ErrValue<E>) -> Self {
        marker.into_outcome()
    }
}
