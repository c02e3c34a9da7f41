// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A value that is either present or absent.
//!
//! `Optional<T>` is a closed two-variant union. It never changes after
//! construction: every combinator takes `self` by value and returns a new
//! container, so a chain of calls reads as a pipeline.
//!
//! # Laziness
//!
//! Arguments follow one rule. A plain value (`unwrap_or`, `map_or`, `or`, `and`)
//! is evaluated by the caller before the call, whatever the variant. A closure
//! (`unwrap_or_else`, `map_or_else`, `or_else`, `and_then`) runs only when its
//! result is needed, and at most once.
//!
//! ```
//! use sumkit::Optional;
//!
//! let port = Optional::create("8080".parse::<u16>().ok())
//!     .filter(|port| *port >= 1024)
//!     .unwrap_or(3000);
//! assert_eq!(port, 8080);
//! ```

use crate::error::{raise, ExpectError, UnwrapError, UNWRAP_ABSENT};

/// Presence or absence of a value of type `T`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use]
pub enum Optional<T> {
    /// No value.
    #[default]
    Absent,
    /// Exactly one value.
    Present(T),
}

use Optional::{Absent, Present};

impl<T> Optional<T> {
    // ========================================================================
    // CONSTRUCTION
    // ========================================================================

    #[inline]
    pub const fn some(value: T) -> Self {
        Present(value)
    }

    #[inline]
    pub const fn none() -> Self {
        Absent
    }

    /// Build from a nullable source: `None` becomes `Absent`, anything else
    /// becomes `Present`.
    #[inline]
    pub fn create(source: Option<T>) -> Self {
        match source {
            Some(value) => Present(value),
            None => Absent,
        }
    }

    // ========================================================================
    // STATE
    // ========================================================================

    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Present(_))
    }

    #[inline]
    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// `predicate(value)` when present, `false` otherwise. The predicate is
    /// not called on `Absent`.
    #[inline]
    pub fn is_some_and(self, predicate: impl FnOnce(T) -> bool) -> bool {
        match self {
            Present(value) => predicate(value),
            Absent => false,
        }
    }

    /// Borrow the payload without consuming the container.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Present(value) => Present(value),
            Absent => Absent,
        }
    }

    // ========================================================================
    // EXTRACTION
    // ========================================================================

    /// The contained value.
    ///
    /// # Panics
    ///
    /// Raises [`ExpectError`] carrying `message` if absent.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Present(value) => value,
            Absent => raise(ExpectError::new(message)),
        }
    }

    /// The contained value.
    ///
    /// # Panics
    ///
    /// Raises [`UnwrapError`] with the message
    /// `"called unwrap on an absent value"` if absent.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Present(value) => value,
            Absent => raise(UnwrapError::new(UNWRAP_ABSENT)),
        }
    }

    /// Like [`expect`](Self::expect), but hands the violation back instead of
    /// raising it.
    pub fn try_expect(self, message: &str) -> Result<T, ExpectError> {
        match self {
            Present(value) => Ok(value),
            Absent => Err(ExpectError::new(message)),
        }
    }

    /// Like [`unwrap`](Self::unwrap), but hands the violation back instead of
    /// raising it.
    pub fn try_unwrap(self) -> Result<T, UnwrapError> {
        match self {
            Present(value) => Ok(value),
            Absent => Err(UnwrapError::new(UNWRAP_ABSENT)),
        }
    }

    /// The contained value or `default`.
    ///
    /// `default` is evaluated by the caller even when the value is present.
    /// Use [`unwrap_or_else`](Self::unwrap_or_else) when it is expensive.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Present(value) => value,
            Absent => default,
        }
    }

    /// The contained value, or the result of `default` which only runs when
    /// absent.
    #[inline]
    pub fn unwrap_or_else(self, default: impl FnOnce() -> T) -> T {
        match self {
            Present(value) => value,
            Absent => default(),
        }
    }

    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Present(value) => value,
            Absent => T::default(),
        }
    }

    // ========================================================================
    // TRANSFORMATION
    // ========================================================================

    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Optional<U> {
        match self {
            Present(value) => Present(f(value)),
            Absent => Absent,
        }
    }

    /// `f(value)` when present, otherwise the eagerly evaluated `default`.
    #[inline]
    pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Present(value) => f(value),
            Absent => default,
        }
    }

    /// `f(value)` when present, otherwise `default()`. Exactly one of the two
    /// closures runs.
    #[inline]
    pub fn map_or_else<U>(self, default: impl FnOnce() -> U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Present(value) => f(value),
            Absent => default(),
        }
    }

    /// Observe the value, if any, and pass the container through unchanged.
    #[inline]
    pub fn inspect(self, action: impl FnOnce(&T)) -> Self {
        if let Present(value) = &self {
            action(value);
        }
        self
    }

    /// Keep the value only if `predicate` accepts it.
    #[inline]
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        if let Present(value) = self {
            if predicate(&value) {
                return Present(value);
            }
        }
        Absent
    }

    // ========================================================================
    // CHAINING
    // ========================================================================

    /// `other` if this is present, otherwise `Absent`.
    #[inline]
    pub fn and<U>(self, other: Optional<U>) -> Optional<U> {
        match self {
            Present(_) => other,
            Absent => Absent,
        }
    }

    /// Chain a computation that may itself produce nothing.
    #[inline]
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Optional<U>) -> Optional<U> {
        match self {
            Present(value) => f(value),
            Absent => Absent,
        }
    }

    /// This container if present, otherwise `other`.
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            Present(value) => Present(value),
            Absent => other,
        }
    }

    #[inline]
    pub fn or_else(self, f: impl FnOnce() -> Self) -> Self {
        match self {
            Present(value) => Present(value),
            Absent => f(),
        }
    }

    /// Present only when exactly one side is present; yields that side.
    #[inline]
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (Present(value), Absent) | (Absent, Present(value)) => Present(value),
            _ => Absent,
        }
    }

    /// Pair both values when both are present.
    #[inline]
    pub fn zip<U>(self, other: Optional<U>) -> Optional<(T, U)> {
        self.zip_with(other, |left, right| (left, right))
    }

    /// Combine both values with `f` when both are present.
    #[inline]
    pub fn zip_with<U, R>(self, other: Optional<U>, f: impl FnOnce(T, U) -> R) -> Optional<R> {
        match (self, other) {
            (Present(left), Present(right)) => Present(f(left, right)),
            _ => Absent,
        }
    }

    // ========================================================================
    // INSPECTION
    // ========================================================================

    /// `true` iff present and `x` equals the contained value.
    #[inline]
    pub fn contains<U>(&self, x: &U) -> bool
    where
        U: PartialEq<T>,
    {
        match self {
            Present(value) => x.eq(value),
            Absent => false,
        }
    }

    /// Run exactly one of the two branches and return what it returns.
    ///
    /// `match` on the enum is usually nicer; this exists for call sites that
    /// want both handlers as values.
    #[inline]
    pub fn match_with<R>(self, some: impl FnOnce(T) -> R, none: impl FnOnce() -> R) -> R {
        match self {
            Present(value) => some(value),
            Absent => none(),
        }
    }

    /// Copy the container using an explicit copy function for the payload.
    ///
    /// The derived `clone` copies as deeply as `T::clone` does; this one lets
    /// the call site decide, and works for payloads that are not `Clone`.
    pub fn deep_clone(&self, clone_fn: impl FnOnce(&T) -> T) -> Self {
        self.as_ref().map(clone_fn)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_ref().into())
    }
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(source: Option<T>) -> Self {
        Self::create(source)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        match optional {
            Present(value) => Some(value),
            Absent => None,
        }
    }
}

impl<T: PartialEq> PartialEq<Option<T>> for Optional<T> {
    fn eq(&self, other: &Option<T>) -> bool {
        match (self, other) {
            (Present(left), Some(right)) => left == right,
            (Absent, None) => true,
            _ => false,
        }
    }
}

// ============================================================================
// ITERATION
// ============================================================================

/// Borrowing iterator over zero or one value.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(inner: Option<&'a T>) -> Self {
        Self { inner }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Owning iterator over zero or one value.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(inner: Option<T>) -> Self {
        Self { inner }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.into())
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
