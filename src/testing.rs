//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! Its main job is counting how often a combinator invokes the closures it is
//! given, which is how laziness and short-circuiting get asserted.

#![doc(hidden)]

use std::cell::Cell;

/// Counts invocations of the closures that borrow it.
///
/// ```ignore
/// let calls = CallCounter::new();
/// Optional::<i32>::none().map(|v| calls.hit_with(v + 1));
/// assert_eq!(calls.count(), 0);
/// ```
#[derive(Debug, Default)]
pub struct CallCounter {
    calls: Cell<usize>,
}

impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one invocation.
    pub fn hit(&self) {
        self.calls.set(self.calls.get() + 1);
    }

    /// Record one invocation and pass `value` through, for closures that
    /// must return something.
    pub fn hit_with<R>(&self, value: R) -> R {
        self.hit();
        value
    }

    pub fn count(&self) -> usize {
        self.calls.get()
    }

    /// `true` if nothing was invoked.
    pub fn untouched(&self) -> bool {
        self.count() == 0
    }
}
