// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Contract violations raised by the unsafe extraction methods.
//!
//! Absence and failure are data (`Absent`, `Failure`), never errors. The two
//! kinds below exist only for callers who ask for a specific variant and get
//! the other one:
//!
//! | Kind          | Raised by                                   | Message           |
//! |---------------|---------------------------------------------|-------------------|
//! | `ExpectError` | `expect`, `expect_err`                      | caller-supplied   |
//! | `UnwrapError` | `unwrap`, `unwrap_err`                      | fixed, + payload  |
//!
//! Raising is a panic at the caller's location. The `try_*` methods hand back
//! the same values instead.

use std::fmt::Debug;
use thiserror::Error;

/// Message of `Optional::unwrap` on `Absent`.
pub(crate) const UNWRAP_ABSENT: &str = "called unwrap on an absent value";
/// Message of `Outcome::unwrap` on `Failure`.
pub(crate) const UNWRAP_FAILURE: &str = "called unwrap on a failure value";
/// Message of `Outcome::unwrap_err` on `Success`.
pub(crate) const UNWRAP_ERR_SUCCESS: &str = "called unwrap_err on a success value";

/// Extraction with a caller-supplied message hit the wrong variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("{message}")]
pub struct ExpectError {
    message: String,
}

impl ExpectError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message the caller passed to `expect`/`expect_err`.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Extraction without a message hit the wrong variant.
///
/// `payload` is the `Debug` rendering of whatever the container held instead,
/// when there was anything to render.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("{message}{}", render_payload(.payload))]
pub struct UnwrapError {
    message: &'static str,
    payload: Option<String>,
}

impl UnwrapError {
    pub fn new(message: &'static str) -> Self {
        Self {
            message,
            payload: None,
        }
    }

    /// Attach the rendered form of the mismatched payload.
    pub fn with_payload(message: &'static str, payload: &impl Debug) -> Self {
        Self {
            message,
            payload: Some(format!("{:?}", payload)),
        }
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }
}

fn render_payload(payload: &Option<String>) -> String {
    match payload {
        Some(rendered) => format!(": {}", rendered),
        None => String::new(),
    }
}

/// Names a violation kind for the log line emitted before raising.
pub(crate) trait Violation: std::error::Error {
    const KIND: &'static str;
}

impl Violation for ExpectError {
    const KIND: &'static str = "expect";
}

impl Violation for UnwrapError {
    const KIND: &'static str = "unwrap";
}

/// Raise a contract violation at the caller's location.
///
/// Never caught or retried anywhere in this crate.
#[cold]
#[track_caller]
pub(crate) fn raise<V: Violation>(violation: V) -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!(kind = V::KIND, error = %violation, "contract violation");
    panic!("{}", violation)
}
