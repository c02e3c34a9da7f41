//! Shared test utilities and strategies.

#![allow(dead_code)]

use proptest::prelude::*;
use sumkit::{Optional, Outcome};

// Re-export canonical test utilities from sumkit::testing
pub use sumkit::testing::CallCounter;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Present or absent small integers, roughly half each.
pub fn optional_strategy() -> impl Strategy<Value = Optional<i32>> {
    any::<Option<i32>>().prop_map(Optional::from)
}

/// Optional short strings, for payloads that are not `Copy`.
pub fn optional_string_strategy() -> impl Strategy<Value = Optional<String>> {
    proptest::option::of("[a-z]{0,8}".prop_map(String::from)).prop_map(Optional::from)
}

/// Success integers or failure messages.
pub fn outcome_strategy() -> impl Strategy<Value = Outcome<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Outcome::<i32, String>::success),
        "[a-z]{1,8}".prop_map(Outcome::<i32, String>::failure),
    ]
}

/// Every shape of `Optional<Outcome<i32, String>>`.
pub fn optional_of_outcome_strategy() -> impl Strategy<Value = Optional<Outcome<i32, String>>> {
    proptest::option::of(outcome_strategy()).prop_map(Optional::from)
}

/// Every shape of `Outcome<Optional<i32>, String>`.
pub fn outcome_of_optional_strategy() -> impl Strategy<Value = Outcome<Optional<i32>, String>> {
    prop_oneof![
        optional_strategy().prop_map(Outcome::<Optional<i32>, String>::success),
        "[a-z]{1,8}".prop_map(Outcome::<Optional<i32>, String>::failure),
    ]
}

/// Every shape of `Outcome<Outcome<i32, String>, String>`.
pub fn nested_outcome_strategy() -> impl Strategy<Value = Outcome<Outcome<i32, String>, String>> {
    prop_oneof![
        outcome_strategy().prop_map(Outcome::<Outcome<i32, String>, String>::success),
        "[a-z]{1,8}".prop_map(Outcome::<Outcome<i32, String>, String>::failure),
    ]
}

// ============================================================================
// FIXTURES
// ============================================================================

/// Parse an integer the way calling code typically wraps a std API.
pub fn parse_int(input: &str) -> Outcome<i32, String> {
    input.parse::<i32>().map_err(|e| e.to_string()).into()
}

/// Divide, treating a zero divisor as absence.
pub fn divide(a: f64, b: f64) -> Optional<f64> {
    if b == 0.0 {
        Optional::none()
    } else {
        Optional::some(a / b)
    }
}
