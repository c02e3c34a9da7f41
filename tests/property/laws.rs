//! Property tests for the functor and monad laws.
//!
//! Each case hands random containers to a predicate in `sumkit::laws`:
//!
//! 1. **Functor identity**: `x.map(id) == x`
//! 2. **Functor composition**: mapping twice equals mapping the composition
//! 3. **Left and right identity** for `and_then`

use super::common::{optional_strategy, optional_string_strategy, outcome_strategy};
use proptest::prelude::*;
use sumkit::laws;
use sumkit::{Optional, Outcome};

fn halve_even(v: i32) -> Optional<i32> {
    if v % 2 == 0 {
        Optional::some(v / 2)
    } else {
        Optional::none()
    }
}

fn reject_negative(v: i32) -> Outcome<i32, String> {
    if v < 0 {
        Outcome::failure(format!("{} is negative", v))
    } else {
        Outcome::success(v)
    }
}

// =============================================================================
// OPTIONAL
// =============================================================================

proptest! {
    #[test]
    fn prop_optional_functor_identity(x in optional_strategy()) {
        prop_assert!(laws::optional_functor_identity(x));
    }

    #[test]
    fn prop_optional_functor_identity_owned(x in optional_string_strategy()) {
        prop_assert!(laws::optional_functor_identity(x));
    }

    #[test]
    fn prop_optional_functor_composition(x in optional_strategy()) {
        prop_assert!(laws::optional_functor_composition(
            x,
            |v: i32| v.wrapping_mul(3),
            |v: i32| v.to_string(),
        ));
    }

    #[test]
    fn prop_optional_left_identity(v in any::<i32>()) {
        prop_assert!(laws::optional_left_identity(v, halve_even));
    }

    #[test]
    fn prop_optional_right_identity(x in optional_string_strategy()) {
        prop_assert!(laws::optional_right_identity(x));
    }

    #[test]
    fn prop_xor_is_exclusive(a in optional_strategy(), b in optional_strategy()) {
        prop_assert!(laws::xor_is_exclusive(a, b));
    }

    #[test]
    fn prop_create_round_trip(s in "[a-z]{0,12}") {
        prop_assert!(laws::create_round_trip(s));
    }
}

// =============================================================================
// OUTCOME
// =============================================================================

proptest! {
    #[test]
    fn prop_outcome_functor_identity(r in outcome_strategy()) {
        prop_assert!(laws::outcome_functor_identity(r));
    }

    #[test]
    fn prop_outcome_left_identity(v in any::<i32>()) {
        prop_assert!(laws::outcome_left_identity(v, reject_negative));
    }

    #[test]
    fn prop_outcome_right_identity(r in outcome_strategy()) {
        prop_assert!(laws::outcome_right_identity(r));
    }

    /// Failure short-circuits every chained step.
    #[test]
    fn prop_failure_is_absorbing(e in "[a-z]{1,8}") {
        let failed = Outcome::<i32, String>::failure(e.clone());
        let chained = failed
            .map(|v| v + 1)
            .and_then(reject_negative)
            .map(|v| v * 2);
        prop_assert_eq!(chained, Outcome::Failure(e));
    }
}
