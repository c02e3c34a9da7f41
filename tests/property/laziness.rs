//! Property tests for closure invocation counts.
//!
//! A lazy combinator calls its closure at most once, and only on the variant
//! that needs it. Each case checks the count against the variant.

use super::common::{optional_strategy, outcome_strategy, CallCounter};
use proptest::prelude::*;
use sumkit::{Optional, Outcome};

fn expected(needed: bool) -> usize {
    usize::from(needed)
}

proptest! {
    #[test]
    fn prop_optional_map_calls_only_when_present(x in optional_strategy()) {
        let calls = CallCounter::new();
        let _ = x.map(|v| calls.hit_with(v));
        prop_assert_eq!(calls.count(), expected(x.is_some()));
    }

    #[test]
    fn prop_optional_and_then_calls_only_when_present(x in optional_strategy()) {
        let calls = CallCounter::new();
        let _ = x.and_then(|v| calls.hit_with(Optional::some(v)));
        prop_assert_eq!(calls.count(), expected(x.is_some()));
    }

    #[test]
    fn prop_optional_or_else_calls_only_when_absent(x in optional_strategy()) {
        let calls = CallCounter::new();
        let _ = x.or_else(|| calls.hit_with(Optional::some(0)));
        prop_assert_eq!(calls.count(), expected(x.is_none()));
    }

    #[test]
    fn prop_optional_unwrap_or_else_calls_only_when_absent(x in optional_strategy()) {
        let calls = CallCounter::new();
        let _ = x.unwrap_or_else(|| calls.hit_with(0));
        prop_assert_eq!(calls.count(), expected(x.is_none()));
    }

    /// Exactly one of the two closures runs.
    #[test]
    fn prop_optional_map_or_else_runs_one_branch(x in optional_strategy()) {
        let present = CallCounter::new();
        let absent = CallCounter::new();
        let _ = x.map_or_else(|| absent.hit_with(0), |v| present.hit_with(v));
        prop_assert_eq!(present.count() + absent.count(), 1);
        prop_assert_eq!(present.count(), expected(x.is_some()));
    }

    #[test]
    fn prop_optional_ok_or_else_calls_only_when_absent(x in optional_strategy()) {
        let calls = CallCounter::new();
        let _ = x.ok_or_else(|| calls.hit_with("absent"));
        prop_assert_eq!(calls.count(), expected(x.is_none()));
    }

    #[test]
    fn prop_optional_filter_and_inspect_see_present_values(x in optional_strategy()) {
        let predicate = CallCounter::new();
        let action = CallCounter::new();
        let kept = x
            .inspect(|_| action.hit())
            .filter(|v| predicate.hit_with(*v >= 0));
        prop_assert_eq!(predicate.count(), expected(x.is_some()));
        prop_assert_eq!(action.count(), expected(x.is_some()));
        prop_assert_eq!(kept.is_some(), x.is_some_and(|v| v >= 0));
    }

    #[test]
    fn prop_optional_zip_with_calls_only_when_both_present(
        a in optional_strategy(),
        b in optional_strategy(),
    ) {
        let calls = CallCounter::new();
        let _ = a.zip_with(b, |x, y| calls.hit_with(x.wrapping_add(y)));
        prop_assert_eq!(calls.count(), expected(a.is_some() && b.is_some()));
    }
}

proptest! {
    #[test]
    fn prop_outcome_map_calls_only_on_success(r in outcome_strategy()) {
        let calls = CallCounter::new();
        let ok = r.is_ok();
        let _ = r.map(|v| calls.hit_with(v));
        prop_assert_eq!(calls.count(), expected(ok));
    }

    #[test]
    fn prop_outcome_map_err_calls_only_on_failure(r in outcome_strategy()) {
        let calls = CallCounter::new();
        let err = r.is_err();
        let _ = r.map_err(|e| calls.hit_with(e.len()));
        prop_assert_eq!(calls.count(), expected(err));
    }

    #[test]
    fn prop_outcome_and_then_calls_only_on_success(r in outcome_strategy()) {
        let calls = CallCounter::new();
        let ok = r.is_ok();
        let _ = r.and_then(|v| calls.hit_with(Outcome::<i32, String>::success(v)));
        prop_assert_eq!(calls.count(), expected(ok));
    }

    #[test]
    fn prop_outcome_or_else_calls_only_on_failure(r in outcome_strategy()) {
        let calls = CallCounter::new();
        let err = r.is_err();
        let _ = r.or_else(|_| calls.hit_with(Outcome::<i32, ()>::success(0)));
        prop_assert_eq!(calls.count(), expected(err));
    }

    #[test]
    fn prop_outcome_unwrap_or_else_calls_only_on_failure(r in outcome_strategy()) {
        let calls = CallCounter::new();
        let err = r.is_err();
        let _ = r.unwrap_or_else(|_| calls.hit_with(0));
        prop_assert_eq!(calls.count(), expected(err));
    }

    #[test]
    fn prop_outcome_map_or_else_runs_one_branch(r in outcome_strategy()) {
        let on_ok = CallCounter::new();
        let on_err = CallCounter::new();
        let ok = r.is_ok();
        let _ = r.map_or_else(|_| on_err.hit_with(0), |v| on_ok.hit_with(v));
        prop_assert_eq!(on_ok.count() + on_err.count(), 1);
        prop_assert_eq!(on_ok.count(), expected(ok));
    }

    #[test]
    fn prop_outcome_inspect_pair_sees_one_side(r in outcome_strategy()) {
        let on_ok = CallCounter::new();
        let on_err = CallCounter::new();
        let ok = r.is_ok();
        let same = r
            .clone()
            .inspect(|_| on_ok.hit())
            .inspect_err(|_| on_err.hit());
        prop_assert_eq!(same, r);
        prop_assert_eq!(on_ok.count(), expected(ok));
        prop_assert_eq!(on_err.count(), expected(!ok));
    }
}
