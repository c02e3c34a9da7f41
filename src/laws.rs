//! Algebraic laws the two containers obey, as executable predicates.
//!
//! Each function returns `true` when the law holds for the given inputs. The
//! property tests drive them with random values; downstream crates that wrap
//! these types can reuse them against their own payloads.
//!
//! # Laws
//!
//! | Function                          | Statement                                            |
//! |-----------------------------------|------------------------------------------------------|
//! | `optional_functor_identity`       | `x.map(id) == x`                                     |
//! | `optional_functor_composition`    | `x.map(f).map(g) == x.map(g ∘ f)`                    |
//! | `optional_left_identity`          | `some(v).and_then(f) == f(v)`                        |
//! | `optional_right_identity`         | `x.and_then(some) == x`                              |
//! | `outcome_functor_identity`        | `r.map(id) == r`                                     |
//! | `outcome_left_identity`           | `success(v).and_then(f) == f(v)`                     |
//! | `outcome_right_identity`          | `r.and_then(success) == r`                           |
//! | `create_round_trip`               | `create(Some(v)) == some(v)`                         |
//! | `transpose_involution_optional`   | `x.transpose().transpose() == x`                     |
//! | `transpose_involution_outcome`    | `r.transpose().transpose() == r`                     |
//! | `zip_unzip_inverse`               | `a.zip(b).unzip()` restores both sides or neither    |
//! | `flatten_is_and_then_identity`    | `r.flatten() == r.and_then(id)`                      |
//! | `xor_is_exclusive`                | `a.xor(b).is_some() == (a.is_some() != b.is_some())` |

use crate::optional::Optional;
use crate::outcome::Outcome;

// ============================================================================
// OPTIONAL
// ============================================================================

pub fn optional_functor_identity<T>(x: Optional<T>) -> bool
where
    T: Clone + PartialEq,
{
    x.clone().map(|v| v) == x
}

pub fn optional_functor_composition<T, U, V>(
    x: Optional<T>,
    f: impl Fn(T) -> U,
    g: impl Fn(U) -> V,
) -> bool
where
    T: Clone,
    V: PartialEq,
{
    x.clone().map(&f).map(&g) == x.map(|v| g(f(v)))
}

pub fn optional_left_identity<T, U>(value: T, f: impl Fn(T) -> Optional<U>) -> bool
where
    T: Clone,
    U: PartialEq,
{
    Optional::some(value.clone()).and_then(&f) == f(value)
}

pub fn optional_right_identity<T>(x: Optional<T>) -> bool
where
    T: Clone + PartialEq,
{
    x.clone().and_then(Optional::some) == x
}

/// Any non-null source comes out of `create` as `Present` with the same value.
pub fn create_round_trip<T>(value: T) -> bool
where
    T: Clone + PartialEq,
{
    Optional::create(Some(value.clone())) == Optional::some(value)
}

pub fn zip_unzip_inverse<T, U>(a: Optional<T>, b: Optional<U>) -> bool
where
    T: Clone + PartialEq,
    U: Clone + PartialEq,
{
    let (left, right) = a.clone().zip(b.clone()).unzip();
    if a.is_some() && b.is_some() {
        left == a && right == b
    } else {
        left.is_none() && right.is_none()
    }
}

pub fn xor_is_exclusive<T>(a: Optional<T>, b: Optional<T>) -> bool
where
    T: Clone + PartialEq,
{
    let expected = match (&a, &b) {
        (Optional::Present(_), Optional::Absent) => a.clone(),
        (Optional::Absent, Optional::Present(_)) => b.clone(),
        _ => Optional::Absent,
    };
    a.xor(b) == expected
}

pub fn transpose_involution_optional<T, E>(x: Optional<Outcome<T, E>>) -> bool
where
    T: Clone + PartialEq,
    E: Clone + PartialEq,
{
    x.clone().transpose().transpose() == x
}

// ============================================================================
// OUTCOME
// ============================================================================

pub fn outcome_functor_identity<T, E>(r: Outcome<T, E>) -> bool
where
    T: Clone + PartialEq,
    E: Clone + PartialEq,
{
    r.clone().map(|v| v) == r
}

pub fn outcome_left_identity<T, U, E>(value: T, f: impl Fn(T) -> Outcome<U, E>) -> bool
where
    T: Clone,
    U: PartialEq,
    E: PartialEq,
{
    Outcome::success(value.clone()).and_then(&f) == f(value)
}

pub fn outcome_right_identity<T, E>(r: Outcome<T, E>) -> bool
where
    T: Clone + PartialEq,
    E: Clone + PartialEq,
{
    r.clone().and_then(Outcome::success) == r
}

pub fn transpose_involution_outcome<T, E>(r: Outcome<Optional<T>, E>) -> bool
where
    T: Clone + PartialEq,
    E: Clone + PartialEq,
{
    r.clone().transpose().transpose() == r
}

pub fn flatten_is_and_then_identity<T, E>(r: Outcome<Outcome<T, E>, E>) -> bool
where
    T: Clone + PartialEq,
    E: Clone + PartialEq,
{
    r.clone().flatten() == r.and_then(|inner| inner)
}
