//! Integer arithmetic helpers generic over signed primitive types
//!
//! All functions use 1-indexed or sign-normalized conventions matching how
//! the puzzle solvers count positions and cycle lengths.

use num_traits::{PrimInt, Signed};

/// Wrap an integer into the range `[1, cap_value]`
///
/// A zero remainder maps to `cap_value` itself, so the result is never 0
/// (1-indexed wraparound). Negative inputs are normalized with a Euclidean
/// remainder before wrapping.
///
/// # Panics
///
/// Panics if `cap_value` is zero (division by zero). The contract requires
/// `cap_value > 0`.
pub fn cap<T: PrimInt + Signed>(value: T, cap_value: T) -> T {
    let remainder = value % cap_value;
    let remainder = if remainder < T::zero() {
        remainder + cap_value
    } else {
        remainder
    };

    if remainder == T::zero() {
        cap_value
    } else {
        remainder
    }
}

/// Greatest common divisor by the iterative Euclidean algorithm
///
/// The result is always non-negative; `gcd(a, 0)` is `|a|`.
pub fn gcd<T: PrimInt + Signed>(a: T, b: T) -> T {
    let (mut a, mut b) = (a, b);
    while b != T::zero() {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a.abs()
}

/// Least common multiple as `|a * b| / gcd(a, b)`
///
/// # Panics
///
/// Panics if both `a` and `b` are zero (division by zero), and overflows
/// when `a * b` exceeds the type's range before the division.
pub fn lcm<T: PrimInt + Signed>(a: T, b: T) -> T {
    (a * b).abs() / gcd(a, b)
}
