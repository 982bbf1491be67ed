//! Overlap tests for integer ranges and floating-point intervals
//!
//! Integer ranges are half-open (start inclusive, end exclusive); float
//! intervals are closed `[low, high]` pairs. Neither test normalizes or
//! validates its bounds, matching the speculative way the solvers probe
//! candidate spans.

use std::ops::Range;

/// Check whether two half-open integer ranges share at least one integer
///
/// Empty ranges (`start >= end`) intersect nothing, including themselves.
pub const fn int_ranges_intersect(a: &Range<i64>, b: &Range<i64>) -> bool {
    if a.start >= a.end || b.start >= b.end {
        return false;
    }

    // Compare on inclusive end points
    a.start <= b.end - 1 && a.end - 1 >= b.start
}

/// Check whether two closed intervals `[low, high]` overlap
///
/// Bounds are taken as given; callers must supply `low <= high` for a
/// meaningful result.
pub const fn closed_intervals_intersect(a: (f64, f64), b: (f64, f64)) -> bool {
    a.0 <= b.1 && a.1 >= b.0
}
