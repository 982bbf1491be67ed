//! Daily puzzle solvers operating on raw input text
//!
//! Each solver is a pure function from input text to an integer answer.
//! Input formats are ad hoc per puzzle and documented on the solver; they
//! are not a stable contract.

/// Rotation dial zero-crossing count
pub mod dial;
/// Greedy best-digit subsequence selection
pub mod digit_selection;
/// Location list distance and similarity scoring
pub mod location_pairs;
/// Repeated-pattern id detection over ranges
pub mod repeated_ids;
