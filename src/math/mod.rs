//! Mathematical utilities shared by the puzzle solvers

/// Modular wrap, gcd, and lcm over signed integers
pub mod arith;
/// Hexadecimal digit expansion
pub mod hex;
/// Overlap tests for integer and floating-point intervals
pub mod interval;
