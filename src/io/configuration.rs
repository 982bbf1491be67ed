//! Puzzle constants and runtime configuration defaults

// Dial puzzle geometry
/// Number of positions on the rotation dial
pub const DIAL_POSITIONS: i64 = 100;
/// Starting position of the dial pointer
pub const DIAL_START: i64 = 50;

/// Digits kept per line in the digit selection puzzle
pub const SELECTED_DIGIT_COUNT: usize = 12;

// A single occurrence is every number trivially; repetition starts at two
/// Minimum repetitions for an id to count as a repeated pattern
pub const MIN_PATTERN_REPETITIONS: usize = 2;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

/// File extension recognized when scanning input directories
pub const INPUT_EXTENSION: &str = "txt";
