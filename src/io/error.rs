//! Error types for grid access, input parsing, and file operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all library and solver operations
#[derive(Debug)]
pub enum PuzzleError {
    /// Grid access with an index outside the grid
    OutOfBounds {
        /// Requested coordinate
        position: [i32; 2],
        /// Grid dimensions (rows, cols)
        dimensions: (usize, usize),
    },

    /// Grid construction from rows of unequal length
    RaggedRows {
        /// Index of the offending row
        row: usize,
        /// Character count of the first row
        expected: usize,
        /// Character count of the offending row
        actual: usize,
    },

    /// Character is not a hexadecimal digit
    InvalidHexDigit {
        /// The offending character
        ch: char,
    },

    /// Puzzle input line that does not match the puzzle's format
    MalformedInput {
        /// 1-based line number in the input
        line: usize,
        /// Description of what is wrong with the line
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                position,
                dimensions,
            } => {
                write!(
                    f,
                    "Position ({}, {}) is out of bounds (grid size {}x{})",
                    position[0], position[1], dimensions.0, dimensions.1
                )
            }
            Self::RaggedRows {
                row,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Row {row} has {actual} characters, expected {expected}"
                )
            }
            Self::InvalidHexDigit { ch } => {
                write!(f, "'{ch}' is not a hexadecimal digit")
            }
            Self::MalformedInput { line, reason } => {
                write!(f, "Malformed input at line {line}: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for library results
pub type Result<T> = std::result::Result<T, PuzzleError>;

impl From<std::io::Error> for PuzzleError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a malformed input error for a 1-based line number
pub fn malformed_input(line: usize, reason: &impl ToString) -> PuzzleError {
    PuzzleError::MalformedInput {
        line,
        reason: reason.to_string(),
    }
}
