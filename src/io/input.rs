//! Input file loading for puzzle solvers
//!
//! Solvers take raw text; these helpers read it from disk with file-system
//! errors that carry the path and operation, and build grids from the line
//! form the puzzle inputs use.

use std::fs;
use std::path::Path;

use crate::io::error::{PuzzleError, Result};
use crate::spatial::grid::CharGrid;

/// Read a whole input file as text
///
/// # Errors
///
/// Returns [`PuzzleError::FileSystem`] when the file cannot be read.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| PuzzleError::FileSystem {
        path: path.to_path_buf(),
        operation: "read",
        source,
    })
}

/// Read an input file as lines with line endings stripped
///
/// Handles both `\n` and `\r\n` endings.
///
/// # Errors
///
/// Returns [`PuzzleError::FileSystem`] when the file cannot be read.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let contents = read_text(path)?;
    Ok(contents
        .lines()
        .map(|line| line.trim_end_matches('\r').to_owned())
        .collect())
}

/// Read an input file as a character grid
///
/// Trailing blank lines are dropped before construction, so a final
/// newline in the file does not produce a ragged empty row.
///
/// # Errors
///
/// Returns [`PuzzleError::FileSystem`] when the file cannot be read, or
/// [`PuzzleError::RaggedRows`] when the remaining rows differ in length.
pub fn read_grid(path: &Path) -> Result<CharGrid> {
    let mut lines = read_lines(path)?;
    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    CharGrid::from_lines(&lines)
}
