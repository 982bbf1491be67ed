//! Bounds-checked character grid backed by a dense 2D array
//!
//! Offers two access disciplines side by side: strict accessors that
//! surface out-of-bounds indices as errors, and speculative accessors that
//! yield an absent result or no-op instead. Callers probing neighbors near
//! a boundary use the speculative variants; callers with indices they
//! believe valid use the strict ones and treat failure as a bug.

use std::fmt;

use ndarray::Array2;

use crate::io::error::{PuzzleError, Result, invalid_parameter};
use crate::spatial::coordinate::RowCol;

/// Rectangular character grid with mutable cells and a fixed shape
///
/// Built from equal-length text rows; cell values change in place but the
/// shape is set at construction. Coordinates are `[row, col]` pairs and may
/// be negative or past either edge, in which case they are simply out of
/// bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharGrid {
    cells: Array2<char>,
}

impl CharGrid {
    /// Build a grid from text rows
    ///
    /// The column count is taken from the first row; an empty slice yields
    /// a 0x0 grid.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::RaggedRows`] when any row's character count
    /// differs from the first row's.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        let rows = lines.len();
        let cols = lines
            .first()
            .map_or(0, |line| line.as_ref().chars().count());

        let mut flat = Vec::with_capacity(rows * cols);
        for (row, line) in lines.iter().enumerate() {
            let before = flat.len();
            flat.extend(line.as_ref().chars());
            let actual = flat.len() - before;
            if actual != cols {
                return Err(PuzzleError::RaggedRows {
                    row,
                    expected: cols,
                    actual,
                });
            }
        }

        let cells = Array2::from_shape_vec((rows, cols), flat)
            .map_err(|err| invalid_parameter("lines", &format!("{rows}x{cols}"), &err))?;
        Ok(Self { cells })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns (0 for an empty grid)
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Check whether a coordinate lies inside the grid
    pub fn is_in_bound(&self, pos: RowCol) -> bool {
        self.position(pos).is_some()
    }

    /// Read the cell at `(row, col)`
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::OutOfBounds`] when either index is invalid.
    pub fn get(&self, row: i32, col: i32) -> Result<char> {
        self.get_opt([row, col])
            .ok_or_else(|| PuzzleError::OutOfBounds {
                position: [row, col],
                dimensions: (self.rows(), self.cols()),
            })
    }

    /// Read the cell at a coordinate, or `None` when out of bounds
    pub fn get_opt(&self, pos: RowCol) -> Option<char> {
        self.position(pos)
            .and_then(|index| self.cells.get(index).copied())
    }

    /// The cell at `(row, col)` parsed as a decimal digit
    ///
    /// `None` when the position is out of bounds or the cell is not a
    /// digit.
    pub fn digit(&self, row: i32, col: i32) -> Option<u32> {
        self.digit_at([row, col])
    }

    /// The cell at a coordinate parsed as a decimal digit
    pub fn digit_at(&self, pos: RowCol) -> Option<u32> {
        self.get_opt(pos).and_then(|cell| cell.to_digit(10))
    }

    /// Replace the cell at `(row, col)`
    ///
    /// Mutates exactly one cell; every other cell and row is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::OutOfBounds`] when either index is invalid.
    pub fn set(&mut self, row: i32, col: i32, value: char) -> Result<()> {
        let dimensions = (self.rows(), self.cols());
        let index = self
            .position([row, col])
            .ok_or(PuzzleError::OutOfBounds {
                position: [row, col],
                dimensions,
            })?;

        if let Some(cell) = self.cells.get_mut(index) {
            *cell = value;
        }
        Ok(())
    }

    /// Lazy row-major iteration over every coordinate
    ///
    /// Yields `rows * cols` coordinates, row 0 left to right first. Each
    /// call returns a fresh iterator, so traversal is restartable.
    pub fn coordinates(&self) -> impl Iterator<Item = RowCol> + '_ {
        let rows = self.rows() as i32;
        let cols = self.cols() as i32;
        (0..rows).flat_map(move |row| (0..cols).map(move |col| [row, col]))
    }

    /// Exchange the cells at two coordinates
    ///
    /// The swap happens only when both coordinates are in bounds; if either
    /// is not, the grid is left completely unchanged and no error is
    /// raised.
    pub fn swap(&mut self, x: RowCol, y: RowCol) {
        let (Some(first), Some(second)) = (self.position(x), self.position(y)) else {
            return;
        };
        let (Some(&a), Some(&b)) = (self.cells.get(first), self.cells.get(second)) else {
            return;
        };

        if let Some(cell) = self.cells.get_mut(first) {
            *cell = b;
        }
        if let Some(cell) = self.cells.get_mut(second) {
            *cell = a;
        }
    }

    /// Translate a coordinate into array indices when in bounds
    fn position(&self, pos: RowCol) -> Option<(usize, usize)> {
        let [row, col] = pos;
        if row < 0 || col < 0 {
            return None;
        }

        let (row, col) = (row as usize, col as usize);
        (row < self.rows() && col < self.cols()).then_some((row, col))
    }
}

impl fmt::Display for CharGrid {
    /// Each row on its own line with single spaces between cells
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for (index, cell) in row.iter().enumerate() {
                if index > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
