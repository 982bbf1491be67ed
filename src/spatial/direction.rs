//! Four-way movement directions with clockwise and counter-clockwise rotation
//!
//! Directions form a four-cycle under rotation; both transitions are total
//! and table-driven, so rotating four times returns the original direction.

/// Movement direction on a row/column grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward smaller row indices
    Up,
    /// Toward larger row indices
    Down,
    /// Toward smaller column indices
    Left,
    /// Toward larger column indices
    Right,
}

impl Direction {
    /// All four directions in declaration order
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Rotate 90 degrees clockwise
    pub const fn clockwise(self) -> Self {
        match self {
            Self::Up => Self::Right,
            Self::Right => Self::Down,
            Self::Down => Self::Left,
            Self::Left => Self::Up,
        }
    }

    /// Alias for [`Self::clockwise`]
    pub const fn rotate(self) -> Self {
        self.clockwise()
    }

    /// Rotate 90 degrees counter-clockwise, the exact inverse of [`Self::clockwise`]
    pub const fn counter_clockwise(self) -> Self {
        match self {
            Self::Up => Self::Left,
            Self::Left => Self::Down,
            Self::Down => Self::Right,
            Self::Right => Self::Up,
        }
    }

    /// Unit row/column offset for one step in this direction
    pub const fn step(self) -> [i32; 2] {
        match self {
            Self::Up => [-1, 0],
            Self::Down => [1, 0],
            Self::Left => [0, -1],
            Self::Right => [0, 1],
        }
    }
}
