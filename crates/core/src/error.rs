//! Precondition failures raised by grid construction, wall clearing, and rendering.

use std::error::Error;
use std::fmt;

use crate::types::{Cell, Rect};

#[derive(Clone, Debug, PartialEq)]
pub enum MazeError {
    /// A grid needs at least one row and one column.
    InvalidDimension { height: usize, width: usize },
    /// The cell lies outside `[0, width) x [0, height)`.
    OutOfRange { cell: Cell, height: usize, width: usize },
    /// The two cells are not Manhattan-adjacent.
    NotAdjacent { a: Cell, b: Cell },
    /// The drawing rectangle has no area.
    InvalidRect { rect: Rect },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { height, width } => {
                write!(f, "maze dimensions must be positive, got {height}x{width}")
            }
            Self::OutOfRange { cell, height, width } => write!(
                f,
                "[{},{}] is out of range [0-{},0-{}]",
                cell.x,
                cell.y,
                *width as i64 - 1,
                *height as i64 - 1
            ),
            Self::NotAdjacent { a, b } => {
                write!(f, "[{},{}] and [{},{}] are not manhattan-adjacent", a.x, a.y, b.x, b.y)
            }
            Self::InvalidRect { rect } => write!(
                f,
                "drawing rectangle ({}, {})-({}, {}) has no area",
                rect.left, rect.top, rect.right, rect.bottom
            ),
        }
    }
}

impl Error for MazeError {}
