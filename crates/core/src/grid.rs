//! Wall-matrix model for a rectangular cell grid.
//!
//! Vertical walls live in a `height x (width + 1)` matrix where column `x`
//! separates cell `x - 1` from cell `x`. Horizontal walls live in a
//! `(height + 1) x width` matrix where row `y` separates cell row `y - 1` from
//! row `y`. The outermost column/row of each matrix is the grid boundary.

use crate::error::MazeError;
use crate::types::Cell;

/// One interior wall, named by the two cells it separates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub a: Cell,
    pub b: Cell,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WallGrid {
    height: usize,
    width: usize,
    vertical: Vec<bool>,
    horizontal: Vec<bool>,
}

impl WallGrid {
    /// Builds a fully enclosed grid.
    pub fn new(height: usize, width: usize) -> Result<Self, MazeError> {
        if height == 0 || width == 0 {
            return Err(MazeError::InvalidDimension { height, width });
        }
        Ok(Self {
            height,
            width,
            vertical: vec![true; height * (width + 1)],
            horizontal: vec![true; (height + 1) * width],
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn cell_count(&self) -> usize {
        self.height * self.width
    }

    pub fn is_valid_cell(&self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && (cell.x as usize) < self.width
            && (cell.y as usize) < self.height
    }

    /// Dense index used by the generator's disjoint-set forest.
    pub(crate) fn index_of(&self, cell: Cell) -> usize {
        (cell.y as usize) * self.width + (cell.x as usize)
    }

    /// `vertical[y][x]`, with `0 <= x <= width` and `0 <= y < height`.
    /// Positions outside the matrix read as walls.
    pub fn vertical(&self, x: usize, y: usize) -> bool {
        if x > self.width || y >= self.height {
            return true;
        }
        self.vertical[y * (self.width + 1) + x]
    }

    /// `horizontal[y][x]`, with `0 <= x < width` and `0 <= y <= height`.
    /// Positions outside the matrix read as walls.
    pub fn horizontal(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y > self.height {
            return true;
        }
        self.horizontal[y * self.width + x]
    }

    /// One row of the vertical matrix, `width + 1` entries. Empty past the
    /// last row.
    pub fn vertical_row(&self, y: usize) -> &[bool] {
        let stride = self.width + 1;
        self.vertical.get(y * stride..(y + 1) * stride).unwrap_or_default()
    }

    /// One row of the horizontal matrix, `width` entries. Empty past the last
    /// row.
    pub fn horizontal_row(&self, y: usize) -> &[bool] {
        self.horizontal.get(y * self.width..(y + 1) * self.width).unwrap_or_default()
    }

    pub fn clear_wall_between(&mut self, a: Cell, b: Cell) -> Result<(), MazeError> {
        self.check_cell(a)?;
        self.check_cell(b)?;
        if a.manhattan(b) != 1 {
            return Err(MazeError::NotAdjacent { a, b });
        }
        self.clear_adjacent(a, b);
        Ok(())
    }

    /// Clears the wall between two cells already known to be valid and adjacent.
    pub(crate) fn clear_adjacent(&mut self, a: Cell, b: Cell) {
        debug_assert_eq!(a.manhattan(b), 1);
        let (x1, x2) = (a.x.min(b.x) as usize, a.x.max(b.x) as usize);
        let (y1, y2) = (a.y.min(b.y) as usize, a.y.max(b.y) as usize);
        if x1 < x2 {
            self.set_vertical(x2, y1, false);
        } else {
            self.set_horizontal(x1, y2, false);
        }
    }

    pub(crate) fn set_vertical(&mut self, x: usize, y: usize, present: bool) {
        let stride = self.width + 1;
        self.vertical[y * stride + x] = present;
    }

    pub(crate) fn set_horizontal(&mut self, x: usize, y: usize, present: bool) {
        self.horizontal[y * self.width + x] = present;
    }

    /// True when no wall stands between two adjacent cells.
    pub fn is_open_between(&self, a: Cell, b: Cell) -> Result<bool, MazeError> {
        self.check_cell(a)?;
        self.check_cell(b)?;
        if a.manhattan(b) != 1 {
            return Err(MazeError::NotAdjacent { a, b });
        }
        let (x1, x2) = (a.x.min(b.x) as usize, a.x.max(b.x) as usize);
        let (y1, y2) = (a.y.min(b.y) as usize, a.y.max(b.y) as usize);
        let wall = if x1 < x2 { self.vertical(x2, y1) } else { self.horizontal(x1, y2) };
        Ok(!wall)
    }

    /// Every Manhattan-adjacent pair once: horizontal neighbours first, then
    /// vertical neighbours, both walked column by column.
    pub fn enumerate_all_walls(&self) -> Vec<Edge> {
        let (height, width) = (self.height as i32, self.width as i32);
        let mut walls = Vec::with_capacity(self.interior_wall_count());
        for x in 0..width - 1 {
            for y in 0..height {
                walls.push(Edge { a: Cell::new(x, y), b: Cell::new(x + 1, y) });
            }
        }
        for x in 0..width {
            for y in 0..height - 1 {
                walls.push(Edge { a: Cell::new(x, y), b: Cell::new(x, y + 1) });
            }
        }
        walls
    }

    pub fn interior_wall_count(&self) -> usize {
        (self.width - 1) * self.height + self.width * (self.height - 1)
    }

    /// Number of cleared walls that separate two cells (boundary walls excluded).
    pub fn cleared_interior_walls(&self) -> usize {
        let vertical = (0..self.height)
            .map(|y| (1..self.width).filter(|&x| !self.vertical(x, y)).count())
            .sum::<usize>();
        let horizontal = (1..self.height)
            .map(|y| (0..self.width).filter(|&x| !self.horizontal(x, y)).count())
            .sum::<usize>();
        vertical + horizontal
    }

    fn check_cell(&self, cell: Cell) -> Result<(), MazeError> {
        if self.is_valid_cell(cell) {
            Ok(())
        } else {
            Err(MazeError::OutOfRange { cell, height: self.height, width: self.width })
        }
    }
}
