use serde::{Deserialize, Serialize};

/// A maze cell. Signed so that callers can ask about coordinates left of or
/// above the grid and get `OutOfRange` back instead of a wrapped index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn manhattan(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Target drawing area in caller coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn is_well_formed(&self) -> bool {
        self.right > self.left && self.bottom > self.top
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Segment {
    pub fn is_horizontal(&self) -> bool {
        self.y1 == self.y2
    }

    pub fn length(&self) -> f64 {
        (self.x2 - self.x1).abs() + (self.y2 - self.y1).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance_is_symmetric() {
        let a = Cell::new(1, 4);
        let b = Cell::new(-2, 2);
        assert_eq!(a.manhattan(b), 5);
        assert_eq!(b.manhattan(a), 5);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn degenerate_rects_are_not_well_formed() {
        assert!(Rect::new(0.0, 0.0, 10.0, 5.0).is_well_formed());
        assert!(!Rect::new(10.0, 0.0, 10.0, 5.0).is_well_formed());
        assert!(!Rect::new(0.0, 5.0, 10.0, 1.0).is_well_formed());
    }
}
