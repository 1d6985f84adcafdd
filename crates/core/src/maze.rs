//! The finished, read-only maze artifact.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use crate::error::MazeError;
use crate::generator::Openings;
use crate::grid::WallGrid;
use crate::render::{Rendering, render_segments, render_text};
use crate::types::Rect;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    grid: WallGrid,
    openings: Openings,
}

impl Maze {
    pub(crate) fn new(grid: WallGrid, openings: Openings) -> Self {
        Self { grid, openings }
    }

    pub fn grid(&self) -> &WallGrid {
        &self.grid
    }

    pub fn openings(&self) -> Openings {
        self.openings
    }

    /// Row of the left-edge entrance.
    pub fn start(&self) -> usize {
        self.openings.start
    }

    /// Row of the right-edge exit.
    pub fn end(&self) -> usize {
        self.openings.end
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn to_text(&self) -> String {
        render_text(&self.grid)
    }

    pub fn render(&self, rect: Rect) -> Result<Rendering, MazeError> {
        render_segments(self, rect)
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.height() as u32).to_le_bytes());
        bytes.extend((self.width() as u32).to_le_bytes());
        for y in 0..self.height() {
            bytes.extend(self.grid.vertical_row(y).iter().map(|&wall| u8::from(wall)));
        }
        for y in 0..=self.height() {
            bytes.extend(self.grid.horizontal_row(y).iter().map(|&wall| u8::from(wall)));
        }
        bytes.extend((self.start() as u32).to_le_bytes());
        bytes.extend((self.end() as u32).to_le_bytes());
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write(&self.canonical_bytes());
        hasher.finish()
    }
}
