//! Randomized Kruskal construction of perfect mazes.
//!
//! Every cell starts in its own set. The full interior edge list is shuffled
//! and popped from the back; an edge whose cells already share a set would
//! close a loop and is skipped, any other edge has its wall cleared and its
//! sets merged. Generation stops as soon as one set remains, which leaves a
//! spanning tree: `cells - 1` cleared walls, one path between any two cells.

mod disjoint;
mod openings;

use log::{debug, trace};
use rand_chacha::rand_core::Rng;

use crate::error::MazeError;
use crate::grid::WallGrid;
use crate::maze::Maze;
use crate::rng::{seeded, shuffle};

use disjoint::DisjointSets;

pub use openings::{Openings, select_openings};

/// Produces mazes of one fixed size. Dimensions are validated once, so
/// generation itself cannot fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeGenerator {
    blank: WallGrid,
}

impl MazeGenerator {
    pub fn new(height: usize, width: usize) -> Result<Self, MazeError> {
        Ok(Self { blank: WallGrid::new(height, width)? })
    }

    pub fn height(&self) -> usize {
        self.blank.height()
    }

    pub fn width(&self) -> usize {
        self.blank.width()
    }

    /// Carves a maze and opens its entrance and exit, drawing from `rng` in
    /// that order.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Maze {
        let mut grid = self.blank.clone();
        carve_spanning_tree(&mut grid, rng);
        let openings = select_openings(&mut grid, rng);
        Maze::new(grid, openings)
    }

    pub fn generate_seeded(&self, seed: u64) -> Maze {
        self.generate(&mut seeded(seed))
    }
}

/// Clears the walls of a random spanning tree and returns how many were
/// cleared. Expects a fully walled grid.
pub fn carve_spanning_tree<R: Rng + ?Sized>(grid: &mut WallGrid, rng: &mut R) -> usize {
    let mut sets = DisjointSets::new(grid.cell_count());
    let mut walls = grid.enumerate_all_walls();
    shuffle(rng, &mut walls);

    let candidates = walls.len();
    let mut cleared = 0usize;
    let mut skipped = 0usize;
    while sets.set_count() > 1 {
        let Some(edge) = walls.pop() else {
            break;
        };
        if !sets.union(grid.index_of(edge.a), grid.index_of(edge.b)) {
            trace!("skipping wall {:?}-{:?}: cells already connected", edge.a, edge.b);
            skipped += 1;
            continue;
        }
        grid.clear_adjacent(edge.a, edge.b);
        cleared += 1;
    }
    debug_assert_eq!(sets.set_count(), 1, "edge list exhausted before the grid was connected");

    debug!(
        "carved {}x{} maze: cleared {cleared} of {candidates} walls, skipped {skipped}",
        grid.height(),
        grid.width()
    );
    cleared
}
