//! Left/right boundary openings that make a carved maze enterable.

use rand_chacha::rand_core::Rng;

use crate::grid::WallGrid;
use crate::rng::uniform_below;

/// Rows of the left-edge entrance and right-edge exit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Openings {
    pub start: usize,
    pub end: usize,
}

/// Draws `start` then `end` independently (they may coincide) and clears the
/// matching boundary walls. The generator never touches boundary walls, so
/// these are the only ones ever opened.
pub fn select_openings<R: Rng + ?Sized>(grid: &mut WallGrid, rng: &mut R) -> Openings {
    let start = uniform_below(rng, grid.height());
    let end = uniform_below(rng, grid.height());
    grid.set_vertical(0, start, false);
    grid.set_vertical(grid.width(), end, false);
    Openings { start, end }
}
