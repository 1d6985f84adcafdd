pub mod artwork;
pub mod error;
pub mod gallery;
pub mod generator;
pub mod grid;
pub mod maze;
pub mod render;
pub mod rng;
pub mod types;

pub use artwork::{Artwork, IconBox, choose_artwork, place_icons};
pub use error::MazeError;
pub use gallery::{Gallery, GalleryConfig, GalleryEntry};
pub use generator::{MazeGenerator, Openings, carve_spanning_tree, select_openings};
pub use grid::{Edge, WallGrid};
pub use maze::Maze;
pub use render::{Rendering, render_segments, render_text};
pub use rng::MazeRng;
pub use types::*;

/// Builds one maze from a plain seed.
pub fn generate_maze(height: usize, width: usize, seed: u64) -> Result<Maze, MazeError> {
    Ok(MazeGenerator::new(height, width)?.generate_seeded(seed))
}
