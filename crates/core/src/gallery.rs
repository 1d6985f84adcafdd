//! Batches of independently seeded mazes, each paired with its artwork.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::artwork::{Artwork, choose_artwork};
use crate::error::MazeError;
use crate::generator::MazeGenerator;
use crate::maze::Maze;
use crate::rng::{derive_maze_seed, seeded};
use crate::types::Rect;

/// Size and page layout of a gallery. Every field has a default so partial
/// config files only name what they change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub height: usize,
    pub width: usize,
    pub count: usize,
    /// Drawing area for the maze itself, borders excluded.
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Horizontal border; also the icon size.
    pub hborder: f64,
    pub vborder: f64,
    pub icon_dir: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            height: 5,
            width: 5,
            count: 6,
            canvas_width: 420.0,
            canvas_height: 420.0,
            hborder: 90.0,
            vborder: 30.0,
            icon_dir: "img".to_string(),
        }
    }
}

impl GalleryConfig {
    /// Where the maze is drawn inside one picture.
    pub fn maze_rect(&self) -> Rect {
        Rect::new(
            self.hborder,
            self.vborder,
            self.canvas_width + self.hborder,
            self.canvas_height + self.vborder,
        )
    }

    pub fn picture_width(&self) -> f64 {
        self.canvas_width + self.hborder * 2.0
    }

    pub fn picture_height(&self) -> f64 {
        self.canvas_height + self.vborder * 2.0
    }

    pub fn validate(&self) -> Result<(), MazeError> {
        MazeGenerator::new(self.height, self.width)?;
        let rect = self.maze_rect();
        if rect.is_well_formed() { Ok(()) } else { Err(MazeError::InvalidRect { rect }) }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryEntry {
    pub seed: u64,
    pub maze: Maze,
    pub artwork: Artwork,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Gallery {
    pub config: GalleryConfig,
    pub seed: u64,
    pub entries: Vec<GalleryEntry>,
}

impl Gallery {
    pub fn generate(config: &GalleryConfig, seed: u64) -> Result<Self, MazeError> {
        config.validate()?;
        let generator = MazeGenerator::new(config.height, config.width)?;
        let entries = (0..config.count as u64)
            .map(|index| {
                let maze_seed = derive_maze_seed(seed, index);
                let mut rng = seeded(maze_seed);
                let maze = generator.generate(&mut rng);
                let artwork = choose_artwork(&mut rng);
                GalleryEntry { seed: maze_seed, maze, artwork }
            })
            .collect::<Vec<_>>();
        debug!(
            "generated gallery of {} {}x{} mazes from seed {seed}",
            entries.len(),
            config.height,
            config.width
        );
        Ok(Self { config: config.clone(), seed, entries })
    }
}
