//! Frame-independent viewer state: the current gallery and how keys change it.

use log::info;
use macroquad::prelude::KeyCode;
use maze_core::{Gallery, GalleryConfig, MazeError};

pub const MAX_MAZE_SIZE: usize = 40;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerEvent {
    Unchanged,
    Regenerated,
    DumpedText,
}

pub struct ViewerState {
    config: GalleryConfig,
    seed: u64,
    gallery: Gallery,
}

impl ViewerState {
    pub fn new(seed: u64, size: usize, count: usize) -> Result<Self, MazeError> {
        let size = size.min(MAX_MAZE_SIZE);
        let config = GalleryConfig { height: size, width: size, count, ..GalleryConfig::default() };
        let gallery = Gallery::generate(&config, seed)?;
        Ok(Self { config, seed, gallery })
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn size(&self) -> usize {
        self.config.height
    }

    /// Space moves to the next seed, `=`/`-` grow or shrink every maze, and
    /// `T` logs the text dumps.
    pub fn handle_keys(&mut self, keys_pressed: &[KeyCode]) -> Result<ViewerEvent, MazeError> {
        let mut regenerate = false;
        if keys_pressed.contains(&KeyCode::Space) {
            self.seed = self.seed.wrapping_add(1);
            regenerate = true;
        }
        if keys_pressed.contains(&KeyCode::Equal) && self.size() < MAX_MAZE_SIZE {
            self.resize(self.size() + 1);
            regenerate = true;
        }
        if keys_pressed.contains(&KeyCode::Minus) && self.size() > 1 {
            self.resize(self.size() - 1);
            regenerate = true;
        }

        if regenerate {
            self.gallery = Gallery::generate(&self.config, self.seed)?;
            info!(
                "regenerated {} mazes of size {} from seed {}",
                self.config.count,
                self.size(),
                self.seed
            );
            return Ok(ViewerEvent::Regenerated);
        }
        if keys_pressed.contains(&KeyCode::T) {
            for entry in &self.gallery.entries {
                info!("maze seed {}:\n{}", entry.seed, entry.maze.to_text());
            }
            return Ok(ViewerEvent::DumpedText);
        }
        Ok(ViewerEvent::Unchanged)
    }

    fn resize(&mut self, size: usize) {
        self.config.height = size;
        self.config.width = size;
    }
}
