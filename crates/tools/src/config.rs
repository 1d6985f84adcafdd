//! Gallery settings: an optional TOML file, then command-line overrides.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use maze_core::GalleryConfig;

pub fn load_config(path: &Path) -> Result<GalleryConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Invalid config file: {}", path.display()))
}

pub fn parse_config(content: &str) -> Result<GalleryConfig> {
    let config: GalleryConfig = toml::from_str(content).context("Failed to parse gallery TOML")?;
    Ok(config)
}

/// Flag values that replace config-file values when present.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Overrides {
    pub height: Option<usize>,
    pub width: Option<usize>,
    pub count: Option<usize>,
    pub icon_dir: Option<String>,
}

impl Overrides {
    pub fn apply(self, mut config: GalleryConfig) -> GalleryConfig {
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(count) = self.count {
            config.count = count;
        }
        if let Some(icon_dir) = self.icon_dir {
            config.icon_dir = icon_dir;
        }
        config
    }
}
