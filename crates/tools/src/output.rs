//! Serializing a gallery for the terminal, a browser, or another program.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use maze_core::render::svg::render_gallery_html;
use maze_core::{Artwork, Gallery, Rendering};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// ASCII dumps separated by blank lines
    Text,
    /// An HTML page of SVG pictures
    Svg,
    /// Segments, openings, and dumps as JSON
    Json,
}

#[derive(Serialize)]
struct MazeReport {
    seed: u64,
    height: usize,
    width: usize,
    start: usize,
    end: usize,
    fingerprint: String,
    artwork: Artwork,
    text: String,
    rendering: Rendering,
}

pub fn render_output(gallery: &Gallery, format: Format) -> Result<String> {
    match format {
        Format::Text => {
            let dumps: Vec<String> =
                gallery.entries.iter().map(|entry| entry.maze.to_text()).collect();
            Ok(format!("{}\n", dumps.join("\n\n")))
        }
        Format::Svg => render_gallery_html(gallery).context("Failed to render SVG gallery"),
        Format::Json => {
            let rect = gallery.config.maze_rect();
            let reports = gallery
                .entries
                .iter()
                .map(|entry| {
                    Ok(MazeReport {
                        seed: entry.seed,
                        height: entry.maze.height(),
                        width: entry.maze.width(),
                        start: entry.maze.start(),
                        end: entry.maze.end(),
                        fingerprint: format!("0x{:016x}", entry.maze.fingerprint()),
                        artwork: entry.artwork,
                        text: entry.maze.to_text(),
                        rendering: entry.maze.render(rect)?,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            serde_json::to_string_pretty(&reports).context("Failed to serialize gallery JSON")
        }
    }
}

/// Writes through a sibling temp file so readers never see a partial file.
pub fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);
    fs::write(&tmp_path, contents)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}
