mod config;
mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use maze_core::rng::runtime_seed;
use maze_core::{Gallery, GalleryConfig};

use config::{Overrides, load_config};
use output::{Format, render_output, write_atomic};

#[derive(Parser)]
#[command(author, version, about = "Generate galleries of perfect mazes", long_about = None)]
struct Args {
    /// TOML gallery config; the flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Rows of cells per maze
    #[arg(long)]
    height: Option<usize>,
    /// Columns of cells per maze
    #[arg(long)]
    width: Option<usize>,
    /// Number of mazes to generate
    #[arg(short = 'n', long)]
    count: Option<usize>,
    /// Gallery seed; a fresh one is drawn when omitted
    #[arg(short, long)]
    seed: Option<u64>,
    /// Directory the SVG output links icons from
    #[arg(long)]
    icon_dir: Option<String>,
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let base = match &args.config {
        Some(path) => load_config(path)?,
        None => GalleryConfig::default(),
    };
    let config = Overrides {
        height: args.height,
        width: args.width,
        count: args.count,
        icon_dir: args.icon_dir,
    }
    .apply(base);
    let seed = args.seed.unwrap_or_else(runtime_seed);

    let gallery = Gallery::generate(&config, seed).context("Invalid gallery settings")?;
    info!(
        "gallery seed {seed}: {} mazes of {}x{}",
        gallery.entries.len(),
        config.height,
        config.width
    );
    let rendered = render_output(&gallery, args.format)?;

    match &args.output {
        Some(path) => {
            write_atomic(path, &rendered)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            eprintln!("Wrote {} mazes (seed {seed}) to {}", gallery.entries.len(), path.display());
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
