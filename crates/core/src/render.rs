//! Surface-independent renderings of a finished maze.

pub mod svg;

mod segments;
mod text;

pub use segments::{Rendering, render_segments};
pub use text::render_text;
