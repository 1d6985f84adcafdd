//! Run-length compression of wall matrices into straight line segments.

use serde::Serialize;

use crate::error::MazeError;
use crate::maze::Maze;
use crate::types::{Point, Rect, Segment};

/// Everything a drawing surface needs: wall strokes and where the two
/// openings sit on the rectangle's left and right edges.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Rendering {
    pub segments: Vec<Segment>,
    pub start_point: Point,
    pub end_point: Point,
}

/// Emits horizontal-row runs first (top to bottom), then vertical-column runs
/// (left to right). A run still open at the end of a row or column is closed
/// against `rect.right` or `rect.bottom`.
pub fn render_segments(maze: &Maze, rect: Rect) -> Result<Rendering, MazeError> {
    if !rect.is_well_formed() {
        return Err(MazeError::InvalidRect { rect });
    }
    let grid = maze.grid();
    let (height, width) = (grid.height(), grid.width());
    let xsize = rect.width() / width as f64;
    let ysize = rect.height() / height as f64;

    let mut segments = Vec::new();

    for y in 0..=height {
        let ypos = rect.top + y as f64 * ysize;
        let row = grid.horizontal_row(y);
        let mut run_start = None;
        for (x, &wall) in row.iter().enumerate() {
            let xpos = rect.left + x as f64 * xsize;
            match (wall, run_start) {
                (true, None) => run_start = Some(xpos),
                (false, Some(xstart)) => {
                    segments.push(Segment { x1: xstart, y1: ypos, x2: xpos, y2: ypos });
                    run_start = None;
                }
                _ => {}
            }
        }
        if let Some(xstart) = run_start {
            segments.push(Segment { x1: xstart, y1: ypos, x2: rect.right, y2: ypos });
        }
    }

    for x in 0..=width {
        let xpos = rect.left + x as f64 * xsize;
        let mut run_start = None;
        for y in 0..height {
            let ypos = rect.top + y as f64 * ysize;
            match (grid.vertical(x, y), run_start) {
                (true, None) => run_start = Some(ypos),
                (false, Some(ystart)) => {
                    segments.push(Segment { x1: xpos, y1: ystart, x2: xpos, y2: ypos });
                    run_start = None;
                }
                _ => {}
            }
        }
        if let Some(ystart) = run_start {
            segments.push(Segment { x1: xpos, y1: ystart, x2: xpos, y2: rect.bottom });
        }
    }

    Ok(Rendering {
        segments,
        start_point: Point { x: rect.left, y: rect.top + (maze.start() as f64 + 0.5) * ysize },
        end_point: Point { x: rect.right, y: rect.top + (maze.end() as f64 + 0.5) * ysize },
    })
}
