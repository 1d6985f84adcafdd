//! ASCII dump of a wall grid, one line per wall row.

use crate::grid::WallGrid;

fn joined(walls: &[bool], present: char, absent: char, fill: &str) -> String {
    let marks: Vec<String> =
        walls.iter().map(|&wall| String::from(if wall { present } else { absent })).collect();
    marks.join(fill)
}

/// Horizontal rows render as `+-+ +`, vertical rows as `| |  |`; the two
/// interleave and the last horizontal row closes the dump. No trailing newline.
pub fn render_text(grid: &WallGrid) -> String {
    let mut lines = Vec::with_capacity(2 * grid.height() + 1);
    for y in 0..grid.height() {
        lines.push(format!("+{}+", joined(grid.horizontal_row(y), '-', ' ', "+")));
        lines.push(joined(grid.vertical_row(y), '|', ' ', " "));
    }
    lines.push(format!("+{}+", joined(grid.horizontal_row(grid.height()), '-', ' ', "+")));
    lines.join("\n")
}
