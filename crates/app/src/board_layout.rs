//! Tiling a gallery of mazes across the window.

use maze_core::Rect;

pub const HEADER_HEIGHT: f64 = 40.0;
/// Space left around each maze for its opening markers.
pub const PANEL_MARGIN: f64 = 24.0;

/// Columns and rows of a near-square grid holding `count` panels.
pub fn grid_shape(count: usize) -> (usize, usize) {
    if count == 0 {
        return (0, 0);
    }
    let mut columns = 1;
    while columns * columns < count {
        columns += 1;
    }
    (columns, count.div_ceil(columns))
}

/// Square maze areas, one per panel, centred in their grid slots below the
/// header. Empty when the window is too small to draw anything.
pub fn panel_rects(screen_width: f64, screen_height: f64, count: usize) -> Vec<Rect> {
    let (columns, rows) = grid_shape(count);
    if columns == 0 {
        return Vec::new();
    }
    let slot_width = screen_width / columns as f64;
    let slot_height = (screen_height - HEADER_HEIGHT) / rows as f64;
    let side = slot_width.min(slot_height) - 2.0 * PANEL_MARGIN;
    if side <= 0.0 {
        return Vec::new();
    }

    (0..count)
        .map(|index| {
            let center_x = (index % columns) as f64 * slot_width + slot_width / 2.0;
            let center_y =
                HEADER_HEIGHT + (index / columns) as f64 * slot_height + slot_height / 2.0;
            Rect::new(
                center_x - side / 2.0,
                center_y - side / 2.0,
                center_x + side / 2.0,
                center_y + side / 2.0,
            )
        })
        .collect()
}
