mod frame_input;
mod window_config;

use std::env;

use app::board_layout::{HEADER_HEIGHT, panel_rects};
use app::seed::parse_launch_options;
use app::viewer::ViewerState;
use app::{format_fingerprint, format_seed};
use log::{error, info, warn};
use macroquad::prelude::*;
use macroquad::window::Conf;
use maze_core::rng::runtime_seed;

use frame_input::{capture_keys_pressed, quit_requested};
use window_config::build_window_conf;

const DEFAULT_MAZE_SIZE: usize = 5;
const GALLERY_COUNT: usize = 6;
const WALL_THICKNESS: f32 = 3.0;
const OPENING_RADIUS: f32 = 6.0;

fn window_conf() -> Conf {
    build_window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();
    let options = match parse_launch_options(&args, runtime_seed()) {
        Ok(options) => options,
        Err(message) => {
            error!("{message}");
            return;
        }
    };
    let size = options.size.unwrap_or(DEFAULT_MAZE_SIZE);
    let mut viewer = match ViewerState::new(options.seed.value(), size, GALLERY_COUNT) {
        Ok(viewer) => viewer,
        Err(err) => {
            error!("cannot build gallery: {err}");
            return;
        }
    };
    info!("starting viewer with seed {} ({:?})", format_seed(viewer.seed()), options.seed);

    loop {
        if quit_requested() {
            return;
        }
        if let Err(err) = viewer.handle_keys(&capture_keys_pressed()) {
            warn!("keeping previous gallery: {err}");
        }

        clear_background(WHITE);
        draw_text(
            &format!(
                "seed {}  size {}  [space] next  [=/-] resize  [t] dump",
                format_seed(viewer.seed()),
                viewer.size()
            ),
            16.0,
            (HEADER_HEIGHT as f32) * 0.65,
            24.0,
            DARKGRAY,
        );

        let entries = &viewer.gallery().entries;
        let rects = panel_rects(screen_width() as f64, screen_height() as f64, entries.len());
        for (entry, rect) in entries.iter().zip(rects) {
            let rendering = match entry.maze.render(rect) {
                Ok(rendering) => rendering,
                Err(err) => {
                    warn!("skipping maze {}: {err}", format_fingerprint(entry.maze.fingerprint()));
                    continue;
                }
            };
            for segment in &rendering.segments {
                draw_line(
                    segment.x1 as f32,
                    segment.y1 as f32,
                    segment.x2 as f32,
                    segment.y2 as f32,
                    WALL_THICKNESS,
                    BLACK,
                );
            }
            let start = rendering.start_point;
            let end = rendering.end_point;
            let start_x = start.x as f32 - OPENING_RADIUS * 2.0;
            draw_circle(start_x, start.y as f32, OPENING_RADIUS, GREEN);
            draw_circle(end.x as f32 + OPENING_RADIUS * 2.0, end.y as f32, OPENING_RADIUS, RED);
        }

        next_frame().await
    }
}
