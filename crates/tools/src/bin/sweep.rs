use std::collections::VecDeque;

use anyhow::{Result, bail};
use clap::Parser;
use log::debug;
use maze_core::{Cell, Maze, MazeGenerator, Rect};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Check maze invariants over many random seeds",
    long_about = None
)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Mazes to generate and check
    #[arg(short, long, default_value_t = 1000)]
    mazes: u32,
    /// Largest height/width to draw
    #[arg(long, default_value_t = 24)]
    max_size: usize,
}

fn reachable(maze: &Maze) -> Result<usize> {
    let grid = maze.grid();
    let mut seen = vec![false; grid.cell_count()];
    let mut queue = VecDeque::from([Cell::new(0, 0)]);
    seen[0] = true;
    let mut count = 0;
    while let Some(cell) = queue.pop_front() {
        count += 1;
        for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
            let next = Cell::new(cell.x + dx, cell.y + dy);
            if !grid.is_valid_cell(next) {
                continue;
            }
            let index = next.y as usize * grid.width() + next.x as usize;
            if !seen[index] && grid.is_open_between(cell, next)? {
                seen[index] = true;
                queue.push_back(next);
            }
        }
    }
    Ok(count)
}

fn check(maze: &Maze) -> Result<()> {
    let grid = maze.grid();
    let cells = grid.cell_count();
    if grid.cleared_interior_walls() != cells - 1 {
        bail!("cleared {} walls, expected {}", grid.cleared_interior_walls(), cells - 1);
    }
    if reachable(maze)? != cells {
        bail!("maze is disconnected");
    }
    let left_open = (0..grid.height()).filter(|&y| !grid.vertical(0, y)).collect::<Vec<_>>();
    let right_open =
        (0..grid.height()).filter(|&y| !grid.vertical(grid.width(), y)).collect::<Vec<_>>();
    if left_open != [maze.start()] || right_open != [maze.end()] {
        bail!("boundary openings {left_open:?}/{right_open:?} do not match start/end");
    }

    let rendering = maze.render(Rect::new(0.0, 0.0, grid.width() as f64, grid.height() as f64))?;
    if rendering.segments.iter().any(|segment| segment.length() <= 0.0) {
        bail!("renderer emitted an empty segment");
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!(
        "Sweeping {} mazes from seed {} up to {}x{}...",
        args.mazes, args.seed, args.max_size, args.max_size
    );
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    for index in 0..args.mazes {
        let height = 1 + (rng.next_u64() as usize % args.max_size.max(1));
        let width = 1 + (rng.next_u64() as usize % args.max_size.max(1));
        let maze_seed = rng.next_u64();
        let maze = MazeGenerator::new(height, width)?.generate_seeded(maze_seed);
        debug!("maze {index}: {height}x{width} seed {maze_seed}");

        if let Err(err) = check(&maze) {
            eprintln!("{}", maze.to_text());
            bail!("Invariant failed for {height}x{width} maze with seed {maze_seed}: {err}");
        }
    }

    println!("Sweep completed successfully.");
    Ok(())
}
