use maze_core::{Cell, MazeError, Rect, generate_maze};

#[test]
fn test_smoke_single_cell_maze() {
    let maze = generate_maze(1, 1, 42).expect("valid dimensions");

    assert_eq!(maze.grid().cleared_interior_walls(), 0);
    assert_eq!((maze.start(), maze.end()), (0, 0));
    assert!(!maze.grid().vertical(0, 0));
    assert!(!maze.grid().vertical(1, 0));

    let text = maze.to_text();
    assert_eq!(text.lines().collect::<Vec<_>>(), vec!["+-+", "   ", "+-+"]);
}

#[test]
fn test_smoke_two_by_two_maze() {
    let maze = generate_maze(2, 2, 7).expect("valid dimensions");
    let grid = maze.grid();

    assert_eq!(grid.cleared_interior_walls(), 3);

    let open_pairs = [
        (Cell::new(0, 0), Cell::new(1, 0)),
        (Cell::new(0, 1), Cell::new(1, 1)),
        (Cell::new(0, 0), Cell::new(0, 1)),
        (Cell::new(1, 0), Cell::new(1, 1)),
    ]
    .iter()
    .filter(|(a, b)| grid.is_open_between(*a, *b).expect("adjacent cells"))
    .count();
    assert_eq!(open_pairs, 3, "a spanning tree over four cells keeps exactly one wall");

    let text = maze.to_text();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines.iter().step_by(2).all(|line| line.starts_with('+') && line.ends_with('+')));
}

#[test]
fn test_smoke_render_pipeline_end_to_end() {
    let maze = generate_maze(5, 5, 2024).expect("valid dimensions");
    let rendering = maze.render(Rect::new(90.0, 30.0, 510.0, 450.0)).expect("valid rect");

    assert!(!rendering.segments.is_empty());
    assert_eq!(rendering.start_point.x, 90.0);
    assert_eq!(rendering.end_point.x, 510.0);
    for segment in &rendering.segments {
        for x in [segment.x1, segment.x2] {
            assert!((90.0..=510.0).contains(&x));
        }
        for y in [segment.y1, segment.y2] {
            assert!((30.0..=450.0).contains(&y));
        }
    }
}

#[test]
fn test_smoke_errors_surface_through_the_public_api() {
    assert_eq!(
        generate_maze(0, 0, 1).unwrap_err(),
        MazeError::InvalidDimension { height: 0, width: 0 }
    );

    let mut grid = generate_maze(3, 3, 1).expect("valid dimensions").grid().clone();
    assert!(matches!(
        grid.clear_wall_between(Cell::new(0, 0), Cell::new(2, 2)),
        Err(MazeError::NotAdjacent { .. })
    ));
    assert!(matches!(
        grid.clear_wall_between(Cell::new(0, 0), Cell::new(0, 3)),
        Err(MazeError::OutOfRange { .. })
    ));
}
