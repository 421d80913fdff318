use macroquad::prelude::KeyCode;
use maze_app::fly_view::{
    FlyInput, FlyState, WORLD_CELL, marker_position, minimap_geometry, minimap_point,
    path_marker_color, wall_boxes,
};
use maze_core::MazeSession;

#[test]
fn scene_is_built_from_the_session_maze() {
    let session = MazeSession::new(7, 5, 21).expect("valid dimensions");
    let boxes = wall_boxes(session.maze());
    assert_eq!(boxes.len(), session.maze().walls().len() + 4);

    let (max_x, max_z) = (7.0 * WORLD_CELL, 5.0 * WORLD_CELL);
    for wall in &boxes {
        assert!((0.0..=max_x).contains(&wall.center.x), "{wall:?}");
        assert!((0.0..=max_z).contains(&wall.center.z), "{wall:?}");
    }
}

#[test]
fn path_markers_run_from_start_to_end() {
    let session = MazeSession::new(6, 6, 4).expect("valid dimensions");
    let path = session.path().expect("generated mazes are connected");

    assert_eq!(marker_position(path[0], 0.2), marker_position(session.start(), 0.2));
    assert_eq!(marker_position(path[path.len() - 1], 0.2), marker_position(session.end(), 0.2));
    assert_eq!(path_marker_color(0, path.len()).g, 1.0);
    assert_eq!(path_marker_color(path.len() - 1, path.len()).r, 1.0);
}

#[test]
fn flying_over_the_start_cell_lines_up_with_its_minimap_marker() {
    let session = MazeSession::new(4, 4, 9).expect("valid dimensions");
    let mut state = FlyState::new(session.width(), session.height());
    let geometry = minimap_geometry(1024.0, 768.0, session.width(), session.height());

    // From the centre of a 4x4 grid, 1.5 cells up and 1.5 cells left is the middle of (0, 0).
    for _ in 0..30 {
        state.tick(&FlyInput::held(&[KeyCode::W, KeyCode::A]));
    }
    let (x, y) = minimap_point(&geometry, &state.pose);
    let (cx, cy) = geometry.cell_center(session.start());
    assert!((x - cx).abs() < 0.5 && (y - cy).abs() < 0.5, "({x}, {y}) vs ({cx}, {cy})");

    state.tick(&FlyInput::tapped(&[KeyCode::R]));
    assert_eq!(state.pose, state.home());
}
