use super::*;

fn v(x: i32, y: i32) -> Vec2 {
    Vec2::new(x, y)
}

#[test]
fn test_color_opponent() {
    assert_eq!(Color::Black.opponent(), Color::White);
    assert_eq!(Color::White.opponent(), Color::Black);
    assert_eq!(Color::Black.index(), 0);
    assert_eq!(Color::White.index(), 1);
}

#[test]
fn test_vec2_arithmetic() {
    let a = v(2, 3);
    let b = v(1, -1);
    assert_eq!(a + b, v(3, 2));
    assert_eq!(a - b, v(1, 4));
    assert_eq!(a * 2, v(4, 6));
    assert_eq!(-a, v(-2, -3));
    assert_eq!(a.dot(b), -1);
}

#[test]
fn test_vec2_bounds() {
    let size = v(4, 4);
    assert!(v(0, 0).is_within(size));
    assert!(v(3, 3).is_within(size));
    assert!(!v(4, 0).is_within(size));
    assert!(!v(0, 4).is_within(size));
    assert!(!v(-1, 2).is_within(size));
    assert!(v(1, 1).all_lt(v(2, 2)));
    assert!(!v(1, 2).all_lt(v(2, 2)));
    assert!(v(1, 2).all_le(v(2, 2)));
}

#[test]
fn test_vec2_edges() {
    let size = v(5, 5);
    assert!(v(4, 2).is_on_edge(v(1, 0), size));
    assert!(v(0, 2).is_on_edge(v(-1, 0), size));
    assert!(v(2, 0).is_on_edge(v(0, -1), size));
    assert!(v(2, 4).is_on_edge(v(0, 1), size));
    assert!(!v(2, 2).is_on_edge(v(1, 0), size));
}

#[test]
fn test_vec2_neighbors_clipped() {
    let corner: Vec<Vec2> = v(0, 0).neighbors(v(4, 4)).collect();
    assert_eq!(corner.len(), 2);
    let middle: Vec<Vec2> = v(1, 1).neighbors(v(4, 4)).collect();
    assert_eq!(middle.len(), 4);
}

#[test]
fn test_vec2_touches() {
    assert!(v(1, 1).touches(v(1, 1)));
    assert!(v(1, 1).touches(v(1, 2)));
    assert!(!v(1, 1).touches(v(2, 2)));
}

#[test]
fn test_vec2_row_major_order() {
    assert!(v(3, 0) < v(0, 1));
    assert!(v(0, 1) < v(1, 1));
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new(v(4, 4));
    assert_eq!(board.cell_count(), 16);
    assert_eq!(board.stone_count(), 0);
    assert!(!board.is_completely_covered());
    assert!(board.positions().all(|p| board.stack(p).is_empty()));
}

#[test]
#[should_panic]
fn test_out_of_bounds_access_panics() {
    let board = Board::new(v(4, 4));
    let _ = board.stack(v(4, 0));
}

#[test]
#[should_panic]
fn test_oversized_board_panics() {
    let _ = Board::new(v(9, 9));
}

#[test]
fn test_push_onto_standing_fails_for_every_cell() {
    let mut board = Board::new(v(3, 3));
    for pos in board.positions().collect::<Vec<_>>() {
        board.push(pos, Stone::standing(Color::Black)).unwrap();
        let before = board.clone();
        let err = board.push(pos, Stone::flat(Color::White)).unwrap_err();
        assert_eq!(err, crate::error::MoveError::StandingStoneBlocks);
        assert_eq!(board, before);
    }
}

#[test]
fn test_clone_is_copy_on_write() {
    let mut board = Board::new(v(3, 3));
    board.push(v(1, 1), Stone::flat(Color::Black)).unwrap();
    let snapshot = board.clone();
    board.push(v(1, 1), Stone::flat(Color::White)).unwrap();

    assert_eq!(snapshot.stack(v(1, 1)).len(), 1);
    assert_eq!(board.stack(v(1, 1)).len(), 2);
    assert_ne!(snapshot, board);
}

#[test]
fn test_complete_road_horizontal() {
    let mut board = Board::new(v(4, 4));
    for x in 0..4 {
        board.push(v(x, 2), Stone::flat(Color::White)).unwrap();
    }
    let road = board.complete_road(v(1, 2)).unwrap();
    assert_eq!(road.color, Color::White);
    assert_eq!(road.cells.len(), 4);
    assert_eq!(board.complete_roads(), vec![Color::White]);
}

#[test]
fn test_complete_road_bends() {
    let mut board = Board::new(v(4, 4));
    for pos in [v(1, 0), v(1, 1), v(2, 1), v(2, 2), v(2, 3)] {
        board.push(pos, Stone::flat(Color::Black)).unwrap();
    }
    assert!(board.complete_road(v(1, 0)).is_some());
    assert_eq!(board.complete_roads(), vec![Color::Black]);
}

#[test]
fn test_standing_stone_breaks_road() {
    let mut board = Board::new(v(4, 4));
    for x in 0..4 {
        board.push(v(x, 0), Stone::flat(Color::Black)).unwrap();
    }
    board.push(v(2, 0), Stone::standing(Color::Black)).unwrap();
    assert!(board.complete_road(v(0, 0)).is_none());
    assert!(board.complete_roads().is_empty());
}

#[test]
fn test_covered_stone_does_not_count() {
    let mut board = Board::new(v(3, 3));
    for x in 0..3 {
        board.push(v(x, 0), Stone::flat(Color::Black)).unwrap();
    }
    board.push(v(1, 0), Stone::flat(Color::White)).unwrap();
    assert!(board.complete_roads().is_empty());
}

#[test]
fn test_road_part_majority() {
    let mut board = Board::new(v(3, 3));
    board.push(v(0, 0), Stone::flat(Color::Black)).unwrap();
    board.push(v(1, 0), Stone::flat(Color::Black)).unwrap();
    board.push(v(2, 0), Stone::flat(Color::White)).unwrap();
    board.push(v(0, 1), Stone::standing(Color::White)).unwrap();
    assert_eq!(board.road_part_counts(), [2, 1]);
    assert_eq!(board.color_with_most_road_parts(), Some(Color::Black));

    board.push(v(1, 1), Stone::flat(Color::White)).unwrap();
    assert_eq!(board.color_with_most_road_parts(), None);
}

#[test]
fn test_completely_covered() {
    let mut board = Board::new(v(2, 2));
    for pos in board.positions().collect::<Vec<_>>() {
        assert!(!board.is_completely_covered());
        board.push(pos, Stone::flat(Color::Black)).unwrap();
    }
    assert!(board.is_completely_covered());
}

#[test]
fn test_clear_recent() {
    let mut board = Board::new(v(2, 2));
    board.place(v(0, 0), Stone::flat(Color::Black)).unwrap();
    assert!(board.stack(v(0, 0)).top().unwrap().recent);
    board.clear_recent();
    assert!(!board.stack(v(0, 0)).top().unwrap().recent);
}

#[test]
fn test_counts() {
    let mut board = Board::new(v(3, 3));
    board.push(v(0, 0), Stone::flat(Color::Black)).unwrap();
    board.push(v(0, 0), Stone::flat(Color::White)).unwrap();
    board.push(v(1, 0), Stone::standing(Color::White)).unwrap();
    assert_eq!(board.stone_count(), 3);
    assert_eq!(board.count(Color::White, StonePose::Flat), 1);
    assert_eq!(board.count(Color::White, StonePose::Standing), 1);
    assert_eq!(board.count_pose(StonePose::Flat), 2);
}

#[test]
fn test_pop_empty_cell() {
    let mut board = Board::new(v(3, 3));
    assert_eq!(board.pop(v(1, 1)), None);

    board.push(v(1, 1), Stone::flat(Color::Black)).unwrap();
    board.push(v(1, 1), Stone::standing(Color::White)).unwrap();
    assert_eq!(board.pop(v(1, 1)), Some(Stone::standing(Color::White)));
    assert_eq!(board.pop(v(1, 1)), Some(Stone::flat(Color::Black)));
    assert_eq!(board.pop(v(1, 1)), None);
    assert_eq!(board.stone_count(), 0);
}

#[test]
fn test_set_stack_replaces_cell() {
    let mut stack = Stack::new();
    stack.push(Stone::flat(Color::White)).unwrap();
    stack.push(Stone::standing(Color::Black)).unwrap();

    let mut board = Board::new(v(3, 2));
    board.push(v(2, 1), Stone::flat(Color::Black)).unwrap();
    let before = board.clone();
    board.set_stack(v(2, 1), stack.clone());

    assert_eq!(board.stack(v(2, 1)), &stack);
    assert_eq!(before.stack(v(2, 1)).len(), 1);
    assert!(board.stack(v(0, 0)).is_empty());
}
