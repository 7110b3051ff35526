//! "Can win next round" analysis
//!
//! A near-win is a road that is complete except for at most one gap cell.
//! The gap is either empty or shows a flat stone of the wrong color. A
//! standing stone never counts as a gap because neither a placement nor a
//! one-step move can cover it.

use crate::board::{Bitboard, Board, Color, Vec2};

use super::win::{find_path, Axis};

/// A road that needs at most one more stone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NearWin {
    /// Ordered from the starting edge to the far edge, including the gap
    pub path: Vec<Vec2>,
    /// Cell that still has to be filled, `None` if the road is already complete
    pub gap: Option<Vec2>,
}

/// Can `color` complete a road with its next move?
///
/// For each axis, an already complete road is reported first. Otherwise
/// every possible gap cell is tried in row-major order and the first road
/// through it that [`path_completeable`] accepts is returned.
pub fn check_winning_next_round(board: &Board, color: Color, stones_left: u32) -> Option<NearWin> {
    let owned = |pos: Vec2| board.stack(pos).road_color() == Some(color);

    for axis in Axis::ALL {
        if let Some(path) = find_path(board, axis, owned) {
            return Some(NearWin { path, gap: None });
        }

        for gap in board.positions().filter(|&pos| is_gap_candidate(board, color, pos)) {
            let Some(path) = find_path(board, axis, |pos| pos == gap || owned(pos)) else {
                continue;
            };
            if path_completeable(board, color, stones_left, &path, Some(gap)) {
                return Some(NearWin { path, gap: Some(gap) });
            }
        }
    }
    None
}

/// Empty, or topped by a flat stone of the other color
fn is_gap_candidate(board: &Board, color: Color, pos: Vec2) -> bool {
    match board.stack(pos).top() {
        None => true,
        Some(top) => top.is_flat() && top.color != color,
    }
}

/// Can the gap of a near-win road be filled in one move?
///
/// Always true while the player has a stone left to place. Without stones,
/// some neighbour of the gap has to be able to move a stone of `color` onto
/// it: a neighbour with a standing top never can, a neighbour on the road
/// must hold two consecutive stones of `color` so one can leave without
/// breaking the road, and any other neighbour must show `color` on top.
pub fn path_completeable(
    board: &Board,
    color: Color,
    stones_left: u32,
    path: &[Vec2],
    gap: Option<Vec2>,
) -> bool {
    if stones_left > 0 {
        return true;
    }
    let Some(gap) = gap else {
        return true;
    };

    let on_path = path
        .iter()
        .fold(Bitboard::new(), |set, &pos| set.with(board.index(pos)));

    board.neighbors(gap).any(|pos| {
        let stack = board.stack(pos);
        if !stack.can_place() {
            return false;
        }
        if on_path.get(board.index(pos)) {
            stack
                .stones()
                .windows(2)
                .any(|pair| pair[0].color == color && pair[1].color == color)
        } else {
            stack.top().is_some_and(|top| top.color == color)
        }
    })
}
