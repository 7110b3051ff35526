//! Road detection along a fixed axis
//!
//! A road for one color is a chain of 4-adjacent cells whose top stone is a
//! flat stone of that color, linking the starting edge of an axis to the
//! opposite edge. Unlike [`Board::complete_road`], which probes from a given
//! cell, these searches start on an edge and return one concrete path.

use crate::board::{Bitboard, Board, Color, Vec2};

/// Which pair of opposite edges a road connects.
///
/// `Vertical` roads start on the left column (`x == 0`) and end on the right
/// column; `Horizontal` roads start on the top row (`y == 0`) and end on the
/// bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl Axis {
    /// Search order
    pub const ALL: [Axis; 2] = [Axis::Vertical, Axis::Horizontal];

    /// Cells on the starting edge
    pub fn starts(self, size: Vec2) -> impl Iterator<Item = Vec2> {
        let len = match self {
            Axis::Vertical => size.y,
            Axis::Horizontal => size.x,
        };
        (0..len).map(move |i| match self {
            Axis::Vertical => Vec2::new(0, i),
            Axis::Horizontal => Vec2::new(i, 0),
        })
    }

    /// Is `pos` on the edge opposite the starting edge?
    #[inline]
    pub fn is_far_edge(self, pos: Vec2, size: Vec2) -> bool {
        match self {
            Axis::Vertical => pos.x == size.x - 1,
            Axis::Horizontal => pos.y == size.y - 1,
        }
    }
}

/// Does `color` own a complete road? Returns one road as an ordered path
/// from the starting edge to the far edge, trying the vertical axis first.
pub fn check_winning(board: &Board, color: Color) -> Option<Vec<Vec2>> {
    Axis::ALL.into_iter().find_map(|axis| {
        find_path(board, axis, |pos| board.stack(pos).road_color() == Some(color))
    })
}

/// Depth-first search for a simple path of `passable` cells across `axis`.
///
/// A cell that was expanded once is never expanded again, from any start:
/// whether the far edge is reachable from it does not depend on how it was
/// reached. The search is therefore linear in the cell count and the
/// recursion never goes deeper than the number of cells.
pub(crate) fn find_path<F>(board: &Board, axis: Axis, passable: F) -> Option<Vec<Vec2>>
where
    F: Fn(Vec2) -> bool,
{
    let mut visited = Bitboard::new();
    let mut path = Vec::with_capacity(board.cell_count());

    for start in axis.starts(board.size()) {
        if extend_path(board, axis, &passable, start, &mut visited, &mut path) {
            return Some(path);
        }
    }
    None
}

fn extend_path<F>(
    board: &Board,
    axis: Axis,
    passable: &F,
    pos: Vec2,
    visited: &mut Bitboard,
    path: &mut Vec<Vec2>,
) -> bool
where
    F: Fn(Vec2) -> bool,
{
    let idx = board.index(pos);
    if visited.get(idx) || !passable(pos) {
        return false;
    }
    visited.set(idx);
    path.push(pos);

    if axis.is_far_edge(pos, board.size()) {
        return true;
    }
    for next in board.neighbors(pos) {
        if extend_path(board, axis, passable, next, visited, path) {
            return true;
        }
    }

    path.pop();
    false
}
