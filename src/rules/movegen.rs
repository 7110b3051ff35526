//! Legal move enumeration
//!
//! A move is represented by the board it produces. Two kinds exist:
//! - **Placement**: a new flat or standing stone of the mover's color on any
//!   cell whose top is empty or flat.
//! - **Stack move**: lift 1..=`carry_limit` stones off a stack (the bottom
//!   stone never moves), walk them in orthogonal steps without stepping back
//!   onto the cell just left, and drop at least one stone, bottom first, on
//!   every cell entered until the carried stones run out.

use std::collections::HashSet;

use crate::board::{Board, Color, Stone, Vec2};

use super::supply::Supply;

/// Every board reachable from `board` by one legal move of `color`,
/// duplicates removed, in generation order: stack moves, then flat
/// placements, then standing placements.
///
/// An empty result means `color` has no legal move.
pub fn possible_moves(board: &Board, supply: Supply, color: Color, carry_limit: usize) -> Vec<Board> {
    let mut moves = Vec::new();

    for pos in board.positions() {
        stack_moves(board, pos, carry_limit, &mut moves);
    }

    if supply.flat > 0 {
        placements(board, Stone::flat(color), &mut moves);
    }
    if supply.standing > 0 {
        placements(board, Stone::standing(color), &mut moves);
    }

    dedup(moves)
}

fn placements(board: &Board, stone: Stone, out: &mut Vec<Board>) {
    for pos in board.positions() {
        let mut next = board.clone();
        if next.push(pos, stone).is_ok() {
            out.push(next);
        }
    }
}

/// All stack moves starting at `origin`
fn stack_moves(board: &Board, origin: Vec2, carry_limit: usize, out: &mut Vec<Board>) {
    let height = board.stack(origin).len();
    if height < 2 {
        return;
    }

    let max_carry = carry_limit.min(height - 1);
    for carry in 1..=max_carry {
        let mut lifted = board.clone();
        let carried = lifted.stack_mut(origin).split_off(height - carry);
        spread(&lifted, origin, None, &carried, out);
    }
}

/// Carry `carried` (bottom first) from `from` into each neighbour other than
/// `came_from`, dropping 1..=all of it there and recursing with the rest.
fn spread(board: &Board, from: Vec2, came_from: Option<Vec2>, carried: &[Stone], out: &mut Vec<Board>) {
    for next in board.neighbors(from) {
        if Some(next) == came_from || !board.stack(next).can_place() {
            continue;
        }

        for drop in 1..=carried.len() {
            let mut dropped = board.clone();
            if dropped.stack_mut(next).extend(&carried[..drop]).is_err() {
                continue;
            }
            if drop == carried.len() {
                out.push(dropped);
            } else {
                spread(&dropped, next, Some(from), &carried[drop..], out);
            }
        }
    }
}

/// Keep the first occurrence of every distinct board
fn dedup(moves: Vec<Board>) -> Vec<Board> {
    let mut seen = HashSet::with_capacity(moves.len());
    moves
        .into_iter()
        .filter(|board| seen.insert(board.clone()))
        .collect()
}
