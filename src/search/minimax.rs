//! Depth-limited minimax with alpha-beta pruning
//!
//! Scores are always seen from the root player, who maximizes. Each node
//! generates the full legal move list for the side to move, using supplies
//! inferred from the stones on the board.
//!
//! # Example
//!
//! ```
//! use uu_game::board::{Board, Color, Vec2};
//! use uu_game::rules::Supply;
//! use uu_game::search::Searcher;
//!
//! let mut searcher = Searcher::new(Supply::new(16, 5), 5);
//! let board = Board::new(Vec2::new(4, 4));
//!
//! let result = searcher.search(&board, Color::Black, 1);
//! assert_eq!(result.board.stone_count(), 1);
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::board::{Board, Color};
use crate::eval::evaluate;
use crate::rules::{check_winning, possible_moves, remaining_stones, Supply};

/// A move that completes a road for the root player
pub const WIN_SCORE: i32 = 1000;
/// A move that completes a road for the opponent
pub const LOSS_SCORE: i32 = -1000;
/// The side to move has no legal move
pub const NO_MOVE_SCORE: i32 = -100;

/// Search result: the chosen successor board and its score.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub score: i32,
    /// Successor of the searched board, or the searched board itself when
    /// there was no legal move
    pub board: Board,
    /// Nodes visited
    pub nodes: u64,
}

/// Minimax searcher for one game configuration.
pub struct Searcher {
    /// Supply each color starts with, used to infer remaining stones
    initial: Supply,
    carry_limit: usize,
    /// Actual supply of the root player, when known
    root_supply: Option<Supply>,
    root: Color,
    nodes: u64,
    cancel: Option<Arc<AtomicBool>>,
}

impl Searcher {
    pub fn new(initial: Supply, carry_limit: usize) -> Self {
        Self {
            initial,
            carry_limit,
            root_supply: None,
            root: Color::Black,
            nodes: 0,
            cancel: None,
        }
    }

    /// Generate root moves from `supply` instead of the inferred one. The
    /// inference charges each opening stone to its color rather than to the
    /// player who placed it, so it can differ from a player's real box.
    pub fn with_root_supply(mut self, supply: Supply) -> Self {
        self.root_supply = Some(supply);
        self
    }

    /// Abandon the search as soon as `flag` is raised. The result of a
    /// cancelled search is meaningless and must be discarded.
    pub fn with_cancel(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    #[inline]
    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Search `depth` plies ahead for `color`, which is to move on `board`.
    pub fn search(&mut self, board: &Board, color: Color, depth: u32) -> SearchResult {
        self.root = color;
        self.nodes = 0;
        let root_supply = self.root_supply;
        let (score, board) =
            self.minimax(board, depth, i32::MIN, i32::MAX, color, true, root_supply);
        SearchResult {
            score,
            board,
            nodes: self.nodes,
        }
    }

    fn minimax(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        to_move: Color,
        maximizing: bool,
        supply: Option<Supply>,
    ) -> (i32, Board) {
        self.nodes += 1;

        let supplies = remaining_stones(board, self.initial);
        let supply = supply.unwrap_or(supplies[to_move.index()]);
        let moves = possible_moves(board, supply, to_move, self.carry_limit);

        if moves.is_empty() {
            return (NO_MOVE_SCORE, board.clone());
        }
        if depth == 0 {
            let flat_left = supplies[self.root.index()].flat;
            return (evaluate(board, self.root, flat_left), board.clone());
        }

        let opponent = self.root.opponent();
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_move = moves[0].clone();

        for candidate in moves {
            if self.is_cancelled() {
                break;
            }

            // Immediate results win over pruning at every level
            if check_winning(&candidate, self.root).is_some() {
                return (WIN_SCORE, candidate);
            }
            if check_winning(&candidate, opponent).is_some() {
                return (LOSS_SCORE, candidate);
            }

            let (score, _) = self.minimax(
                &candidate,
                depth - 1,
                alpha,
                beta,
                to_move.opponent(),
                !maximizing,
                None,
            );

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = candidate;
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = candidate;
                }
                beta = beta.min(best_score);
            }

            if beta <= alpha {
                break;
            }
        }

        (best_score, best_move)
    }
}
