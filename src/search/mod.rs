//! Search module for the stacking game AI
//!
//! Contains:
//! - Minimax with alpha-beta pruning over full legal move lists
//! - A background worker that bounds the search by wall-clock time

pub mod minimax;
pub mod worker;

pub use minimax::{SearchResult, Searcher, LOSS_SCORE, NO_MOVE_SCORE, WIN_SCORE};
pub use worker::SearchWorker;
