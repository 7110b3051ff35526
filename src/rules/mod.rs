//! Game rules for the stacking game
//!
//! This module implements the rule-level analysis used by the game and the AI:
//! - Stone supplies and their inference from a board
//! - Legal move enumeration (placements and stack moves)
//! - Road detection and near-win detection

pub mod movegen;
pub mod near_win;
pub mod supply;
pub mod win;

// Re-exports for convenient access
pub use movegen::possible_moves;
pub use near_win::{check_winning_next_round, path_completeable, NearWin};
pub use supply::{remaining_stones, Supply};
pub use win::{check_winning, Axis};
