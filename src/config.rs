//! Game and AI settings

use std::time::Duration;

use crate::board::Vec2;
use crate::rules::Supply;

/// Rules that vary between games.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Board extent, at most 64 cells
    pub board_size: Vec2,
    /// Most stones a player may lift in one pick-up. Also bounds how many
    /// stones the AI carries in a stack move.
    pub hand_limit: usize,
    pub flat_stones: u32,
    pub standing_stones: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: Vec2::new(5, 5),
            hand_limit: 5,
            flat_stones: 16,
            standing_stones: 5,
        }
    }
}

impl GameConfig {
    /// Default rules on a `width` x `height` board
    pub fn with_size(width: i32, height: i32) -> Self {
        Self {
            board_size: Vec2::new(width, height),
            ..Self::default()
        }
    }

    /// Stones each player starts with
    pub fn supply(&self) -> Supply {
        Supply::new(self.flat_stones, self.standing_stones)
    }
}

/// Search settings for the hard difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiConfig {
    /// Plies searched by minimax
    pub depth: u32,
    /// Wall-clock budget per search, after which a random move is played
    pub time_limit: Duration,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            time_limit: Duration::from_millis(4500),
        }
    }
}

impl AiConfig {
    pub fn new(depth: u32, time_limit_ms: u64) -> Self {
        Self {
            depth,
            time_limit: Duration::from_millis(time_limit_ms),
        }
    }
}
