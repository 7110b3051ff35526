//! UU Game: a two-player stacking and road-building board game with an AI
//!
//! Players place flat or standing stones from a limited box, or lift part of
//! a stack and drop it stone by stone along a path. A player wins by joining
//! two opposite edges with a road of their flat stones.
//!
//! # Architecture
//!
//! - [`board`]: cells, stacks, stones and the copy-on-write board
//! - [`rules`]: road detection, near-win analysis and move generation
//! - [`eval`]: static position evaluation
//! - [`search`]: minimax with alpha-beta and a time-limited worker thread
//! - [`game`]: the turn state machine and outcome resolution
//! - [`engine`]: the AI player and its difficulty policies
//! - [`ui`]: the egui front end
//!
//! # Quick Start
//!
//! ```
//! use uu_game::{Game, GameConfig, PlayerSpec, StonePose, Vec2};
//! use uu_game::board::Color;
//!
//! let specs = [PlayerSpec::human(Color::Black), PlayerSpec::human(Color::White)];
//! let mut game = Game::new(&GameConfig::default(), specs);
//!
//! // The first stone each player places belongs to the opponent
//! game.place_from_box(Vec2::new(0, 0), StonePose::Flat).unwrap();
//! assert_eq!(game.board().stack(Vec2::new(0, 0)).road_color(), Some(Color::White));
//! assert_eq!(game.active_player().color, Color::White);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Color, Stack, Stone, StonePose, Vec2};
pub use config::{AiConfig, GameConfig};
pub use engine::{AIEngine, Decision, Difficulty, MoveResult, Policy};
pub use error::MoveError;
pub use game::{Game, Outcome, PlayerSpec};
