//! Game state machine: turns, hands, draw votes and outcomes

#[allow(clippy::module_inception)]
pub mod game;
pub mod player;

pub use game::{Game, Outcome};
pub use player::{DrawIntent, Player, PlayerSpec};
