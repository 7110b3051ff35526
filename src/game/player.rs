//! Players and their per-game state

use crate::board::Color;
use crate::engine::Difficulty;
use crate::rules::Supply;

/// Who plays a color: a human, or the AI at some difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerSpec {
    pub color: Color,
    pub ai: Option<Difficulty>,
}

impl PlayerSpec {
    pub const fn human(color: Color) -> Self {
        Self { color, ai: None }
    }

    pub const fn ai(color: Color, difficulty: Difficulty) -> Self {
        Self {
            color,
            ai: Some(difficulty),
        }
    }
}

/// A player's stance on ending the game early.
///
/// `Undecided -> Proposed` on a proposal or an accepted proposal,
/// `-> Rejected` when answering a proposal with no, and
/// `Proposed -> AdmitsDefeat` once the opponent has rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawIntent {
    #[default]
    Undecided,
    Proposed,
    Rejected,
    AdmitsDefeat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub color: Color,
    pub ai: Option<Difficulty>,
    /// Completed turns
    pub turns: u32,
    /// Stones still in the box
    pub stones: Supply,
    pub won: bool,
    pub drew: bool,
    pub draw: DrawIntent,
}

impl Player {
    pub fn new(spec: PlayerSpec, stones: Supply) -> Self {
        Self {
            color: spec.color,
            ai: spec.ai,
            turns: 0,
            stones,
            won: false,
            drew: false,
            draw: DrawIntent::Undecided,
        }
    }

    /// Color of the next stone taken from the box: the opponent's on the
    /// player's first turn, their own afterwards.
    #[inline]
    pub fn color_to_place(&self) -> Color {
        if self.turns > 0 {
            self.color
        } else {
            self.color.opponent()
        }
    }

    /// A proposed draw, or an admitted defeat, which still wants the game to end
    #[inline]
    pub fn wants_draw(&self) -> bool {
        matches!(self.draw, DrawIntent::Proposed | DrawIntent::AdmitsDefeat)
    }

    #[inline]
    pub fn is_ai(&self) -> bool {
        self.ai.is_some()
    }

    pub fn name(&self) -> &'static str {
        self.color.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_stone_is_opponent_color() {
        let mut player = Player::new(PlayerSpec::human(Color::White), Supply::new(16, 5));
        assert_eq!(player.color_to_place(), Color::Black);
        player.turns = 1;
        assert_eq!(player.color_to_place(), Color::White);
    }

    #[test]
    fn test_wants_draw() {
        let mut player = Player::new(PlayerSpec::ai(Color::Black, Difficulty::Easy), Supply::default());
        assert!(player.is_ai());
        assert!(!player.wants_draw());
        player.draw = DrawIntent::Rejected;
        assert!(!player.wants_draw());
        player.draw = DrawIntent::Proposed;
        assert!(player.wants_draw());
        player.draw = DrawIntent::AdmitsDefeat;
        assert!(player.wants_draw());
    }
}
