//! Static evaluation of board positions
//!
//! The score is a plain sum of independent terms, seen from one player:
//! - Next-round road threats for both sides
//! - Stone economy (how many flat stones are still in the box)
//! - Stack shape: who shows flat tops, how standing stones are used,
//!   and own stones stacked on each other
//!
//! It is only an ordering signal for the search; there is no fixed scale.

use crate::board::{Board, Color, Stack};
use crate::rules::check_winning_next_round;

/// Term weights
pub struct Weights;

impl Weights {
    /// Player can complete a road next round
    pub const NEAR_WIN: i32 = 500;
    /// Opponent can complete a road next round
    pub const OPPONENT_NEAR_WIN: i32 = -1000;
    /// Per flat top of the player, minus the opponent's
    pub const FLAT_TOP: i32 = 3;
    /// Per own standing stone directly on an own stone
    pub const STANDING_ON_OWN: i32 = -20;
    /// Per own standing stone directly on an opponent stone
    pub const STANDING_ON_OTHER: i32 = 5;
    /// Per own standing stone beyond [`Weights::STANDING_ALLOWANCE`]
    pub const EXTRA_STANDING: i32 = -8;
    pub const STANDING_ALLOWANCE: i32 = 3;
    /// Per own flat stone directly on an own stone
    pub const OWN_STACKED: i32 = 15;
}

/// Evaluate `board` for `color`, which has `flat_left` flat stones in its box.
///
/// `flat_left` is also used for the opponent's near-win check, and the
/// stone-economy term counts it twice while ignoring standing stones.
#[must_use]
pub fn evaluate(board: &Board, color: Color, flat_left: u32) -> i32 {
    let mut score = 0;

    if check_winning_next_round(board, color, flat_left).is_some() {
        score += Weights::NEAR_WIN;
    }
    if check_winning_next_round(board, color.opponent(), flat_left).is_some() {
        score += Weights::OPPONENT_NEAR_WIN;
    }

    score += stone_economy(flat_left as i32 * 2);
    score += evaluate_stacks(board, color);

    score
}

/// Peaks at 3 stones left, floor of -25, with extra penalties for
/// hoarding early in the game.
fn stone_economy(total_left: i32) -> i32 {
    let base = (-5 * (total_left - 3).pow(2) + 20).max(-25);
    let hoarding = match total_left {
        14 => -40,
        13 => -30,
        12 => -20,
        11 => -10,
        _ => 0,
    };
    base + hoarding
}

#[derive(Debug, Default)]
struct StackTally {
    own_tops: i32,
    opponent_tops: i32,
    standing_on_own: i32,
    standing_on_other: i32,
    standing: i32,
    own_stacked: i32,
}

impl StackTally {
    fn add(&mut self, stack: &Stack, color: Color) {
        let stones = stack.stones();

        if let Some(first) = stones.first() {
            if first.color == color && first.is_standing() {
                self.standing += 1;
            }
        }
        for pair in stones.windows(2) {
            let (below, above) = (pair[0], pair[1]);
            if above.color != color {
                continue;
            }
            if above.is_standing() {
                self.standing += 1;
                if below.color == color {
                    self.standing_on_own += 1;
                } else {
                    self.standing_on_other += 1;
                }
            } else if below.color == color {
                self.own_stacked += 1;
            }
        }

        if let Some(top) = stack.top().filter(|s| s.is_flat()) {
            if top.color == color {
                self.own_tops += 1;
            } else {
                self.opponent_tops += 1;
            }
        }
    }

    fn score(&self) -> i32 {
        let extra_standing =
            ((self.standing - Weights::STANDING_ALLOWANCE) * Weights::EXTRA_STANDING).min(0);

        (self.own_tops - self.opponent_tops) * Weights::FLAT_TOP
            + self.standing_on_own * Weights::STANDING_ON_OWN
            + self.standing_on_other * Weights::STANDING_ON_OTHER
            + extra_standing
            + self.own_stacked * Weights::OWN_STACKED
    }
}

fn evaluate_stacks(board: &Board, color: Color) -> i32 {
    let mut tally = StackTally::default();
    for (_, stack) in board.iter() {
        tally.add(stack, color);
    }
    tally.score()
}
