//! Recoverable, user-facing rule violations
//!
//! A `MoveError` always leaves the game exactly as it was; the caller shows
//! the message and carries on.

use thiserror::Error;

use crate::board::{Color, StonePose};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("Game is over")]
    GameOver,

    #[error("Placing from hand, not from box")]
    PlacingFromHand,

    #[error("No {0} stones left")]
    NoStonesLeft(StonePose),

    #[error("Cannot place a stone on top of a standing stone")]
    StandingStoneBlocks,

    #[error("Not placing anything from hand")]
    NotPlacing,

    #[error("Place the stone adjacent to your last placed stone")]
    NotAdjacent,

    #[error("Cannot pick up while placing from hand")]
    PickUpWhilePlacing,

    #[error("Nothing to pick up")]
    NothingToPickUp,

    #[error("Cannot pick up bottom stone")]
    BottomStone,

    #[error("Cannot pick up {requested} stones, at most {available} can be lifted here")]
    TooManyStones { requested: usize, available: usize },

    #[error("Must pick up at least one stone")]
    ZeroStones,

    #[error("{0} cannot preemptively reject a draw suggestion")]
    PreemptiveReject(Color),

    #[error("{0} needs to make a move before suggesting a draw")]
    DrawBeforeMove(Color),

    #[error("{0} must have their draw request rejected before admitting defeat")]
    DefeatWithoutRejection(Color),

    #[error("{0} needs to make a move before admitting defeat")]
    DefeatBeforeMove(Color),

    /// An AI-proposed board that no single legal move produces
    #[error("Proposed board is not reachable with one move")]
    IllegalSuccessor,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_human_readable() {
        assert_eq!(
            MoveError::NoStonesLeft(StonePose::Standing).to_string(),
            "No standing stones left"
        );
        assert_eq!(
            MoveError::DrawBeforeMove(Color::White).to_string(),
            "White needs to make a move before suggesting a draw"
        );
        assert_eq!(
            MoveError::TooManyStones { requested: 4, available: 2 }.to_string(),
            "Cannot pick up 4 stones, at most 2 can be lifted here"
        );
    }
}
