//! Stones a player still has in their box

use crate::board::{Board, Color, StonePose};

/// Remaining stones per pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Supply {
    pub flat: u32,
    pub standing: u32,
}

impl Supply {
    #[inline]
    pub const fn new(flat: u32, standing: u32) -> Self {
        Self { flat, standing }
    }

    #[inline]
    pub fn get(&self, pose: StonePose) -> u32 {
        match pose {
            StonePose::Flat => self.flat,
            StonePose::Standing => self.standing,
        }
    }

    /// Take one stone of `pose`. Returns false, leaving the supply as is, when none are left.
    pub fn take(&mut self, pose: StonePose) -> bool {
        let slot = match pose {
            StonePose::Flat => &mut self.flat,
            StonePose::Standing => &mut self.standing,
        };
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    #[inline]
    pub fn total(&self) -> u32 {
        self.flat + self.standing
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Supplies of both colors inferred from the stones on `board`, indexed by
/// `Color::index`: the initial supply minus every stone of that color and
/// pose on the board.
///
/// This is what the search uses at every node. It attributes each stone to
/// its color rather than to whoever placed it, so the opening placement
/// (each player's first stone is the opponent's color) is charged to the
/// opponent.
pub fn remaining_stones(board: &Board, initial: Supply) -> [Supply; 2] {
    Color::ALL.map(|color| Supply {
        flat: initial
            .flat
            .saturating_sub(board.count(color, StonePose::Flat)),
        standing: initial
            .standing
            .saturating_sub(board.count(color, StonePose::Standing)),
    })
}
