//! Per-cell stone stack

use super::{Color, Stone};
use crate::error::MoveError;

/// The pile of stones on one cell, bottom to top.
///
/// Only the top stone may be standing: `push` refuses to cover a standing stone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Stack {
    stones: Vec<Stone>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stones.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    /// Stones bottom to top
    #[inline]
    pub fn stones(&self) -> &[Stone] {
        &self.stones
    }

    /// Top stone, if any
    #[inline]
    pub fn top(&self) -> Option<&Stone> {
        self.stones.last()
    }

    /// Can a stone be pushed? True unless the top is standing.
    #[inline]
    pub fn can_place(&self) -> bool {
        !matches!(self.top(), Some(top) if top.is_standing())
    }

    pub fn push(&mut self, stone: Stone) -> Result<(), MoveError> {
        if !self.can_place() {
            return Err(MoveError::StandingStoneBlocks);
        }
        self.stones.push(stone);
        Ok(())
    }

    /// Push a copy of `stone` flagged as recently placed
    pub fn place(&mut self, stone: Stone) -> Result<(), MoveError> {
        let mut placed = stone;
        placed.recent = true;
        self.push(placed)
    }

    /// Push several stones in order. Nothing is pushed if the first push fails.
    pub fn extend(&mut self, stones: &[Stone]) -> Result<(), MoveError> {
        if !stones.is_empty() && !self.can_place() {
            return Err(MoveError::StandingStoneBlocks);
        }
        // Only the last stone of `stones` may be standing
        if stones.iter().rev().skip(1).any(|s| s.is_standing()) {
            return Err(MoveError::StandingStoneBlocks);
        }
        self.stones.extend_from_slice(stones);
        Ok(())
    }

    /// Remove the top stone. Rules about the bottom stone live in `Game`.
    #[inline]
    pub fn pop(&mut self) -> Option<Stone> {
        self.stones.pop()
    }

    /// Split into `[0, at)` kept here and `[at, len)` returned.
    pub fn split_off(&mut self, at: usize) -> Vec<Stone> {
        self.stones.split_off(at)
    }

    /// Color a road through this cell would have: the top stone's color when
    /// it is flat, `None` when it is standing or the cell is empty.
    pub fn road_color(&self) -> Option<Color> {
        self.top().filter(|s| s.is_flat()).map(|s| s.color)
    }

    pub fn clear_recent(&mut self) {
        for stone in &mut self.stones {
            stone.recent = false;
        }
    }

    /// Flag the top stone as recently placed
    pub fn mark_top_recent(&mut self) {
        if let Some(top) = self.stones.last_mut() {
            top.recent = true;
        }
    }
}
