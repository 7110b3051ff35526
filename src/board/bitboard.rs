//! Cell-set bitboard used by the road searches

use super::MAX_CELLS;

/// Set of board cells, one bit per cell index (`y * width + x`).
/// A board has at most [`MAX_CELLS`] cells, so a single `u64` suffices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard {
    bits: u64,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Set a bit at cell index
    #[inline]
    pub fn set(&mut self, idx: usize) {
        debug_assert!(idx < MAX_CELLS);
        self.bits |= 1u64 << idx;
    }

    /// Copy with one more bit set, for passing visited sets down a recursion by value
    #[inline]
    #[must_use]
    pub fn with(mut self, idx: usize) -> Self {
        self.set(idx);
        self
    }

    /// Check if bit is set at cell index
    #[inline]
    pub fn get(&self, idx: usize) -> bool {
        debug_assert!(idx < MAX_CELLS);
        (self.bits >> idx) & 1 == 1
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Iterate over set cell indices in ascending order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter { bits: self.bits }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: u64,
}

impl Iterator for BitboardIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        // Clear the bit we just found
        self.bits &= self.bits - 1;
        Some(idx)
    }
}
