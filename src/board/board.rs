//! Board structure with copy-on-write cells

use std::sync::Arc;

use super::bitboard::Bitboard;
use super::stack::Stack;
use super::{Color, Stone, StonePose, Vec2, CARDINAL_DIRECTIONS, MAX_CELLS};
use crate::error::MoveError;

/// Game board: a fixed extent and one stack per cell.
///
/// Cells are reference counted and copied on first write, so cloning a
/// board for every candidate move only copies `width * height` pointers.
/// All cells of a fresh board share a single empty stack.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: Vec2,
    cells: Vec<Arc<Stack>>,
}

/// A set of same-colored cells connecting two opposite board edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Road {
    pub color: Color,
    /// Every cell reachable from the probe, in row-major order
    pub cells: Vec<Vec2>,
}

impl Board {
    /// # Panics
    ///
    /// Panics if either dimension is not positive or the board has more than
    /// [`MAX_CELLS`] cells.
    pub fn new(size: Vec2) -> Self {
        assert!(size.x > 0 && size.y > 0, "board size must be positive, got {size}");
        let cells = (size.x * size.y) as usize;
        assert!(cells <= MAX_CELLS, "board has {cells} cells, at most {MAX_CELLS} supported");
        let empty = Arc::new(Stack::new());
        Self {
            size,
            cells: vec![empty; cells],
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.is_within(self.size)
    }

    /// Cell index of `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    #[inline]
    pub fn index(&self, pos: Vec2) -> usize {
        assert!(
            self.contains(pos),
            "{pos} is outside the {}x{} board",
            self.size.x,
            self.size.y
        );
        (pos.y * self.size.x + pos.x) as usize
    }

    #[inline]
    pub fn pos_of(&self, idx: usize) -> Vec2 {
        let w = self.size.x as usize;
        Vec2::new((idx % w) as i32, (idx / w) as i32)
    }

    /// Stack at `pos` (read only)
    #[inline]
    pub fn stack(&self, pos: Vec2) -> &Stack {
        &self.cells[self.index(pos)]
    }

    /// Stack at `pos`, unshared first if another board still points at it
    #[inline]
    pub fn stack_mut(&mut self, pos: Vec2) -> &mut Stack {
        let idx = self.index(pos);
        Arc::make_mut(&mut self.cells[idx])
    }

    pub fn set_stack(&mut self, pos: Vec2, stack: Stack) {
        let idx = self.index(pos);
        self.cells[idx] = Arc::new(stack);
    }

    pub fn push(&mut self, pos: Vec2, stone: Stone) -> Result<(), MoveError> {
        if !self.stack(pos).can_place() {
            return Err(MoveError::StandingStoneBlocks);
        }
        self.stack_mut(pos).push(stone)
    }

    /// Push a stone flagged as recently placed
    pub fn place(&mut self, pos: Vec2, stone: Stone) -> Result<(), MoveError> {
        if !self.stack(pos).can_place() {
            return Err(MoveError::StandingStoneBlocks);
        }
        self.stack_mut(pos).place(stone)
    }

    pub fn pop(&mut self, pos: Vec2) -> Option<Stone> {
        if self.stack(pos).is_empty() {
            return None;
        }
        self.stack_mut(pos).pop()
    }

    /// All cell coordinates in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        (0..self.cells.len()).map(move |idx| self.pos_of(idx))
    }

    /// `(pos, stack)` for every cell in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Vec2, &Stack)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, stack)| (self.pos_of(idx), stack.as_ref()))
    }

    /// In-bounds 4-neighbours of `pos`
    pub fn neighbors(&self, pos: Vec2) -> impl Iterator<Item = Vec2> {
        pos.neighbors(self.size)
    }

    /// Does every cell hold at least one stone?
    pub fn is_completely_covered(&self) -> bool {
        self.cells.iter().all(|stack| !stack.is_empty())
    }

    /// Total stones on the board
    pub fn stone_count(&self) -> usize {
        self.cells.iter().map(|stack| stack.len()).sum()
    }

    /// Stones of the given color and pose anywhere on the board, covered or not
    pub fn count(&self, color: Color, pose: StonePose) -> u32 {
        self.cells
            .iter()
            .flat_map(|stack| stack.stones())
            .filter(|s| s.color == color && s.pose == pose)
            .count() as u32
    }

    /// Stones of the given pose anywhere on the board
    pub fn count_pose(&self, pose: StonePose) -> u32 {
        self.cells
            .iter()
            .flat_map(|stack| stack.stones())
            .filter(|s| s.pose == pose)
            .count() as u32
    }

    /// Number of stacks showing a flat top, indexed by `Color::index`
    pub fn road_part_counts(&self) -> [usize; 2] {
        let mut counts = [0; 2];
        for stack in &self.cells {
            if let Some(color) = stack.road_color() {
                counts[color.index()] += 1;
            }
        }
        counts
    }

    /// Color with strictly more road-colored stacks. `None` on a tie or
    /// when no stack has a road color; callers decide what a tie means.
    pub fn color_with_most_road_parts(&self) -> Option<Color> {
        let [black, white] = self.road_part_counts();
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Some(Color::Black),
            std::cmp::Ordering::Less => Some(Color::White),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Are two opposite edges connected through `pos` by cells of its road color?
    ///
    /// Depth-first flood fill over 4-connected cells sharing the road color,
    /// recording which edges the reached set touches.
    pub fn complete_road(&self, pos: Vec2) -> Option<Road> {
        let color = self.stack(pos).road_color()?;

        let mut visited = Bitboard::new();
        let mut touched = [false; 4];
        let mut pending = vec![pos];
        visited.set(self.index(pos));

        while let Some(cur) = pending.pop() {
            for (i, &dir) in CARDINAL_DIRECTIONS.iter().enumerate() {
                if cur.is_on_edge(dir, self.size) {
                    touched[i] = true;
                }
                let next = cur + dir;
                if !self.contains(next) {
                    continue;
                }
                let idx = self.index(next);
                if visited.get(idx) || self.stack(next).road_color() != Some(color) {
                    continue;
                }
                visited.set(idx);
                pending.push(next);
            }
        }

        // CARDINAL_DIRECTIONS order: right, down, left, up
        let connected = (touched[0] && touched[2]) || (touched[1] && touched[3]);
        connected.then(|| Road {
            color,
            cells: visited.iter_ones().map(|idx| self.pos_of(idx)).collect(),
        })
    }

    /// Colors that currently complete a road.
    ///
    /// Probes every cell, which is quadratic in the cell count; fine for the
    /// small boards this game is played on.
    pub fn complete_roads(&self) -> Vec<Color> {
        let mut colors = Vec::with_capacity(2);
        for pos in self.positions() {
            if let Some(road) = self.complete_road(pos) {
                if !colors.contains(&road.color) {
                    colors.push(road.color);
                }
                if colors.len() == 2 {
                    break;
                }
            }
        }
        colors.sort();
        colors
    }

    /// Clear the recently-placed flag on every stone
    pub fn clear_recent(&mut self) {
        for cell in &mut self.cells {
            if cell.stones().iter().any(|s| s.recent) {
                Arc::make_mut(cell).clear_recent();
            }
        }
    }
}
