//! Board representation for the stacking game

pub mod bitboard;
pub mod board;
pub mod stack;

#[cfg(test)]
mod tests;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

// Re-exports
pub use bitboard::Bitboard;
pub use board::{Board, Road};
pub use stack::Stack;

/// Largest number of cells a board may have (one `u64` bitboard)
pub const MAX_CELLS: usize = 64;

/// Right, down, left, up
pub const CARDINAL_DIRECTIONS: [Vec2; 4] = [
    Vec2::new(1, 0),
    Vec2::new(0, 1),
    Vec2::new(-1, 0),
    Vec2::new(0, -1),
];

/// Integer 2D vector, used both for cell coordinates and board extents.
///
/// `x` grows to the right, `y` grows downwards; `(0, 0)` is the top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2::new(0, 0);

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Vec2) -> i32 {
        self.x * other.x + self.y * other.y
    }

    /// True if both components are strictly less than `other`'s
    #[inline]
    pub fn all_lt(self, other: Vec2) -> bool {
        self.x < other.x && self.y < other.y
    }

    /// True if both components are less than or equal to `other`'s
    #[inline]
    pub fn all_le(self, other: Vec2) -> bool {
        self.x <= other.x && self.y <= other.y
    }

    /// Membership in the rectangle `[0, extent)`.
    #[inline]
    pub fn is_within(self, extent: Vec2) -> bool {
        Vec2::ZERO.all_le(self) && self.all_lt(extent)
    }

    /// Is `self` on the edge of a `size` rectangle that `edge_dir` points to?
    ///
    /// # Panics
    ///
    /// Panics if `edge_dir` is not one of [`CARDINAL_DIRECTIONS`].
    pub fn is_on_edge(self, edge_dir: Vec2, size: Vec2) -> bool {
        match (edge_dir.x, edge_dir.y) {
            (1, 0) => self.x == size.x - 1,
            (0, 1) => self.y == size.y - 1,
            (-1, 0) => self.x == 0,
            (0, -1) => self.y == 0,
            _ => panic!("edge_dir must be a cardinal direction, got {edge_dir}"),
        }
    }

    /// 4-neighbours of `self` that lie inside a `size` rectangle.
    pub fn neighbors(self, size: Vec2) -> impl Iterator<Item = Vec2> {
        CARDINAL_DIRECTIONS
            .into_iter()
            .map(move |dir| self + dir)
            .filter(move |pos| pos.is_within(size))
    }

    /// Equal to `other` or one orthogonal step away from it
    #[inline]
    pub fn touches(self, other: Vec2) -> bool {
        let d = self - other;
        d.x.abs() + d.y.abs() <= 1
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl Mul<i32> for Vec2 {
    type Output = Vec2;

    fn mul(self, k: i32) -> Vec2 {
        Vec2::new(self.x * k, self.y * k)
    }
}

/// Row-major total order, so collections of cells sort top-left first.
impl PartialOrd for Vec2 {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Vec2 {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Stone colors. Black moves first by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Zero-based color id (0 = Black, 1 = White)
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Color::Black => 0,
            Color::White => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::White => "White",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a stone lies on the board.
///
/// "Pose" rather than "position" so it is not confused with the cell a stone is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StonePose {
    /// Counts towards roads and can be stacked on
    Flat,
    /// Blocks stacking and never counts towards a road
    Standing,
}

impl StonePose {
    pub const ALL: [StonePose; 2] = [StonePose::Flat, StonePose::Standing];
}

impl fmt::Display for StonePose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StonePose::Flat => f.write_str("flat"),
            StonePose::Standing => f.write_str("standing"),
        }
    }
}

/// A single piece.
///
/// `recent` marks a stone placed during the last turn. It is display state
/// only and takes no part in equality or hashing.
#[derive(Debug, Clone, Copy)]
pub struct Stone {
    pub color: Color,
    pub pose: StonePose,
    pub recent: bool,
}

impl Stone {
    #[inline]
    pub const fn new(color: Color, pose: StonePose) -> Self {
        Self {
            color,
            pose,
            recent: false,
        }
    }

    #[inline]
    pub const fn flat(color: Color) -> Self {
        Self::new(color, StonePose::Flat)
    }

    #[inline]
    pub const fn standing(color: Color) -> Self {
        Self::new(color, StonePose::Standing)
    }

    #[inline]
    pub fn is_standing(self) -> bool {
        self.pose == StonePose::Standing
    }

    #[inline]
    pub fn is_flat(self) -> bool {
        self.pose == StonePose::Flat
    }
}

impl PartialEq for Stone {
    fn eq(&self, other: &Self) -> bool {
        self.color == other.color && self.pose == other.pose
    }
}

impl Eq for Stone {}

impl Hash for Stone {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.color.hash(state);
        self.pose.hash(state);
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.pose)
    }
}
