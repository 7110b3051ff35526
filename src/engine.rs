//! AI engine choosing one full turn for the active player
//!
//! The decision follows a fixed order:
//!
//! 1. **Opening**: on the player's first turn, place the opponent's stone
//!    either on a random cell or standing in a corner
//! 2. **Stalemate**: no legal move ends the game as a draw
//! 3. **Difficulty policy**:
//!    - Easy: random move, sometimes taking a win or blocking a threat
//!    - Medium: a coin flip between Easy and Hard for every move
//!    - Hard: minimax with alpha-beta on a worker thread under a time limit,
//!      random move when the limit is hit
//!
//! # Example
//!
//! ```
//! use uu_game::{AIEngine, AiConfig, Difficulty, Game, GameConfig, PlayerSpec};
//! use uu_game::board::Color;
//!
//! let specs = [
//!     PlayerSpec::ai(Color::Black, Difficulty::Easy),
//!     PlayerSpec::ai(Color::White, Difficulty::Easy),
//! ];
//! let mut game = Game::new(&GameConfig::with_size(4, 4), specs);
//! let mut engine = AIEngine::with_config(AiConfig::new(1, 2000));
//!
//! // Both opening moves
//! for _ in 0..2 {
//!     let over = engine.play_turn(&mut game, Difficulty::Easy).unwrap();
//!     assert!(!over);
//! }
//! assert_eq!(game.board().stone_count(), 2);
//! ```

use std::fmt;
use std::time::Instant;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Stone, StonePose, Vec2};
use crate::config::AiConfig;
use crate::error::MoveError;
use crate::game::{Game, Outcome};
use crate::rules::{check_winning, check_winning_next_round, possible_moves};
use crate::search::{SearchWorker, Searcher};

/// AI strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which rule produced the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Opening stone of the opponent's color
    InitialPlacement,
    /// Uniformly random legal move
    Random,
    /// Move completing a road
    WinningMove,
    /// Move removing the opponent's next-round road
    Defense,
    /// Minimax search result
    Minimax,
    /// Random move after the search ran out of time
    TimeoutFallback,
    /// No legal move
    Stalemate,
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Policy::InitialPlacement => "opening",
            Policy::Random => "random",
            Policy::WinningMove => "winning move",
            Policy::Defense => "defense",
            Policy::Minimax => "minimax",
            Policy::TimeoutFallback => "timeout fallback",
            Policy::Stalemate => "stalemate",
        };
        f.write_str(name)
    }
}

/// What the AI wants to do with its turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Opening placement from the box
    Initial { pos: Vec2, pose: StonePose },
    /// Board after one legal move
    Successor(Board),
    /// No legal move exists
    Stalemate,
}

/// Result of a move search with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    pub decision: Decision,
    pub policy: Policy,
    /// Search score, 0 when no search ran
    pub score: i32,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    /// Play the decision as the active player's turn in `game`.
    pub fn apply(&self, game: &mut Game) -> Result<Option<Outcome>, MoveError> {
        match &self.decision {
            Decision::Initial { pos, pose } => game.place_from_box(*pos, *pose),
            Decision::Successor(board) => game.apply_successor(board.clone()),
            Decision::Stalemate => game.declare_stalemate(),
        }
    }

    #[inline]
    fn initial(pos: Vec2, pose: StonePose, time_ms: u64) -> Self {
        Self {
            decision: Decision::Initial { pos, pose },
            policy: Policy::InitialPlacement,
            score: 0,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn stalemate(time_ms: u64) -> Self {
        Self {
            decision: Decision::Stalemate,
            policy: Policy::Stalemate,
            score: 0,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn successor(board: Board, policy: Policy, time_ms: u64) -> Self {
        Self {
            decision: Decision::Successor(board),
            policy,
            score: 0,
            time_ms,
            nodes: 0,
        }
    }
}

/// AI player.
///
/// Generic over the random source so tests can run with a seeded generator.
pub struct AIEngine<R: Rng = StdRng> {
    rng: R,
    config: AiConfig,
}

impl AIEngine<StdRng> {
    /// Engine with default search settings and an entropy-seeded generator.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(AiConfig::default())
    }

    #[must_use]
    pub fn with_config(config: AiConfig) -> Self {
        Self::with_rng(StdRng::from_entropy(), config)
    }
}

impl Default for AIEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> AIEngine<R> {
    pub fn with_rng(rng: R, config: AiConfig) -> Self {
        Self { rng, config }
    }

    #[inline]
    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// Decide the active player's turn without touching the game.
    pub fn choose_move(&mut self, game: &Game, difficulty: Difficulty) -> MoveResult {
        let start = Instant::now();
        let elapsed = || start.elapsed().as_millis() as u64;
        let player = game.active_player();

        if player.turns == 0 {
            return match self.initial_placement(game) {
                Some((pos, pose)) => MoveResult::initial(pos, pose, elapsed()),
                None => MoveResult::stalemate(elapsed()),
            };
        }

        let moves = possible_moves(game.board(), player.stones, player.color, game.hand_limit());
        debug!("{} candidate moves for {}", moves.len(), player.name());
        let Some(fallback) = moves.choose(&mut self.rng).cloned() else {
            return MoveResult::stalemate(elapsed());
        };

        let hard = match difficulty {
            Difficulty::Easy => false,
            Difficulty::Medium => self.rng.gen_bool(0.5),
            Difficulty::Hard => true,
        };

        if hard {
            self.hard_move(game, fallback, start)
        } else {
            let (board, policy) = self.easy_move(game, &moves, fallback);
            MoveResult::successor(board, policy, elapsed())
        }
    }

    /// Choose and apply one turn. Returns whether the game is over.
    pub fn play_turn(&mut self, game: &mut Game, difficulty: Difficulty) -> Result<bool, MoveError> {
        let result = self.choose_move(game, difficulty);
        info!(
            "{} ({}) chose {} move, score {}, {} ms, {} nodes",
            game.active_player().name(),
            difficulty,
            result.policy,
            result.score,
            result.time_ms,
            result.nodes
        );
        let outcome = result.apply(game)?;
        Ok(outcome.is_some())
    }

    /// Opening: half the time a random cell with a random pose, otherwise a
    /// standing stone in a random corner.
    fn initial_placement(&mut self, game: &Game) -> Option<(Vec2, StonePose)> {
        let board = game.board();
        let size = board.size();
        let supply = game.active_player().stones;

        let (mut pos, mut pose) = if self.rng.gen_bool(0.5) {
            let mut pos = Vec2::new(self.rng.gen_range(0..size.x), self.rng.gen_range(0..size.y));
            if !board.stack(pos).can_place() {
                let neighbors: Vec<Vec2> = board.neighbors(pos).collect();
                if let Some(&next) = neighbors.choose(&mut self.rng) {
                    pos = next;
                }
            }
            let pose = if self.rng.gen_bool(0.5) {
                StonePose::Standing
            } else {
                StonePose::Flat
            };
            (pos, pose)
        } else {
            let corner_x = if self.rng.gen_bool(0.5) { 0 } else { size.x - 1 };
            let corner_y = if self.rng.gen_bool(0.5) { 0 } else { size.y - 1 };
            let mut pos = Vec2::new(corner_x, corner_y);
            if !board.stack(pos).can_place() {
                pos.x = size.x - 1 - pos.x;
            }
            (pos, StonePose::Standing)
        };

        if supply.get(pose) == 0 {
            pose = match pose {
                StonePose::Flat => StonePose::Standing,
                StonePose::Standing => StonePose::Flat,
            };
            if supply.get(pose) == 0 {
                return None;
            }
        }
        if !board.stack(pos).can_place() {
            let open: Vec<Vec2> = board.positions().filter(|&p| board.stack(p).can_place()).collect();
            pos = *open.choose(&mut self.rng)?;
        }

        debug!("opening {} at {}", Stone::new(game.active_player().color_to_place(), pose), pos);
        Some((pos, pose))
    }

    /// Random move, except: with probability 1/2 take a winning move when
    /// a next-round road exists, or else with probability 1/4 block the
    /// opponent's next-round road.
    fn easy_move(&mut self, game: &Game, moves: &[Board], fallback: Board) -> (Board, Policy) {
        let board = game.board();
        let player = game.active_player();
        let color = player.color;
        let opponent = game.opponent();

        if check_winning_next_round(board, color, player.stones.flat).is_some() {
            if self.rng.gen::<f64>() > 0.5 {
                if let Some(win) = moves.iter().find(|m| check_winning(m, color).is_some()) {
                    return (win.clone(), Policy::WinningMove);
                }
            }
        } else if check_winning_next_round(board, opponent.color, opponent.stones.flat).is_some()
            && self.rng.gen::<f64>() > 0.75
        {
            let block = moves
                .iter()
                .find(|m| check_winning_next_round(m, opponent.color, opponent.stones.flat).is_none());
            if let Some(block) = block {
                return (block.clone(), Policy::Defense);
            }
        }

        (fallback, Policy::Random)
    }

    fn hard_move(&mut self, game: &Game, fallback: Board, start: Instant) -> MoveResult {
        let player = game.active_player();
        let searcher = Searcher::new(game.initial_supply(), game.hand_limit())
            .with_root_supply(player.stones);
        let worker = SearchWorker::spawn(searcher, game.board().clone(), player.color, self.config.depth);

        match worker.join_timeout(self.config.time_limit) {
            Some(result) => MoveResult {
                decision: Decision::Successor(result.board),
                policy: Policy::Minimax,
                score: result.score,
                time_ms: start.elapsed().as_millis() as u64,
                nodes: result.nodes,
            },
            None => MoveResult::successor(
                fallback,
                Policy::TimeoutFallback,
                start.elapsed().as_millis() as u64,
            ),
        }
    }
}
