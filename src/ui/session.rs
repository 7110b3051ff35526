//! Session state for the GUI: the running game, seat setup and AI turns

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use log::warn;

use crate::board::{Color, StonePose, Vec2};
use crate::config::{AiConfig, GameConfig};
use crate::engine::{AIEngine, Difficulty, MoveResult};
use crate::error::MoveError;
use crate::game::{DrawIntent, Game, Outcome, PlayerSpec};

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Main session state
pub struct Session {
    pub game: Game,
    pub config: GameConfig,
    /// Seats in turn order, reused by [`Session::restart`]
    pub specs: [PlayerSpec; 2],
    /// Pose to place from the box on the next click, `None` to move stacks
    pub selected_pose: Option<StonePose>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    /// Last error, shown verbatim
    pub message: Option<String>,
    ai_config: AiConfig,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(
            GameConfig::default(),
            [
                PlayerSpec::human(Color::Black),
                PlayerSpec::ai(Color::White, Difficulty::Medium),
            ],
        )
    }
}

impl Session {
    pub fn new(config: GameConfig, specs: [PlayerSpec; 2]) -> Self {
        Self {
            game: Game::new(&config, specs),
            config,
            specs,
            selected_pose: None,
            last_ai_result: None,
            ai_state: AiState::Idle,
            message: None,
            ai_config: AiConfig::default(),
        }
    }

    pub fn with_ai_config(mut self, ai_config: AiConfig) -> Self {
        self.ai_config = ai_config;
        self
    }

    /// Start over with the same seats. A pending AI result is dropped.
    pub fn restart(&mut self) {
        self.game = Game::new(&self.config, self.specs);
        self.selected_pose = None;
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.message = None;
    }

    /// Start over with new seats
    pub fn new_game(&mut self, specs: [PlayerSpec; 2]) {
        self.specs = specs;
        self.restart();
    }

    pub fn is_ai_turn(&self) -> bool {
        !self.game.is_over() && self.game.active_player().is_ai()
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Toggle the pose placed by the next click
    pub fn select_pose(&mut self, pose: StonePose) {
        self.selected_pose = if self.selected_pose == Some(pose) {
            None
        } else {
            Some(pose)
        };
    }

    pub fn clear_selection(&mut self) {
        self.selected_pose = None;
    }

    /// A human clicked `pos`: place from the box when a pose is selected,
    /// drop from the hand while redistributing, otherwise lift the stack.
    pub fn click(&mut self, pos: Vec2) {
        if self.is_ai_turn() || self.is_ai_thinking() {
            self.message = Some("Wait for the AI to finish its turn".to_string());
            return;
        }

        let result = if let Some(pose) = self.selected_pose {
            self.game.place_from_box(pos, pose)
        } else if self.game.is_placing() {
            self.game.place_from_hand(pos)
        } else {
            self.game.pick_up(pos, None)
        };

        if self.report(result) && self.selected_pose.is_some() {
            self.selected_pose = None;
        }
    }

    /// Propose, accept (`true`) or reject (`false`) a draw for `color`.
    /// An AI opponent rejects every proposal.
    pub fn vote_draw(&mut self, color: Color, value: bool) {
        let result = self.game.set_wants_draw(color, value);
        if !self.report(result) || self.game.is_over() || !value {
            return;
        }

        let other = self.game.player(color.opponent());
        if other.is_ai() && other.draw == DrawIntent::Undecided {
            let result = self.game.set_wants_draw(color.opponent(), false);
            self.report(result);
        }
    }

    pub fn admit_defeat(&mut self, color: Color) {
        let result = self.game.set_accepts_defeat(color);
        self.report(result);
    }

    /// Record the error of a failed action. Returns whether it succeeded.
    fn report(&mut self, result: Result<Option<Outcome>, MoveError>) -> bool {
        match result {
            Ok(_) => {
                self.message = None;
                true
            }
            Err(e) => {
                self.message = Some(e.to_string());
                false
            }
        }
    }

    /// Start AI thinking on a snapshot of the game
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() {
            return;
        }
        let Some(difficulty) = self.game.active_player().ai else {
            return;
        };

        let game = self.game.clone();
        let config = self.ai_config;
        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::with_config(config);
            let result = engine.choose_move(&game, difficulty);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Apply the AI's move once it arrives
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(result) => result,
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    warn!("AI thread exited without a move");
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => return,
        };

        self.ai_state = AiState::Idle;
        let applied = result.apply(&mut self.game);
        self.last_ai_result = Some(result);
        self.report(applied);
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }
}
