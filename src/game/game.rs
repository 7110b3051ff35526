//! Turn management and outcome resolution

use std::collections::VecDeque;

use log::{debug, info};

use crate::board::{Board, Color, Stone, StonePose, Vec2};
use crate::config::GameConfig;
use crate::error::MoveError;
use crate::rules::{possible_moves, Supply};

use super::player::{DrawIntent, Player, PlayerSpec};

/// How the game ended. More than one winner means a draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub winners: Vec<Color>,
}

impl Outcome {
    #[inline]
    pub fn is_draw(&self) -> bool {
        self.winners.len() > 1
    }

    /// Sole winner, `None` for a draw
    pub fn winner(&self) -> Option<Color> {
        match self.winners.as_slice() {
            [color] => Some(*color),
            _ => None,
        }
    }
}

/// A running game: the board, both players, and stones in transit.
///
/// Every action either succeeds, possibly ending the game, or fails with a
/// [`MoveError`] and leaves the game untouched.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    /// In turn order: `players[0]` moves first
    players: [Player; 2],
    active: usize,
    /// Picked-up stones, front placed first
    hand: VecDeque<Stone>,
    hand_limit: usize,
    initial_supply: Supply,
    /// Anchor for placing from hand
    last_updated_cell: Option<Vec2>,
    outcome: Option<Outcome>,
}

impl Game {
    /// # Panics
    ///
    /// Panics if both specs have the same color, or the board size is invalid.
    pub fn new(config: &GameConfig, specs: [PlayerSpec; 2]) -> Self {
        assert_ne!(specs[0].color, specs[1].color, "players need distinct colors");

        let supply = config.supply();
        let game = Self {
            board: Board::new(config.board_size),
            players: specs.map(|spec| Player::new(spec, supply)),
            active: 0,
            hand: VecDeque::with_capacity(config.hand_limit),
            hand_limit: config.hand_limit,
            initial_supply: supply,
            last_updated_cell: None,
            outcome: None,
        };
        info!(
            "new {}x{} game, {} moves first",
            config.board_size.x,
            config.board_size.y,
            game.players[0].name()
        );
        game
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Both players in turn order
    #[inline]
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    #[inline]
    pub fn active_player(&self) -> &Player {
        &self.players[self.active]
    }

    #[inline]
    pub fn opponent(&self) -> &Player {
        &self.players[1 - self.active]
    }

    pub fn player(&self, color: Color) -> &Player {
        &self.players[self.player_index(color)]
    }

    fn player_index(&self, color: Color) -> usize {
        if self.players[0].color == color {
            0
        } else {
            1
        }
    }

    /// Stones in transit, front placed first
    #[inline]
    pub fn hand(&self) -> &VecDeque<Stone> {
        &self.hand
    }

    #[inline]
    pub fn hand_limit(&self) -> usize {
        self.hand_limit
    }

    /// Supply each player started with
    #[inline]
    pub fn initial_supply(&self) -> Supply {
        self.initial_supply
    }

    #[inline]
    pub fn last_updated_cell(&self) -> Option<Vec2> {
        self.last_updated_cell
    }

    #[inline]
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Is the active player redistributing picked-up stones?
    #[inline]
    pub fn is_placing(&self) -> bool {
        !self.hand.is_empty()
    }

    /// Most turns taken by either player
    pub fn max_turns(&self) -> u32 {
        self.players.iter().map(|p| p.turns).max().unwrap_or(0)
    }

    /// Largest amount `pick_up` accepts at `pos`
    pub fn max_pick_up(&self, pos: Vec2) -> usize {
        self.hand_limit
            .min(self.board.stack(pos).len().saturating_sub(1))
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Place a stone from the active player's box and end the turn.
    pub fn place_from_box(&mut self, pos: Vec2, pose: StonePose) -> Result<Option<Outcome>, MoveError> {
        self.ensure_running()?;
        if self.is_placing() {
            return Err(MoveError::PlacingFromHand);
        }
        if self.active_player().stones.get(pose) == 0 {
            return Err(MoveError::NoStonesLeft(pose));
        }
        if !self.board.stack(pos).can_place() {
            return Err(MoveError::StandingStoneBlocks);
        }

        self.start_turn();
        let stone = Stone::new(self.active_player().color_to_place(), pose);
        self.board.place(pos, stone)?;
        self.players[self.active].stones.take(pose);
        self.last_updated_cell = Some(pos);
        debug!("{} placed {} at {}", self.active_player().name(), stone, pos);

        Ok(self.end_turn())
    }

    /// Lift `amount` stones (all that may be lifted if `None`) off the stack
    /// at `pos` into the hand. The bottom stone always stays.
    pub fn pick_up(&mut self, pos: Vec2, amount: Option<usize>) -> Result<Option<Outcome>, MoveError> {
        self.ensure_running()?;
        if self.is_placing() {
            return Err(MoveError::PickUpWhilePlacing);
        }
        let height = self.board.stack(pos).len();
        match height {
            0 => return Err(MoveError::NothingToPickUp),
            1 => return Err(MoveError::BottomStone),
            _ => {}
        }
        let available = self.max_pick_up(pos);
        let amount = amount.unwrap_or(available);
        if amount == 0 {
            return Err(MoveError::ZeroStones);
        }
        if amount > available {
            return Err(MoveError::TooManyStones {
                requested: amount,
                available,
            });
        }

        self.start_turn();
        let lifted = self.board.stack_mut(pos).split_off(height - amount);
        self.hand.extend(lifted);
        self.last_updated_cell = Some(pos);
        debug!("{} picked up {} from {}", self.active_player().name(), amount, pos);

        Ok(None)
    }

    /// Put the front stone of the hand on `pos`, which must be the last
    /// updated cell or next to it. Ends the turn once the hand is empty.
    pub fn place_from_hand(&mut self, pos: Vec2) -> Result<Option<Outcome>, MoveError> {
        self.ensure_running()?;
        let Some(&stone) = self.hand.front() else {
            return Err(MoveError::NotPlacing);
        };
        if !self.last_updated_cell.is_some_and(|anchor| pos.touches(anchor)) {
            return Err(MoveError::NotAdjacent);
        }

        self.board.place(pos, stone)?;
        self.hand.pop_front();
        self.last_updated_cell = Some(pos);
        debug!("{} dropped {} at {}", self.active_player().name(), stone, pos);

        if self.hand.is_empty() {
            Ok(self.end_turn())
        } else {
            Ok(None)
        }
    }

    /// Vote on a draw. `true` proposes or accepts, `false` rejects a
    /// pending proposal.
    pub fn set_wants_draw(&mut self, color: Color, value: bool) -> Result<Option<Outcome>, MoveError> {
        self.ensure_running()?;
        let is_proposal = !self.players.iter().any(Player::wants_draw);
        let idx = self.player_index(color);

        if !value {
            if is_proposal {
                return Err(MoveError::PreemptiveReject(color));
            }
            self.players[idx].draw = DrawIntent::Rejected;
            debug!("{color} rejected the draw");
            return Ok(None);
        }
        if is_proposal && self.players[idx].turns == 0 {
            return Err(MoveError::DrawBeforeMove(color));
        }

        self.players[idx].draw = DrawIntent::Proposed;
        debug!("{color} wants a draw");
        Ok(self.update_outcome())
    }

    /// Give up after a rejected draw proposal; the opponent wins.
    pub fn set_accepts_defeat(&mut self, color: Color) -> Result<Option<Outcome>, MoveError> {
        self.ensure_running()?;
        let idx = self.player_index(color);
        let rejected = self
            .players
            .iter()
            .any(|p| p.draw == DrawIntent::Rejected);

        if self.players[idx].draw != DrawIntent::Proposed || !rejected {
            return Err(MoveError::DefeatWithoutRejection(color));
        }
        if self.players[idx].turns == 0 {
            return Err(MoveError::DefeatBeforeMove(color));
        }

        self.players[idx].draw = DrawIntent::AdmitsDefeat;
        debug!("{color} admits defeat");
        Ok(self.update_outcome())
    }

    /// Replace the board with `successor`, a board one legal move away,
    /// as one complete turn of the active player.
    ///
    /// A placement is charged to the active player's supply by pose.
    pub fn apply_successor(&mut self, successor: Board) -> Result<Option<Outcome>, MoveError> {
        self.ensure_running()?;
        if self.is_placing() {
            return Err(MoveError::PlacingFromHand);
        }

        let player = self.active_player();
        let legal = successor.size() == self.board.size()
            && possible_moves(&self.board, player.stones, player.color_to_place(), self.hand_limit)
                .contains(&successor);
        if !legal {
            return Err(MoveError::IllegalSuccessor);
        }

        let placed = StonePose::ALL
            .into_iter()
            .find(|&pose| successor.count_pose(pose) > self.board.count_pose(pose));

        let mut next = successor;
        next.clear_recent();
        for pos in self.board.positions() {
            if next.stack(pos).len() > self.board.stack(pos).len() {
                next.stack_mut(pos).mark_top_recent();
            }
        }

        if let Some(pose) = placed {
            self.players[self.active].stones.take(pose);
        }
        self.board = next;
        debug!(
            "{} played a {}",
            self.active_player().name(),
            if placed.is_some() { "placement" } else { "stack move" }
        );

        Ok(self.end_turn())
    }

    /// End the game as a draw because the active player cannot move.
    pub fn declare_stalemate(&mut self) -> Result<Option<Outcome>, MoveError> {
        self.ensure_running()?;
        info!("{} has no legal move", self.active_player().name());
        for player in &mut self.players {
            player.draw = DrawIntent::Proposed;
        }
        Ok(self.update_outcome())
    }

    // =========================================================================
    // Turn bookkeeping
    // =========================================================================

    fn ensure_running(&self) -> Result<(), MoveError> {
        if self.outcome.is_some() {
            return Err(MoveError::GameOver);
        }
        Ok(())
    }

    fn start_turn(&mut self) {
        self.board.clear_recent();
    }

    fn end_turn(&mut self) -> Option<Outcome> {
        self.players[self.active].turns += 1;
        self.last_updated_cell = None;
        if let Some(outcome) = self.update_outcome() {
            return Some(outcome);
        }
        self.active = 1 - self.active;
        None
    }

    fn update_outcome(&mut self) -> Option<Outcome> {
        let roads = self.board.complete_roads();
        let defeat_admitted = self
            .players
            .iter()
            .any(|p| p.draw == DrawIntent::AdmitsDefeat);

        for player in &mut self.players {
            player.won = roads.contains(&player.color);
            if defeat_admitted {
                player.won = player.draw != DrawIntent::AdmitsDefeat;
            }
        }
        self.apply_flat_win();
        if self.players.iter().all(Player::wants_draw) {
            for player in &mut self.players {
                player.won = true;
            }
        }

        let winners: Vec<Color> = self
            .players
            .iter()
            .filter(|p| p.won)
            .map(|p| p.color)
            .collect();
        if winners.is_empty() {
            return None;
        }
        if winners.len() > 1 {
            for player in &mut self.players {
                player.drew = player.won;
            }
        }

        let outcome = Outcome { winners };
        if outcome.is_draw() {
            info!("game drawn after {} turns", self.max_turns());
        } else {
            info!("{} wins after {} turns", outcome.winners[0], self.max_turns());
        }
        self.outcome = Some(outcome.clone());
        Some(outcome)
    }

    /// Both boxes empty and every cell covered: most flat tops wins, equal
    /// counts (none at all included) win for both.
    fn apply_flat_win(&mut self) {
        if self.players.iter().any(|p| !p.stones.is_empty()) || !self.board.is_completely_covered() {
            return;
        }

        match self.board.color_with_most_road_parts() {
            Some(color) => {
                let idx = self.player_index(color);
                self.players[idx].won = true;
            }
            None => {
                for player in &mut self.players {
                    player.won = true;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::check_winning;

    fn v(x: i32, y: i32) -> Vec2 {
        Vec2::new(x, y)
    }

    fn humans() -> [PlayerSpec; 2] {
        [PlayerSpec::human(Color::Black), PlayerSpec::human(Color::White)]
    }

    fn new_game() -> Game {
        Game::new(&GameConfig::default(), humans())
    }

    fn small_game(flat: u32, standing: u32) -> Game {
        let config = GameConfig {
            board_size: v(2, 2),
            hand_limit: 5,
            flat_stones: flat,
            standing_stones: standing,
        };
        Game::new(&config, humans())
    }

    /// Both players have taken their opening turn
    fn opened_game() -> Game {
        let mut game = new_game();
        game.place_from_box(v(0, 0), StonePose::Flat).unwrap();
        game.place_from_box(v(4, 4), StonePose::Flat).unwrap();
        game
    }

    #[test]
    fn test_opening_places_opponent_color() {
        let mut game = new_game();
        assert_eq!(game.active_player().color, Color::Black);
        assert_eq!(game.place_from_box(v(1, 1), StonePose::Flat), Ok(None));

        assert_eq!(game.board().stack(v(1, 1)).top(), Some(&Stone::flat(Color::White)));
        assert_eq!(game.player(Color::Black).stones, Supply::new(15, 5));
        assert_eq!(game.player(Color::White).stones, Supply::new(16, 5));
        assert_eq!(game.active_player().color, Color::White);

        game.place_from_box(v(2, 2), StonePose::Standing).unwrap();
        assert_eq!(game.board().stack(v(2, 2)).top(), Some(&Stone::standing(Color::Black)));

        game.place_from_box(v(3, 3), StonePose::Flat).unwrap();
        assert_eq!(game.board().stack(v(3, 3)).top(), Some(&Stone::flat(Color::Black)));
    }

    #[test]
    fn test_place_on_standing_fails_unchanged() {
        let mut game = new_game();
        game.place_from_box(v(1, 1), StonePose::Standing).unwrap();
        let before = game.board().clone();

        let err = game.place_from_box(v(1, 1), StonePose::Flat).unwrap_err();
        assert_eq!(err, MoveError::StandingStoneBlocks);
        assert_eq!(game.board(), &before);
        assert_eq!(game.active_player().color, Color::White);
        assert_eq!(game.active_player().stones, Supply::new(16, 5));
    }

    #[test]
    fn test_no_stones_left() {
        let mut game = small_game(2, 0);
        let err = game.place_from_box(v(0, 0), StonePose::Standing).unwrap_err();
        assert_eq!(err, MoveError::NoStonesLeft(StonePose::Standing));
    }

    #[test]
    fn test_pick_up_single_stone_fails() {
        let mut game = new_game();
        game.place_from_box(v(2, 2), StonePose::Flat).unwrap();
        let before = game.board().clone();

        assert_eq!(game.pick_up(v(2, 2), None), Err(MoveError::BottomStone));
        assert_eq!(game.pick_up(v(3, 3), None), Err(MoveError::NothingToPickUp));
        assert_eq!(game.board(), &before);
        assert!(!game.is_placing());
    }

    #[test]
    fn test_pick_up_and_redistribute() {
        let mut game = opened_game();
        // Black: own flat on top of the white opening stone
        game.place_from_box(v(0, 0), StonePose::Flat).unwrap();
        // White: elsewhere
        game.place_from_box(v(2, 2), StonePose::Flat).unwrap();

        assert_eq!(game.max_pick_up(v(0, 0)), 1);
        assert_eq!(
            game.pick_up(v(0, 0), Some(2)),
            Err(MoveError::TooManyStones { requested: 2, available: 1 })
        );
        assert_eq!(game.pick_up(v(0, 0), Some(0)), Err(MoveError::ZeroStones));

        assert_eq!(game.pick_up(v(0, 0), None), Ok(None));
        assert!(game.is_placing());
        assert_eq!(game.hand().front(), Some(&Stone::flat(Color::Black)));
        assert_eq!(game.place_from_box(v(1, 1), StonePose::Flat), Err(MoveError::PlacingFromHand));
        assert_eq!(game.pick_up(v(2, 2), None), Err(MoveError::PickUpWhilePlacing));

        assert_eq!(game.place_from_hand(v(0, 1)), Ok(None));
        assert!(!game.is_placing());
        assert_eq!(game.board().stack(v(0, 0)).len(), 1);
        assert_eq!(game.board().stack(v(0, 1)).top(), Some(&Stone::flat(Color::Black)));
        assert_eq!(game.active_player().color, Color::White);
        assert_eq!(game.player(Color::Black).turns, 3);
    }

    #[test]
    fn test_hand_places_lowest_stone_first() {
        let mut game = opened_game();
        game.place_from_box(v(0, 0), StonePose::Flat).unwrap(); // black on white
        game.place_from_box(v(0, 0), StonePose::Flat).unwrap(); // white on top
        // Black lifts black and white, leaving the bottom white stone
        game.pick_up(v(0, 0), Some(2)).unwrap();
        assert_eq!(
            game.hand().iter().copied().collect::<Vec<_>>(),
            vec![Stone::flat(Color::Black), Stone::flat(Color::White)]
        );

        game.place_from_hand(v(1, 0)).unwrap();
        game.place_from_hand(v(2, 0)).unwrap();
        assert_eq!(game.board().stack(v(1, 0)).top(), Some(&Stone::flat(Color::Black)));
        assert_eq!(game.board().stack(v(2, 0)).top(), Some(&Stone::flat(Color::White)));
        assert_eq!(game.active_player().color, Color::White);
    }

    #[test]
    fn test_place_from_hand_not_adjacent() {
        let mut game = opened_game();
        game.place_from_box(v(0, 0), StonePose::Flat).unwrap();
        game.place_from_box(v(3, 3), StonePose::Flat).unwrap();
        game.pick_up(v(0, 0), None).unwrap();

        assert_eq!(game.place_from_hand(v(2, 0)), Err(MoveError::NotAdjacent));
        assert_eq!(game.place_from_hand(v(1, 1)), Err(MoveError::NotAdjacent));
        assert!(game.is_placing());
        // The anchor itself is allowed
        assert_eq!(game.place_from_hand(v(0, 0)), Ok(None));
    }

    #[test]
    fn test_place_from_hand_without_hand() {
        let mut game = new_game();
        assert_eq!(game.place_from_hand(v(0, 0)), Err(MoveError::NotPlacing));
    }

    #[test]
    fn test_road_ends_game() {
        let mut game = Game::new(&GameConfig::with_size(4, 4), humans());
        // Openings: Black places white at (3,3), White places black at (0,0)
        game.place_from_box(v(3, 3), StonePose::Flat).unwrap();
        game.place_from_box(v(0, 0), StonePose::Flat).unwrap();
        for x in 1..3 {
            game.place_from_box(v(x, 0), StonePose::Flat).unwrap();
            game.place_from_box(v(x, 3), StonePose::Standing).unwrap();
        }
        let outcome = game.place_from_box(v(3, 0), StonePose::Flat).unwrap().unwrap();

        assert_eq!(outcome.winners, vec![Color::Black]);
        assert!(!outcome.is_draw());
        assert!(game.player(Color::Black).won);
        assert!(check_winning(game.board(), Color::Black).is_some());
        assert_eq!(game.place_from_box(v(1, 1), StonePose::Flat), Err(MoveError::GameOver));
        assert_eq!(game.set_wants_draw(Color::White, true), Err(MoveError::GameOver));
    }

    #[test]
    fn test_mutual_draw() {
        let mut game = opened_game();
        assert_eq!(game.set_wants_draw(Color::Black, true), Ok(None));
        let outcome = game.set_wants_draw(Color::White, true).unwrap().unwrap();

        assert!(outcome.is_draw());
        assert_eq!(outcome.winner(), None);
        assert!(game.players().iter().all(|p| p.won && p.drew));
    }

    #[test]
    fn test_draw_proposal_needs_a_move() {
        let mut game = new_game();
        assert_eq!(
            game.set_wants_draw(Color::Black, true),
            Err(MoveError::DrawBeforeMove(Color::Black))
        );
        game.place_from_box(v(0, 0), StonePose::Flat).unwrap();
        assert_eq!(game.set_wants_draw(Color::Black, true), Ok(None));
        // Accepting does not require a move
        let outcome = game.set_wants_draw(Color::White, true).unwrap().unwrap();
        assert!(outcome.is_draw());
    }

    #[test]
    fn test_preemptive_reject() {
        let mut game = opened_game();
        assert_eq!(
            game.set_wants_draw(Color::White, false),
            Err(MoveError::PreemptiveReject(Color::White))
        );
    }

    #[test]
    fn test_admit_defeat_after_rejection() {
        let mut game = opened_game();
        assert_eq!(
            game.set_accepts_defeat(Color::Black),
            Err(MoveError::DefeatWithoutRejection(Color::Black))
        );

        game.set_wants_draw(Color::Black, true).unwrap();
        assert_eq!(game.set_wants_draw(Color::White, false), Ok(None));
        assert_eq!(game.player(Color::White).draw, DrawIntent::Rejected);
        assert_eq!(
            game.set_accepts_defeat(Color::White),
            Err(MoveError::DefeatWithoutRejection(Color::White))
        );

        let outcome = game.set_accepts_defeat(Color::Black).unwrap().unwrap();
        assert_eq!(outcome.winner(), Some(Color::White));
        assert!(!game.player(Color::Black).won);
    }

    #[test]
    fn test_flat_win() {
        let mut game = small_game(2, 1);
        game.place_from_box(v(0, 0), StonePose::Flat).unwrap(); // white
        game.place_from_box(v(1, 1), StonePose::Flat).unwrap(); // black
        game.place_from_box(v(0, 0), StonePose::Flat).unwrap(); // black
        game.place_from_box(v(1, 0), StonePose::Flat).unwrap(); // white
        assert_eq!(game.place_from_box(v(0, 1), StonePose::Standing), Ok(None));
        let outcome = game.place_from_box(v(1, 0), StonePose::Standing).unwrap().unwrap();

        assert_eq!(outcome.winners, vec![Color::Black]);
        assert!(!game.player(Color::Black).drew);
    }

    #[test]
    fn test_flat_tie_is_draw() {
        let mut game = small_game(2, 0);
        game.place_from_box(v(0, 0), StonePose::Flat).unwrap(); // white
        game.place_from_box(v(1, 0), StonePose::Flat).unwrap(); // black
        game.place_from_box(v(0, 1), StonePose::Flat).unwrap(); // black
        let outcome = game.place_from_box(v(1, 1), StonePose::Flat).unwrap().unwrap();
        assert!(outcome.is_draw());
    }

    #[test]
    fn test_covered_board_without_flat_tops_is_draw() {
        let mut game = small_game(0, 2);
        game.place_from_box(v(0, 0), StonePose::Standing).unwrap();
        game.place_from_box(v(1, 0), StonePose::Standing).unwrap();
        game.place_from_box(v(0, 1), StonePose::Standing).unwrap();
        let outcome = game.place_from_box(v(1, 1), StonePose::Standing).unwrap().unwrap();

        assert!(outcome.is_draw());
        assert_eq!(outcome.winners, vec![Color::Black, Color::White]);
        assert!(game.players().iter().all(|p| p.drew));
    }

    /// 3x3, Black to move. Row 0 is black, black flat, black except that
    /// (1, 0) has a white flat on top of the black one.
    fn black_road_under_one_stone() -> Game {
        let mut game = Game::new(&GameConfig::with_size(3, 3), humans());
        game.place_from_box(v(2, 2), StonePose::Flat).unwrap(); // white
        game.place_from_box(v(1, 0), StonePose::Flat).unwrap(); // black
        game.place_from_box(v(0, 0), StonePose::Flat).unwrap(); // black
        game.place_from_box(v(1, 0), StonePose::Flat).unwrap(); // white
        game.place_from_box(v(2, 0), StonePose::Flat).unwrap(); // black
        game.place_from_box(v(0, 2), StonePose::Flat).unwrap(); // white
        assert!(!game.is_over());
        assert_eq!(game.active_player().color, Color::Black);
        game
    }

    #[test]
    fn test_admitted_defeat_overrides_road() {
        let mut game = black_road_under_one_stone();
        game.set_wants_draw(Color::Black, true).unwrap();
        game.set_wants_draw(Color::White, false).unwrap();

        // Lifting the white stone uncovers the road while the hand is full
        assert_eq!(game.pick_up(v(1, 0), Some(1)), Ok(None));
        assert!(game.is_placing());
        assert!(check_winning(game.board(), Color::Black).is_some());

        let outcome = game.set_accepts_defeat(Color::Black).unwrap().unwrap();
        assert_eq!(outcome.winners, vec![Color::White]);
        assert!(!game.player(Color::Black).won);
        assert!(game.player(Color::White).won);
    }

    #[test]
    fn test_accepted_draw_overrides_road() {
        let mut game = black_road_under_one_stone();
        game.set_wants_draw(Color::White, true).unwrap();

        game.pick_up(v(1, 0), Some(1)).unwrap();
        assert!(check_winning(game.board(), Color::Black).is_some());

        let outcome = game.set_wants_draw(Color::Black, true).unwrap().unwrap();
        assert!(outcome.is_draw());
        assert!(game.players().iter().all(|p| p.won && p.drew));
    }

    #[test]
    fn test_defeat_before_move() {
        let mut game = opened_game();
        // Black proposed before moving and White rejected
        game.players[0].turns = 0;
        game.players[0].draw = DrawIntent::Proposed;
        game.players[1].draw = DrawIntent::Rejected;

        assert_eq!(
            game.set_accepts_defeat(Color::Black),
            Err(MoveError::DefeatBeforeMove(Color::Black))
        );
        assert!(!game.is_over());
    }

    #[test]
    fn test_recent_flag_cleared_next_turn() {
        let mut game = new_game();
        game.place_from_box(v(0, 0), StonePose::Flat).unwrap();
        assert!(game.board().stack(v(0, 0)).top().unwrap().recent);
        game.place_from_box(v(1, 1), StonePose::Flat).unwrap();
        assert!(!game.board().stack(v(0, 0)).top().unwrap().recent);
        assert!(game.board().stack(v(1, 1)).top().unwrap().recent);
    }

    #[test]
    fn test_apply_successor() {
        let mut game = opened_game();
        let mut placed = game.board().clone();
        placed.push(v(2, 2), Stone::standing(Color::Black)).unwrap();

        assert_eq!(game.apply_successor(placed.clone()), Ok(None));
        assert_eq!(game.board(), &placed);
        assert!(game.board().stack(v(2, 2)).top().unwrap().recent);
        assert_eq!(game.player(Color::Black).stones, Supply::new(15, 4));
        assert_eq!(game.active_player().color, Color::White);
    }

    #[test]
    fn test_apply_illegal_successor() {
        let mut game = opened_game();
        let before = game.board().clone();

        let mut two_stones = before.clone();
        two_stones.push(v(2, 2), Stone::flat(Color::Black)).unwrap();
        two_stones.push(v(2, 3), Stone::flat(Color::Black)).unwrap();
        assert_eq!(game.apply_successor(two_stones), Err(MoveError::IllegalSuccessor));

        let mut wrong_color = before.clone();
        wrong_color.push(v(2, 2), Stone::flat(Color::White)).unwrap();
        assert_eq!(game.apply_successor(wrong_color), Err(MoveError::IllegalSuccessor));

        assert_eq!(game.board(), &before);
        assert_eq!(game.active_player().color, Color::Black);
    }

    #[test]
    fn test_stalemate_is_draw() {
        let mut game = opened_game();
        let outcome = game.declare_stalemate().unwrap().unwrap();
        assert!(outcome.is_draw());
    }
}
