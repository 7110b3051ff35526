//! Main application for the UU Game GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use crate::board::{Color, StonePose};
use crate::engine::{Decision, Difficulty};
use crate::game::{DrawIntent, PlayerSpec};
use crate::rules::check_winning;

use super::board_view::{BoardView, Highlights};
use super::session::Session;
use super::theme::*;

/// Seats chosen in the "Game" menu for the next new game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Setup {
    black: Option<Difficulty>,
    white: Option<Difficulty>,
    first: Color,
}

impl Default for Setup {
    fn default() -> Self {
        Self {
            black: None,
            white: Some(Difficulty::Medium),
            first: Color::Black,
        }
    }
}

impl Setup {
    /// Seats in turn order
    fn specs(self) -> [PlayerSpec; 2] {
        let black = PlayerSpec { color: Color::Black, ai: self.black };
        let white = PlayerSpec { color: Color::White, ai: self.white };
        match self.first {
            Color::Black => [black, white],
            Color::White => [white, black],
        }
    }
}

/// Main UU Game application
#[derive(Default)]
pub struct UuGameApp {
    session: Session,
    board_view: BoardView,
    setup: Setup,
}

impl UuGameApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn start_new_game(&mut self) {
        self.session.new_game(self.setup.specs());
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    for (label, seat) in [("Black", &mut self.setup.black), ("White", &mut self.setup.white)] {
                        ui.label(RichText::new(label).strong());
                        ui.horizontal(|ui| {
                            ui.radio_value(seat, None, "Human");
                            for difficulty in Difficulty::ALL {
                                ui.radio_value(seat, Some(difficulty), difficulty.name());
                            }
                        });
                    }
                    ui.separator();
                    ui.horizontal(|ui| {
                        ui.label("Moves first:");
                        ui.radio_value(&mut self.setup.first, Color::Black, "Black");
                        ui.radio_value(&mut self.setup.first, Color::White, "White");
                    });
                    ui.separator();
                    if ui.button("New Game (N)").clicked() {
                        self.start_new_game();
                        ui.close_menu();
                    }
                    if ui.button("Restart").clicked() {
                        self.session.restart();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let seat = |spec: &PlayerSpec| match spec.ai {
                        Some(difficulty) => format!("{} AI", difficulty),
                        None => "Human".to_string(),
                    };
                    let [first, second] = &self.session.specs;
                    ui.label(format!(
                        "{}: {}  vs  {}: {}",
                        first.color,
                        seat(first),
                        second.color,
                        seat(second)
                    ));
                });
            });
        });
    }

    /// Render the side panel with game info and controls
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(260.0)
            .max_width(300.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new("UU GAME").size(22.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(10.0);

                    self.render_turn_card(ui);
                    ui.add_space(10.0);
                    self.render_supply_card(ui);
                    ui.add_space(10.0);
                    self.render_hand_card(ui);
                    ui.add_space(10.0);
                    self.render_draw_card(ui);
                    ui.add_space(10.0);
                    self.render_ai_card(ui);

                    if self.session.game.is_over() {
                        ui.add_space(10.0);
                        self.render_game_over_card(ui);
                    }

                    if let Some(msg) = self.session.message.clone() {
                        ui.add_space(10.0);
                        Self::render_message_card(ui, &msg);
                    }
                });
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn card_title(ui: &mut egui::Ui, title: &str) {
        ui.label(RichText::new(title).size(10.0).color(TEXT_MUTED));
        ui.add_space(6.0);
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        let game = &self.session.game;
        Self::card_frame().show(ui, |ui| {
            Self::card_title(ui, "TURN");
            let player = game.active_player();
            ui.label(
                RichText::new(player.name().to_uppercase())
                    .size(18.0)
                    .strong()
                    .color(TEXT_PRIMARY),
            );

            let status = if let Some(elapsed) = self.session.ai_thinking_elapsed() {
                (format!("AI thinking... {:.1}s", elapsed.as_secs_f32()), STATUS_BUSY)
            } else if game.is_over() {
                ("Game over".to_string(), TEXT_SECONDARY)
            } else if player.turns == 0 {
                (format!("Place a {} stone", player.color_to_place()), STATUS_OK)
            } else if game.is_placing() {
                ("Drop the stones from your hand".to_string(), STATUS_OK)
            } else {
                ("Place a stone or move a stack".to_string(), STATUS_OK)
            };
            ui.label(RichText::new(status.0).size(12.0).color(status.1));
            ui.label(
                RichText::new(format!("Turn {}", player.turns + 1))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Stones left in each box, and the pose buttons for the active human
    fn render_supply_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            Self::card_title(ui, "STONES");
            for color in Color::ALL {
                let stones = self.session.game.player(color).stones;
                ui.label(
                    RichText::new(format!(
                        "{}: {} flat, {} standing",
                        color, stones.flat, stones.standing
                    ))
                    .size(12.0)
                    .color(TEXT_PRIMARY),
                );
            }

            let can_select = !self.session.game.is_over() && !self.session.is_ai_turn();
            if can_select {
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    for (pose, key) in [(StonePose::Flat, 1), (StonePose::Standing, 2)] {
                        let selected = self.session.selected_pose == Some(pose);
                        if ui.selectable_label(selected, format!("{pose} ({key})")).clicked() {
                            self.session.select_pose(pose);
                        }
                    }
                });
                let hint = if self.session.selected_pose.is_some() {
                    "Click a cell to place"
                } else {
                    "Click a stack to pick it up"
                };
                ui.label(RichText::new(hint).size(10.0).color(TEXT_MUTED));
            }
        });
    }

    fn render_hand_card(&self, ui: &mut egui::Ui) {
        let game = &self.session.game;
        Self::card_frame().show(ui, |ui| {
            Self::card_title(ui, "HAND");
            if game.hand().is_empty() {
                ui.label(
                    RichText::new(format!("Empty, lift up to {}", game.hand_limit()))
                        .size(11.0)
                        .color(TEXT_SECONDARY),
                );
                return;
            }
            ui.horizontal_wrapped(|ui| {
                for stone in game.hand() {
                    ui.label(RichText::new(stone.to_string()).size(11.0).color(TEXT_PRIMARY));
                }
            });
            if let Some(anchor) = game.last_updated_cell() {
                ui.label(
                    RichText::new(format!("Drop on {anchor} or next to it"))
                        .size(10.0)
                        .color(TEXT_MUTED),
                );
            }
        });
    }

    /// Draw and defeat buttons for every human player
    fn render_draw_card(&mut self, ui: &mut egui::Ui) {
        if self.session.game.is_over() {
            return;
        }
        Self::card_frame().show(ui, |ui| {
            Self::card_title(ui, "DRAW");
            for color in Color::ALL {
                let subject = self.session.game.player(color);
                if subject.is_ai() {
                    continue;
                }
                let opponent = self.session.game.player(color.opponent());
                let (subject_draw, opponent_draw) = (subject.draw, opponent.draw);
                let opponent_wants = opponent.wants_draw();

                ui.horizontal(|ui| {
                    ui.label(RichText::new(format!("{color}:")).size(12.0).color(TEXT_PRIMARY));
                    if opponent_wants && subject_draw == DrawIntent::Undecided {
                        if ui.button("Accept draw").clicked() {
                            self.session.vote_draw(color, true);
                        }
                        if ui.button("Reject").clicked() {
                            self.session.vote_draw(color, false);
                        }
                    } else if opponent_draw == DrawIntent::Rejected {
                        if ui.button("Admit defeat").clicked() {
                            self.session.admit_defeat(color);
                        }
                    } else if subject_draw == DrawIntent::Proposed {
                        ui.label(RichText::new("Draw suggested").size(11.0).color(TEXT_SECONDARY));
                    } else if subject_draw == DrawIntent::Rejected {
                        ui.label(RichText::new("Draw rejected").size(11.0).color(TEXT_SECONDARY));
                    } else if ui.button("Suggest draw").clicked() {
                        self.session.vote_draw(color, true);
                    }
                });
            }
        });
    }

    fn render_ai_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            Self::card_title(ui, "AI");
            let Some(result) = &self.session.last_ai_result else {
                ui.label(RichText::new("No AI move yet").size(10.0).color(TEXT_MUTED));
                return;
            };

            ui.label(
                RichText::new(result.policy.to_string())
                    .size(12.0)
                    .strong()
                    .color(STATUS_OK),
            );
            if let Decision::Initial { pos, pose } = &result.decision {
                ui.label(RichText::new(format!("{pose} at {pos}")).size(11.0).color(TEXT_PRIMARY));
            }
            ui.label(
                RichText::new(format!(
                    "Score {}  |  {} ms  |  {} nodes",
                    result.score, result.time_ms, result.nodes
                ))
                .size(10.0)
                .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        let Some(outcome) = self.session.game.outcome().cloned() else {
            return;
        };
        let headline = match outcome.winner() {
            Some(color) => format!("{} WINS!", color.name().to_uppercase()),
            None => "DRAW".to_string(),
        };

        Frame::new()
            .fill(GAME_OVER_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(TEXT_SECONDARY));
                    ui.add_space(6.0);
                    ui.label(RichText::new(headline).size(20.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(10.0);
                    if ui.button("New Game").clicked() {
                        self.start_new_game();
                    }
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(MESSAGE_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the board and dispatch clicks
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_AREA_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                let game = &self.session.game;
                let road = game
                    .outcome()
                    .and_then(|o| o.winner())
                    .and_then(|color| check_winning(game.board(), color))
                    .unwrap_or_default();
                let highlights = Highlights {
                    anchor: game.is_placing().then(|| game.last_updated_cell()).flatten(),
                    road,
                    interactive: !game.is_over() && !self.session.is_ai_turn(),
                };

                ui.vertical_centered(|ui| {
                    if let Some(pos) = self.board_view.show(ui, self.session.game.board(), &highlights) {
                        self.session.click(pos);
                    }
                });
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::N) {
                self.start_new_game();
            }
            if i.key_pressed(egui::Key::Num1) {
                self.session.select_pose(StonePose::Flat);
            }
            if i.key_pressed(egui::Key::Num2) {
                self.session.select_pose(StonePose::Standing);
            }
            if i.key_pressed(egui::Key::Escape) {
                self.session.clear_selection();
            }
        });
    }
}

impl eframe::App for UuGameApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // Apply a finished AI move, then start the next one if due
        self.session.check_ai_result();
        self.session.start_ai_thinking();

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.session.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_orders_seats() {
        let setup = Setup {
            black: Some(Difficulty::Hard),
            white: None,
            first: Color::White,
        };
        let specs = setup.specs();
        assert_eq!(specs[0], PlayerSpec::human(Color::White));
        assert_eq!(specs[1], PlayerSpec::ai(Color::Black, Difficulty::Hard));
    }

    #[test]
    fn test_default_setup_matches_session() {
        let app = UuGameApp::default();
        assert_eq!(app.session.specs, Setup::default().specs());
    }
}
