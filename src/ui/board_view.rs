//! Board rendering for the UU Game GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2 as ScreenVec};

use crate::board::{Board, Stack, Vec2};

use super::theme::*;

/// What the view highlights besides the stones
#[derive(Debug, Clone, Default)]
pub struct Highlights {
    /// Cell the hand is dropped next to
    pub anchor: Option<Vec2>,
    /// Completed road of the winner
    pub road: Vec<Vec2>,
    pub interactive: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    /// Cells across and down
    extent: Vec2,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
            extent: Vec2::new(5, 5),
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board, highlights: &Highlights) -> Option<Vec2> {
        self.extent = board.size();
        let available = ui.available_size();
        let cells = self.extent.x.max(self.extent.y) as f32;
        let side = (available.x.min(available.y) - 20.0).max(cells * 24.0 + 2.0 * BOARD_MARGIN);
        self.cell_size = (side - 2.0 * BOARD_MARGIN) / cells;

        let size = ScreenVec::new(
            self.cell_size * self.extent.x as f32 + 2.0 * BOARD_MARGIN,
            self.cell_size * self.extent.y as f32 + 2.0 * BOARD_MARGIN,
        );
        let (response, painter) = ui.allocate_painter(size, Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BG);

        let hovered = response
            .hover_pos()
            .filter(|_| highlights.interactive)
            .and_then(|p| self.screen_to_board(p));

        for (pos, stack) in board.iter() {
            let fill = if hovered == Some(pos) { CELL_HOVER } else { CELL_BG };
            let rect = self.cell_rect(pos);
            if highlights.anchor == Some(pos) {
                painter.rect_filled(rect.expand(CELL_GAP / 2.0), CornerRadius::same(4), ANCHOR_HIGHLIGHT);
            }
            painter.rect_filled(rect, CornerRadius::same(3), fill);
            self.draw_stack(&painter, rect, stack);
        }

        self.draw_road(&painter, &highlights.road);

        if highlights.interactive && response.clicked() {
            return response.interact_pointer_pos().and_then(|p| self.screen_to_board(p));
        }
        None
    }

    /// Top stone, stack height, and a strip of the colors underneath
    fn draw_stack(&self, painter: &Painter, rect: Rect, stack: &Stack) {
        let Some(top) = stack.top() else {
            return;
        };
        let center = rect.center();

        if top.is_flat() {
            let side = self.cell_size * FLAT_SIZE_RATIO;
            let body = Rect::from_center_size(center, ScreenVec::splat(side));
            painter.rect_filled(body.expand(1.5), CornerRadius::same(5), stone_edge(top.color));
            painter.rect_filled(body, CornerRadius::same(4), stone_fill(top.color));
        } else {
            let radius = self.cell_size * STANDING_RADIUS_RATIO;
            painter.circle_filled(center, radius, stone_fill(top.color));
            painter.circle_stroke(center, radius, Stroke::new(2.0, stone_edge(top.color)));
        }

        if top.recent {
            painter.circle_filled(center, RECENT_MARKER_RADIUS, RECENT_MARKER);
        }

        if stack.len() > 1 {
            // Lower stones as ticks along the bottom edge, bottom stone first
            let below = &stack.stones()[..stack.len() - 1];
            let tick = (rect.width() - 8.0) / below.len().max(4) as f32;
            for (i, stone) in below.iter().enumerate() {
                let min = Pos2::new(rect.min.x + 4.0 + i as f32 * tick, rect.max.y - 7.0);
                let tick_rect = Rect::from_min_size(min, ScreenVec::new(tick - 1.0, 4.0));
                painter.rect_filled(tick_rect, CornerRadius::ZERO, stone_fill(stone.color));
            }

            painter.text(
                rect.min + ScreenVec::new(6.0, 4.0),
                egui::Align2::LEFT_TOP,
                stack.len().to_string(),
                egui::FontId::proportional(12.0),
                TEXT_MUTED,
            );
        }
    }

    fn draw_road(&self, painter: &Painter, road: &[Vec2]) {
        let stroke = Stroke::new(4.0, ROAD_HIGHLIGHT);
        for pair in road.windows(2) {
            let start = self.cell_rect(pair[0]).center();
            let end = self.cell_rect(pair[1]).center();
            painter.line_segment([start, end], stroke);
        }
    }

    /// Screen rectangle of a cell, inset by the gap between cells
    pub fn cell_rect(&self, pos: Vec2) -> Rect {
        let min = self.board_rect.min
            + ScreenVec::new(
                BOARD_MARGIN + pos.x as f32 * self.cell_size,
                BOARD_MARGIN + pos.y as f32 * self.cell_size,
            );
        Rect::from_min_size(min, ScreenVec::splat(self.cell_size)).shrink(CELL_GAP / 2.0)
    }

    /// Convert screen coordinates to a board cell
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Vec2> {
        let relative = screen_pos - self.board_rect.min;
        let x = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let y = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let pos = Vec2::new(x, y);
        pos.is_within(self.extent).then_some(pos)
    }
}
