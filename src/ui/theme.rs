//! Theme constants for the UU Game GUI

use egui::Color32;

use crate::board::Color;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(139, 90, 43);
pub const CELL_BG: Color32 = Color32::from_rgb(222, 184, 135);
pub const CELL_HOVER: Color32 = Color32::from_rgb(235, 203, 160);

// Stones
pub const BLACK_STONE: Color32 = Color32::from_rgb(25, 25, 30);
pub const BLACK_STONE_EDGE: Color32 = Color32::from_rgb(70, 70, 80);
pub const WHITE_STONE: Color32 = Color32::from_rgb(250, 250, 252);
pub const WHITE_STONE_EDGE: Color32 = Color32::from_rgb(150, 150, 158);

// Markers
pub const RECENT_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const ANCHOR_HIGHLIGHT: Color32 = Color32::from_rgb(80, 170, 255);
pub const ROAD_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Panels
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BOARD_AREA_BG: Color32 = Color32::from_rgb(40, 42, 46);
pub const GAME_OVER_BG: Color32 = Color32::from_rgb(45, 80, 55);
pub const MESSAGE_BG: Color32 = Color32::from_rgb(80, 60, 30);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_BUSY: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 16.0;
pub const CELL_GAP: f32 = 4.0;
pub const FLAT_SIZE_RATIO: f32 = 0.62;
pub const STANDING_RADIUS_RATIO: f32 = 0.24;
pub const RECENT_MARKER_RADIUS: f32 = 4.0;

pub fn stone_fill(color: Color) -> Color32 {
    match color {
        Color::Black => BLACK_STONE,
        Color::White => WHITE_STONE,
    }
}

pub fn stone_edge(color: Color) -> Color32 {
    match color {
        Color::Black => BLACK_STONE_EDGE,
        Color::White => WHITE_STONE_EDGE,
    }
}
