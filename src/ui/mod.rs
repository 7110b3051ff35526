//! GUI module for UU Game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod session;
mod theme;

pub use app::UuGameApp;
pub use session::{AiState, Session};
