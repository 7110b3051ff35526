//! Evaluation module for board positions
//!
//! The static score combines:
//! - Next-round road threats
//! - Stone economy
//! - Stack shape

pub mod heuristic;

pub use heuristic::{evaluate, Weights};
