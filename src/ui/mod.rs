//! GUI module for the tic-tac-toe game
//!
//! This module provides a native Rust GUI using egui/eframe. It renders
//! engine snapshots and dispatches clicks back into the engines; no game
//! state lives in the widgets.

mod app;
mod board_view;
mod theme;

pub use app::{TicTacToeApp, Variant};
