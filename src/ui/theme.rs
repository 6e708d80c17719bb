//! Theme palettes for the tic-tac-toe GUI
//!
//! Two fixed palettes, toggled at runtime. Mark colors stay the same in
//! both modes so the players keep their identity when the theme flips.

use egui::Color32;

/// Colors for one visual mode
pub struct Palette {
    pub window_fill: Color32,
    pub cell_fill: Color32,
    pub cell_hover: Color32,
    pub cell_border: Color32,
    pub text: Color32,
    pub text_muted: Color32,
}

pub const LIGHT: Palette = Palette {
    window_fill: Color32::WHITE,
    cell_fill: Color32::from_rgb(243, 243, 243),
    cell_hover: Color32::from_rgb(228, 232, 240),
    cell_border: Color32::from_rgb(200, 200, 200),
    text: Color32::BLACK,
    text_muted: Color32::from_rgb(110, 110, 110),
};

pub const DARK: Palette = Palette {
    window_fill: Color32::from_rgb(45, 45, 45),
    cell_fill: Color32::from_rgb(58, 58, 58),
    cell_hover: Color32::from_rgb(72, 76, 84),
    cell_border: Color32::from_rgb(90, 90, 90),
    text: Color32::WHITE,
    text_muted: Color32::from_rgb(160, 160, 160),
};

impl Palette {
    pub fn of(dark: bool) -> &'static Palette {
        if dark {
            &DARK
        } else {
            &LIGHT
        }
    }
}

// Mark colors (theme-independent)
pub const MARK_X: Color32 = Color32::from_rgb(50, 90, 220);
pub const MARK_O: Color32 = Color32::from_rgb(220, 55, 50);
/// A mark flagged for removal, distinct from both players' colors
pub const MARK_PENDING: Color32 = Color32::from_rgb(255, 165, 0);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 200, 80);

// Sizes
pub const BOARD_MARGIN: f32 = 16.0;
pub const CELL_GAP: f32 = 8.0;
pub const MARK_INSET_RATIO: f32 = 0.26;
pub const MARK_STROKE_RATIO: f32 = 0.09;
pub const WIN_STROKE_WIDTH: f32 = 5.0;
