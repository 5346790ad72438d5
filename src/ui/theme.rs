//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(245, 245, 240);
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 62, 66);
pub const CELL_HOVER: Color32 = Color32::from_rgb(225, 228, 232);

// Marks
pub const MARK_X: Color32 = Color32::from_rgb(200, 60, 60);
pub const MARK_O: Color32 = Color32::from_rgb(50, 100, 190);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(255, 230, 60);

// Panel colors - dark theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BOARD_AREA_BG: Color32 = Color32::from_rgb(40, 42, 46);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_WIN: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_DRAW: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 16.0;
pub const GRID_LINE_WIDTH: f32 = 3.0;
pub const MARK_STROKE_WIDTH: f32 = 6.0;
/// Mark size relative to the cell
pub const MARK_RATIO: f32 = 0.3;
pub const MAX_BOARD_SIZE: f32 = 480.0;

/// Hover preview tint for a mark
pub fn preview(color: Color32) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 70)
}
