//! Board rendering for the tic-tac-toe GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Mark, Pos, BOARD_SIZE, TOTAL_CELLS};
use crate::game::GameView;

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Grid drawing area (inside the margin)
    grid_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            grid_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell index, if any.
    ///
    /// Clicks on filled cells are reported too; the engine decides what
    /// they mean.
    pub fn show(&mut self, ui: &mut egui::Ui, view: &GameView, next: Mark) -> Option<usize> {
        let available_size = ui.available_size();
        let board_size = available_size.x.min(available_size.y).min(MAX_BOARD_SIZE) - 2.0 * BOARD_MARGIN;
        let board_size = board_size.max(BOARD_SIZE as f32 * 20.0);

        let (response, painter) = ui.allocate_painter(
            Vec2::splat(board_size + 2.0 * BOARD_MARGIN),
            Sense::click(),
        );

        self.grid_rect = response.rect.shrink(BOARD_MARGIN);
        self.cell_size = board_size / BOARD_SIZE as f32;

        painter.rect_filled(self.grid_rect, CornerRadius::same(4), BOARD_BG);

        // Winning squares first so grid and marks draw over them
        for index in 0..TOTAL_CELLS {
            if view.is_winning_cell(index) {
                painter.rect_filled(self.cell_rect(index), CornerRadius::ZERO, WIN_HIGHLIGHT);
            }
        }

        let hovered = response.hover_pos().and_then(|p| self.screen_to_cell(p));
        if let Some(index) = hovered {
            if !view.is_over() && view.board.cell(index) == Some(Mark::Empty) {
                painter.rect_filled(self.cell_rect(index).shrink(2.0), CornerRadius::ZERO, CELL_HOVER);
                self.draw_mark(&painter, index, next, true);
            }
        }

        self.draw_grid(&painter);

        for (index, mark) in view.board.cells().iter().enumerate() {
            self.draw_mark(&painter, index, *mark, false);
        }

        if response.clicked() {
            hovered
        } else {
            None
        }
    }

    /// Draw the two inner lines in each direction
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let min = self.grid_rect.min;
        let extent = self.cell_size * BOARD_SIZE as f32;

        for i in 1..BOARD_SIZE {
            let offset = i as f32 * self.cell_size;

            // Vertical line
            painter.line_segment(
                [min + Vec2::new(offset, 0.0), min + Vec2::new(offset, extent)],
                stroke,
            );

            // Horizontal line
            painter.line_segment(
                [min + Vec2::new(0.0, offset), min + Vec2::new(extent, offset)],
                stroke,
            );
        }
    }

    /// Draw X as a cross and O as a ring
    fn draw_mark(&self, painter: &Painter, index: usize, mark: Mark, preview_only: bool) {
        let center = self.cell_rect(index).center();
        let radius = self.cell_size * MARK_RATIO;

        let base = match mark {
            Mark::X => MARK_X,
            Mark::O => MARK_O,
            Mark::Empty => return,
        };
        let color: Color32 = if preview_only { preview(base) } else { base };
        let stroke = Stroke::new(MARK_STROKE_WIDTH, color);

        match mark {
            Mark::X => {
                let d = Vec2::splat(radius);
                painter.line_segment([center - d, center + d], stroke);
                painter.line_segment(
                    [center + Vec2::new(-radius, radius), center + Vec2::new(radius, -radius)],
                    stroke,
                );
            }
            Mark::O => {
                painter.circle_stroke(center, radius, stroke);
            }
            Mark::Empty => {}
        }
    }

    fn cell_rect(&self, index: usize) -> Rect {
        let col = (index % BOARD_SIZE) as f32;
        let row = (index / BOARD_SIZE) as f32;
        let min = self.grid_rect.min + Vec2::new(col * self.cell_size, row * self.cell_size);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to a cell index
    pub fn screen_to_cell(&self, screen_pos: Pos2) -> Option<usize> {
        if !self.grid_rect.contains(screen_pos) {
            return None;
        }
        let relative = screen_pos - self.grid_rect.min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        if (0..BOARD_SIZE as i32).contains(&col) && (0..BOARD_SIZE as i32).contains(&row) {
            Some(Pos::new(row as u8, col as u8).to_index())
        } else {
            None
        }
    }
}
